// Cheap statistical rejection of unpromising layouts.
//
// A full board search costs orders of magnitude more than counting
// characters, so the generator can discard most hopeless rolls here.
// The check is conservative: a false positive merely runs a search that
// rejects, a false negative merely wastes a sample. The thresholds
// tighten as the constraints tighten and never loosen, so a board
// rejected under some constraints stays rejected under stricter ones.

use crate::constraints::Constraints;

/// Whether a freshly rolled layout is worth searching. Pure; reads only
/// the tile codes and the constraint record.
pub fn looks_promising(tiles: &[u8], constraints: &Constraints) -> bool {
    let n = tiles.len();
    if n == 0 {
        return false;
    }

    let mut vowels = 0usize;
    let mut common_consonants = 0usize;
    let mut multi = 0usize;
    let mut has_s_d_g = false;
    for &t in tiles {
        // The In and He tiles carry a vowel.
        if matches!(t, b'A' | b'E' | b'I' | b'O' | b'U' | b'2' | b'5') {
            vowels += 1;
        }
        if matches!(t, b'S' | b'R' | b'T' | b'N' | b'L') {
            common_consonants += 1;
        }
        if matches!(t, b'1'..=b'5') {
            multi += 1;
        }
        if matches!(t, b'S' | b'D' | b'G') {
            has_s_d_g = true;
        }
    }

    let strict = constraints.min_words > 200 || constraints.min_longest > 10;

    // Vowel fraction window, in percent.
    let (lo, hi) = if constraints.min_words > 100 {
        (20, 55)
    } else {
        (15, 65)
    };
    if vowels * 100 < lo * n || vowels * 100 > hi * n {
        return false;
    }

    let need_consonants = if strict {
        3
    } else if constraints.min_words > 100 {
        2
    } else {
        1
    };
    if common_consonants < need_consonants {
        return false;
    }

    if multi > n / 2 {
        return false;
    }

    if strict && (vowels < 3 || !has_s_d_g) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose() -> Constraints {
        Constraints {
            min_words: 1,
            min_legal_len: 3,
            ..Constraints::unbounded()
        }
    }

    fn medium() -> Constraints {
        Constraints {
            min_words: 120,
            ..loose()
        }
    }

    fn strict() -> Constraints {
        Constraints {
            min_words: 250,
            min_longest: 11,
            ..loose()
        }
    }

    #[test]
    fn balanced_board_passes() {
        assert!(looks_promising(b"ADYERESTLPNAGIES", &loose()));
    }

    #[test]
    fn vowel_free_board_fails() {
        assert!(!looks_promising(b"BCDFGHJKLMNPQRST", &loose()));
    }

    #[test]
    fn vowel_flooded_board_fails() {
        assert!(!looks_promising(b"AEIOUAEIOUAEIOUA", &loose()));
    }

    #[test]
    fn vowel_window_tightens_past_100_words() {
        // 3 vowels on 16 tiles is 18.75%: inside [15, 65], outside [20, 55].
        let board = b"AEIRSTLNBCDFGHJK";
        assert!(looks_promising(board, &loose()));
        assert!(!looks_promising(board, &medium()));
    }

    #[test]
    fn common_consonant_floor_scales() {
        // One common consonant (T), vowel fraction comfortable.
        let board = b"AEIOTBCDFGHJKMVW";
        assert!(looks_promising(board, &loose()));
        assert!(!looks_promising(board, &medium()));
    }

    #[test]
    fn multi_tile_cap() {
        // Nine multi tiles on 16 positions is more than half. Tiles 2 and 5
        // also count as vowels, keeping the vowel window satisfied.
        let board = b"122334455112KSTR";
        assert!(!looks_promising(board, &loose()));
    }

    #[test]
    fn strict_mode_wants_vowels_and_hooks() {
        // 3x3 with two vowels: inside the vowel window, still too few for
        // a long-word hunt.
        let board = b"AESRTLNKB";
        assert!(looks_promising(board, &loose()));
        assert!(!looks_promising(board, &strict()));
        // Plenty of vowels and common consonants but no S, D, or G.
        let board = b"AEIORTLNRTLNBCFH";
        assert!(looks_promising(board, &loose()));
        assert!(!looks_promising(board, &strict()));
    }

    #[test]
    fn empty_layout_fails() {
        assert!(!looks_promising(b"", &loose()));
    }

    #[test]
    fn tighter_constraints_never_resurrect_a_board() {
        // Sweep a bag of boards through loosening-to-strictest constraint
        // records and check rejection is monotone.
        let ladders = [loose(), medium(), strict()];
        let boards: [&[u8]; 6] = [
            b"ADYERESTLPNAGIES",
            b"AEIRSTLNBCDFGHJK",
            b"AEIOTBCDFGHJKMVW",
            b"122334455112KSTR",
            b"AESRTLNSBCDFHKMP",
            b"SSSSRRRRTTTTNNNL",
        ];
        for board in boards {
            let mut rejected = false;
            for c in &ladders {
                let promising = looks_promising(board, c);
                if rejected {
                    assert!(!promising, "board {:?} resurrected", board);
                }
                rejected = rejected || !promising;
            }
        }
    }
}
