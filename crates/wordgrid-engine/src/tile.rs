// Tile codes and multi-letter expansion.
//
// A tile code is one byte. 'A'..='Z' spell themselves; the digits '0'..='5'
// are the multi-letter tiles. A multi-letter tile consumes two word-graph
// edges per placement but only one board position. The '0' tile is the
// blank: its "__" expansion matches no dictionary letter, so it never
// contributes to a word.

/// Expansions for the digit tile codes, indexed by `code - b'0'`.
const MULTI_EXPANSIONS: [(u8, u8); 6] = [
    (b'_', b'_'), // '0' blank
    (b'Q', b'U'),
    (b'I', b'N'),
    (b'T', b'H'),
    (b'E', b'R'),
    (b'H', b'E'),
];

/// Display faces for the digit tiles, as printed on the physical dice.
const MULTI_FACES: [&str; 6] = ["__", "Qu", "In", "Th", "Er", "He"];

/// A decoded tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// An ordinary letter tile.
    Letter(u8),
    /// A two-letter tile, e.g. `Multi(b'Q', b'U')` for the Qu die face.
    Multi(u8, u8),
}

impl Tile {
    /// Decode a tile code, or `None` for a byte outside the alphabet.
    #[inline]
    pub fn decode(code: u8) -> Option<Tile> {
        match code {
            b'A'..=b'Z' => Some(Tile::Letter(code)),
            b'0'..=b'5' => {
                let (a, b) = MULTI_EXPANSIONS[usize::from(code - b'0')];
                Some(Tile::Multi(a, b))
            }
            _ => None,
        }
    }

    /// Whether `code` belongs to the tile alphabet.
    #[inline]
    pub fn is_valid_code(code: u8) -> bool {
        matches!(code, b'A'..=b'Z' | b'0'..=b'5')
    }

    /// Number of word letters the tile contributes.
    #[inline]
    pub fn expansion_len(self) -> usize {
        match self {
            Tile::Letter(_) => 1,
            Tile::Multi(..) => 2,
        }
    }
}

/// Two-character display face for a tile code ("A ", "Qu", ...). Returns
/// "? " for bytes outside the alphabet.
pub fn display_face(code: u8) -> String {
    match Tile::decode(code) {
        Some(Tile::Letter(c)) => format!("{} ", c as char),
        Some(Tile::Multi(..)) => MULTI_FACES[usize::from(code - b'0')].to_string(),
        None => "? ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_decode_to_themselves() {
        assert_eq!(Tile::decode(b'A'), Some(Tile::Letter(b'A')));
        assert_eq!(Tile::decode(b'Z'), Some(Tile::Letter(b'Z')));
    }

    #[test]
    fn digit_expansions() {
        assert_eq!(Tile::decode(b'0'), Some(Tile::Multi(b'_', b'_')));
        assert_eq!(Tile::decode(b'1'), Some(Tile::Multi(b'Q', b'U')));
        assert_eq!(Tile::decode(b'2'), Some(Tile::Multi(b'I', b'N')));
        assert_eq!(Tile::decode(b'3'), Some(Tile::Multi(b'T', b'H')));
        assert_eq!(Tile::decode(b'4'), Some(Tile::Multi(b'E', b'R')));
        assert_eq!(Tile::decode(b'5'), Some(Tile::Multi(b'H', b'E')));
    }

    #[test]
    fn out_of_alphabet_bytes() {
        assert_eq!(Tile::decode(b'a'), None);
        assert_eq!(Tile::decode(b'6'), None);
        assert_eq!(Tile::decode(b'_'), None);
        assert_eq!(Tile::decode(0), None);
        assert!(!Tile::is_valid_code(b'9'));
        assert!(Tile::is_valid_code(b'5'));
        assert!(Tile::is_valid_code(b'Q'));
    }

    #[test]
    fn expansion_lengths() {
        assert_eq!(Tile::decode(b'K').unwrap().expansion_len(), 1);
        assert_eq!(Tile::decode(b'1').unwrap().expansion_len(), 2);
    }

    #[test]
    fn display_faces() {
        assert_eq!(display_face(b'A'), "A ");
        assert_eq!(display_face(b'1'), "Qu");
        assert_eq!(display_face(b'5'), "He");
        assert_eq!(display_face(b'!'), "? ");
    }
}
