// Dice, the named standard sets, and the roller.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::tile::Tile;
use crate::BoardError;

/// Faces per die.
pub const NUM_FACES: usize = 6;

/// A six-faced die. Faces are tile codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    faces: [u8; NUM_FACES],
}

impl Die {
    /// Parse a six-character face string.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let bytes = s.as_bytes();
        if bytes.len() != NUM_FACES {
            return Err(BoardError::BadDie {
                die: s.to_string(),
                reason: format!("expected {NUM_FACES} faces, got {}", bytes.len()),
            });
        }
        let mut faces = [0u8; NUM_FACES];
        for (slot, &b) in faces.iter_mut().zip(bytes) {
            if !Tile::is_valid_code(b) {
                return Err(BoardError::BadDie {
                    die: s.to_string(),
                    reason: format!("face {:?} outside 'A'..='Z' / '0'..='5'", b as char),
                });
            }
            *slot = b;
        }
        Ok(Self { faces })
    }

    /// Face `k` (0-based, `k < 6`).
    #[inline]
    pub fn face(&self, k: usize) -> u8 {
        self.faces[k]
    }
}

/// A named standard dice set.
pub struct StandardSet {
    pub name: &'static str,
    pub desc: &'static str,
    pub faces: &'static [&'static str],
}

/// The standard sets shipped with the game. Names follow the board edge
/// length; `-classic` and friends pick the historical mixes.
pub const STANDARD_SETS: &[StandardSet] = &[
    StandardSet {
        name: "4-classic",
        desc: "4x4 Classic",
        faces: &[
            "AACIOT", "ABILTY", "ABJMOQ", "ACDEMP",
            "ACELRS", "ADENVZ", "AHMORS", "BIFORX",
            "DENOSW", "DKNOTU", "EEFHIY", "EGKLUY",
            "EGINTV", "EHINPS", "ELPSTU", "GILRUW",
        ],
    },
    StandardSet {
        name: "4",
        desc: "4x4 Revised",
        faces: &[
            "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS",
            "AOOTTW", "CIMOTU", "DEILRX", "DELRVY",
            "DISTTY", "EEGHNW", "EEINSU", "EHRTVW",
            "EIOSST", "ELRTTY", "HIMNU1", "HLNNRZ",
        ],
    },
    StandardSet {
        name: "5-orig",
        desc: "5x5 Original",
        faces: &[
            "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM",
            "AEEGMU", "AEGMNN", "AFIRSY", "BJK1XZ", "CCENST",
            "CEIILT", "CEIPST", "DDHNOT", "DHHLOR", "DHHLOR",
            "DHLNOR", "EIIITT", "CEILPT", "EMOTTT", "ENSSSU",
            "FIPRSY", "GORRVW", "IPRRRY", "NOOTUW", "OOOTTU",
        ],
    },
    StandardSet {
        name: "5-challenge",
        desc: "5x5 Challenge",
        faces: &[
            "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM",
            "AEEGMU", "AEGMNN", "AFIRSY", "BJK1XZ", "CCENST",
            "CEIILT", "CEIPST", "DDHNOT", "DHHLOR", "IKLM1U",
            "DHLNOR", "EIIITT", "CEILPT", "EMOTTT", "ENSSSU",
            "FIPRSY", "GORRVW", "IPRRRY", "NOOTUW", "OOOTTU",
        ],
    },
    StandardSet {
        name: "5-big-deluxe",
        desc: "5x5 Big Deluxe",
        faces: &[
            "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM",
            "AEEGMU", "AEGMNN", "AFIRSY", "BJK1XZ", "CCNSTW",
            "CEIILT", "CEIPST", "DDLNOR", "DHHLOR", "DHHNOT",
            "DHLNOR", "EIIITT", "CEILPT", "EMOTTT", "ENSSSU",
            "FIPRSY", "GORRVW", "HIPRRY", "NOOTUW", "OOOTTU",
        ],
    },
    StandardSet {
        name: "6",
        desc: "6x6 Super Big Simple",
        faces: &[
            "AAAFRS", "AAEEEE", "AAEEOO", "AAFIRS", "ABDEIO", "ADENNN",
            "AEEEEM", "AEEGMU", "AEGMNN", "AEILMN", "AEINOU", "AFIRSY",
            "AEIOUS", "BBJKXZ", "CCENST", "CDDLNN", "CEIITT", "CEIPST",
            "CFGNUY", "DDHNOT", "DHHLOR", "DHHNOW", "DHLNOR", "EHILRS",
            "EIILST", "EILPST", "EIOSSS", "EMTTTO", "ENSSSU", "GORRVW",
            "HIRSTV", "HOPRST", "IPRSYY", "JK1WXZ", "NOOTUW", "OOOTTU",
        ],
    },
];

/// An ordered collection of dice, one per board position. The order is
/// shuffled in place on every roll; the faces themselves never change.
#[derive(Debug, Clone)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    /// Parse a set from face strings.
    pub fn parse<S: AsRef<str>>(faces: &[S]) -> Result<Self, BoardError> {
        let dice = faces
            .iter()
            .map(|f| Die::parse(f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dice })
    }

    /// Look up a standard set by name.
    pub fn standard(name: &str) -> Result<Self, BoardError> {
        let set = STANDARD_SETS
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| BoardError::UnknownDiceSet(name.to_string()))?;
        Self::parse(set.faces)
    }

    /// Number of dice in the set.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll the set: a forward Fisher-Yates shuffle of dice to positions
    /// (uniform draws over the shrinking range, an unbiased permutation),
    /// then one face picked per die. Writes the flat row-major layout into
    /// `layout`, whose length must equal the set size.
    pub fn roll(&mut self, layout: &mut [u8], rng: &mut SmallRng) {
        let n = self.dice.len();
        debug_assert_eq!(layout.len(), n);
        for i in 0..n.saturating_sub(1) {
            let j = rng.random_range(i..n);
            self.dice.swap(i, j);
        }
        for (slot, die) in layout.iter_mut().zip(&self.dice) {
            *slot = die.face(rng.random_range(0..NUM_FACES));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn parse_valid_die() {
        let die = Die::parse("HIMNU1").unwrap();
        assert_eq!(die.face(0), b'H');
        assert_eq!(die.face(5), b'1');
    }

    #[test]
    fn reject_wrong_length() {
        let err = Die::parse("ABC").unwrap_err();
        assert!(matches!(err, BoardError::BadDie { .. }));
        assert!(Die::parse("ABCDEFG").is_err());
    }

    #[test]
    fn reject_bad_face() {
        assert!(Die::parse("ABCDE6").is_err());
        assert!(Die::parse("abcdef").is_err());
        assert!(Die::parse("ABC EF").is_err());
    }

    #[test]
    fn standard_sets_parse() {
        for set in STANDARD_SETS {
            let parsed = DiceSet::standard(set.name).unwrap();
            assert_eq!(parsed.len(), set.faces.len(), "set {}", set.name);
        }
    }

    #[test]
    fn unknown_set_name() {
        assert!(matches!(
            DiceSet::standard("7"),
            Err(BoardError::UnknownDiceSet(_))
        ));
    }

    #[test]
    fn roll_is_deterministic_per_seed() {
        let mut a = DiceSet::standard("4").unwrap();
        let mut b = DiceSet::standard("4").unwrap();
        let mut la = [0u8; 16];
        let mut lb = [0u8; 16];
        let mut ra = SmallRng::seed_from_u64(7);
        let mut rb = SmallRng::seed_from_u64(7);
        a.roll(&mut la, &mut ra);
        b.roll(&mut lb, &mut rb);
        assert_eq!(la, lb);
    }

    #[test]
    fn roll_draws_faces_from_the_set() {
        let mut set = DiceSet::standard("4").unwrap();
        let reference = DiceSet::standard("4").unwrap();
        let mut layout = [0u8; 16];
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..20 {
            set.roll(&mut layout, &mut rng);
            for &code in &layout {
                let on_some_die = reference
                    .dice
                    .iter()
                    .any(|d| d.faces.contains(&code));
                assert!(on_some_die, "face {:?} not in the set", code as char);
            }
        }
    }

    #[test]
    fn shuffle_reorders_but_preserves_dice() {
        let mut set = DiceSet::standard("4").unwrap();
        let before = set.dice.clone();
        let mut layout = [0u8; 16];
        let mut rng = SmallRng::seed_from_u64(3);
        set.roll(&mut layout, &mut rng);
        let mut after = set.dice.clone();
        let mut sorted_before = before;
        sorted_before.sort_by_key(|d| d.faces);
        after.sort_by_key(|d| d.faces);
        assert_eq!(sorted_before, after);
    }
}
