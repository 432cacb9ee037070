// Word-length score table.

use crate::BoardError;

/// Points awarded per word length. Lengths past the end of the table score
/// as the final entry.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    points: Vec<u32>,
}

impl ScoreTable {
    /// Build a table from per-length point values. The table must carry at
    /// least one entry.
    pub fn new(points: Vec<u32>) -> Result<Self, BoardError> {
        if points.is_empty() {
            return Err(BoardError::EmptyScoreTable);
        }
        Ok(Self { points })
    }

    /// The classic table: nothing below three letters, 1 point for 3-4,
    /// then 2, 3, 5, and 11 points for everything from eight letters up.
    pub fn standard() -> Self {
        Self {
            points: vec![0, 0, 0, 1, 1, 2, 3, 5, 11, 11, 11, 11, 11, 11, 11, 11, 11],
        }
    }

    /// Points for a word of `len` letters.
    #[inline]
    pub fn for_len(&self, len: usize) -> u32 {
        match self.points.get(len) {
            Some(&p) => p,
            None => *self.points.last().unwrap_or(&0),
        }
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_values() {
        let t = ScoreTable::standard();
        assert_eq!(t.for_len(0), 0);
        assert_eq!(t.for_len(2), 0);
        assert_eq!(t.for_len(3), 1);
        assert_eq!(t.for_len(4), 1);
        assert_eq!(t.for_len(5), 2);
        assert_eq!(t.for_len(6), 3);
        assert_eq!(t.for_len(7), 5);
        assert_eq!(t.for_len(8), 11);
        assert_eq!(t.for_len(16), 11);
    }

    #[test]
    fn last_entry_is_sticky() {
        let t = ScoreTable::new(vec![0, 1, 4]).unwrap();
        assert_eq!(t.for_len(2), 4);
        assert_eq!(t.for_len(3), 4);
        assert_eq!(t.for_len(100), 4);
    }

    #[test]
    fn empty_table_rejected() {
        assert!(matches!(
            ScoreTable::new(vec![]),
            Err(BoardError::EmptyScoreTable)
        ));
    }
}
