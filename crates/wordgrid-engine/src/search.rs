// The board+DAWG evaluator.
//
// `evaluate` walks the board adjacency graph and the word graph in
// lockstep: one recursion level per board tile, one or two DAWG levels per
// tile depending on its expansion. A 64-bit mask tracks the tiles on the
// current path (board positions are capped at 36), and the recursion
// returns `false` only to unwind after an upper-bound constraint has been
// tripped -- a dead edge is an ordinary `true`.

use rand::rngs::SmallRng;

use wordgrid_dawg::Dawg;

use crate::constraints::{Constraints, Limits};
use crate::dice::DiceSet;
use crate::score::ScoreTable;
use crate::tile::Tile;
use crate::wordset::{FoundWords, MAX_WORD_LEN};
use crate::BoardError;

/// Most board positions a used-tile mask can track.
pub const MAX_POSITIONS: usize = 36;

/// Per-board evaluation state: the dice layout, the found-word store, the
/// running counters, and the fail flag. Borrows the dictionary; owns
/// everything mutable, so one evaluator per thread is the whole
/// concurrency story.
#[derive(Debug)]
pub struct Evaluator<'d> {
    dawg: &'d Dawg,
    scores: ScoreTable,
    width: i32,
    height: i32,
    tiles: Vec<u8>,
    constraints: Constraints,
    limits: Limits,
    words: FoundWords,
    num_words: u32,
    score: u32,
    longest: u32,
    failed: bool,
}

impl<'d> Evaluator<'d> {
    /// Build an evaluator for a `width` x `height` board.
    pub fn new(
        dawg: &'d Dawg,
        scores: ScoreTable,
        width: usize,
        height: usize,
        constraints: Constraints,
    ) -> Result<Self, BoardError> {
        let positions = width * height;
        if positions == 0 || positions > MAX_POSITIONS {
            return Err(BoardError::BoardTooLarge {
                positions,
                limit: MAX_POSITIONS,
            });
        }
        Ok(Self {
            dawg,
            scores,
            width: width as i32,
            height: height as i32,
            tiles: vec![0; positions],
            limits: constraints.resolved(),
            constraints,
            words: FoundWords::new(),
            num_words: 0,
            score: 0,
            longest: 0,
            failed: false,
        })
    }

    /// Replace the acceptance constraints for subsequent evaluations.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.limits = constraints.resolved();
        self.constraints = constraints;
    }

    /// The current flat row-major layout.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Writable layout slice for the roller.
    pub(crate) fn tiles_mut(&mut self) -> &mut [u8] {
        &mut self.tiles
    }

    /// Roll a fresh layout from `dice` into this evaluator.
    pub fn roll_from(&mut self, dice: &mut DiceSet, rng: &mut SmallRng) {
        dice.roll(&mut self.tiles, rng);
    }

    /// Install a fixed layout. Length and alphabet are validated.
    pub fn set_layout(&mut self, layout: &[u8]) -> Result<(), BoardError> {
        if layout.len() != self.tiles.len() {
            return Err(BoardError::BadLayout(format!(
                "expected {} tiles, got {}",
                self.tiles.len(),
                layout.len()
            )));
        }
        for &code in layout {
            if !Tile::is_valid_code(code) {
                return Err(BoardError::BadLayout(format!(
                    "tile {:?} outside 'A'..='Z' / '0'..='5'",
                    code as char
                )));
            }
        }
        self.tiles.copy_from_slice(layout);
        Ok(())
    }

    /// Distinct words found by the last evaluation.
    pub fn word_count(&self) -> u32 {
        self.num_words
    }

    /// Total score of the last evaluation.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Length of the longest word found by the last evaluation.
    pub fn longest(&self) -> u32 {
        self.longest
    }

    /// Found words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter()
    }

    /// Found words, lexicographically sorted.
    pub fn sorted_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .words
            .iter()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect();
        words.sort_unstable();
        words
    }

    /// Search the whole board. Returns `true` iff every lower bound is met
    /// and no upper bound was tripped. Counters, the found-word store, and
    /// the fail flag are reset on entry.
    pub fn evaluate(&mut self) -> bool {
        self.words.reset();
        self.num_words = 0;
        self.score = 0;
        self.longest = 0;
        self.failed = false;

        let mut word = [0u8; MAX_WORD_LEN];
        let root = self.dawg.root();
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.step(root, &mut word, 0, y, x, 0) {
                    return false;
                }
            }
        }

        self.num_words >= self.constraints.min_words
            && self.score >= self.constraints.min_score
            && self.longest >= self.constraints.min_longest
            && self.longest <= self.limits.max_longest
    }

    /// Extend the current word with the tile at `(y, x)`.
    ///
    /// `i` is the DAWG sibling chain to scan for this tile's first letter,
    /// `word[..word_len]` is the spelling so far, and `used` marks the
    /// tiles already on the path. Returns `false` only to propagate an
    /// upper-bound abort; exhausted branches return `true`.
    fn step(
        &mut self,
        i: u32,
        word: &mut [u8; MAX_WORD_LEN],
        word_len: usize,
        y: i32,
        x: i32,
        used: u64,
    ) -> bool {
        if self.failed {
            return false;
        }
        if y < 0 || y >= self.height || x < 0 || x >= self.width {
            return true;
        }
        let position = (y * self.width + x) as u32;
        let mask = 1u64 << position;
        if used & mask != 0 {
            return true;
        }

        let mut i = i;
        let mut word_len = word_len;
        match Tile::decode(self.tiles[position as usize]) {
            Some(Tile::Letter(c)) => {
                if word_len == MAX_WORD_LEN {
                    return true;
                }
                while i != 0 && self.dawg.letter(i) != c {
                    i = self.dawg.sibling(i);
                }
                if i == 0 {
                    // No word continues with this letter.
                    return true;
                }
                word[word_len] = c;
                word_len += 1;
            }
            Some(Tile::Multi(t1, t2)) => {
                if word_len + 2 > MAX_WORD_LEN {
                    return true;
                }
                // Two DAWG levels, one board position. The blank's "__"
                // expansion matches no dictionary letter and dies here.
                while i != 0 && self.dawg.letter(i) != t1 {
                    i = self.dawg.sibling(i);
                }
                if i == 0 {
                    return true;
                }
                i = self.dawg.child(i);
                while i != 0 && self.dawg.letter(i) != t2 {
                    i = self.dawg.sibling(i);
                }
                if i == 0 {
                    return true;
                }
                word[word_len] = t1;
                word[word_len + 1] = t2;
                word_len += 2;
            }
            None => return true,
        }

        let used = used | mask;

        if self.dawg.is_end_of_word(i)
            && word_len >= self.constraints.min_legal_len as usize
            && !self.record(&word[..word_len])
        {
            return false;
        }

        // Every direction, the centre included; the used-mask test rejects
        // the re-visit.
        let child = self.dawg.child(i);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if !self.step(child, word, word_len, y + dy, x + dx, used) {
                    return false;
                }
            }
        }
        true
    }

    /// Account a completed word. Returns `false` when an upper bound is
    /// exceeded, setting the fail flag so the unwind is immediate.
    fn record(&mut self, word: &[u8]) -> bool {
        if !self.words.insert(word) {
            return true;
        }
        self.num_words += 1;
        if self.num_words > self.limits.max_words {
            self.failed = true;
            return false;
        }
        self.score += self.scores.for_len(word.len());
        if self.score > self.limits.max_score {
            self.failed = true;
            return false;
        }
        if word.len() as u32 > self.longest {
            self.longest = word.len() as u32;
            if self.longest > self.limits.max_longest {
                self.failed = true;
                return false;
            }
        }
        true
    }
}
