//! Constrained dice-board generation and word enumeration.
//!
//! The engine rolls Boggle-style dice boards until one satisfies a set of
//! lexical quality constraints, and enumerates every legal word reachable
//! on a board against a packed DAWG dictionary. The core is a depth-first
//! traversal that walks the board adjacency graph and the word graph in
//! lockstep, tracking used tiles in a 64-bit mask and aborting as soon as
//! an upper-bound constraint is provably violated.
//!
//! # Architecture
//!
//! - [`tile`] -- Tile codes and multi-letter expansion
//! - [`score`] -- Word-length score table
//! - [`constraints`] -- Lower/upper bounds on the accepted board
//! - [`dice`] -- Dice, the named standard sets, and the roller
//! - [`wordset`] -- Deduplicating found-word store
//! - [`search`] -- The board+DAWG evaluator
//! - [`prefilter`] -- Cheap statistical rejection of unpromising layouts
//! - [`generator`] -- Rejection-sampling loop and the public entry points

pub mod constraints;
pub mod dice;
pub mod generator;
pub mod prefilter;
pub mod score;
pub mod search;
pub mod tile;
pub mod wordset;

pub use constraints::Constraints;
pub use dice::{Die, DiceSet};
pub use generator::{analyse, BoardGenerator, RolledBoard};
pub use score::ScoreTable;
pub use search::Evaluator;

/// Error type for board construction and analysis.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A die string is not six faces from the tile alphabet.
    #[error("bad die {die:?}: {reason}")]
    BadDie { die: String, reason: String },

    /// No standard dice set is registered under the given name.
    #[error("unknown dice set {0:?}")]
    UnknownDiceSet(String),

    /// The dice set does not cover the board.
    #[error("dice set has {actual} dice, board needs {expected}")]
    WrongDiceCount { expected: usize, actual: usize },

    /// More positions than the used-tile mask can track.
    #[error("board has {positions} positions, limit is {limit}")]
    BoardTooLarge { positions: usize, limit: usize },

    /// A fixed layout string does not describe a board.
    #[error("bad layout: {0}")]
    BadLayout(String),

    /// The score table carries no entries.
    #[error("score table is empty")]
    EmptyScoreTable,
}
