// Rejection-sampling board generation and fixed-board analysis.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use wordgrid_dawg::Dawg;

use crate::constraints::Constraints;
use crate::dice::DiceSet;
use crate::prefilter;
use crate::score::ScoreTable;
use crate::search::Evaluator;
use crate::BoardError;

/// An accepted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolledBoard {
    /// Every word on the board, lexicographically sorted.
    pub words: Vec<String>,
    /// The flat row-major tile codes, one character per position.
    pub layout: String,
    /// How many rolls it took (1-based).
    pub tries: u32,
}

/// Rolls boards until one satisfies the constraints.
///
/// Owns the dice set (whose order is shuffled across rolls) and a reusable
/// [`Evaluator`]; borrows the dictionary. Generators are single-threaded;
/// run one per thread for parallel hunting, each with its own seed.
pub struct BoardGenerator<'d> {
    dice: DiceSet,
    evaluator: Evaluator<'d>,
    use_prefilter: bool,
}

impl<'d> BoardGenerator<'d> {
    /// Build a generator for a `width` x `height` board. The dice set must
    /// carry exactly one die per position.
    pub fn new(
        dawg: &'d Dawg,
        dice: DiceSet,
        scores: ScoreTable,
        width: usize,
        height: usize,
    ) -> Result<Self, BoardError> {
        let evaluator = Evaluator::new(dawg, scores, width, height, Constraints::unbounded())?;
        let expected = width * height;
        if dice.len() != expected {
            return Err(BoardError::WrongDiceCount {
                expected,
                actual: dice.len(),
            });
        }
        Ok(Self {
            dice,
            evaluator,
            use_prefilter: true,
        })
    }

    /// Disable or re-enable the statistical prefilter. On by default;
    /// turning it off makes every roll pay for a full search.
    pub fn set_prefilter(&mut self, enabled: bool) {
        self.use_prefilter = enabled;
    }

    /// Roll until a board satisfies `constraints`, up to `max_tries`
    /// rolls. Returns `None` when the budget runs out -- a benign outcome,
    /// distinct from the structural errors of construction.
    ///
    /// The whole run is a deterministic function of the inputs: the same
    /// dice set, constraints, seed, and try budget reproduce the same
    /// board, word list, and try count.
    pub fn generate(
        &mut self,
        constraints: &Constraints,
        max_tries: u32,
        seed: u64,
    ) -> Option<RolledBoard> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.evaluator.set_constraints(*constraints);
        for tries in 1..=max_tries {
            self.evaluator.roll_from(&mut self.dice, &mut rng);
            if self.use_prefilter && !prefilter::looks_promising(self.evaluator.tiles(), constraints)
            {
                continue;
            }
            if self.evaluator.evaluate() {
                return Some(RolledBoard {
                    words: self.evaluator.sorted_words(),
                    layout: layout_string(self.evaluator.tiles()),
                    tries,
                });
            }
        }
        None
    }
}

/// Enumerate every word on a fixed layout, unconstrained. This is the
/// restore-a-saved-game path: `analyse` of a generated layout returns
/// exactly the generated word list.
pub fn analyse(
    dawg: &Dawg,
    scores: &ScoreTable,
    width: usize,
    height: usize,
    layout: &str,
) -> Result<Vec<String>, BoardError> {
    let mut evaluator = Evaluator::new(
        dawg,
        scores.clone(),
        width,
        height,
        Constraints::unbounded(),
    )?;
    evaluator.set_layout(layout.as_bytes())?;
    evaluator.evaluate();
    Ok(evaluator.sorted_words())
}

fn layout_string(tiles: &[u8]) -> String {
    tiles.iter().map(|&b| b as char).collect()
}
