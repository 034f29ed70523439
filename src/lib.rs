//! # yahtzee-sim
//!
//! A Monte Carlo simulator for Yahtzee-family dice games.
//!
//! The crate plays many complete games under pluggable decision strategies and
//! collects statistics that make strategies comparable: average score, score
//! spread, upper-section bonus hit rate and hit rates for the special
//! combinations (yahtzee and both straights).
//!
//! ## Features
//!
//! - Rule set parameterised by dice count, face count, reroll allowance,
//!   category fill allowance and bonus reward
//! - Scoring calculator that scales the upper section with the face count
//! - Game state bookkeeping with independent snapshots
//! - Seedable, reproducible batch simulation
//! - Optional parallel batches (`parallel` feature)
//!
//! ## Basic Usage
//!
//! ```
//! use yahtzee_sim::{RuleConfig, Simulator, strategy::FirstAvailable};
//!
//! fn main() -> Result<(), yahtzee_sim::SimError> {
//!     let config = RuleConfig::default();
//!
//!     // A seeded simulator plays the same games every time
//!     let mut simulator = Simulator::with_seed(config, 42)?;
//!     let mean = simulator.simulate_many(&FirstAvailable::new(), 10)?;
//!
//!     println!("Average score: {:.2}", mean);
//!     println!("{}", simulator.stats().report()?.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Writing a Strategy
//!
//! A strategy decides which dice to keep between rolls and which category to
//! fill at the end of the turn:
//!
//! ```
//! use yahtzee_sim::{Category, GameState, Strategy};
//!
//! struct SixesHunter;
//!
//! impl Strategy for SixesHunter {
//!     fn name(&self) -> &str {
//!         "SixesHunter"
//!     }
//!
//!     fn choose_keep(&self, hand: &[u32], _reroll_index: usize, _state: &GameState) -> Vec<usize> {
//!         hand.iter()
//!             .enumerate()
//!             .filter(|(_, &die)| die == 6)
//!             .map(|(i, _)| i)
//!             .collect()
//!     }
//!
//!     fn choose_category(&self, _hand: &[u32], state: &GameState) -> Category {
//!         let available = state.available_categories();
//!         if available.contains(&Category::Upper(6)) {
//!             Category::Upper(6)
//!         } else {
//!             available[0]
//!         }
//!     }
//! }
//! ```
//!
//! Strategies that return an unavailable category or an invalid keep
//! selection stop the simulation with an error; the simulator never corrects
//! them.

pub mod category;
pub mod config;
pub mod dice;
pub mod game_state;
pub mod scoring;
pub mod simulator;
pub mod stats;
pub mod strategy;
pub mod utils;

pub use category::Category;
pub use config::RuleConfig;
pub use game_state::GameState;
pub use scoring::ScoreCalculator;
pub use simulator::{compare_strategies, Simulator, StrategyComparison};
pub use stats::{LowestGame, StatsCollector, StatsReport};
pub use strategy::Strategy;

/// Error types for scoring and simulation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The category is not part of the rule set in use
    #[error("Unknown category: {0}")]
    UnknownCategory(Category),

    /// The category has already been filled the maximum number of times
    #[error("Category {category} already filled {fills} time(s)")]
    CategoryFull {
        /// Category that was applied
        category: Category,
        /// Number of fills already recorded
        fills: usize,
    },

    /// Keep positions out of range or repeated
    #[error("Invalid keep selection {positions:?} for {dice_count} dice")]
    InvalidKeepSelection {
        /// Positions returned by the strategy
        positions: Vec<usize>,
        /// Number of dice in the hand
        dice_count: usize,
    },

    /// Statistics were requested before any game was recorded
    #[error("No games recorded")]
    NoData,

    /// Invalid rule configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;
