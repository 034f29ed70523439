//! Decision strategies
//!
//! A strategy is the policy that plays a game: between rolls it picks which
//! dice to keep, and at the end of each turn it picks the category to fill.
//! The simulator follows its decisions without judging them; invalid
//! decisions surface as errors.
//!
//! This module contains the [`Strategy`] trait and a few baseline strategies
//! useful as reference points when comparing heuristics.

pub mod first_available;
pub mod greedy;
pub mod random;

pub use first_available::FirstAvailable;
pub use greedy::GreedyStrategy;
pub use random::RandomStrategy;

use crate::{category::Category, game_state::GameState};

/// Trait for policies that play the game
pub trait Strategy: Send + Sync {
    /// Name shown in reports and logs
    fn name(&self) -> &str {
        "Strategy"
    }

    /// Chooses the positions of the dice to keep before a reroll
    ///
    /// Every position must be a valid index into `hand` and appear at most
    /// once. Keeping every die ends the rerolls for this turn; an empty list
    /// rerolls everything.
    ///
    /// # Parameters
    ///
    /// * `hand`: The current dice
    /// * `reroll_index`: 0 before the first reroll, 1 before the second, ...
    /// * `state`: The game so far
    fn choose_keep(&self, hand: &[u32], reroll_index: usize, state: &GameState) -> Vec<usize>;

    /// Chooses the category to fill with the final hand
    ///
    /// The category must be one of `state.available_categories()`.
    fn choose_category(&self, hand: &[u32], state: &GameState) -> Category;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_keep(&self, hand: &[u32], reroll_index: usize, state: &GameState) -> Vec<usize> {
        (**self).choose_keep(hand, reroll_index, state)
    }

    fn choose_category(&self, hand: &[u32], state: &GameState) -> Category {
        (**self).choose_category(hand, state)
    }
}
