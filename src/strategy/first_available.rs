//! The simplest possible strategy

use crate::{category::Category, game_state::GameState};

use super::Strategy;

/// Rerolls every die and fills the first open category
///
/// Fully deterministic given the dice, which makes it the reference strategy
/// for reproducibility checks.
#[derive(Debug, Clone, Default)]
pub struct FirstAvailable;

impl FirstAvailable {
    /// Creates a new first-available strategy
    pub fn new() -> Self {
        FirstAvailable
    }
}

impl Strategy for FirstAvailable {
    fn name(&self) -> &str {
        "FirstAvailable"
    }

    fn choose_keep(&self, _hand: &[u32], _reroll_index: usize, _state: &GameState) -> Vec<usize> {
        Vec::new()
    }

    fn choose_category(&self, _hand: &[u32], state: &GameState) -> Category {
        // A complete game is never asked for a category.
        state
            .available_categories()
            .first()
            .copied()
            .unwrap_or(Category::Chance)
    }
}
