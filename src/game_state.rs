//! Game state bookkeeping
//!
//! A [`GameState`] records the scores filled into each category and keeps the
//! section totals up to date. Scoring itself is delegated to the shared
//! [`ScoreCalculator`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::{
    category::Category, config::RuleConfig, scoring::ScoreCalculator, Result, SimError,
};

/// State of a single game in progress
///
/// Cloning a `GameState` copies the fill history, so a clone is an independent
/// snapshot. Only the immutable calculator is shared between copies.
#[derive(Debug, Clone)]
pub struct GameState {
    calculator: Arc<ScoreCalculator>,
    category_scores: BTreeMap<Category, Vec<u32>>,
    upper_total: u32,
    upper_bonus: u32,
    lower_total: u32,
    total_score: u32,
}

impl GameState {
    /// Creates an empty game for the calculator's rules
    pub fn new(calculator: Arc<ScoreCalculator>) -> Self {
        let category_scores = calculator
            .categories()
            .iter()
            .map(|&category| (category, Vec::new()))
            .collect();

        GameState {
            calculator,
            category_scores,
            upper_total: 0,
            upper_bonus: 0,
            lower_total: 0,
            total_score: 0,
        }
    }

    /// The rules this game is played under
    pub fn rules(&self) -> &RuleConfig {
        self.calculator.config()
    }

    /// The calculator used to score this game
    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    /// Categories that can still be filled, in canonical order
    pub fn available_categories(&self) -> Vec<Category> {
        let max_fills = self.rules().max_category_fills;
        self.category_scores
            .iter()
            .filter(|(_, scores)| scores.len() < max_fills)
            .map(|(&category, _)| category)
            .collect()
    }

    /// Returns true if the category exists and can still be filled
    pub fn is_available(&self, category: Category) -> bool {
        self.category_scores
            .get(&category)
            .map_or(false, |scores| scores.len() < self.rules().max_category_fills)
    }

    /// Returns true once every category has been filled the maximum number of times
    pub fn is_complete(&self) -> bool {
        self.available_categories().is_empty()
    }

    /// Score the hand would earn in the category, without recording it
    pub fn potential_score(&self, category: Category, hand: &[u32]) -> Result<u32> {
        self.calculator.score(category, hand)
    }

    /// Records the hand's score in the category and returns that score
    ///
    /// Fails with `UnknownCategory` if the category is not part of the rule
    /// set, and with `CategoryFull` if it has already been filled the maximum
    /// number of times. On failure the state is left untouched.
    pub fn apply_category(&mut self, category: Category, hand: &[u32]) -> Result<u32> {
        let max_fills = self.calculator.config().max_category_fills;
        let fills = self
            .category_scores
            .get(&category)
            .map(Vec::len)
            .ok_or(SimError::UnknownCategory(category))?;
        if fills >= max_fills {
            return Err(SimError::CategoryFull { category, fills });
        }

        let score = self.calculator.score(category, hand)?;
        if let Some(scores) = self.category_scores.get_mut(&category) {
            scores.push(score);
        }
        self.recompute_totals();
        Ok(score)
    }

    // Totals are rebuilt from the fill history, so the bonus follows the
    // current upper total rather than latching on.
    fn recompute_totals(&mut self) {
        let (upper, lower): (Vec<_>, Vec<_>) = self
            .category_scores
            .iter()
            .partition(|(category, _)| category.is_upper());

        self.upper_total = upper.iter().flat_map(|(_, scores)| scores.iter()).sum();
        self.lower_total = lower.iter().flat_map(|(_, scores)| scores.iter()).sum();

        let config = self.calculator.config();
        self.upper_bonus = if self.upper_total >= config.upper_bonus_threshold() {
            config.upper_bonus_reward
        } else {
            0
        };
        self.total_score = self.upper_total + self.upper_bonus + self.lower_total;
    }

    /// Returns an independent copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.clone()
    }

    /// Scores recorded for the category, oldest first
    pub fn scores_for(&self, category: Category) -> Option<&[u32]> {
        self.category_scores.get(&category).map(Vec::as_slice)
    }

    /// Every category with its recorded scores, in canonical order
    pub fn fills(&self) -> impl Iterator<Item = (Category, &[u32])> {
        self.category_scores
            .iter()
            .map(|(&category, scores)| (category, scores.as_slice()))
    }

    /// Number of scores recorded so far
    pub fn filled_slots(&self) -> usize {
        self.category_scores.values().map(Vec::len).sum()
    }

    /// Number of scores still to be recorded before the game is complete
    pub fn remaining_slots(&self) -> usize {
        self.rules().total_slots() - self.filled_slots()
    }

    /// Sum of all upper-section scores
    pub fn upper_total(&self) -> u32 {
        self.upper_total
    }

    /// Current upper-section bonus, either 0 or the configured reward
    pub fn upper_bonus(&self) -> u32 {
        self.upper_bonus
    }

    /// Returns true if a non-zero upper bonus is currently awarded
    pub fn has_bonus(&self) -> bool {
        self.upper_bonus > 0
    }

    /// Sum of all lower-section scores
    pub fn lower_total(&self) -> u32 {
        self.lower_total
    }

    /// Upper total plus bonus plus lower total
    pub fn total_score(&self) -> u32 {
        self.total_score
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, scores) in self.fills() {
            let sum: u32 = scores.iter().sum();
            writeln!(f, "  {:20}: {:?} -> Sum: {}", category.to_string(), scores, sum)?;
        }
        writeln!(f, "Upper Total: {}", self.upper_total)?;
        writeln!(f, "Upper Bonus: {}", self.upper_bonus)?;
        write!(f, "TOTAL SCORE: {}", self.total_score)
    }
}
