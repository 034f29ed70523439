//! Scoring calculator
//!
//! Maps a category and a hand of dice to a score under a given rule set.
//! The calculator is built once per configuration and shared by every game
//! of a run.

use crate::{
    category::{categories_for, Category},
    config::RuleConfig,
    dice::{longest_run, value_counts},
    Result, SimError,
};

/// Fixed score for a full house
pub const FULL_HOUSE_SCORE: u32 = 25;
/// Fixed score for a small straight
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
/// Fixed score for a large straight
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
/// Fixed score for a yahtzee
pub const YAHTZEE_SCORE: u32 = 50;

const SMALL_STRAIGHT_RUN: usize = 4;
const LARGE_STRAIGHT_RUN: usize = 5;

/// Scores hands for one rule configuration
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    config: RuleConfig,
    categories: Vec<Category>,
}

impl ScoreCalculator {
    /// Creates a calculator for the given rules
    ///
    /// Fails with `InvalidConfiguration` if the rules are not playable.
    pub fn new(config: RuleConfig) -> Result<Self> {
        config.validate()?;
        Ok(ScoreCalculator {
            categories: categories_for(&config),
            config,
        })
    }

    /// The rules this calculator scores under
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Every category of the rule set, upper section first
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns true if the category belongs to this rule set
    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Upper(face) => (1..=self.config.face_count).contains(&face),
            _ => true,
        }
    }

    /// Score the hand would earn in the category
    ///
    /// Scoring does not depend on the order of the dice. Fails with
    /// `UnknownCategory` for an upper category whose face is outside the
    /// configured range.
    pub fn score(&self, category: Category, hand: &[u32]) -> Result<u32> {
        if !self.contains(category) {
            return Err(SimError::UnknownCategory(category));
        }

        let score = match category {
            Category::Upper(face) => hand.iter().filter(|&&die| die == face).sum(),
            Category::ThreeOfAKind => of_a_kind(hand, 3),
            Category::FourOfAKind => of_a_kind(hand, 4),
            Category::FullHouse => full_house(hand),
            Category::SmallStraight => {
                if longest_run(hand).len() >= SMALL_STRAIGHT_RUN {
                    SMALL_STRAIGHT_SCORE
                } else {
                    0
                }
            }
            Category::LargeStraight => {
                if longest_run(hand).len() >= LARGE_STRAIGHT_RUN {
                    LARGE_STRAIGHT_SCORE
                } else {
                    0
                }
            }
            Category::Yahtzee => match hand.split_first() {
                Some((first, rest)) if rest.iter().all(|die| die == first) => YAHTZEE_SCORE,
                _ => 0,
            },
            Category::Chance => hand.iter().sum(),
        };
        Ok(score)
    }

    /// Scores the hand in every category, in canonical order
    pub fn score_all(&self, hand: &[u32]) -> Vec<(Category, u32)> {
        self.categories
            .iter()
            .map(|&category| (category, self.score_known(category, hand)))
            .collect()
    }

    // Categories taken from `self.categories` are always known.
    fn score_known(&self, category: Category, hand: &[u32]) -> u32 {
        self.score(category, hand).unwrap_or(0)
    }
}

/// Sum of the hand if any value appears at least `n` times
fn of_a_kind(hand: &[u32], n: usize) -> u32 {
    if value_counts(hand).values().any(|&count| count >= n) {
        hand.iter().sum()
    } else {
        0
    }
}

/// 25 if one value appears at least three times and a different value at
/// least twice
fn full_house(hand: &[u32]) -> u32 {
    let counts = value_counts(hand);
    let has_full_house = counts.iter().any(|(&triple, &count)| {
        count >= 3
            && counts
                .iter()
                .any(|(&pair, &other)| pair != triple && other >= 2)
    });
    if has_full_house {
        FULL_HOUSE_SCORE
    } else {
        0
    }
}
