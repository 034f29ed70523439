//! Rule configuration for the dice game
//!
//! This module defines the parameters that vary between rule variants.
//! A configuration is fixed for the whole simulation run: the simulator and
//! the scoring calculator each keep their own copy.

use std::fmt;

use crate::{
    category::Category,
    scoring::{FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE},
    Result, SimError,
};

/// Number of times each face value must appear, on average, to reach the
/// upper-section bonus (3 of each face gives 63 on six-sided dice)
pub const BONUS_MULTIPLIER: u32 = 3;

/// Rule parameters for a game
///
/// Use the builder methods to create a variant of the standard rules.
///
/// # Example
///
/// ```
/// use yahtzee_sim::RuleConfig;
///
/// let config = RuleConfig::default()
///     .with_face_count(8)
///     .with_max_rerolls(3)
///     .with_max_category_fills(2);
///
/// assert_eq!(config.upper_bonus_threshold(), 108);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    /// Number of dice rolled each turn
    pub dice_count: usize,

    /// Number of faces on each die, numbered 1 to `face_count`
    pub face_count: u32,

    /// Number of rerolls allowed after the first roll
    pub max_rerolls: usize,

    /// Number of times each category may be scored in one game
    pub max_category_fills: usize,

    /// Points awarded once the upper total reaches the bonus threshold
    pub upper_bonus_reward: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            dice_count: 5,
            face_count: 6,
            max_rerolls: 2,
            max_category_fills: 1,
            upper_bonus_reward: 35,
        }
    }
}

impl RuleConfig {
    /// Sets the number of dice
    pub fn with_dice_count(mut self, dice_count: usize) -> Self {
        self.dice_count = dice_count;
        self
    }

    /// Sets the number of faces per die
    pub fn with_face_count(mut self, face_count: u32) -> Self {
        self.face_count = face_count;
        self
    }

    /// Sets the number of rerolls per turn
    pub fn with_max_rerolls(mut self, max_rerolls: usize) -> Self {
        self.max_rerolls = max_rerolls;
        self
    }

    /// Sets how many times each category can be filled
    pub fn with_max_category_fills(mut self, fills: usize) -> Self {
        self.max_category_fills = fills;
        self
    }

    /// Sets the upper-section bonus reward
    pub fn with_upper_bonus_reward(mut self, reward: u32) -> Self {
        self.upper_bonus_reward = reward;
        self
    }

    /// Upper total needed for the bonus: `3 * (1 + 2 + ... + face_count)`
    ///
    /// Saturates at `u32::MAX` for face counts that [`RuleConfig::validate`]
    /// rejects.
    pub fn upper_bonus_threshold(&self) -> u32 {
        self.wide_bonus_threshold()
            .and_then(|threshold| u32::try_from(threshold).ok())
            .unwrap_or(u32::MAX)
    }

    fn wide_bonus_threshold(&self) -> Option<u64> {
        let faces = u64::from(self.face_count);
        let face_sum = faces.checked_mul(faces + 1)? / 2;
        face_sum.checked_mul(u64::from(BONUS_MULTIPLIER))
    }

    /// Highest final score a game can reach under these rules
    fn max_game_score(&self) -> Option<u64> {
        let dice = u64::try_from(self.dice_count).ok()?;
        let faces = u64::from(self.face_count);
        let fills = u64::try_from(self.max_category_fills).ok()?;

        // every upper category filled with all dice on its face
        let upper = dice.checked_mul(faces.checked_mul(faces + 1)? / 2)?;
        // three of a kind, four of a kind and chance on all top faces
        let summed = dice.checked_mul(faces)?.checked_mul(3)?;
        let fixed = u64::from(
            FULL_HOUSE_SCORE + SMALL_STRAIGHT_SCORE + LARGE_STRAIGHT_SCORE + YAHTZEE_SCORE,
        );

        upper
            .checked_add(summed)?
            .checked_add(fixed)?
            .checked_mul(fills)?
            .checked_add(u64::from(self.upper_bonus_reward))
    }

    /// Number of categories in this rule set
    pub fn category_count(&self) -> usize {
        self.face_count as usize + Category::LOWER.len()
    }

    /// Number of scoring slots in a game, which is also the number of turns
    pub fn total_slots(&self) -> usize {
        self.category_count().saturating_mul(self.max_category_fills)
    }

    /// Checks that the rules describe a playable game
    ///
    /// Besides the minimum sizes, every score a game can reach, and the bonus
    /// threshold, must fit in a `u32`.
    pub fn validate(&self) -> Result<()> {
        if self.dice_count == 0 {
            return Err(SimError::InvalidConfiguration(
                "dice_count must be at least 1".to_string(),
            ));
        }
        if self.face_count < 2 {
            return Err(SimError::InvalidConfiguration(format!(
                "face_count must be at least 2, got {}",
                self.face_count
            )));
        }
        if self.max_category_fills == 0 {
            return Err(SimError::InvalidConfiguration(
                "max_category_fills must be at least 1".to_string(),
            ));
        }

        let fits = |value: Option<u64>| value.map_or(false, |v| v <= u64::from(u32::MAX));
        if !fits(self.wide_bonus_threshold()) || !fits(self.max_game_score()) {
            return Err(SimError::InvalidConfiguration(format!(
                "scores overflow 32 bits with dice={}, faces={}, fills={}, bonus={}",
                self.dice_count, self.face_count, self.max_category_fills, self.upper_bonus_reward
            )));
        }
        Ok(())
    }
}

impl fmt::Display for RuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleConfig(dice={}, faces={}, rerolls={}, fills={}, bonus_thresh={}, bonus={})",
            self.dice_count,
            self.face_count,
            self.max_rerolls,
            self.max_category_fills,
            self.upper_bonus_threshold(),
            self.upper_bonus_reward
        )
    }
}
