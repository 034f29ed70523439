//! Statistics collection across simulated games
//!
//! The [`StatsCollector`] accumulates per-game and per-category results and
//! keeps a snapshot of the lowest-scoring game for diagnostics. Every
//! reduction is order independent, so collectors filled on different workers
//! can be merged.

use std::collections::BTreeMap;
use std::fmt;

use crate::{
    category::Category,
    config::RuleConfig,
    game_state::GameState,
    utils::{mean, population_std_dev, rate, running_mean},
    Result, SimError,
};

/// Accumulates results from many games
#[derive(Debug, Clone)]
pub struct StatsCollector {
    config: RuleConfig,
    total_scores: Vec<u32>,
    upper_totals: Vec<u32>,
    bonus_count: u64,
    min_score: Option<u32>,
    lowest_game: Option<GameState>,
    chance_scores: Vec<u32>,
    yahtzee_hits: u64,
    small_straight_hits: u64,
    large_straight_hits: u64,
    category_usage: BTreeMap<Category, u64>,
}

impl StatsCollector {
    /// Creates an empty collector for the given rules
    pub fn new(config: RuleConfig) -> Self {
        StatsCollector {
            config,
            total_scores: Vec::new(),
            upper_totals: Vec::new(),
            bonus_count: 0,
            min_score: None,
            lowest_game: None,
            chance_scores: Vec::new(),
            yahtzee_hits: 0,
            small_straight_hits: 0,
            large_straight_hits: 0,
            category_usage: BTreeMap::new(),
        }
    }

    /// Records a finished game
    ///
    /// The snapshot replaces the retained lowest game only when `final_score`
    /// is strictly lower than every score recorded so far.
    pub fn record_game(
        &mut self,
        final_score: u32,
        upper_total: u32,
        got_bonus: bool,
        snapshot: GameState,
    ) {
        let is_new_minimum = self.min_score.map_or(true, |min| final_score < min);

        self.total_scores.push(final_score);
        self.upper_totals.push(upper_total);
        if got_bonus {
            self.bonus_count += 1;
        }
        if is_new_minimum {
            self.min_score = Some(final_score);
            self.lowest_game = Some(snapshot);
        }
    }

    /// Records the category filled at the end of a turn and its score
    pub fn record_category(&mut self, category: Category, score: u32) {
        *self.category_usage.entry(category).or_insert(0) += 1;

        if category == Category::Chance {
            self.chance_scores.push(score);
        }
        if category.hit_score() == Some(score) {
            match category {
                Category::Yahtzee => self.yahtzee_hits += 1,
                Category::SmallStraight => self.small_straight_hits += 1,
                Category::LargeStraight => self.large_straight_hits += 1,
                _ => {}
            }
        }
    }

    /// Folds another collector's results into this one
    pub fn merge(&mut self, other: StatsCollector) {
        self.total_scores.extend(other.total_scores);
        self.upper_totals.extend(other.upper_totals);
        self.bonus_count += other.bonus_count;
        self.chance_scores.extend(other.chance_scores);
        self.yahtzee_hits += other.yahtzee_hits;
        self.small_straight_hits += other.small_straight_hits;
        self.large_straight_hits += other.large_straight_hits;
        for (category, count) in other.category_usage {
            *self.category_usage.entry(category).or_insert(0) += count;
        }

        if let Some(candidate) = other.min_score {
            if self.min_score.map_or(true, |min| candidate < min) {
                self.min_score = Some(candidate);
                self.lowest_game = other.lowest_game;
            }
        }
    }

    /// Number of games recorded
    pub fn games(&self) -> usize {
        self.total_scores.len()
    }

    /// Final score of every recorded game, in recording order
    pub fn total_scores(&self) -> &[u32] {
        &self.total_scores
    }

    /// Average score after each recorded game
    pub fn running_mean(&self) -> Vec<f64> {
        running_mean(&self.total_scores)
    }

    /// Lowest final score recorded so far
    pub fn min_score(&self) -> Option<u32> {
        self.min_score
    }

    /// Snapshot of the lowest-scoring game recorded so far
    pub fn lowest_game(&self) -> Option<&GameState> {
        self.lowest_game.as_ref()
    }

    /// Times each category has been filled
    pub fn category_usage(&self) -> &BTreeMap<Category, u64> {
        &self.category_usage
    }

    /// Builds a summary of everything recorded so far
    ///
    /// Fails with `NoData` if no game has been recorded.
    pub fn report(&self) -> Result<StatsReport> {
        let games = self.games();
        let (min_score, max_score) = match (
            self.total_scores.iter().min(),
            self.total_scores.iter().max(),
        ) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Err(SimError::NoData),
        };

        let mean_score = mean(&self.total_scores);

        Ok(StatsReport {
            games,
            mean_score,
            min_score,
            max_score,
            std_dev: population_std_dev(&self.total_scores, mean_score),
            bonus_rate: rate(self.bonus_count, games),
            mean_upper_total: mean(&self.upper_totals),
            bonus_threshold: self.config.upper_bonus_threshold(),
            mean_chance_score: mean(&self.chance_scores),
            yahtzee_rate: rate(self.yahtzee_hits, games),
            small_straight_rate: rate(self.small_straight_hits, games),
            large_straight_rate: rate(self.large_straight_hits, games),
            category_usage: self
                .category_usage
                .iter()
                .map(|(&category, &count)| (category, count))
                .collect(),
            lowest_game: self
                .min_score
                .zip(self.lowest_game.as_ref())
                .map(|(score, state)| LowestGame::from_state(score, state)),
        })
    }
}

/// Breakdown of the lowest-scoring game
#[derive(Debug, Clone, PartialEq)]
pub struct LowestGame {
    /// Final score recorded for the game
    pub score: u32,
    /// Every category with its recorded scores
    pub fills: Vec<(Category, Vec<u32>)>,
    /// Upper-section total
    pub upper_total: u32,
    /// Upper-section bonus
    pub upper_bonus: u32,
    /// Lower-section total
    pub lower_total: u32,
    /// Final score
    pub total_score: u32,
}

impl LowestGame {
    fn from_state(score: u32, state: &GameState) -> Self {
        LowestGame {
            score,
            fills: state
                .fills()
                .map(|(category, scores)| (category, scores.to_vec()))
                .collect(),
            upper_total: state.upper_total(),
            upper_bonus: state.upper_bonus(),
            lower_total: state.lower_total(),
            total_score: state.total_score(),
        }
    }
}

/// Summary of a batch of games
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    /// Number of games played
    pub games: usize,
    /// Average final score
    pub mean_score: f64,
    /// Lowest final score
    pub min_score: u32,
    /// Highest final score
    pub max_score: u32,
    /// Population standard deviation of the final scores
    pub std_dev: f64,
    /// Fraction of games that earned the upper bonus
    pub bonus_rate: f64,
    /// Average upper-section total
    pub mean_upper_total: f64,
    /// Upper total needed for the bonus
    pub bonus_threshold: u32,
    /// Average score written into chance, 0 if chance was never used
    pub mean_chance_score: f64,
    /// Yahtzees scored per game
    pub yahtzee_rate: f64,
    /// Small straights scored per game
    pub small_straight_rate: f64,
    /// Large straights scored per game
    pub large_straight_rate: f64,
    /// Times each category was filled, in canonical order
    pub category_usage: Vec<(Category, u64)>,
    /// Breakdown of the lowest-scoring game
    pub lowest_game: Option<LowestGame>,
}

impl StatsReport {
    /// Returns the report as human-readable text
    pub fn summary(&self) -> String {
        let mut out = format!(
            "========== Strategy Statistics ==========\n\
             - Games played: {}\n\
             - Average score: {:.2}\n\
             - Min score: {}\n\
             - Max score: {}\n\
             - Std dev: {:.2}\n\
             \n\
             --- Upper Section ---\n\
             - Average upper total: {:.2} (target: {})\n\
             - Bonus hit rate: {:.2}%\n\
             \n\
             --- Special Categories ---\n\
             - Average chance score: {:.2}\n\
             - Yahtzee hit rate: {:.2}%\n\
             - Small straight hit rate: {:.2}%\n\
             - Large straight hit rate: {:.2}%\n\
             \n\
             --- Category Usage ---\n",
            self.games,
            self.mean_score,
            self.min_score,
            self.max_score,
            self.std_dev,
            self.mean_upper_total,
            self.bonus_threshold,
            self.bonus_rate * 100.0,
            self.mean_chance_score,
            self.yahtzee_rate * 100.0,
            self.small_straight_rate * 100.0,
            self.large_straight_rate * 100.0,
        );

        for (category, count) in &self.category_usage {
            out.push_str(&format!("{:20} : {}\n", category.to_string(), count));
        }

        if let Some(lowest) = &self.lowest_game {
            out.push_str(&format!(
                "\n--- Lowest Score Game (score: {}) ---\n",
                lowest.score
            ));
            for (category, scores) in &lowest.fills {
                let sum: u32 = scores.iter().sum();
                out.push_str(&format!(
                    "  {:20}: {:?} -> Sum: {}\n",
                    category.to_string(),
                    scores,
                    sum
                ));
            }
            out.push_str(&format!(
                "Upper total: {}\nUpper bonus: {}\nLower total: {}\nTotal score: {}\n",
                lowest.upper_total, lowest.upper_bonus, lowest.lower_total, lowest.total_score
            ));
        }

        out
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
