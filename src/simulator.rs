//! Turn, game and batch simulation
//!
//! This module drives strategies through complete games: roll, let the
//! strategy keep dice and reroll, let it pick a category, score it, and repeat
//! until every category is filled. Outcomes are reported to the simulator's
//! [`StatsCollector`].
//!
//! Dice come from the random generator owned by the simulator. A seeded
//! simulator replays exactly the same games for a deterministic strategy.

use std::sync::Arc;

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    config::RuleConfig,
    dice,
    game_state::GameState,
    scoring::ScoreCalculator,
    stats::{StatsCollector, StatsReport},
    strategy::Strategy,
    Result, SimError,
};

/// Plays one turn and records the filled category
fn play_turn<R, S>(
    rng: &mut R,
    state: &mut GameState,
    strategy: &S,
    stats: &mut StatsCollector,
) -> Result<()>
where
    R: Rng + ?Sized,
    S: Strategy + ?Sized,
{
    let config = *state.rules();
    let mut hand = dice::roll(rng, &config);
    trace!("rolled {:?}", hand);

    for reroll_index in 0..config.max_rerolls {
        let keep = strategy.choose_keep(&hand, reroll_index, state);
        dice::validate_keep(&keep, config.dice_count)?;

        if keep.len() == config.dice_count {
            trace!("keeping every die after {} reroll(s)", reroll_index);
            break;
        }

        hand = dice::reroll_with_keep(&hand, &keep, config.face_count, rng)?;
        trace!("kept {:?}, rerolled to {:?}", keep, hand);
    }

    let category = strategy.choose_category(&hand, state);
    let score = state.apply_category(category, &hand)?;
    trace!("filled {} with {:?} for {} points", category, hand, score);

    stats.record_category(category, score);
    Ok(())
}

/// Plays a full game from an empty state and records it
fn play_game<R, S>(
    calculator: &Arc<ScoreCalculator>,
    rng: &mut R,
    strategy: &S,
    stats: &mut StatsCollector,
) -> Result<u32>
where
    R: Rng + ?Sized,
    S: Strategy + ?Sized,
{
    let mut state = GameState::new(Arc::clone(calculator));
    while !state.is_complete() {
        play_turn(rng, &mut state, strategy, stats)?;
    }

    let total = state.total_score();
    debug!(
        "{} finished a game: total {} (upper {}, bonus {}, lower {})",
        strategy.name(),
        total,
        state.upper_total(),
        state.upper_bonus(),
        state.lower_total()
    );
    stats.record_game(
        total,
        state.upper_total(),
        state.upper_bonus() > 0,
        state.snapshot(),
    );
    Ok(total)
}

/// Monte Carlo simulator for one rule configuration
///
/// The simulator owns its random generator and statistics. Statistics keep
/// accumulating across calls until [`Simulator::reset_stats`] is called.
///
/// # Example
///
/// ```
/// use yahtzee_sim::{RuleConfig, Simulator, strategy::GreedyStrategy};
///
/// let mut simulator = Simulator::with_seed(RuleConfig::default(), 7).unwrap();
/// let mean = simulator.simulate_many(&GreedyStrategy::new(), 20).unwrap();
///
/// assert_eq!(simulator.stats().games(), 20);
/// assert!(mean > 0.0);
/// ```
pub struct Simulator<R: Rng = StdRng> {
    config: RuleConfig,
    calculator: Arc<ScoreCalculator>,
    stats: StatsCollector,
    rng: R,
}

impl Simulator<StdRng> {
    /// Creates a simulator seeded from system entropy
    pub fn new(config: RuleConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a simulator whose dice are fully determined by `seed`
    pub fn with_seed(config: RuleConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulator<R> {
    /// Creates a simulator drawing dice from the given generator
    ///
    /// Fails with `InvalidConfiguration` if the rules are not playable.
    pub fn with_rng(config: RuleConfig, rng: R) -> Result<Self> {
        let calculator = Arc::new(ScoreCalculator::new(config)?);
        Ok(Simulator {
            config,
            calculator,
            stats: StatsCollector::new(config),
            rng,
        })
    }

    /// The rules being simulated
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// The shared scoring calculator
    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    /// Statistics collected so far
    pub fn stats(&self) -> &StatsCollector {
        &self.stats
    }

    /// Consumes the simulator, returning its statistics
    pub fn into_stats(self) -> StatsCollector {
        self.stats
    }

    /// Discards all collected statistics
    pub fn reset_stats(&mut self) {
        self.stats = StatsCollector::new(self.config);
    }

    /// Creates an empty game for these rules
    pub fn new_game(&self) -> GameState {
        GameState::new(Arc::clone(&self.calculator))
    }

    /// Plays one turn of `state` with the strategy
    ///
    /// Fails if the strategy returns an invalid keep selection or a category
    /// that cannot be filled. Errors are returned unchanged; no decision is
    /// retried.
    pub fn simulate_turn<S: Strategy + ?Sized>(
        &mut self,
        state: &mut GameState,
        strategy: &S,
    ) -> Result<()> {
        play_turn(&mut self.rng, state, strategy, &mut self.stats)
    }

    /// Plays a complete game and returns its final score
    pub fn simulate_game<S: Strategy + ?Sized>(&mut self, strategy: &S) -> Result<u32> {
        play_game(&self.calculator, &mut self.rng, strategy, &mut self.stats)
    }

    /// Plays `n` games one after another and returns their average score
    ///
    /// A summary of all statistics collected so far is logged once the batch
    /// finishes. Fails with `NoData` when `n` is zero. If a game fails, the
    /// batch stops; games recorded before the failure stay in [`Self::stats`].
    pub fn simulate_many<S: Strategy + ?Sized>(&mut self, strategy: &S, n: usize) -> Result<f64> {
        if n == 0 {
            return Err(SimError::NoData);
        }
        info!("{}: simulating {} games under {}", strategy.name(), n, self.config);

        let mut total: u64 = 0;
        for game in 0..n {
            match self.simulate_game(strategy) {
                Ok(score) => total += u64::from(score),
                Err(e) => {
                    warn!("{}: batch stopped at game {}: {}", strategy.name(), game, e);
                    return Err(e);
                }
            }
        }

        self.log_report(strategy.name())?;
        Ok(total as f64 / n as f64)
    }

    /// Plays `n` games across the rayon thread pool
    ///
    /// Every game draws its dice from its own generator, seeded from a base
    /// seed taken from the simulator's generator, so a seeded simulator still
    /// gives reproducible results. Games are merged into the statistics in
    /// game order on the calling thread. If any game fails, the games before
    /// it are merged and the first error is returned.
    #[cfg(feature = "parallel")]
    pub fn simulate_many_parallel<S: Strategy + ?Sized>(
        &mut self,
        strategy: &S,
        n: usize,
    ) -> Result<f64> {
        use rayon::prelude::*;

        if n == 0 {
            return Err(SimError::NoData);
        }

        info!(
            "{}: simulating {} games in parallel under {}",
            strategy.name(),
            n,
            self.config
        );

        let base_seed: u64 = self.rng.gen();
        let calculator = &self.calculator;
        let config = self.config;

        let outcomes: Vec<Result<(u32, StatsCollector)>> = (0..n)
            .into_par_iter()
            .map(|i| -> Result<(u32, StatsCollector)> {
                let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
                let mut stats = StatsCollector::new(config);
                let score = play_game(calculator, &mut rng, strategy, &mut stats)?;
                Ok((score, stats))
            })
            .collect();

        let mut total: u64 = 0;
        for (game, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok((score, stats)) => {
                    total += u64::from(score);
                    self.stats.merge(stats);
                }
                Err(e) => {
                    warn!("{}: batch stopped at game {}: {}", strategy.name(), game, e);
                    return Err(e);
                }
            }
        }

        self.log_report(strategy.name())?;
        Ok(total as f64 / n as f64)
    }

    fn log_report(&self, name: &str) -> Result<StatsReport> {
        let report = self.stats.report()?;
        info!(
            "{}: {} games, mean {:.2}, std dev {:.2}, bonus rate {:.2}%",
            name,
            report.games,
            report.mean_score,
            report.std_dev,
            report.bonus_rate * 100.0
        );
        debug!("{}", report.summary());
        Ok(report)
    }
}

/// Outcome of one strategy in a comparison
#[derive(Debug, Clone)]
pub struct StrategyComparison {
    /// Name reported by the strategy
    pub name: String,
    /// Average score over the batch
    pub mean: f64,
    /// Average score after each game, for convergence plots
    pub running_mean: Vec<f64>,
    /// Full statistics for the batch
    pub report: StatsReport,
}

/// Runs every strategy for `n` games on identically seeded simulators
///
/// Each strategy gets a fresh simulator with the same seed, so deterministic
/// strategies see the same first roll of every game.
pub fn compare_strategies(
    config: RuleConfig,
    strategies: &[&dyn Strategy],
    n: usize,
    seed: u64,
) -> Result<Vec<StrategyComparison>> {
    strategies
        .iter()
        .map(|strategy| -> Result<StrategyComparison> {
            let mut simulator = Simulator::with_seed(config, seed)?;
            let mean = simulator.simulate_many(*strategy, n)?;
            let stats = simulator.into_stats();
            Ok(StrategyComparison {
                name: strategy.name().to_string(),
                mean,
                running_mean: stats.running_mean(),
                report: stats.report()?,
            })
        })
        .collect()
}
