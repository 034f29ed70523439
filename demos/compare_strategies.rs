//! Strategy comparison example
//!
//! Runs the baseline strategies on the same rules and prints their
//! statistics side by side.
//!
//! ```bash
//! RUST_LOG=info cargo run --example compare_strategies
//! ```

use yahtzee_sim::{
    compare_strategies,
    strategy::{FirstAvailable, GreedyStrategy, RandomStrategy},
    RuleConfig, Strategy,
};

fn main() -> Result<(), yahtzee_sim::SimError> {
    // Initialize logging
    env_logger::init();

    let config = RuleConfig::default()
        .with_dice_count(5)
        .with_face_count(6)
        .with_max_category_fills(1)
        .with_max_rerolls(2);

    println!("Strategy Comparison");
    println!("===================");
    println!("Rules: {}", config);
    println!();

    let random = RandomStrategy::new();
    let first = FirstAvailable::new();
    let greedy = GreedyStrategy::new();
    let strategies: Vec<&dyn Strategy> = vec![&random, &first, &greedy];

    let results = compare_strategies(config, &strategies, 2000, 2024)?;

    for result in &results {
        println!("### {} (final average {:.1})", result.name, result.mean);
        println!("{}", result.report);
    }

    println!("Summary");
    println!("-------");
    for result in &results {
        println!(
            "{:16} mean {:7.2}  std {:6.2}  bonus {:5.1}%  yahtzee {:5.1}%",
            result.name,
            result.mean,
            result.report.std_dev,
            result.report.bonus_rate * 100.0,
            result.report.yahtzee_rate * 100.0
        );
    }

    Ok(())
}
