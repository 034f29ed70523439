use std::sync::Arc;

use yahtzee_sim::{Category, GameState, RuleConfig, ScoreCalculator, SimError, StatsCollector};

fn game_with_chance(calculator: &Arc<ScoreCalculator>, hand: &[u32]) -> GameState {
    let mut state = GameState::new(Arc::clone(calculator));
    state.apply_category(Category::Chance, hand).unwrap();
    state
}

fn calculator() -> Arc<ScoreCalculator> {
    Arc::new(ScoreCalculator::new(RuleConfig::default()).unwrap())
}

#[test]
fn test_report_without_games_fails() {
    let stats = StatsCollector::new(RuleConfig::default());
    assert_eq!(stats.report(), Err(SimError::NoData));

    // Category records alone are not games
    let mut stats = StatsCollector::new(RuleConfig::default());
    stats.record_category(Category::Chance, 20);
    assert_eq!(stats.report(), Err(SimError::NoData));
}

#[test]
fn test_report_score_statistics() {
    let calc = calculator();
    let mut stats = StatsCollector::new(RuleConfig::default());

    stats.record_game(100, 50, false, game_with_chance(&calc, &[1, 1, 1, 1, 1]));
    stats.record_game(200, 70, true, game_with_chance(&calc, &[2, 2, 2, 2, 2]));

    let report = stats.report().unwrap();
    assert_eq!(report.games, 2);
    assert!((report.mean_score - 150.0).abs() < 1e-9);
    assert_eq!(report.min_score, 100);
    assert_eq!(report.max_score, 200);
    assert!((report.std_dev - 50.0).abs() < 1e-9);
    assert!((report.bonus_rate - 0.5).abs() < 1e-9);
    assert!((report.mean_upper_total - 60.0).abs() < 1e-9);
    assert_eq!(report.bonus_threshold, 63);
}

#[test]
fn test_lowest_game_is_retained() {
    let calc = calculator();
    let mut stats = StatsCollector::new(RuleConfig::default());

    stats.record_game(150, 0, false, game_with_chance(&calc, &[3, 3, 3, 3, 3]));
    stats.record_game(120, 0, false, game_with_chance(&calc, &[1, 2, 3, 4, 5]));
    stats.record_game(180, 0, false, game_with_chance(&calc, &[6, 6, 6, 6, 6]));

    assert_eq!(stats.min_score(), Some(120));
    let lowest = stats.lowest_game().unwrap();
    assert_eq!(lowest.scores_for(Category::Chance), Some(&[15][..]));

    let report = stats.report().unwrap();
    let breakdown = report.lowest_game.unwrap();
    assert_eq!(breakdown.score, 120);
    assert_eq!(breakdown.total_score, 15);
    assert_eq!(breakdown.fills.len(), 13);
    assert!(breakdown
        .fills
        .contains(&(Category::Chance, vec![15])));
}

#[test]
fn test_category_hits() {
    let mut stats = StatsCollector::new(RuleConfig::default());
    let calc = calculator();

    stats.record_category(Category::Yahtzee, 50);
    stats.record_category(Category::Yahtzee, 0);
    stats.record_category(Category::SmallStraight, 30);
    stats.record_category(Category::LargeStraight, 0);
    stats.record_category(Category::Chance, 20);
    stats.record_category(Category::Chance, 25);
    stats.record_game(100, 0, false, GameState::new(Arc::clone(&calc)));
    stats.record_game(100, 0, false, GameState::new(Arc::clone(&calc)));

    let report = stats.report().unwrap();
    assert!((report.yahtzee_rate - 0.5).abs() < 1e-9);
    assert!((report.small_straight_rate - 0.5).abs() < 1e-9);
    assert_eq!(report.large_straight_rate, 0.0);
    assert!((report.mean_chance_score - 22.5).abs() < 1e-9);

    assert_eq!(stats.category_usage()[&Category::Yahtzee], 2);
    assert_eq!(stats.category_usage()[&Category::Chance], 2);
    assert!(!stats.category_usage().contains_key(&Category::FullHouse));
}

#[test]
fn test_chance_mean_defaults_to_zero() {
    let mut stats = StatsCollector::new(RuleConfig::default());
    stats.record_game(90, 0, false, GameState::new(calculator()));

    assert_eq!(stats.report().unwrap().mean_chance_score, 0.0);
}

#[test]
fn test_merge_matches_single_collector() {
    let calc = calculator();
    let scores = [140u32, 90, 210, 175];

    let mut single = StatsCollector::new(RuleConfig::default());
    let mut left = StatsCollector::new(RuleConfig::default());
    let mut right = StatsCollector::new(RuleConfig::default());

    for (i, &score) in scores.iter().enumerate() {
        let part = if i % 2 == 0 { &mut left } else { &mut right };
        for stats in [&mut single, part] {
            stats.record_category(Category::LargeStraight, 40);
            stats.record_game(score, score / 3, score > 150, GameState::new(Arc::clone(&calc)));
        }
    }

    left.merge(right);
    let merged = left.report().unwrap();
    let expected = single.report().unwrap();

    assert_eq!(merged.games, expected.games);
    assert_eq!(merged.min_score, 90);
    assert_eq!(merged.max_score, expected.max_score);
    assert!((merged.mean_score - expected.mean_score).abs() < 1e-9);
    assert!((merged.std_dev - expected.std_dev).abs() < 1e-9);
    assert!((merged.bonus_rate - expected.bonus_rate).abs() < 1e-9);
    assert_eq!(merged.category_usage, expected.category_usage);
    assert_eq!(merged.lowest_game.map(|g| g.score), Some(90));
}

#[test]
fn test_running_mean() {
    let calc = calculator();
    let mut stats = StatsCollector::new(RuleConfig::default());
    for score in [100, 200, 300] {
        stats.record_game(score, 0, false, GameState::new(Arc::clone(&calc)));
    }

    assert_eq!(stats.total_scores(), &[100, 200, 300]);
    assert_eq!(stats.running_mean(), vec![100.0, 150.0, 200.0]);
}

#[test]
fn test_summary_text() {
    let calc = calculator();
    let mut stats = StatsCollector::new(RuleConfig::default());
    stats.record_category(Category::Chance, 15);
    stats.record_game(15, 0, false, game_with_chance(&calc, &[1, 2, 3, 4, 5]));

    let summary = stats.report().unwrap().summary();
    assert!(summary.contains("Games played: 1"));
    assert!(summary.contains("target: 63"));
    assert!(summary.contains("chance"));
    assert!(summary.contains("Lowest Score Game (score: 15)"));
}
