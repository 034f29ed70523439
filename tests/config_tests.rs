use std::sync::Arc;

use yahtzee_sim::{
    category::categories_for, Category, GameState, RuleConfig, ScoreCalculator, SimError,
};

#[test]
fn test_config_default_values() {
    // The defaults are the standard rules
    let config = RuleConfig::default();

    assert_eq!(config.dice_count, 5);
    assert_eq!(config.face_count, 6);
    assert_eq!(config.max_rerolls, 2);
    assert_eq!(config.max_category_fills, 1);
    assert_eq!(config.upper_bonus_reward, 35);
    assert_eq!(config.upper_bonus_threshold(), 63);
    assert_eq!(config.total_slots(), 13);
}

#[test]
fn test_config_builder_methods() {
    let config = RuleConfig::default()
        .with_dice_count(6)
        .with_face_count(8)
        .with_max_rerolls(3)
        .with_max_category_fills(2)
        .with_upper_bonus_reward(50);

    assert_eq!(config.dice_count, 6);
    assert_eq!(config.face_count, 8);
    assert_eq!(config.max_rerolls, 3);
    assert_eq!(config.max_category_fills, 2);
    assert_eq!(config.upper_bonus_reward, 50);
    assert_eq!(config.category_count(), 15);
    assert_eq!(config.total_slots(), 30);
}

#[test]
fn test_bonus_threshold_scales_with_faces() {
    for faces in 2..=20u32 {
        let config = RuleConfig::default().with_face_count(faces);
        let face_sum: u32 = (1..=faces).sum();
        assert_eq!(config.upper_bonus_threshold(), 3 * face_sum);
        assert_eq!(config.upper_bonus_threshold(), 3 * faces * (faces + 1) / 2);
    }
}

#[test]
fn test_validate_rejects_unplayable_rules() {
    assert!(RuleConfig::default().validate().is_ok());
    assert!(RuleConfig::default().with_max_rerolls(0).validate().is_ok());

    let invalid = [
        RuleConfig::default().with_dice_count(0),
        RuleConfig::default().with_face_count(1),
        RuleConfig::default().with_max_category_fills(0),
    ];
    for config in invalid {
        assert!(
            matches!(config.validate(), Err(SimError::InvalidConfiguration(_))),
            "{} should be rejected",
            config
        );
    }
}

#[test]
fn test_validate_rejects_overflowing_scores() {
    // 41445 is the widest die whose best five-dice game still fits in a u32
    assert!(RuleConfig::default().with_face_count(41_445).validate().is_ok());
    for config in [
        RuleConfig::default().with_face_count(41_446),
        RuleConfig::default().with_face_count(40_000).with_max_category_fills(2),
        RuleConfig::default().with_face_count(u32::MAX),
        RuleConfig::default().with_dice_count(usize::MAX),
        RuleConfig::default().with_max_category_fills(usize::MAX),
        RuleConfig::default().with_upper_bonus_reward(u32::MAX),
    ] {
        assert!(
            matches!(config.validate(), Err(SimError::InvalidConfiguration(_))),
            "{} should be rejected",
            config
        );
    }

    // A single die leaves the bonus threshold as the binding limit
    let single = RuleConfig::default().with_dice_count(1);
    assert!(single.with_face_count(53_509).validate().is_ok());
    assert_eq!(single.with_face_count(53_509).upper_bonus_threshold(), 4_294_899_885);
    assert!(single.with_face_count(53_510).validate().is_err());
}

#[test]
fn test_threshold_saturates_instead_of_overflowing() {
    let config = RuleConfig::default().with_face_count(u32::MAX);
    assert_eq!(config.upper_bonus_threshold(), u32::MAX);
    assert!(config.to_string().contains("bonus_thresh=4294967295"));
    assert!(ScoreCalculator::new(config).is_err());
}

#[test]
fn test_widest_accepted_rules_score_without_overflow() {
    let config = RuleConfig::default().with_face_count(41_445);
    let mut state = GameState::new(Arc::new(ScoreCalculator::new(config).unwrap()));
    let hand = [41_445; 5];

    assert_eq!(state.apply_category(Category::Upper(41_445), &hand).unwrap(), 207_225);
    assert_eq!(state.apply_category(Category::Chance, &hand).unwrap(), 207_225);
    assert_eq!(state.upper_bonus(), 0);
    assert_eq!(state.total_score(), 414_450);
}

#[test]
fn test_display_shows_threshold() {
    let text = RuleConfig::default().to_string();
    assert!(text.contains("dice=5"));
    assert!(text.contains("bonus_thresh=63"));
}

#[test]
fn test_categories_follow_face_count() {
    let config = RuleConfig::default();
    let categories = categories_for(&config);

    assert_eq!(categories.len(), 13);
    assert_eq!(categories[0], Category::Upper(1));
    assert_eq!(categories[5], Category::Upper(6));
    assert_eq!(&categories[6..], &Category::LOWER);
    assert_eq!(categories, categories_for(&config), "order must be stable");

    let wide = categories_for(&config.with_face_count(10));
    assert_eq!(wide.len(), 17);
    assert!(wide.contains(&Category::Upper(10)));
    assert!(wide.iter().take(10).all(Category::is_upper));
    assert!(!wide.iter().skip(10).any(Category::is_upper));
}

#[test]
fn test_category_names_and_hits() {
    assert_eq!(Category::Upper(3).to_string(), "upper_3");
    assert_eq!(Category::FullHouse.to_string(), "full_house");
    assert_eq!(Category::Yahtzee.hit_score(), Some(50));
    assert_eq!(Category::SmallStraight.hit_score(), Some(30));
    assert_eq!(Category::LargeStraight.hit_score(), Some(40));
    assert_eq!(Category::Chance.hit_score(), None);
    assert!(Category::Upper(6) < Category::ThreeOfAKind);
}
