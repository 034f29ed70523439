//! Scoring categories
//!
//! Categories come in two families: one upper category per face value, and a
//! fixed set of lower combination categories. The derived ordering puts every
//! upper category (by face) before the lower ones, in the order they are
//! declared here.

use std::fmt;

use crate::config::RuleConfig;

/// A scoring category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Sum of the dice showing this face value
    Upper(u32),
    /// Sum of all dice if at least three share a value
    ThreeOfAKind,
    /// Sum of all dice if at least four share a value
    FourOfAKind,
    /// 25 points for three of one value and two of another
    FullHouse,
    /// 30 points for four consecutive values
    SmallStraight,
    /// 40 points for five consecutive values
    LargeStraight,
    /// 50 points when every die shows the same value
    Yahtzee,
    /// Sum of all dice
    Chance,
}

impl Category {
    /// The lower-section categories, in canonical order
    pub const LOWER: [Category; 7] = [
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// Returns true for the per-face categories
    pub fn is_upper(&self) -> bool {
        matches!(self, Category::Upper(_))
    }

    /// Score that counts as a "hit" for the special combinations
    ///
    /// Returns `None` for categories whose score is not tracked as a hit.
    pub fn hit_score(&self) -> Option<u32> {
        match self {
            Category::Yahtzee => Some(50),
            Category::SmallStraight => Some(30),
            Category::LargeStraight => Some(40),
            _ => None,
        }
    }
}

/// Enumerates every category for a rule set
///
/// Upper categories come first (faces 1 to `face_count`), followed by the
/// seven lower categories. The order is the same on every call.
pub fn categories_for(config: &RuleConfig) -> Vec<Category> {
    (1..=config.face_count)
        .map(Category::Upper)
        .chain(Category::LOWER)
        .collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Upper(face) => write!(f, "upper_{}", face),
            Category::ThreeOfAKind => write!(f, "three_of_a_kind"),
            Category::FourOfAKind => write!(f, "four_of_a_kind"),
            Category::FullHouse => write!(f, "full_house"),
            Category::SmallStraight => write!(f, "small_straight"),
            Category::LargeStraight => write!(f, "large_straight"),
            Category::Yahtzee => write!(f, "yahtzee"),
            Category::Chance => write!(f, "chance"),
        }
    }
}
