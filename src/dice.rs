//! Dice rolling and hand inspection helpers
//!
//! A hand is a slice of die values. Positions in the slice are the dice's
//! identities: a reroll only redraws the positions that were not kept.

use std::collections::BTreeMap;

use rand::Rng;

use crate::{config::RuleConfig, Result, SimError};

/// Rolls `dice_count` fresh dice
pub fn roll<R: Rng + ?Sized>(rng: &mut R, config: &RuleConfig) -> Vec<u32> {
    (0..config.dice_count)
        .map(|_| rng.gen_range(1..=config.face_count))
        .collect()
}

/// Checks that every keep position is a valid, distinct index into the hand
pub fn validate_keep(keep: &[usize], dice_count: usize) -> Result<()> {
    let mut seen = vec![false; dice_count];
    for &position in keep {
        if position >= dice_count || seen[position] {
            return Err(SimError::InvalidKeepSelection {
                positions: keep.to_vec(),
                dice_count,
            });
        }
        seen[position] = true;
    }
    Ok(())
}

/// Redraws every die not listed in `keep`
///
/// Kept dice stay at their positions with their values. Fails with
/// `InvalidKeepSelection` if `keep` is out of range or repeats a position.
pub fn reroll_with_keep<R: Rng + ?Sized>(
    hand: &[u32],
    keep: &[usize],
    face_count: u32,
    rng: &mut R,
) -> Result<Vec<u32>> {
    validate_keep(keep, hand.len())?;

    let mut next = hand.to_vec();
    for (position, die) in next.iter_mut().enumerate() {
        if !keep.contains(&position) {
            *die = rng.gen_range(1..=face_count);
        }
    }
    Ok(next)
}

/// Counts how many dice show each value, keyed by value
pub fn value_counts(hand: &[u32]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for &die in hand {
        *counts.entry(die).or_insert(0) += 1;
    }
    counts
}

/// Longest run of consecutive distinct values in the hand
///
/// Returns the run's values in ascending order. When two runs share the
/// longest length, the lower one wins. An empty hand has an empty run.
pub fn longest_run(hand: &[u32]) -> Vec<u32> {
    let distinct: Vec<u32> = value_counts(hand).into_keys().collect();

    let mut best: &[u32] = &[];
    let mut start = 0;
    for end in 1..=distinct.len() {
        let run_breaks = end == distinct.len() || distinct[end] != distinct[end - 1] + 1;
        if run_breaks {
            if end - start > best.len() {
                best = &distinct[start..end];
            }
            start = end;
        }
    }
    best.to_vec()
}

/// Value shown by the most dice
///
/// On ties the value whose first die comes earliest in the hand wins.
pub fn most_common(hand: &[u32]) -> Option<(u32, usize)> {
    let counts = value_counts(hand);
    let mut best: Option<(u32, usize)> = None;
    for &die in hand {
        let count = counts.get(&die).copied().unwrap_or(0);
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((die, count));
        }
    }
    best
}
