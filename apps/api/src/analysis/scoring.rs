//! Suitability scoring.
//!
//! Two formulas: a heuristic when the caller supplied no requirements
//! (reward any detected skill) and a coverage ratio when they did. The
//! result is always clamped into [0, 100] and rounded to 2 decimals.

use std::collections::HashSet;

use crate::analysis::normalize::normalize;

/// Points granted per detected skill on the heuristic path.
const HEURISTIC_POINTS_PER_SKILL: f64 = 5.0;

/// Computes the suitability score for a matched skill set. Pure and
/// deterministic; no failure path.
pub fn score(matched: &HashSet<String>, requirements: &[String]) -> f64 {
    let raw = if requirements.is_empty() {
        (matched.len() as f64 * HEURISTIC_POINTS_PER_SKILL).min(100.0)
    } else {
        let found: HashSet<String> = matched.iter().map(|s| normalize(s)).collect();
        let required: HashSet<String> = requirements.iter().map(|s| normalize(s)).collect();

        if required.is_empty() {
            0.0
        } else {
            let hits = found.intersection(&required).count();
            hits as f64 / required.len() as f64 * 100.0
        }
    };

    round2(raw.min(100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
