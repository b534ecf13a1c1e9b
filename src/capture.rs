//! Capture simulator
//!
//! Decides whether a throw catches a pokemon, based on its difficulty score.

use rand::Rng;

/// Attempts a capture against a difficulty `score`.
///
/// Scores of zero or below always succeed. Otherwise the opportunity window is
/// `round(score / 10)`, at least 1, and the attempt succeeds when a uniform draw
/// from `[0, window)` lands on 0, i.e. with probability `1 / window`.
pub fn attempt_capture<R: Rng + ?Sized>(score: i64, rng: &mut R) -> bool {
    if score <= 0 {
        return true;
    }
    rng.gen_range(0..opportunity_window(score)) == 0
}

/// The denominator of the capture probability for a positive `score`.
pub fn opportunity_window(score: i64) -> i64 {
    ((score as f64 / 10.0).round() as i64).max(1)
}
