//! Distance and duration derivations shared by every progress scope.
//!
//! All functions are pure. Each snapshot evaluates them from the segment
//! totals and the remaining figures the engine reported for that instant;
//! nothing accumulates across updates.

use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: f64 = 1000.0;

/// Fraction reported when nothing has been traveled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroTraveledPolicy {
    /// Report 1.0, treating the segment as fully consumed.
    #[default]
    Consumed,
    /// Report 0.0, treating the segment as not yet started.
    NotStarted,
}

impl ZeroTraveledPolicy {
    fn fraction(self) -> f64 {
        match self {
            ZeroTraveledPolicy::Consumed => 1.0,
            ZeroTraveledPolicy::NotStarted => 0.0,
        }
    }
}

/// Distance covered so far.
///
/// With an unknown total, the remaining distance stands in for it.
pub fn distance_traveled(total: Option<f64>, remaining: f64) -> f64 {
    match total {
        Some(total) => (total - remaining).max(0.0),
        None => remaining,
    }
}

/// Fraction of `total` covered, using [`ZeroTraveledPolicy::Consumed`].
pub fn fraction_traveled(total: Option<f64>, traveled: f64) -> f64 {
    fraction_traveled_with(ZeroTraveledPolicy::Consumed, total, traveled)
}

/// Fraction of `total` covered, clamped to `[0, 1]`.
///
/// Zero, negative or unknown totals yield 1.0 under either policy; the
/// policy only decides the zero-traveled case of a positive total.
pub fn fraction_traveled_with(policy: ZeroTraveledPolicy, total: Option<f64>, traveled: f64) -> f64 {
    match total {
        Some(total) if total > 0.0 => {
            if traveled == 0.0 {
                return policy.fraction();
            }
            let fraction = traveled / total;
            if fraction.is_nan() {
                0.0
            } else {
                fraction.clamp(0.0, 1.0)
            }
        }
        _ => 1.0,
    }
}

/// Duration left given the fraction traveled. Unknown totals yield 0.
pub fn duration_remaining(total: Option<f64>, fraction_traveled: f64) -> f64 {
    total.map_or(0.0, |total| (1.0 - fraction_traveled) * total)
}

/// Converts an engine duration in milliseconds to seconds.
pub fn millis_to_seconds(millis: f64) -> f64 {
    millis / MILLIS_PER_SECOND
}
