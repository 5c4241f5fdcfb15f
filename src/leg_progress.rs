//! Progress along the current leg.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{ProgressError, ProgressResult};
use crate::geometry::StepGeometryCache;
use crate::metrics;
use crate::model::{DirectionsRoute, LegStep, RouteLeg};
use crate::session::TranslateOptions;
use crate::step_progress::{StepProgress, StepProgressInputs, build_step_progress};

/// Engine figures a leg snapshot is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegProgressInputs {
    pub leg_index: i64,
    pub step_index: i64,
    /// Meters.
    pub distance_remaining: f64,
    /// Milliseconds.
    pub duration_remaining_ms: f64,
    /// Meters.
    pub step_distance_remaining: f64,
    /// Milliseconds.
    pub step_duration_remaining_ms: f64,
}

/// Immutable snapshot of progress along one leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegProgress {
    #[serde(skip)]
    route: Arc<DirectionsRoute>,
    leg_index: usize,
    distance_traveled: f64,
    distance_remaining: f64,
    duration_remaining: f64,
    reported_duration_remaining: f64,
    fraction_traveled: f64,
    current_step_progress: StepProgress,
}

impl LegProgress {
    /// Index of the current leg within the route.
    pub fn leg_index(&self) -> usize {
        self.leg_index
    }

    /// The current leg; `None` while the engine reports an index past the
    /// route's legs.
    pub fn route_leg(&self) -> Option<&RouteLeg> {
        self.route.leg(self.leg_index)
    }

    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    /// Meters to the end of the leg, as reported by the engine.
    pub fn distance_remaining(&self) -> f64 {
        self.distance_remaining
    }

    /// Seconds to the end of the leg, derived from the leg duration.
    pub fn duration_remaining(&self) -> f64 {
        self.duration_remaining
    }

    /// Seconds to the end of the leg, as reported by the engine.
    pub fn reported_duration_remaining(&self) -> f64 {
        self.reported_duration_remaining
    }

    pub fn fraction_traveled(&self) -> f64 {
        self.fraction_traveled
    }

    pub fn current_step_progress(&self) -> &StepProgress {
        &self.current_step_progress
    }

    pub fn step_index(&self) -> usize {
        self.current_step_progress.step_index()
    }

    pub fn current_step(&self) -> Option<&LegStep> {
        self.current_step_progress.step()
    }

    /// The step before the current one; `None` on the first step.
    pub fn previous_step(&self) -> Option<&LegStep> {
        let index = self.step_index().checked_sub(1)?;
        self.step_at(index)
    }

    /// The step after the current one; `None` on the leg's last step.
    pub fn upcoming_step(&self) -> Option<&LegStep> {
        self.step_at(self.step_index() + 1)
    }

    /// The step two after the current one.
    pub fn follow_on_step(&self) -> Option<&LegStep> {
        self.step_at(self.step_index() + 2)
    }

    fn step_at(&self, index: usize) -> Option<&LegStep> {
        self.route_leg()?.step(index)
    }
}

/// Builds the leg snapshot for `inputs`, including its current step.
pub fn build_leg_progress(
    route: &Arc<DirectionsRoute>,
    inputs: &LegProgressInputs,
    cache: &mut StepGeometryCache,
    options: &TranslateOptions,
) -> ProgressResult<LegProgress> {
    let leg_index = usize::try_from(inputs.leg_index).map_err(|_| ProgressError::NegativeIndex {
        what: "leg",
        index: inputs.leg_index,
    })?;

    let current_step_progress = build_step_progress(
        route,
        &StepProgressInputs {
            leg_index,
            step_index: inputs.step_index,
            distance_remaining: inputs.step_distance_remaining,
            duration_remaining_ms: inputs.step_duration_remaining_ms,
        },
        cache,
        options,
    )?;

    let (distance_traveled, fraction_traveled, duration_remaining) = match route.leg(leg_index) {
        Some(leg) => {
            let traveled = metrics::distance_traveled(leg.distance, inputs.distance_remaining);
            let fraction =
                metrics::fraction_traveled_with(options.zero_traveled_policy, leg.distance, traveled);
            (traveled, fraction, metrics::duration_remaining(leg.duration, fraction))
        }
        None => (0.0, 0.0, 0.0),
    };

    Ok(LegProgress {
        route: Arc::clone(route),
        leg_index,
        distance_traveled,
        distance_remaining: inputs.distance_remaining,
        duration_remaining,
        reported_duration_remaining: metrics::millis_to_seconds(inputs.duration_remaining_ms),
        fraction_traveled,
        current_step_progress,
    })
}
