//! Progress along the current step.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::error::{ProgressError, ProgressResult};
use crate::geometry::{StepGeometryCache, StepKey};
use crate::metrics;
use crate::model::{DirectionsRoute, LegStep};
use crate::polyline::{GeometryDecodeError, Polyline};
use crate::session::TranslateOptions;

/// Engine figures a step snapshot is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepProgressInputs {
    pub leg_index: usize,
    pub step_index: i64,
    /// Meters.
    pub distance_remaining: f64,
    /// Milliseconds.
    pub duration_remaining_ms: f64,
}

/// Immutable snapshot of progress along one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepProgress {
    #[serde(skip)]
    route: Arc<DirectionsRoute>,
    leg_index: usize,
    step_index: usize,
    step_points: Polyline,
    geometry_error: Option<GeometryDecodeError>,
    distance_remaining: f64,
    distance_traveled: f64,
    fraction_traveled: f64,
    duration_remaining: f64,
    reported_duration_remaining: f64,
}

impl StepProgress {
    /// Index of the current step within its leg.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// The current step; `None` once the index runs past the leg's steps.
    pub fn step(&self) -> Option<&LegStep> {
        self.route.leg(self.leg_index)?.step(self.step_index)
    }

    /// Decoded geometry of the current step.
    pub fn step_points(&self) -> &[(f64, f64)] {
        self.step_points.points()
    }

    /// Why the step geometry is missing, if it is.
    pub fn geometry_error(&self) -> Option<&GeometryDecodeError> {
        self.geometry_error.as_ref()
    }

    /// Meters to the end of the step, as reported by the engine.
    pub fn distance_remaining(&self) -> f64 {
        self.distance_remaining
    }

    /// Meters covered along the step.
    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    /// Fraction of the step covered, in `[0, 1]`.
    pub fn fraction_traveled(&self) -> f64 {
        self.fraction_traveled
    }

    /// Seconds to the end of the step, derived from the step duration.
    pub fn duration_remaining(&self) -> f64 {
        self.duration_remaining
    }

    /// Seconds to the end of the step, as reported by the engine.
    pub fn reported_duration_remaining(&self) -> f64 {
        self.reported_duration_remaining
    }
}

/// Builds the step snapshot for `inputs`.
///
/// An index past the end of the leg (or a missing leg) is not an error: the
/// snapshot has no step and zeroed derived metrics.
pub fn build_step_progress(
    route: &Arc<DirectionsRoute>,
    inputs: &StepProgressInputs,
    cache: &mut StepGeometryCache,
    options: &TranslateOptions,
) -> ProgressResult<StepProgress> {
    let step_index = usize::try_from(inputs.step_index).map_err(|_| ProgressError::NegativeIndex {
        what: "step",
        index: inputs.step_index,
    })?;

    let step = route
        .leg(inputs.leg_index)
        .and_then(|leg| leg.step(step_index));

    let mut step_points = Polyline::default();
    let mut geometry_error = None;
    let mut distance_traveled = 0.0;
    let mut fraction_traveled = 0.0;
    let mut duration_remaining = 0.0;

    if let Some(step) = step {
        let key = StepKey {
            leg_index: inputs.leg_index,
            step_index,
        };
        match cache.points_for(key, step, options.polyline_precision) {
            Ok(points) => step_points = points,
            Err(err) => {
                warn!(?key, error = %err, "step geometry unavailable");
                geometry_error = Some(err);
            }
        }

        distance_traveled = metrics::distance_traveled(Some(step.distance), inputs.distance_remaining);
        fraction_traveled = metrics::fraction_traveled_with(
            options.zero_traveled_policy,
            Some(step.distance),
            distance_traveled,
        );
        duration_remaining = metrics::duration_remaining(Some(step.duration), fraction_traveled);
    }

    Ok(StepProgress {
        route: Arc::clone(route),
        leg_index: inputs.leg_index,
        step_index,
        step_points,
        geometry_error,
        distance_remaining: inputs.distance_remaining,
        distance_traveled,
        fraction_traveled,
        duration_remaining,
        reported_duration_remaining: metrics::millis_to_seconds(inputs.duration_remaining_ms),
    })
}
