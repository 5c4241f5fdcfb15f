//! Route definitions and per-update trip status.
//!
//! These are plain data carriers. The route definition is supplied once per
//! route-set operation and is read-only afterwards; a [`TripStatus`] arrives
//! with every engine update.

use serde::{Deserialize, Serialize};

/// A route as returned by the directions service, already mapped to this
/// crate's types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    /// Total route distance in meters, if known.
    pub distance: Option<f64>,
    /// Total route duration in seconds, if known.
    pub duration: Option<f64>,
    pub legs: Vec<RouteLeg>,
}

impl DirectionsRoute {
    pub fn new(legs: Vec<RouteLeg>) -> Self {
        let distance = legs.iter().map(|leg| leg.distance).sum::<Option<f64>>();
        let duration = legs.iter().map(|leg| leg.duration).sum::<Option<f64>>();
        Self {
            distance,
            duration,
            legs,
        }
    }

    pub fn leg(&self, leg_index: usize) -> Option<&RouteLeg> {
        self.legs.get(leg_index)
    }

    /// Sum of the distances of every leg after `leg_index`.
    ///
    /// Legs with unknown distance contribute nothing.
    pub fn distance_after_leg(&self, leg_index: usize) -> f64 {
        self.legs
            .iter()
            .skip(leg_index + 1)
            .filter_map(|leg| leg.distance)
            .sum()
    }
}

/// A route segment between two waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Leg distance in meters, if known.
    pub distance: Option<f64>,
    /// Leg duration in seconds, if known.
    pub duration: Option<f64>,
    pub steps: Vec<LegStep>,
}

impl RouteLeg {
    /// Builds a leg whose totals are the sums of its steps.
    pub fn new(steps: Vec<LegStep>) -> Self {
        let distance = steps.iter().map(|step| step.distance).sum();
        let duration = steps.iter().map(|step| step.duration).sum();
        Self {
            distance: Some(distance),
            duration: Some(duration),
            steps,
        }
    }

    pub fn step(&self, step_index: usize) -> Option<&LegStep> {
        self.steps.get(step_index)
    }
}

/// The smallest route segment carrying its own maneuver and geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegStep {
    /// Step distance in meters.
    pub distance: f64,
    /// Step duration in seconds.
    pub duration: f64,
    /// Encoded polyline at precision 6.
    pub geometry: Option<String>,
    /// Road name, when the directions service provides one.
    pub name: Option<String>,
}

impl LegStep {
    pub fn new(distance: f64, duration: f64, geometry: impl Into<String>) -> Self {
        Self {
            distance,
            duration,
            geometry: Some(geometry.into()),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Route lifecycle state as reported by the engine.
///
/// Consumed only to drive instruction selection; never transitioned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteState {
    RouteInvalid,
    RouteInitialized,
    RouteArrived,
    LocationTracking,
    LocationStale,
}

/// Visual guidance shown for a position along the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerInstruction {
    /// Position of this banner in the route's banner sequence.
    pub index: usize,
    pub primary_text: String,
    pub secondary_text: Option<String>,
    /// Distance before the end of the step at which the banner applies.
    pub remaining_step_distance: f64,
}

/// Spoken guidance announced for a position along the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceInstruction {
    pub announcement: String,
    pub ssml_announcement: Option<String>,
    pub remaining_step_distance: f64,
}

/// Raw location fix the engine attached to the update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Fix time in milliseconds since the unix epoch.
    pub time_ms: i64,
    pub speed: Option<f32>,
    pub bearing: Option<f32>,
    pub accuracy: Option<f32>,
}

/// One engine status update.
///
/// Indices are signed because the engine reports plain integers; negative
/// values are rejected during translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripStatus {
    pub leg_index: i64,
    pub step_index: i64,
    /// Meters.
    pub remaining_leg_distance: f64,
    /// Milliseconds.
    pub remaining_leg_duration: f64,
    /// Meters.
    pub remaining_step_distance: f64,
    /// Milliseconds.
    pub remaining_step_duration: f64,
    pub in_tunnel: bool,
    pub route_state: RouteState,
    pub banner_instruction: Option<BannerInstruction>,
    pub voice_instruction: Option<VoiceInstruction>,
    pub location: Option<FixLocation>,
}

impl TripStatus {
    /// A tracking status at the given indices with nothing else reported.
    pub fn tracking(leg_index: i64, step_index: i64) -> Self {
        Self {
            leg_index,
            step_index,
            remaining_leg_distance: 0.0,
            remaining_leg_duration: 0.0,
            remaining_step_distance: 0.0,
            remaining_step_duration: 0.0,
            in_tunnel: false,
            route_state: RouteState::LocationTracking,
            banner_instruction: None,
            voice_instruction: None,
            location: None,
        }
    }
}
