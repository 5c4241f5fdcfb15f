//! Top-level progress snapshot for the active route.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::error::ProgressResult;
use crate::geometry::{StepGeometryCache, decode_step};
use crate::instructions::{self, Instructions};
use crate::leg_progress::{LegProgress, LegProgressInputs, build_leg_progress};
use crate::metrics;
use crate::model::{BannerInstruction, DirectionsRoute, FixLocation, RouteState, TripStatus, VoiceInstruction};
use crate::polyline::{GeometryDecodeError, Polyline};
use crate::session::TranslateOptions;
use crate::traits::Navigator;

/// Everything a route snapshot is derived from.
#[derive(Debug, Clone, Copy)]
pub struct RouteProgressInputs<'a> {
    pub route: &'a Arc<DirectionsRoute>,
    pub status: &'a TripStatus,
    /// Buffered route geometry fetched when the route was set.
    pub route_geometry_with_buffer: Option<&'a str>,
}

/// Immutable snapshot of progress along the active route.
///
/// Built fresh for every engine update and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteProgress {
    route: Arc<DirectionsRoute>,
    route_geometry_with_buffer: Option<String>,
    instructions: Instructions,
    current_state: RouteState,
    current_leg_progress: Option<LegProgress>,
    upcoming_step_points: Polyline,
    upcoming_geometry_error: Option<GeometryDecodeError>,
    in_tunnel: bool,
    distance_remaining: f64,
    distance_traveled: f64,
    duration_remaining: f64,
    fraction_traveled: f64,
    remaining_waypoints: usize,
    location: Option<FixLocation>,
}

impl RouteProgress {
    /// The route this snapshot was computed against.
    pub fn route(&self) -> &DirectionsRoute {
        &self.route
    }

    /// Route geometry buffered to the visible tile surface, as GeoJSON.
    pub fn route_geometry_with_buffer(&self) -> Option<&str> {
        self.route_geometry_with_buffer.as_deref()
    }

    pub fn banner_instruction(&self) -> Option<&BannerInstruction> {
        self.instructions.banner.as_ref()
    }

    pub fn voice_instruction(&self) -> Option<&VoiceInstruction> {
        self.instructions.voice.as_ref()
    }

    pub fn current_state(&self) -> RouteState {
        self.current_state
    }

    /// Progress along the current leg; `None` when the engine reports a leg
    /// index past the route's legs.
    pub fn current_leg_progress(&self) -> Option<&LegProgress> {
        self.current_leg_progress.as_ref()
    }

    pub fn current_step_points(&self) -> &[(f64, f64)] {
        self.current_leg_progress
            .as_ref()
            .map(|leg| leg.current_step_progress().step_points())
            .unwrap_or_default()
    }

    /// Decoded geometry of the step after the current one; empty on the
    /// last step of a leg.
    pub fn upcoming_step_points(&self) -> &[(f64, f64)] {
        self.upcoming_step_points.points()
    }

    pub fn in_tunnel(&self) -> bool {
        self.in_tunnel
    }

    /// Meters to the end of the route.
    pub fn distance_remaining(&self) -> f64 {
        self.distance_remaining
    }

    /// Meters covered along the route; 0 when the route distance is unknown.
    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    /// Seconds to the end of the route.
    pub fn duration_remaining(&self) -> f64 {
        self.duration_remaining
    }

    pub fn fraction_traveled(&self) -> f64 {
        self.fraction_traveled
    }

    /// Waypoints not yet reached, counting the current leg's destination.
    pub fn remaining_waypoints(&self) -> usize {
        self.remaining_waypoints
    }

    /// Raw location fix reported with the update.
    pub fn location(&self) -> Option<&FixLocation> {
        self.location.as_ref()
    }

    /// Decode failures recorded for the current and upcoming step.
    pub fn geometry_errors(&self) -> Vec<&GeometryDecodeError> {
        self.current_leg_progress
            .as_ref()
            .and_then(|leg| leg.current_step_progress().geometry_error())
            .into_iter()
            .chain(self.upcoming_geometry_error.as_ref())
            .collect()
    }

    /// True when some step geometry could not be decoded for this snapshot.
    pub fn has_incomplete_geometry(&self) -> bool {
        !self.geometry_errors().is_empty()
    }
}

/// Builds the route snapshot, delegating to the leg and step builders.
pub fn build_route_progress<N>(
    inputs: RouteProgressInputs<'_>,
    navigator: &N,
    cache: &mut StepGeometryCache,
    options: &TranslateOptions,
) -> ProgressResult<RouteProgress>
where
    N: Navigator + ?Sized,
{
    let RouteProgressInputs {
        route,
        status,
        route_geometry_with_buffer,
    } = inputs;

    let leg_progress = build_leg_progress(
        route,
        &LegProgressInputs {
            leg_index: status.leg_index,
            step_index: status.step_index,
            distance_remaining: status.remaining_leg_distance,
            duration_remaining_ms: status.remaining_leg_duration,
            step_distance_remaining: status.remaining_step_distance,
            step_duration_remaining_ms: status.remaining_step_duration,
        },
        cache,
        options,
    )?;
    let leg_index = leg_progress.leg_index();

    let (upcoming_step_points, upcoming_geometry_error) = match leg_progress.upcoming_step() {
        Some(step) => match decode_step(step, options.polyline_precision) {
            Ok(points) => (points, None),
            Err(err) => {
                warn!(
                    leg_index,
                    step_index = leg_progress.step_index() + 1,
                    error = %err,
                    "upcoming step geometry unavailable"
                );
                (Polyline::default(), Some(err))
            }
        },
        None => (Polyline::default(), None),
    };

    let distance_remaining = match leg_progress.route_leg() {
        Some(_) => status.remaining_leg_distance + route.distance_after_leg(leg_index),
        None => 0.0,
    };
    let distance_traveled = match route.distance {
        Some(_) => metrics::distance_traveled(route.distance, distance_remaining),
        None => 0.0,
    };
    let fraction_traveled =
        metrics::fraction_traveled_with(options.zero_traveled_policy, route.distance, distance_traveled);
    let duration_remaining = metrics::duration_remaining(route.duration, fraction_traveled);

    let instructions = instructions::synchronize(status, navigator, options.first_banner_index);

    let current_leg_progress = leg_progress.route_leg().is_some().then_some(leg_progress);

    Ok(RouteProgress {
        route: Arc::clone(route),
        route_geometry_with_buffer: route_geometry_with_buffer.map(str::to_owned),
        instructions,
        current_state: status.route_state,
        current_leg_progress,
        upcoming_step_points,
        upcoming_geometry_error,
        in_tunnel: status.in_tunnel,
        distance_remaining,
        distance_traveled,
        duration_remaining,
        fraction_traveled,
        remaining_waypoints: route.legs.len().saturating_sub(leg_index),
        location: status.location.clone(),
    })
}
