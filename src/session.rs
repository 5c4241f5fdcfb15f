//! Navigation session: the entry point the engine's status updates flow into.
//!
//! A session owns the engine handle, the active route and the step geometry
//! cache. It is not internally synchronized; callers serialize route changes
//! and status updates (one update at a time, per session).

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{ProgressError, ProgressResult};
use crate::geometry::StepGeometryCache;
use crate::metrics::ZeroTraveledPolicy;
use crate::model::{DirectionsRoute, TripStatus};
use crate::polyline::PRECISION_6;
use crate::route_progress::{RouteProgress, RouteProgressInputs, build_route_progress};
use crate::traits::Navigator;

#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Decimal digits of the encoded step geometry.
    pub polyline_precision: u32,
    /// Fraction reported for a segment with nothing traveled yet.
    pub zero_traveled_policy: ZeroTraveledPolicy,
    /// Banner fetched on the first update after a route is set.
    pub first_banner_index: usize,
    /// Grid size forwarded to the engine for the buffered route geometry.
    pub buffer_grid_size: f32,
    /// Buffer dilation forwarded to the engine for the buffered route geometry.
    pub buffer_dilation: u16,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            polyline_precision: PRECISION_6,
            zero_traveled_policy: ZeroTraveledPolicy::Consumed,
            first_banner_index: 0,
            buffer_grid_size: 0.0025,
            buffer_dilation: 1,
        }
    }
}

/// One navigation session over a single engine handle.
pub struct NavigationSession<N: Navigator> {
    navigator: N,
    options: TranslateOptions,
    route: Option<Arc<DirectionsRoute>>,
    route_index: usize,
    route_geometry_with_buffer: Option<String>,
    geometry_cache: StepGeometryCache,
    latest: Option<Arc<RouteProgress>>,
}

impl<N: Navigator> NavigationSession<N> {
    pub fn new(navigator: N) -> Self {
        Self::with_options(navigator, TranslateOptions::default())
    }

    pub fn with_options(navigator: N, options: TranslateOptions) -> Self {
        Self {
            navigator,
            options,
            route: None,
            route_index: 0,
            route_geometry_with_buffer: None,
            geometry_cache: StepGeometryCache::new(),
            latest: None,
        }
    }

    /// Makes `route` the active route and hands it to the engine.
    ///
    /// Clears the geometry cache and the last snapshot, and fetches the
    /// buffered route geometry once for all snapshots of this route.
    pub fn set_route(&mut self, route: DirectionsRoute, route_index: usize, leg_index: usize) {
        info!(
            route_index,
            leg_index,
            legs = route.legs.len(),
            "setting active route"
        );
        self.navigator.set_route(&route, route_index, leg_index);
        self.route_geometry_with_buffer = self
            .navigator
            .route_geometry_with_buffer(self.options.buffer_grid_size, self.options.buffer_dilation);
        self.route = Some(Arc::new(route));
        self.route_index = route_index;
        self.geometry_cache.invalidate();
        self.latest = None;
    }

    /// Moves the engine to another leg of the active route.
    pub fn update_leg_index(&mut self, leg_index: usize) -> ProgressResult<()> {
        if self.route.is_none() {
            return Err(ProgressError::NoActiveRoute);
        }
        info!(route_index = self.route_index, leg_index, "changing route leg");
        self.navigator.change_route_leg(self.route_index, leg_index);
        self.geometry_cache.invalidate();
        Ok(())
    }

    /// Translates one engine status update into a progress snapshot.
    ///
    /// On error the update is skipped and [`latest`](Self::latest) keeps
    /// returning the previous snapshot.
    pub fn translate(&mut self, status: &TripStatus) -> ProgressResult<Arc<RouteProgress>> {
        let Some(route) = self.route.as_ref() else {
            warn!("trip status received without an active route");
            return Err(ProgressError::NoActiveRoute);
        };

        debug!(
            leg_index = status.leg_index,
            step_index = status.step_index,
            route_state = ?status.route_state,
            in_tunnel = status.in_tunnel,
            "translating trip status"
        );

        let inputs = RouteProgressInputs {
            route,
            status,
            route_geometry_with_buffer: self.route_geometry_with_buffer.as_deref(),
        };
        match build_route_progress(inputs, &self.navigator, &mut self.geometry_cache, &self.options) {
            Ok(progress) => {
                let progress = Arc::new(progress);
                self.latest = Some(Arc::clone(&progress));
                Ok(progress)
            }
            Err(err) => {
                warn!(error = %err, "trip status rejected");
                Err(err)
            }
        }
    }

    /// The last snapshot successfully built for the active route.
    pub fn latest(&self) -> Option<Arc<RouteProgress>> {
        self.latest.clone()
    }

    pub fn route(&self) -> Option<&DirectionsRoute> {
        self.route.as_deref()
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TranslateOptions::default();
        assert_eq!(options.polyline_precision, 6);
        assert_eq!(options.zero_traveled_policy, ZeroTraveledPolicy::Consumed);
        assert_eq!(options.first_banner_index, 0);
    }
}
