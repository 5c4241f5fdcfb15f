//! Seam to the routing engine.
//!
//! The engine owns map matching and produces trip status; this crate only
//! asks it for the few things a snapshot cannot derive on its own. Hosts
//! implement [`Navigator`] over their engine handle.

use crate::model::{BannerInstruction, DirectionsRoute};

/// The routing engine as seen by a navigation session.
pub trait Navigator {
    /// Informs the engine of a newly active route.
    fn set_route(&mut self, route: &DirectionsRoute, route_index: usize, leg_index: usize);

    /// Switches the engine to another leg of the active route.
    fn change_route_leg(&mut self, route_index: usize, leg_index: usize);

    /// Banner instruction at `index` of the active route's banner sequence.
    fn banner_instruction(&self, index: usize) -> Option<BannerInstruction>;

    /// Route geometry buffered to cover the visible tile surface, as GeoJSON.
    fn route_geometry_with_buffer(&self, grid_size: f32, buffer_dilation: u16) -> Option<String>;
}
