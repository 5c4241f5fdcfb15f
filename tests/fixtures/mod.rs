//! Test fixtures for route-progress.
//!
//! Provides:
//! - A two-leg route along the Las Vegas Strip with real precision-6 geometry
//! - A scripted engine that records the calls a session makes
//! - A builder for trip status updates

#![allow(dead_code)]

pub mod las_vegas_route;

pub use las_vegas_route::*;

use route_progress::model::{
    BannerInstruction, DirectionsRoute, RouteState, TripStatus, VoiceInstruction,
};
use route_progress::traits::Navigator;

// ============================================================================
// Scripted engine
// ============================================================================

/// Engine stand-in that serves a fixed banner list and records calls.
#[derive(Debug, Default)]
pub struct ScriptedNavigator {
    pub banners: Vec<BannerInstruction>,
    pub route_buffer: Option<String>,
    pub calls: Vec<String>,
}

impl ScriptedNavigator {
    pub fn new() -> Self {
        Self {
            banners: vec![
                banner(0, "Head north on Las Vegas Boulevard South"),
                banner(1, "Turn right onto Flamingo Road"),
                banner(2, "Turn left onto Koval Lane"),
            ],
            route_buffer: Some(ROUTE_BUFFER_GEOJSON.to_string()),
            calls: Vec::new(),
        }
    }
}

impl Navigator for ScriptedNavigator {
    fn set_route(&mut self, route: &DirectionsRoute, route_index: usize, leg_index: usize) {
        self.calls.push(format!(
            "set_route legs={} route={} leg={}",
            route.legs.len(),
            route_index,
            leg_index
        ));
    }

    fn change_route_leg(&mut self, route_index: usize, leg_index: usize) {
        self.calls
            .push(format!("change_route_leg route={} leg={}", route_index, leg_index));
    }

    fn banner_instruction(&self, index: usize) -> Option<BannerInstruction> {
        self.banners.get(index).cloned()
    }

    fn route_geometry_with_buffer(&self, _grid_size: f32, _buffer_dilation: u16) -> Option<String> {
        self.route_buffer.clone()
    }
}

pub const ROUTE_BUFFER_GEOJSON: &str =
    r#"{"type":"Polygon","coordinates":[[[-115.18,36.11],[-115.16,36.11],[-115.16,36.13],[-115.18,36.13],[-115.18,36.11]]]}"#;

pub fn banner(index: usize, text: &str) -> BannerInstruction {
    BannerInstruction {
        index,
        primary_text: text.to_string(),
        secondary_text: None,
        remaining_step_distance: 200.0,
    }
}

pub fn voice(text: &str) -> VoiceInstruction {
    VoiceInstruction {
        announcement: text.to_string(),
        ssml_announcement: Some(format!("<speak>{}</speak>", text)),
        remaining_step_distance: 120.0,
    }
}

// ============================================================================
// Trip status builder
// ============================================================================

/// Builder for engine status updates with tracking defaults.
#[derive(Debug, Clone)]
pub struct StatusBuilder {
    status: TripStatus,
}

impl StatusBuilder {
    pub fn at(leg_index: i64, step_index: i64) -> Self {
        Self {
            status: TripStatus::tracking(leg_index, step_index),
        }
    }

    pub fn leg_remaining(mut self, meters: f64, millis: f64) -> Self {
        self.status.remaining_leg_distance = meters;
        self.status.remaining_leg_duration = millis;
        self
    }

    pub fn step_remaining(mut self, meters: f64, millis: f64) -> Self {
        self.status.remaining_step_distance = meters;
        self.status.remaining_step_duration = millis;
        self
    }

    pub fn state(mut self, route_state: RouteState) -> Self {
        self.status.route_state = route_state;
        self
    }

    pub fn in_tunnel(mut self) -> Self {
        self.status.in_tunnel = true;
        self
    }

    pub fn banner(mut self, banner: BannerInstruction) -> Self {
        self.status.banner_instruction = Some(banner);
        self
    }

    pub fn voice(mut self, voice: VoiceInstruction) -> Self {
        self.status.voice_instruction = Some(voice);
        self
    }

    pub fn build(self) -> TripStatus {
        self.status
    }
}
