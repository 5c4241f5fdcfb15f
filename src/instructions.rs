//! Selection of the banner and voice instruction for a snapshot.

use serde::Serialize;

use crate::model::{BannerInstruction, RouteState, TripStatus, VoiceInstruction};
use crate::traits::Navigator;

/// Instructions that apply at the instant of one update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Instructions {
    pub banner: Option<BannerInstruction>,
    pub voice: Option<VoiceInstruction>,
}

/// Picks the instructions for `status`.
///
/// The engine's current instructions are used as-is, except on the first
/// update after a route was set: the engine's banner pointer may still refer
/// to the previous route then, so the banner at `first_banner_index` of the
/// new route is fetched instead.
pub fn synchronize<N>(status: &TripStatus, navigator: &N, first_banner_index: usize) -> Instructions
where
    N: Navigator + ?Sized,
{
    let banner = match status.route_state {
        RouteState::RouteInitialized => navigator.banner_instruction(first_banner_index),
        _ => status.banner_instruction.clone(),
    };

    Instructions {
        banner,
        voice: status.voice_instruction.clone(),
    }
}
