//! route-progress core
//!
//! Turns the routing engine's per-update trip status into an immutable,
//! queryable progress snapshot of the active route: where the traveler is in
//! the route/leg/step hierarchy, how much of each is covered, and which
//! banner and voice instruction applies.

pub mod error;
pub mod model;
pub mod traits;
pub mod polyline;
pub mod geometry;
pub mod metrics;
pub mod step_progress;
pub mod leg_progress;
pub mod route_progress;
pub mod instructions;
pub mod session;

pub use error::{ProgressError, ProgressResult};
pub use route_progress::RouteProgress;
pub use session::{NavigationSession, TranslateOptions};
