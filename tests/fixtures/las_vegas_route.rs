//! A two-leg drive along the Las Vegas Strip.
//!
//! Geometry is encoded at precision 6, as the directions service returns it.
//! Leg 0 ends with a zero-length arrival step.

use route_progress::model::{DirectionsRoute, LegStep, RouteLeg};

pub const STRIP_SOUTH: &str = "mlg{cAx{qtzEqsAYgpAS";
pub const FLAMINGO_EAST: &str = "grl{cAjzqtzEScnC";
pub const KOVAL_NORTH: &str = "{rl{cAfkmtzEszCg@giBg@";
pub const KOVAL_ARRIVAL: &str = "wxt{cAvhmtzE??";
pub const SANDS_EAST: &str = "wxt{cAvhmtzEg{CwxC";
pub const PARADISE_NORTH: &str = "_uy{cA~nhtzE_|B_|Bo}@o}@";

/// First point of the route, at the south end of the Strip.
pub const ORIGIN: (f64, f64) = (36.114647, -115.172813);

pub fn first_leg() -> RouteLeg {
    RouteLeg::new(vec![
        LegStep::new(295.0, 30.0, STRIP_SOUTH).with_name("Las Vegas Boulevard South"),
        LegStep::new(205.0, 25.0, FLAMINGO_EAST).with_name("Flamingo Road"),
        LegStep::new(465.0, 48.0, KOVAL_NORTH).with_name("Koval Lane"),
        LegStep::new(0.0, 0.0, KOVAL_ARRIVAL).with_name("Koval Lane"),
    ])
}

pub fn second_leg() -> RouteLeg {
    RouteLeg::new(vec![
        LegStep::new(355.0, 40.0, SANDS_EAST).with_name("Sands Avenue"),
        LegStep::new(425.0, 50.0, PARADISE_NORTH).with_name("Paradise Road"),
    ])
}

/// 1745 m, 193 s over two legs.
pub fn las_vegas_route() -> DirectionsRoute {
    DirectionsRoute::new(vec![first_leg(), second_leg()])
}

/// One leg of two steps.
pub fn short_route() -> DirectionsRoute {
    DirectionsRoute::new(vec![RouteLeg::new(vec![
        LegStep::new(295.0, 30.0, STRIP_SOUTH).with_name("Las Vegas Boulevard South"),
        LegStep::new(205.0, 25.0, FLAMINGO_EAST).with_name("Flamingo Road"),
    ])])
}
