//! Step geometry decoding with a single-entry cache.
//!
//! Consecutive engine updates usually reference the same step, so the most
//! recently decoded step's points are kept and handed back until the step
//! identity changes.

use tracing::trace;

use crate::model::LegStep;
use crate::polyline::{GeometryDecodeError, Polyline};

/// Identity of a step within the active route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepKey {
    pub leg_index: usize,
    pub step_index: usize,
}

/// Decodes a step's encoded geometry.
pub fn decode_step(step: &LegStep, precision: u32) -> Result<Polyline, GeometryDecodeError> {
    match step.geometry.as_deref() {
        Some(encoded) => Polyline::decode(encoded, precision),
        None => Err(GeometryDecodeError::Missing),
    }
}

/// Holds at most one decoded step.
///
/// Must be invalidated when the active route changes, since step keys are
/// only unique within one route.
#[derive(Debug, Clone, Default)]
pub struct StepGeometryCache {
    entry: Option<(StepKey, Polyline)>,
}

impl StepGeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the points for `step`, decoding only when `key` differs from
    /// the cached entry. Failed decodes leave the cache empty.
    pub fn points_for(
        &mut self,
        key: StepKey,
        step: &LegStep,
        precision: u32,
    ) -> Result<Polyline, GeometryDecodeError> {
        if let Some((cached_key, points)) = &self.entry {
            if *cached_key == key {
                trace!(?key, "step geometry cache hit");
                return Ok(points.clone());
            }
        }

        trace!(?key, "step geometry cache miss");
        match decode_step(step, precision) {
            Ok(points) => {
                self.entry = Some((key, points.clone()));
                Ok(points)
            }
            Err(err) => {
                self.entry = None;
                Err(err)
            }
        }
    }

    /// Key of the cached step, if any.
    pub fn cached_key(&self) -> Option<StepKey> {
        self.entry.as_ref().map(|(key, _)| *key)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
