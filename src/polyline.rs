//! Polyline representation for route geometries.
//!
//! Step geometry arrives as an encoded polyline string (Google's algorithm,
//! precision 6 for the directions service). This module decodes it into a
//! [`Polyline`] of (latitude, longitude) points.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coordinate precision used by the directions service.
pub const PRECISION_6: u32 = 6;

/// Offset added to every 5-bit chunk in the encoded form.
const CHUNK_OFFSET: u8 = 63;

/// Continuation bit of a chunk.
const CONTINUATION: u8 = 0x20;

/// Longest varint accepted, in chunks. Seven chunks hold 35 bits, well above
/// any coordinate delta at precision 6, and keep the running sums far from
/// i64 overflow.
const MAX_CHUNKS: usize = 7;

/// Why a step's geometry could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryDecodeError {
    #[error("step has no geometry")]
    Missing,

    #[error("encoded polyline is empty")]
    Empty,

    #[error("encoded polyline ends mid-coordinate at byte {offset}")]
    Truncated { offset: usize },

    #[error("invalid polyline character {byte:#04x} at byte {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },

    #[error("polyline value overflows at byte {offset}")]
    Overflow { offset: usize },

    #[error("malformed polyline: {reason}")]
    Malformed { reason: String },
}

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string at the given precision.
    pub fn decode(encoded: &str, precision: u32) -> Result<Self, GeometryDecodeError> {
        if encoded.is_empty() {
            return Err(GeometryDecodeError::Empty);
        }
        check_structure(encoded.as_bytes())?;

        let line = ::polyline::decode_polyline(encoded, precision)
            .map_err(|err| GeometryDecodeError::Malformed {
                reason: err.to_string(),
            })?;

        // LineString coordinates are (x, y) = (lng, lat).
        let points = line.coords().map(|c| (c.y, c.x)).collect();
        Ok(Self { points })
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Rejects encodings that are not a whole number of (lat, lng) varint
/// pairs, or whose varints are too long to be coordinate deltas.
fn check_structure(bytes: &[u8]) -> Result<(), GeometryDecodeError> {
    let mut values = 0usize;
    let mut run = 0usize;

    for (offset, &byte) in bytes.iter().enumerate() {
        if !(CHUNK_OFFSET..=126).contains(&byte) {
            return Err(GeometryDecodeError::InvalidCharacter { offset, byte });
        }
        run += 1;
        if run > MAX_CHUNKS {
            return Err(GeometryDecodeError::Overflow { offset });
        }
        if (byte - CHUNK_OFFSET) & CONTINUATION == 0 {
            values += 1;
            run = 0;
        }
    }

    if run > 0 || values % 2 == 1 {
        return Err(GeometryDecodeError::Truncated {
            offset: bytes.len(),
        });
    }
    Ok(())
}
