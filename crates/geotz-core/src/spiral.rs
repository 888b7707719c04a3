// crates/geotz-core/src/spiral.rs

//! Neighborhood probe pattern for coordinates that miss every zone.
//!
//! Coastal fixes often sit a few hundred meters offshore of the polygon
//! data. Probing a widening ring of nearby coordinates finds the zone
//! the point "should" have landed in.

/// Ring radii in degrees, nearest first.
const DELTAS: [f32; 10] = [0.1, 0.35, 0.6, 0.85, 1.1, 1.35, 1.6, 1.85, 2.1, 2.35];

/// Per-ring probe directions as (lat, lon) multipliers: the four axis
/// neighbors first, then the four diagonals.
const DIRECTIONS: [(f32, f32); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
];

/// Total number of probe coordinates produced for one center.
pub const PROBE_COUNT: usize = DELTAS.len() * DIRECTIONS.len();

/// Probe coordinates around `(lat, lon)`, nearest ring first. Exactly
/// [`PROBE_COUNT`] items; the center itself is not included.
pub fn probes(lat: f32, lon: f32) -> impl Iterator<Item = (f32, f32)> {
    DELTAS.into_iter().flat_map(move |delta| {
        DIRECTIONS
            .into_iter()
            .map(move |(dlat, dlon)| (lat + dlat * delta, lon + dlon * delta))
    })
}
