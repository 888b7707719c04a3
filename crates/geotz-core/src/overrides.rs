// crates/geotz-core/src/overrides.rs

//! Hardcoded corrections for regions the polygon data gets wrong.
//!
//! Small islands can fall inside a neighboring country's polygon at the
//! store's resolution. A bounding-box override answers for them before
//! any store is consulted.

use std::ops::RangeInclusive;

struct RegionOverride {
    lat: RangeInclusive<f32>,
    lon: RangeInclusive<f32>,
    timezone: &'static str,
}

const OVERRIDES: &[RegionOverride] = &[
    // Astypalaia and surrounding Greek islands
    RegionOverride {
        lat: 36.2443..=36.7389,
        lon: 26.0019..=26.7957,
        timezone: "Europe/Athens",
    },
    // Curacao
    RegionOverride {
        lat: 11.865_393..=12.474_443,
        lon: -69.312_71..=-68.613_387,
        timezone: "America/Curacao",
    },
];

/// Returns the override timezone for `(lat, lon)`, if any region claims
/// the point. First listed region wins.
pub fn find(lat: f32, lon: f32) -> Option<&'static str> {
    OVERRIDES
        .iter()
        .find(|region| region.lat.contains(&lat) && region.lon.contains(&lon))
        .map(|region| region.timezone)
}
