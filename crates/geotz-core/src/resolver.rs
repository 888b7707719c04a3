// crates/geotz-core/src/resolver.rs

//! Coordinate to timezone resolution over a coarse and a fine store.

use crate::common::LookupResult;
use crate::error::{DatabaseRole, GeoTzError, Result};
use crate::extract;
use crate::overrides;
use crate::source::{SpatialHit, SpatialSource};
use crate::spiral;
use geotz_spatial::{StoreStats, ZoneStore};
use std::path::Path;

/// Cell size of the coarse store in degrees, roughly 500 m.
pub const COARSE_RESOLUTION_DEG: f32 = 0.0055;
/// Cell size of the fine store in degrees, roughly 20 m.
pub const FINE_RESOLUTION_DEG: f32 = 0.00017;

/// Conventional file name of the coarse store.
pub const COARSE_FILE_NAME: &str = "timezone16.bin";
/// Conventional file name of the fine store.
pub const FINE_FILE_NAME: &str = "timezone21.bin";

/// A coarse hit closer than this to a zone boundary is distrusted and
/// re-resolved against the fine store.
const SAFETY_THRESHOLD_DEG: f32 = 2.0 * COARSE_RESOLUTION_DEG;

/// Offline latitude/longitude to IANA timezone resolver.
///
/// Holds two read-only stores of the same zone data at different
/// resolutions: a coarse one that answers most queries cheaply and a
/// fine one consulted only when a coarse answer lands too close to a
/// zone boundary to be trusted. Opening the stores is the expensive
/// step; a resolver is meant to be created once and shared. All query
/// methods take `&self`, so sharing across threads needs no locking.
///
/// ```no_run
/// use geotz_core::TimeZoneResolver;
///
/// # fn main() -> geotz_core::Result<()> {
/// let resolver = TimeZoneResolver::open_dir("data")?;
/// if let Some(result) = resolver.lookup(52.52, 13.405) {
///     println!("{}", result.timezone);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TimeZoneResolver<S = ZoneStore> {
    coarse: S,
    fine: S,
}

impl TimeZoneResolver<ZoneStore> {
    /// Opens both store files. The error names the store that failed,
    /// so a missing fine file is distinguishable from a missing coarse
    /// one.
    pub fn open(coarse: impl AsRef<Path>, fine: impl AsRef<Path>) -> Result<Self> {
        let coarse = ZoneStore::open(coarse).map_err(|source| GeoTzError::OpenDatabase {
            role: DatabaseRole::Coarse,
            source,
        })?;
        let fine = ZoneStore::open(fine).map_err(|source| GeoTzError::OpenDatabase {
            role: DatabaseRole::Fine,
            source,
        })?;
        Ok(TimeZoneResolver { coarse, fine })
    }

    /// Opens the conventionally named store files ([`COARSE_FILE_NAME`],
    /// [`FINE_FILE_NAME`]) inside `dir`.
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::open(dir.join(COARSE_FILE_NAME), dir.join(FINE_FILE_NAME))
    }

    /// Statistics of the coarse store.
    pub fn coarse_stats(&self) -> StoreStats {
        self.coarse.stats()
    }

    /// Statistics of the fine store.
    pub fn fine_stats(&self) -> StoreStats {
        self.fine.stats()
    }
}

impl<S: SpatialSource> TimeZoneResolver<S> {
    /// Builds a resolver over already-opened sources. Mostly useful for
    /// in-memory stores and test doubles.
    pub fn from_sources(coarse: S, fine: S) -> Self {
        TimeZoneResolver { coarse, fine }
    }

    /// Resolves `(lat, lon)` to a timezone with country metadata.
    ///
    /// Answers straight from the stores: no corrections, no
    /// neighborhood probing. `None` means the point is outside every
    /// zone (open ocean, typically) or the matched zone carries no
    /// usable timezone fields.
    pub fn lookup(&self, lat: f32, lon: f32) -> Option<LookupResult> {
        self.best_match(lat, lon)
    }

    /// Resolves `(lat, lon)` to a bare timezone identifier, trying
    /// harder than [`lookup`](Self::lookup): regional overrides answer
    /// first, and a miss falls back to probing nearby coordinates so
    /// that a fix just offshore still resolves to the adjacent coast.
    pub fn simple(&self, lat: f32, lon: f32) -> Option<String> {
        if let Some(timezone) = overrides::find(lat, lon) {
            return Some(timezone.to_owned());
        }
        if let Some(result) = self.best_match(lat, lon) {
            return Some(result.timezone);
        }
        for (probe_lat, probe_lon) in spiral::probes(lat, lon) {
            if let Some(result) = self.best_match(probe_lat, probe_lon) {
                return Some(result.timezone);
            }
        }
        None
    }

    /// One escalating query: coarse first, fine only when the coarse
    /// hit sits within [`SAFETY_THRESHOLD_DEG`] of a zone boundary. A
    /// coarse miss is final; so is whatever the fine store says.
    fn best_match(&self, lat: f32, lon: f32) -> Option<LookupResult> {
        {
            let hit = self.coarse.query(lat, lon)?;
            if hit.safety() >= SAFETY_THRESHOLD_DEG {
                return extract::extract(hit.fields());
            }
        }
        let hit = self.fine.query(lat, lon)?;
        extract::extract(hit.fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotz_spatial::{Point, Zone};

    fn square_zone(lat0: f32, lon0: f32, size: f32, fields: &[(&str, &str)]) -> Zone {
        let ring = vec![
            Point {
                lat: lat0,
                lon: lon0,
            },
            Point {
                lat: lat0,
                lon: lon0 + size,
            },
            Point {
                lat: lat0 + size,
                lon: lon0 + size,
            },
            Point {
                lat: lat0 + size,
                lon: lon0,
            },
        ];
        Zone::new(
            vec![ring],
            fields
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn berlin_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("TimezoneIdPrefix", "Europe/"),
            ("TimezoneId", "Berlin"),
            ("CountryName", "Germany"),
            ("CountryAlpha2", "DE"),
        ]
    }

    fn resolver_over(coarse: Vec<Zone>, fine: Vec<Zone>) -> TimeZoneResolver {
        TimeZoneResolver::from_sources(
            ZoneStore::new(COARSE_RESOLUTION_DEG, coarse),
            ZoneStore::new(FINE_RESOLUTION_DEG, fine),
        )
    }

    #[test]
    fn safe_coarse_hit_is_final() {
        // Query point sits 5 degrees from every edge, far above the
        // threshold; the fine store would give a different answer.
        let resolver = resolver_over(
            vec![square_zone(45.0, 5.0, 10.0, &berlin_fields())],
            vec![square_zone(
                45.0,
                5.0,
                10.0,
                &[("TimezoneIdPrefix", "Europe/"), ("TimezoneId", "Paris")],
            )],
        );
        let result = resolver.lookup(50.0, 10.0).expect("inside the zone");
        assert_eq!(result.timezone, "Europe/Berlin");
        assert_eq!(result.country_name.as_deref(), Some("Germany"));
        assert_eq!(result.country_alpha2.as_deref(), Some("DE"));
    }

    #[test]
    fn boundary_hit_escalates_to_fine() {
        // 0.005 degrees from the coarse zone edge, under the 0.011
        // threshold.
        let resolver = resolver_over(
            vec![square_zone(45.0, 5.0, 10.0, &berlin_fields())],
            vec![square_zone(
                45.0,
                5.0,
                10.0,
                &[("TimezoneIdPrefix", "Europe/"), ("TimezoneId", "Paris")],
            )],
        );
        let result = resolver.lookup(50.0, 5.005).expect("inside both zones");
        assert_eq!(result.timezone, "Europe/Paris");
    }

    #[test]
    fn coarse_miss_is_final_even_when_fine_would_hit() {
        let resolver = resolver_over(
            vec![],
            vec![square_zone(45.0, 5.0, 10.0, &berlin_fields())],
        );
        assert_eq!(resolver.lookup(50.0, 10.0), None);
    }

    #[test]
    fn fine_miss_after_escalation_is_final() {
        let resolver = resolver_over(vec![square_zone(45.0, 5.0, 10.0, &berlin_fields())], vec![]);
        assert_eq!(resolver.lookup(50.0, 5.005), None);
    }

    #[test]
    fn zone_without_timezone_fields_resolves_to_nothing() {
        let resolver = resolver_over(
            vec![square_zone(45.0, 5.0, 10.0, &[("CountryName", "Germany")])],
            vec![],
        );
        assert_eq!(resolver.lookup(50.0, 10.0), None);
    }

    #[test]
    fn simple_prefers_overrides_and_drops_metadata() {
        // Curacao sits inside this zone, but the override answers first.
        let resolver = resolver_over(vec![square_zone(0.0, -80.0, 20.0, &berlin_fields())], vec![]);
        assert_eq!(
            resolver.simple(12.1696, -68.99).as_deref(),
            Some("America/Curacao")
        );
        // Outside the override box the store answers normally.
        assert_eq!(
            resolver.simple(5.0, -75.0).as_deref(),
            Some("Europe/Berlin")
        );
    }

    #[test]
    fn simple_probes_the_neighborhood_on_a_miss() {
        // Zone starts 0.05 degrees east of the query; the first probe
        // ring (0.1 degrees) reaches it.
        let resolver = resolver_over(
            vec![square_zone(49.0, 10.05, 2.0, &berlin_fields())],
            vec![],
        );
        assert_eq!(resolver.lookup(50.0, 10.0), None);
        assert_eq!(resolver.simple(50.0, 10.0).as_deref(), Some("Europe/Berlin"));
    }

    #[test]
    fn simple_gives_up_beyond_the_widest_ring() {
        // Nearest zone edge is 3 degrees away, past the 2.35 maximum.
        let resolver = resolver_over(vec![square_zone(49.0, 13.0, 2.0, &berlin_fields())], vec![]);
        assert_eq!(resolver.simple(50.0, 10.0), None);
    }

    #[test]
    fn open_reports_which_store_failed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let coarse_path = dir.path().join(COARSE_FILE_NAME);
        let fine_path = dir.path().join(FINE_FILE_NAME);

        // Neither file exists: the coarse store is blamed first.
        match TimeZoneResolver::open(&coarse_path, &fine_path) {
            Err(GeoTzError::OpenDatabase { role, .. }) => assert_eq!(role, DatabaseRole::Coarse),
            Ok(_) => panic!("open should fail"),
        }

        // With a coarse file in place the failure moves to the fine store.
        ZoneStore::new(COARSE_RESOLUTION_DEG, vec![])
            .save_as(&coarse_path)
            .expect("save coarse");
        match TimeZoneResolver::open(&coarse_path, &fine_path) {
            Err(GeoTzError::OpenDatabase { role, .. }) => assert_eq!(role, DatabaseRole::Fine),
            Ok(_) => panic!("open should fail"),
        }

        ZoneStore::new(FINE_RESOLUTION_DEG, vec![])
            .save_as(&fine_path)
            .expect("save fine");
        assert!(TimeZoneResolver::open_dir(dir.path()).is_ok());
    }

    #[test]
    fn resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TimeZoneResolver>();
    }
}
