// crates/geotz-spatial/src/query.rs

//! Point queries against a [`ZoneStore`].

use crate::geometry::{boundary_distance, point_in_rings};
use crate::store::{Point, Zone, ZoneStore};

/// A successful point query, borrowing the matched zone from its store.
///
/// The hit stays valid for as long as the store it came from; callers
/// that need the data beyond that copy the field values out.
#[derive(Debug)]
pub struct QueryHit<'a> {
    zone: &'a Zone,
    point: Point,
}

impl<'a> QueryHit<'a> {
    /// Metadata fields of the matched zone, in store order. The iterator
    /// borrows the store, not the hit, so it may outlive `self`.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.zone
            .fields()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Distance in degrees from the query point to the nearest zone
    /// boundary. Small values mean the point sits close to an edge and
    /// the answer may be unreliable at the store's resolution.
    pub fn safety(&self) -> f32 {
        boundary_distance(self.point, self.zone.rings())
    }
}

impl ZoneStore {
    /// Finds the first zone containing `(lat, lon)`, or `None` when the
    /// point falls outside every zone. Zone order breaks ties, so
    /// repeated queries for the same point return the same zone.
    pub fn query(&self, lat: f32, lon: f32) -> Option<QueryHit<'_>> {
        let point = Point { lat, lon };
        self.zones()
            .iter()
            .filter(|zone| zone.bbox_contains(point))
            .find(|zone| point_in_rings(point, zone.rings()))
            .map(|zone| QueryHit { zone, point })
    }
}
