// crates/geotz-core/src/source.rs

//! The seam between the resolver and its spatial stores.
//!
//! The resolver only ever asks a store one question ("which zone contains
//! this point?") and reads two things off the answer (the metadata fields
//! and the boundary distance). [`SpatialSource`] captures exactly that,
//! so tests can substitute scripted stores for real files.

use geotz_spatial::{QueryHit, ZoneStore};

/// Boxed field iterator, so implementations don't leak their concrete
/// iterator types through the trait.
pub type FieldIter<'a> = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

/// A successful point query against some spatial source.
pub trait SpatialHit<'a> {
    /// Metadata fields of the matched zone, in source order.
    fn fields(&self) -> FieldIter<'a>;

    /// Distance in degrees from the query point to the nearest zone
    /// boundary.
    fn safety(&self) -> f32;
}

/// Read-only store of timezone polygons, queryable by coordinate.
pub trait SpatialSource {
    type Hit<'a>: SpatialHit<'a>
    where
        Self: 'a;

    /// Finds the zone containing `(lat, lon)`, or `None` when no zone
    /// contains the point. Never fails: a store that is open answers
    /// every query.
    fn query(&self, lat: f32, lon: f32) -> Option<Self::Hit<'_>>;
}

impl<'a> SpatialHit<'a> for QueryHit<'a> {
    fn fields(&self) -> FieldIter<'a> {
        Box::new(QueryHit::fields(self))
    }

    fn safety(&self) -> f32 {
        QueryHit::safety(self)
    }
}

impl SpatialSource for ZoneStore {
    type Hit<'a> = QueryHit<'a>
    where
        Self: 'a;

    fn query(&self, lat: f32, lon: f32) -> Option<QueryHit<'_>> {
        ZoneStore::query(self, lat, lon)
    }
}
