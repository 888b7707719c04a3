// crates/geotz-spatial/src/lib.rs

//! # geotz-spatial
//!
//! Polygon-indexed store mapping coordinates to named metadata fields.
//!
//! This crate is the storage and geometry half of the geotz workspace: it
//! owns the compact binary store format, loads store files from disk, and
//! answers point queries against the contained polygons. The resolver in
//! `geotz-core` drives it exclusively through [`ZoneStore::open`] and
//! [`ZoneStore::query`]; everything else here (format layout, ring
//! evaluation, distance math) is internal to the store.
//!
//! A query that lands inside a zone yields a [`QueryHit`] borrowing that
//! zone's field table together with a safety margin: the distance in
//! degrees from the queried point to the nearest boundary segment of the
//! matched zone. Callers copy what they need out of the hit and drop it;
//! the store itself stays immutable for its whole lifetime.

pub mod error;
pub mod geometry;
pub mod query;
pub mod store;

// Re-exports
pub use crate::error::{Result, SpatialError};
pub use crate::query::QueryHit;
pub use crate::store::{Point, Ring, StoreStats, Zone, ZoneStore};
