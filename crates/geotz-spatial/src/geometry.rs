// crates/geotz-spatial/src/geometry.rs

//! Flat-earth geometry over degree coordinates.
//!
//! All math here treats latitude/longitude as plain planar coordinates.
//! That matches how the store's safety margin is consumed upstream: it is
//! a confidence signal in coordinate-space units, not a geodesic distance.

use crate::store::{Point, Ring};

/// Even-odd containment test over a zone's full ring set.
///
/// Every ring toggles containment, so holes and disjoint parts need no
/// special casing: a point inside both an outer ring and a hole ring
/// toggles twice and ends up outside. Rings with fewer than 3 vertices
/// are ignored.
pub fn point_in_rings(p: Point, rings: &[Ring]) -> bool {
    let mut inside = false;
    for ring in rings {
        let n = ring.len();
        if n < 3 {
            continue;
        }
        let mut j = n - 1;
        for i in 0..n {
            let a = ring[i];
            let b = ring[j];
            // Edge straddles the horizontal line through p; check which
            // side of the edge the point's longitude falls on.
            if (a.lat > p.lat) != (b.lat > p.lat) {
                let t = (p.lat - a.lat) / (b.lat - a.lat);
                let lon_at = a.lon + t * (b.lon - a.lon);
                if p.lon < lon_at {
                    inside = !inside;
                }
            }
            j = i;
        }
    }
    inside
}

/// Minimum distance from `p` to any boundary segment of `rings`, in
/// degrees. Returns `f32::INFINITY` when the ring set has no segments.
pub fn boundary_distance(p: Point, rings: &[Ring]) -> f32 {
    let mut min = f32::INFINITY;
    for ring in rings {
        let n = ring.len();
        if n < 2 {
            continue;
        }
        let mut j = n - 1;
        for i in 0..n {
            let d = segment_distance(p, ring[j], ring[i]);
            if d < min {
                min = d;
            }
            j = i;
        }
    }
    min
}

/// Distance from `p` to the segment `a`–`b`: project onto the segment,
/// clamp to its endpoints, measure to the clamped point.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let dlon = b.lon - a.lon;
    let dlat = b.lat - a.lat;
    let len2 = dlon * dlon + dlat * dlat;
    if len2 == 0.0 {
        // Degenerate segment: plain point distance.
        return ((p.lon - a.lon).powi(2) + (p.lat - a.lat).powi(2)).sqrt();
    }
    let t = (((p.lon - a.lon) * dlon + (p.lat - a.lat) * dlat) / len2).clamp(0.0, 1.0);
    let lon = a.lon + t * dlon;
    let lat = a.lat + t * dlat;
    ((p.lon - lon).powi(2) + (p.lat - lat).powi(2)).sqrt()
}
