//! Deriving a city center from street geometry.

use geo::MultiLineString;
use geo::algorithm::centroid::Centroid;

use crate::errors::*;

/// Computes the centroid of a street network's edge geometries, returned
/// as a (latitude, longitude) pair.
pub fn city_center(edges: &MultiLineString<f64>) -> OsmResult<(f64, f64)> {
    let centroid = edges.centroid()
        .ok_or(OsmError::EmptyGraph)?;
    Ok((centroid.y(), centroid.x()))
}
