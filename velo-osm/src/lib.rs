//! Downloads a city's street network from OpenStreetMap and derives map
//! geometry from it, notably the centroid used to center the city map.

pub mod errors;
pub mod client;
pub mod geometry;
pub mod types;

#[cfg(test)]
mod tests;
