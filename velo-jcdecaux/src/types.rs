//! API types.

use serde_derive::{Serialize, Deserialize};

/// One bike-share dock's live status, as returned by the station feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Station {
    /// Station latitude, WGS84.
    pub latitude: f64,
    /// Station longitude, WGS84.
    pub longitude: f64,
    /// Human-readable station name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Number of bikes currently available for rental.
    #[serde(rename = "dispo_velos")]
    pub bikes_available: u32,
    /// Total number of docks at this station.
    #[serde(rename = "capacite")]
    pub capacity: u32
}

impl Station {
    /// Fraction of this station's docks with a bike available.
    ///
    /// Performs no guard against `capacity` being zero; the feed does emit
    /// such stations occasionally, and the ratio then comes out non-finite.
    pub fn availability(&self) -> f64 {
        self.bikes_available as f64 / self.capacity as f64
    }
}
