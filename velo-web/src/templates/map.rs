use serde_derive::Serialize;
use velo_jcdecaux::types::Station;

use crate::score::ScoreColor;

/// One station marker on the map.
#[derive(Serialize, Debug, Clone)]
pub struct MarkerView {
    pub latitude: f64,
    pub longitude: f64,
    /// Popup content: the station name.
    pub popup: String,
    /// Leaflet color name for the marker.
    pub color: &'static str
}
impl MarkerView {
    pub fn from_station(station: &Station) -> Self {
        MarkerView {
            latitude: station.latitude,
            longitude: station.longitude,
            popup: station.name.clone(),
            color: ScoreColor::from_ratio(station.availability()).css_name()
        }
    }
}

/// The whole map page.
#[derive(Serialize, Debug, Clone)]
pub struct MapView {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
    pub markers: Vec<MarkerView>
}
