//! Downloading a city's street network from OpenStreetMap.
//!
//! Geocodes the place name with Nominatim, then pulls the drivable ways
//! inside the resulting bounding box from the Overpass API.

use velo_util::remote::{RemoteApi, Method};
use serde_derive::{Serialize, Deserialize};
use log::*;

use crate::errors::*;
use crate::types::{OverpassResponse, StreetGraph};

static DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
static DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de";
/// Highway values that don't carry car traffic, excluded from the graph.
static NON_DRIVE_HIGHWAYS: &str = "abandoned|bridleway|construction|corridor|cycleway|elevator|escalator|footway|path|pedestrian|planned|platform|proposed|raceway|steps|track";
/// Server-side Overpass query timeout, in seconds.
const OVERPASS_TIMEOUT: u32 = 60;

/// One match from Nominatim's search endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GeocodedPlace {
    pub display_name: String,
    /// Bounding box, as `[south, north, west, east]` stringified floats.
    pub boundingbox: Vec<String>
}

/// A place's bounding box, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64
}

impl GeocodedPlace {
    pub fn bbox(&self) -> OsmResult<BoundingBox> {
        let mut vals = [0f64; 4];
        if self.boundingbox.len() != 4 {
            Err(OsmError::BadBoundingBox)?
        }
        for (val, s) in vals.iter_mut().zip(self.boundingbox.iter()) {
            *val = s.parse()
                .map_err(|_| OsmError::BadBoundingBox)?;
        }
        Ok(BoundingBox {
            south: vals[0],
            north: vals[1],
            west: vals[2],
            east: vals[3]
        })
    }
}

/// Fetches street-network graphs for named places.
pub struct GraphClient {
    nominatim: RemoteApi,
    overpass: RemoteApi
}

impl GraphClient {
    pub fn new(ua: String, nominatim_url: Option<String>, overpass_url: Option<String>) -> Self {
        let nominatim = RemoteApi::new(ua.clone(), "nominatim",
                                       nominatim_url.unwrap_or_else(|| DEFAULT_NOMINATIM_URL.into()));
        let overpass = RemoteApi::new(ua, "overpass",
                                      overpass_url.unwrap_or_else(|| DEFAULT_OVERPASS_URL.into()));
        Self { nominatim, overpass }
    }
    /// Geocodes a "City, Country" string to its bounding box.
    pub fn geocode(&self, place: &str) -> OsmResult<BoundingBox> {
        let matches: Vec<GeocodedPlace> = self.nominatim
            .req_with_query(Method::GET, "/search",
                            &[("q", place),
                              ("format", "jsonv2"),
                              ("limit", "1")])?;
        let top = matches.into_iter().next()
            .ok_or_else(|| OsmError::PlaceNotFound(place.into()))?;
        debug!("geocoded {:?} to {:?}", place, top.display_name);
        top.bbox()
    }
    /// Downloads the drivable street network of the given place.
    pub fn fetch_graph(&self, place: &str) -> OsmResult<StreetGraph> {
        let bbox = self.geocode(place)?;
        info!("downloading street network for {}", place);
        let resp: OverpassResponse = self.overpass
            .req_with_body(Method::POST, "/api/interpreter", drive_network_query(bbox))?;
        let graph = StreetGraph::from_response(resp);
        info!("street network for {}: {} nodes, {} ways", place, graph.nodes.len(), graph.ways.len());
        Ok(graph)
    }
}

/// Builds the Overpass QL query for the drivable ways inside `bbox`,
/// plus the nodes they reference.
pub(crate) fn drive_network_query(bbox: BoundingBox) -> String {
    format!(concat!(
        "[out:json][timeout:{timeout}][bbox:{s},{w},{n},{e}];\n",
        "way[\"highway\"][\"area\"!~\"yes\"][\"highway\"!~\"{excl}\"];\n",
        "(._;>;);\n",
        "out body;"),
        timeout = OVERPASS_TIMEOUT,
        s = bbox.south, w = bbox.west, n = bbox.north, e = bbox.east,
        excl = NON_DRIVE_HIGHWAYS)
}
