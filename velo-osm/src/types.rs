//! Types for the Overpass API's JSON output, and the street graph built
//! from it.

use serde_derive::{Serialize, Deserialize};
use std::collections::HashMap;
use geo::{LineString, MultiLineString};
use log::*;

/// One OSM node: a point on the earth's surface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    pub id: i64,
    /// Latitude, WGS84.
    pub lat: f64,
    /// Longitude, WGS84.
    pub lon: f64
}

/// One OSM way: an ordered run of nodes. Here, always a street segment,
/// thanks to the highway filter in the Overpass query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Way {
    pub id: i64,
    /// Node ids along the way, in drawing order.
    pub nodes: Vec<i64>,
    #[serde(default)]
    pub tags: HashMap<String, String>
}

/// One element of an Overpass API response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node(Node),
    Way(Way)
}

/// Response envelope of an Overpass API query.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OverpassResponse {
    pub elements: Vec<Element>
}

/// A city's drivable street network.
#[derive(Debug, Clone)]
pub struct StreetGraph {
    /// Node locations, keyed by OSM node id.
    pub nodes: HashMap<i64, Node>,
    /// Highway ways referencing those nodes.
    pub ways: Vec<Way>
}

impl StreetGraph {
    /// Splits a raw Overpass response into the node table and way list.
    pub fn from_response(resp: OverpassResponse) -> Self {
        let mut nodes = HashMap::new();
        let mut ways = vec![];
        for elem in resp.elements {
            match elem {
                Element::Node(n) => {
                    nodes.insert(n.id, n);
                },
                Element::Way(w) => {
                    ways.push(w);
                }
            }
        }
        StreetGraph { nodes, ways }
    }
    pub fn is_empty(&self) -> bool {
        self.ways.is_empty()
    }
    /// Extracts one linestring per way, in (longitude, latitude) coordinate
    /// order.
    ///
    /// Node references that don't resolve are skipped; a way left with
    /// fewer than two points contributes no geometry.
    pub fn edge_geometries(&self) -> MultiLineString<f64> {
        let mut lines = vec![];
        for way in self.ways.iter() {
            let coords = way.nodes.iter()
                .filter_map(|id| self.nodes.get(id))
                .map(|n| (n.lon, n.lat))
                .collect::<Vec<_>>();
            if coords.len() < 2 {
                warn!("way {} has fewer than two resolvable nodes, skipping", way.id);
                continue;
            }
            lines.push(LineString::from(coords));
        }
        MultiLineString(lines)
    }
}
