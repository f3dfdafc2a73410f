use serde_json;
use geo::{LineString, MultiLineString};

use crate::client::{drive_network_query, BoundingBox, GeocodedPlace};
use crate::errors::OsmError;
use crate::geometry::city_center;
use crate::types::{Element, OverpassResponse, StreetGraph};

fn fixture() -> StreetGraph {
    let data = include_str!("overpass.json");
    let resp: OverpassResponse = serde_json::from_str(data).unwrap();
    StreetGraph::from_response(resp)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn parse_overpass_response() {
    let data = include_str!("overpass.json");
    let resp: OverpassResponse = serde_json::from_str(data).unwrap();
    let (mut nodes, mut ways) = (0, 0);
    for elem in resp.elements.iter() {
        match elem {
            Element::Node(_) => nodes += 1,
            Element::Way(_) => ways += 1
        }
    }
    assert_eq!(nodes, 4);
    assert_eq!(ways, 3);
}

#[test]
fn graph_from_response() {
    let graph = fixture();
    assert_eq!(graph.nodes.len(), 4);
    assert_eq!(graph.ways.len(), 3);
    assert!(!graph.is_empty());
    assert_eq!(graph.nodes[&3].lat, 45.7611);
    assert_eq!(graph.ways[1].nodes, vec![3, 4]);
}

#[test]
fn unresolvable_ways_contribute_no_geometry() {
    // way 102 references nodes the response doesn't contain
    let geoms = fixture().edge_geometries();
    assert_eq!(geoms.0.len(), 2);
    assert_eq!(geoms.0[0].0.len(), 3);
}

#[test]
fn city_center_of_symmetric_streets() {
    let edges = MultiLineString(vec![
        LineString::from(vec![(0.0, 0.0), (0.0, 2.0)]),
        LineString::from(vec![(2.0, 0.0), (2.0, 2.0)])
    ]);
    let (lat, lon) = city_center(&edges).unwrap();
    assert!(close(lat, 1.0));
    assert!(close(lon, 1.0));
}

#[test]
fn city_center_is_order_independent() {
    let forwards = MultiLineString(vec![
        LineString::from(vec![(4.8351, 45.7601), (4.8357, 45.7605)]),
        LineString::from(vec![(4.8357, 45.7605), (4.8364, 45.7611)]),
        LineString::from(vec![(4.8364, 45.7611), (4.8371, 45.7620)])
    ]);
    let mut reordered = forwards.0.clone();
    reordered.reverse();
    let a = city_center(&forwards).unwrap();
    let b = city_center(&MultiLineString(reordered)).unwrap();
    assert!(close(a.0, b.0));
    assert!(close(a.1, b.1));
}

#[test]
fn empty_graph_has_no_center() {
    match city_center(&MultiLineString(vec![])) {
        Err(OsmError::EmptyGraph) => {},
        oth => panic!("expected EmptyGraph, got {:?}", oth)
    }
}

#[test]
fn geocoded_bbox_parses() {
    let place = GeocodedPlace {
        display_name: "Lyon, Métropole de Lyon, Rhône, France".into(),
        boundingbox: vec!["45.7073666".into(), "45.8082628".into(),
                          "4.7718134".into(), "4.8983774".into()]
    };
    assert_eq!(place.bbox().unwrap(), BoundingBox {
        south: 45.7073666,
        north: 45.8082628,
        west: 4.7718134,
        east: 4.8983774
    });
}

#[test]
fn geocoded_bbox_rejects_junk() {
    let mut place = GeocodedPlace {
        display_name: "nowhere".into(),
        boundingbox: vec!["45.7".into(), "45.8".into(), "4.7".into()]
    };
    assert!(place.bbox().is_err());
    place.boundingbox = vec!["45.7".into(), "45.8".into(), "4.7".into(), "east".into()];
    assert!(place.bbox().is_err());
}

#[test]
fn drive_query_is_bounded_and_filtered() {
    let query = drive_network_query(BoundingBox {
        south: 45.7, west: 4.7, north: 45.8, east: 4.9
    });
    assert!(query.contains("[bbox:45.7,4.7,45.8,4.9]"));
    assert!(query.contains("way[\"highway\"]"));
    assert!(query.contains("footway"));
    assert!(query.contains("out body;"));
}
