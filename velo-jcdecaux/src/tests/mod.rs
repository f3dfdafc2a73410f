use serde_json;
use crate::types::Station;

fn fixture() -> Vec<Station> {
    let data = include_str!("stations.json");
    serde_json::from_str(data).unwrap()
}

#[test]
fn parse_station_feed() {
    let stations = fixture();
    assert_eq!(stations.len(), 3);
    assert_eq!(stations[0], Station {
        latitude: 45.76033,
        longitude: 4.83555,
        name: "00901 - PALAIS DE JUSTICE".into(),
        bikes_available: 3,
        capacity: 20
    });
}

#[test]
fn availability_is_a_plain_ratio() {
    let stations = fixture();
    assert_eq!(stations[0].availability(), 0.15);
    assert_eq!(stations[1].availability(), 0.875);
}

#[test]
fn zero_capacity_availability_is_not_finite() {
    // The feed occasionally reports decommissioned docks with capacite = 0.
    // The ratio is left unguarded; callers get NaN.
    let stations = fixture();
    assert!(stations[2].availability().is_nan());
}
