//! Main server context.

use handlebars::Handlebars;
use rouille::{Request, Response, router};
use std::time::Instant;
use velo_jcdecaux::client::StationClient;
use velo_osm::client::GraphClient;
use velo_osm::geometry;
use velo_util::user_agent;
use log::*;

use crate::config::Config;
use crate::errors::*;
use crate::templates::map::{MapView, MarkerView};
use crate::tmpl::TemplateContext;

/// Initial Leaflet zoom level for the city map.
const INITIAL_ZOOM: u8 = 14;
/// Country appended to the contract city for geocoding, absent
/// configuration saying otherwise.
const DEFAULT_COUNTRY: &str = "France";

pub struct App {
    hbs: Handlebars,
    stations: StationClient,
    graph: GraphClient,
    /// The "City, Country" string handed to the geocoder.
    place: String
}
impl App {
    pub fn new(cfg: &Config, hbs: Handlebars) -> Self {
        let stations = StationClient::new(user_agent!(), cfg.contract.clone(),
                                          cfg.api_key.clone(), cfg.jcdecaux_url.clone());
        let graph = GraphClient::new(user_agent!(), cfg.nominatim_url.clone(),
                                     cfg.overpass_url.clone());
        let country = cfg.country.clone()
            .unwrap_or_else(|| DEFAULT_COUNTRY.into());
        let place = format!("{}, {}", cfg.contract, country);
        App { hbs, stations, graph, place }
    }
    /// Builds the whole map view: live stations as colored markers, on a
    /// map centered on the centroid of the city's street network.
    ///
    /// Both providers are hit on every call; nothing is cached.
    fn station_map(&self) -> WebResult<MapView> {
        let stations = self.stations.get_stations()?;
        let graph = self.graph.fetch_graph(&self.place)?;
        let (latitude, longitude) = geometry::city_center(&graph.edge_geometries())?;
        let markers = stations.iter()
            .map(MarkerView::from_station)
            .collect();
        Ok(MapView {
            center_latitude: latitude,
            center_longitude: longitude,
            zoom: INITIAL_ZOOM,
            markers
        })
    }
    fn on_request(&self, req: &Request) -> WebResult<Response> {
        router!(req,
            (GET) (/) => {
                let map = self.station_map()?;
                TemplateContext {
                    template: "map",
                    title: format!("Station availability: {}", self.place).into(),
                    body: map
                }.render(&self.hbs)
            },
            _ => {
                Err(WebError::NotFound)
            }
        )
    }
    pub fn handle_request(&self, req: &Request) -> Response {
        let start = Instant::now();
        let ret = self.on_request(req);
        let ret = match ret {
            Ok(r) => r,
            Err(e) => {
                warn!("Processing request failed: {}", e);
                let resp = e.as_rendered(req, &self.hbs);
                match resp {
                    Ok(r) => r,
                    Err(e) => {
                        error!("Rendering error response failed: {}", e);
                        Response::text("Something's catastrophically broken!")
                            .with_status_code(500)
                    }
                }
            }
        };
        let dur = start.elapsed();
        info!("{} {} \"{}\" - {} [{}.{:03}s]", req.remote_addr(), req.method(), req.raw_url(), ret.status_code, dur.as_secs(), dur.subsec_millis());
        ret
    }
}
