//! Serves a web map of bike-share station availability for a city.

pub mod errors;
pub mod config;
pub mod ctx;
pub mod score;
pub mod tmpl;
pub mod templates;

use log::*;
use velo_util::ConfigExt;
use std::sync::Arc;

use crate::config::Config;
use crate::ctx::App;
use crate::errors::*;

fn main() -> Result<()> {
    velo_util::setup_logging()?;
    info!("velo-web, but not yet");
    info!("loading config");
    let cfg = Config::load()?;
    info!("initialising Handlebars");
    let hbs = tmpl::handlebars_init()?;
    let srv = Arc::new(App::new(&cfg, hbs));
    let listen_url = &cfg.listen;
    info!("Starting HTTP server on {}", listen_url);
    rouille::start_server(listen_url, move |req| {
        srv.handle_request(req)
    })
}
