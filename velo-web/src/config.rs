//! Standard configuration module.

use serde_derive::Deserialize;
use velo_util::{ConfigExt, crate_name};

/// `velo-web` configuration.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// Address to listen on.
    pub listen: String,
    /// JCDecaux contract city to show, e.g. "lyon".
    pub contract: String,
    /// Country the contract city is in, for geocoding.
    #[serde(default)]
    pub country: Option<String>,
    /// JCDecaux API key.
    pub api_key: String,
    /// Base URL override for the JCDecaux API.
    #[serde(default)]
    pub jcdecaux_url: Option<String>,
    /// Base URL override for Nominatim.
    #[serde(default)]
    pub nominatim_url: Option<String>,
    /// Base URL override for the Overpass API.
    #[serde(default)]
    pub overpass_url: Option<String>
}

impl ConfigExt for Config {
    fn crate_name() -> &'static str {
        crate_name!()
    }
}
