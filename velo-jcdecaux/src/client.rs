//! Fetching live station data from the JCDecaux API.

use velo_util::remote::{RemoteApi, RemoteError, Method};
use log::*;

use crate::types::Station;

/// Base URL of JCDecaux's hosted API.
static DEFAULT_BASE_URL: &str = "https://api.jcdecaux.com";

/// Fetches live station data for one contract city.
pub struct StationClient {
    rpc: RemoteApi,
    contract: String,
    api_key: String
}

impl StationClient {
    pub fn new(ua: String, contract: String, api_key: String, base_url: Option<String>) -> Self {
        let rpc = RemoteApi::new(ua, "jcdecaux",
                                 base_url.unwrap_or_else(|| DEFAULT_BASE_URL.into()));
        Self { rpc, contract, api_key }
    }
    /// Downloads the current station list for the configured contract.
    pub fn get_stations(&self) -> Result<Vec<Station>, RemoteError> {
        debug!("requesting stations for contract {}", self.contract);
        self.rpc.req_with_query(Method::GET, "/vls/v1/stations",
                                &[("contract", &self.contract as &str),
                                  ("apiKey", &self.api_key as &str)])
    }
}
