//! Talking to remote JSON APIs over HTTP.

use reqwest::blocking::Client;
use reqwest::Error as ReqwestError;
pub use reqwest::Method;
use failure_derive::Fail;
use std::fmt::Display;
use serde::de::DeserializeOwned;
use serde::Serialize;
use log::*;

use crate::impl_from_for_error;

/// An error encountered when calling a remote API.
#[derive(Debug, Fail)]
pub enum RemoteError {
    /// The remote entity was not found.
    #[fail(display = "not found (remote)")]
    RemoteNotFound,
    /// The remote service was unavailable.
    #[fail(display = "remote service unavailable")]
    RemoteServiceUnavailable,
    /// The remote service returned an error.
    #[fail(display = "{} error (code {}): {}", service, code, error)]
    RemoteError {
        /// Name of the remote service responsible.
        service: &'static str,
        /// The HTTP status code returned.
        code: u16,
        /// The error text.
        error: String
    },
    /// reqwest error.
    #[fail(display = "reqwest: {}", _0)]
    Reqwest(ReqwestError)
}
impl_from_for_error!(RemoteError,
                     ReqwestError => Reqwest);

impl RemoteError {
    pub fn status_code(&self) -> u16 {
        use self::RemoteError::*;
        match *self {
            RemoteNotFound => 404,
            RemoteServiceUnavailable => 503,
            RemoteError { .. } => 502,
            _ => 500
        }
    }
}

/// A named remote JSON API, plus the client used to talk to it.
#[derive(Clone)]
pub struct RemoteApi {
    pub base_url: String,
    pub user_agent: String,
    pub name: &'static str,
    pub cli: Client
}
impl RemoteApi {
    pub fn new(ua: String, name: &'static str, base_url: String) -> Self {
        let cli = Client::new();
        Self {
            user_agent: ua,
            name, base_url, cli
        }
    }
    fn do_req<U>(&self, rb: reqwest::blocking::RequestBuilder) -> Result<U, RemoteError> where U: DeserializeOwned {
        let resp = rb
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()?;
        let status = resp.status();
        debug!("remote ({}): response code {}", self.name, status.as_u16());
        match status.as_u16() {
            404 => Err(RemoteError::RemoteNotFound)?,
            503 => Err(RemoteError::RemoteServiceUnavailable)?,
            _ => {}
        }
        if !status.is_success() {
            let text = resp.text()?;
            warn!("remote ({}): request failed ({}): {}", self.name, status.as_u16(), text);
            return Err(RemoteError::RemoteError {
                service: self.name,
                code: status.as_u16(),
                error: text
            });
        }
        let ret: U = resp.json()?;
        Ok(ret)
    }
    /// Makes a request, with URL query pairs (serialized with serde).
    pub fn req_with_query<T, Q, U>(&self, meth: Method, url: T, query: &Q) -> Result<U, RemoteError> where T: Display, Q: Serialize + ?Sized, U: DeserializeOwned {
        let url = format!("{}{}", self.base_url, url);
        debug!("remote ({}): {} {}", self.name, meth, url);
        self.do_req(self.cli.request(meth, &url).query(query))
    }
    /// Makes a request, sending `body` as the raw request body.
    pub fn req_with_body<T, U>(&self, meth: Method, url: T, body: String) -> Result<U, RemoteError> where T: Display, U: DeserializeOwned {
        let url = format!("{}{}", self.base_url, url);
        debug!("remote ({}): {} {} ({} byte body)", self.name, meth, url, body.len());
        self.do_req(self.cli.request(meth, &url).body(body))
    }
}
