//! Error handling, but probably a bit snazzier.

pub use failure::Error;
use failure_derive::Fail;
use velo_util::impl_from_for_error;
use velo_util::http::StatusCode;
use velo_util::remote::RemoteError;
use velo_osm::errors::OsmError;
use handlebars::RenderError;
use handlebars::Handlebars;
use rouille::{Response, Request};

use crate::tmpl::TemplateContext;

/// Error that could occur when processing a request.
#[derive(Fail, Debug)]
pub enum WebError {
    /// The given path was not found.
    #[fail(display = "not found")]
    NotFound,
    /// Error from the station-data provider.
    #[fail(display = "stations: {}", _0)]
    Stations(RemoteError),
    /// Error while building the city's street graph.
    #[fail(display = "street graph: {}", _0)]
    Osm(OsmError),
    /// Handlebars rendering error.
    #[fail(display = "handlebars: {}", _0)]
    Hbs(RenderError)
}

impl WebError {
    pub fn as_rendered(&self, req: &Request, hbs: &Handlebars) -> Result<Response> {
        use self::WebError::*;
        use crate::templates::not_found::NotFoundView;

        let resp = match *self {
            NotFound => {
                TemplateContext {
                    template: "not_found",
                    title: "Not found".into(),
                    body: NotFoundView {
                        uri: req.url()
                    }
                }.render(hbs)?
            },
            _ => {
                TemplateContext::title("ise", "").render(hbs)?
            }
        };
        Ok(resp.with_status_code(self.status_code()))
    }
}
impl StatusCode for WebError {
    fn status_code(&self) -> u16 {
        use self::WebError::*;

        match *self {
            NotFound => 404,
            Stations(ref r) => r.status_code(),
            Osm(OsmError::Remote(ref r)) => r.status_code(),
            _ => 500
        }
    }
}

impl_from_for_error!(WebError,
                     RemoteError => Stations,
                     OsmError => Osm,
                     RenderError => Hbs);

pub type WebResult<T> = ::std::result::Result<T, WebError>;
pub type Result<T, E = Error> = ::std::result::Result<T, E>;
