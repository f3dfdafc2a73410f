//! Error handling.

use failure_derive::Fail;
use velo_util::impl_from_for_error;
use velo_util::remote::RemoteError;

/// Error that could occur while building a city's street graph.
#[derive(Fail, Debug)]
pub enum OsmError {
    /// The geocoder didn't return any match for the place.
    #[fail(display = "place not found: {}", _0)]
    PlaceNotFound(String),
    /// The geocoder returned a bounding box we couldn't make sense of.
    #[fail(display = "unusable bounding box from geocoder")]
    BadBoundingBox,
    /// The street graph has no edges to derive geometry from.
    #[fail(display = "street graph has no edges")]
    EmptyGraph,
    /// Error from a remote API.
    #[fail(display = "remote: {}", _0)]
    Remote(RemoteError)
}

impl_from_for_error!(OsmError,
                     RemoteError => Remote);

pub type OsmResult<T> = ::std::result::Result<T, OsmError>;
