// responses/redirect.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use url::Url;

/// 303 to an outbound link. The target learns nothing about the page that
/// sent the visitor there.
pub fn see_other(location: &Url) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location.as_str())
        .header("Referrer-Policy", "no-referrer")
        .header("Cache-Control", "no-store")
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

pub fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

pub fn plain_text(body: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
