//! Access-key extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use super::error::AppError;

/// Header carrying the caller's plaintext queue access key.
pub static ACCESS_KEY_HEADER: &str = "X-Access-Key";

/// Plaintext access key taken from the request headers.
///
/// It is only handed on to the controller, which hashes it; it is never
/// logged or stored.
pub struct AccessKey(pub String);

impl FromRequest for AccessKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let key = req
            .headers()
            .get(ACCESS_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty());

        match key {
            Some(key) => ready(Ok(AccessKey(key.to_string()))),
            None => ready(Err(AppError::BadRequest(format!(
                "missing {ACCESS_KEY_HEADER} header"
            )))),
        }
    }
}
