//! Lenient JSON request body extractor.
//!
//! A request without a JSON body still reaches the handler: an empty payload,
//! or one sent under a non-JSON content type, yields the DTO's default value
//! so field-level checks answer with their own messages. Only a JSON body
//! that fails to parse is rejected before the handler runs, rendered in the
//! [`Envelope`] registered as app data on the enclosing scope.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::error::{ApiError, BAD_REQUEST, Envelope};

/// Deserialised request body, defaulted when the request carries none.
///
/// # Examples
/// ```
/// use in_n_out_books::inbound::http::body::JsonBody;
///
/// async fn handler(body: JsonBody<serde_json::Value>) -> String {
///     body.into_inner().to_string()
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    /// Unwrap the deserialised value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for JsonBody<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}

/// Parse `bytes` as `T`, treating an empty payload as `T::default()`.
pub(crate) fn parse_body<T>(bytes: &[u8], json: bool, envelope: Envelope) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if !json || bytes.trim_ascii().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|err| {
        debug!(error = %err, "rejected request body");
        ApiError::new(Error::invalid_request(BAD_REQUEST), envelope)
    })
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = is_json(req);
        let envelope = req
            .app_data::<Envelope>()
            .copied()
            .unwrap_or(Envelope::Message);
        let bytes = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = bytes.await?;
            parse_body(&bytes, json, envelope)
                .map(JsonBody)
                .map_err(Into::into)
        })
    }
}
