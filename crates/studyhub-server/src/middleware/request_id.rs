//! `x-request-id` handling.
//!
//! A client-supplied id is kept when it is short and made of log-safe
//! characters; otherwise it is dropped and a UUID is assigned. The final id
//! is echoed on the response and recorded on the request span.

use axum::{extract::Request, middleware::Next, response::Response};
use http::{HeaderName, HeaderValue};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied id that is kept.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Assigns a random UUID to requests without a usable id.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

fn header_name() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Layer that assigns an id when the request has none.
pub fn set_request_id_layer() -> SetRequestIdLayer<UuidRequestId> {
    SetRequestIdLayer::new(header_name(), UuidRequestId)
}

/// Layer that copies the request's id onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(header_name())
}

/// Whether a client-supplied id may be kept as-is.
pub fn is_usable_request_id(value: &HeaderValue) -> bool {
    let bytes = value.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= MAX_REQUEST_ID_LEN
        && bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b':'))
}

/// Middleware that strips unusable client ids so a fresh one is assigned.
///
/// Must run before [`set_request_id_layer`].
pub async fn drop_unusable_request_id(mut request: Request, next: Next) -> Response {
    let unusable = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .is_some_and(|value| !is_usable_request_id(value));

    if unusable {
        tracing::debug!("Replacing unusable client request id");
        request.headers_mut().remove(REQUEST_ID_HEADER);
    }

    next.run(request).await
}

/// The request ID assigned to a request, or "-" before one has been assigned.
pub fn request_id_of<B>(request: &http::Request<B>) -> &str {
    request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_uuid() {
        let request = http::Request::new(());
        let id = UuidRequestId.make_request_id(&request).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }

    #[test]
    fn test_usable_ids() {
        for id in ["abc-123", "trace_7.2:span", "0f8fad5b-d9cb-469f-a165-70867728950e"] {
            assert!(is_usable_request_id(&HeaderValue::from_static(id)), "{}", id);
        }
    }

    #[test]
    fn test_unusable_ids() {
        let too_long = "a".repeat(MAX_REQUEST_ID_LEN + 1);
        for id in ["", "has space", "quote\"d", too_long.as_str()] {
            let value = HeaderValue::from_str(id).unwrap();
            assert!(!is_usable_request_id(&value), "{:?}", id);
        }
    }

    #[test]
    fn test_request_id_of_reads_assigned_id() {
        let mut request = http::Request::new(());
        assert_eq!(request_id_of(&request), "-");

        request
            .extensions_mut()
            .insert(RequestId::new(HeaderValue::from_static("abc-123")));
        assert_eq!(request_id_of(&request), "abc-123");
    }
}
