use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Reuses the caller's `x-request-id` when it is a usable header value.
fn request_id(req: &Request) -> String {
    req.headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string)
}

/// Runs the request inside a `request` span and logs its outcome once it
/// completes. The auth guard fills in `user_id` on the same span.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = request_id(&req);

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
        user_id = tracing::field::Empty,
    );

    async move {
        let mut response = next.run(req).await;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let status = response.status();

        if status.is_server_error() {
            warn!(status = status.as_u16(), elapsed_ms, "Request failed");
        } else {
            info!(status = status.as_u16(), elapsed_ms, "Request finished");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response
                .headers_mut()
                .insert(REQUEST_ID_HEADER.clone(), value);
        }

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(id: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/");
        if let Some(id) = id {
            builder = builder.header("x-request-id", id);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_request_id_is_reused() {
        assert_eq!(request_id(&request(Some("abc-123"))), "abc-123");
    }

    #[test]
    fn test_request_id_is_generated() {
        let generated = request_id(&request(None));
        assert!(Uuid::parse_str(&generated).is_ok());

        let blank = request_id(&request(Some("   ")));
        assert!(Uuid::parse_str(&blank).is_ok());
    }
}
