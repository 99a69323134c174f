//! Request-scoped middleware.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Tags every request with an `x-request-id`, preserving one supplied by
/// the caller, and echoes it on the response. The id is stored in request
/// extensions so the trace span can pick it up.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
    let header_name = HeaderName::from_static("x-request-id");

    let req_id_value = req
        .headers()
        .get(&header_name)
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        });

    req.extensions_mut().insert(req_id_value.clone());

    let mut res = next.run(req).await;
    res.headers_mut().insert(header_name, req_id_value);
    res
}
