use axum::http::Uri;
use lambda_http::request::RequestContext;
use lambda_http::{Request, RequestExt};

/// Drop the API Gateway stage segment that `lambda_http` prepends to the
/// request path, so `/prod/upload` routes as `/upload`. Requests without a
/// stage, or whose path does not start with it, pass through unchanged.
pub fn strip_stage(mut req: Request) -> Request {
    let stage = match req.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(ctx)) => ctx.stage.clone(),
        Some(RequestContext::ApiGatewayV2(ctx)) => ctx.stage.clone(),
        _ => None,
    };
    let Some(stage) = stage.filter(|s| !s.is_empty() && s != "$default") else {
        return req;
    };

    let prefix = format!("/{stage}");
    let Some(rest) = req.uri().path().strip_prefix(&prefix) else {
        return req;
    };
    // `/production/upload` must not lose `/prod`
    if !rest.is_empty() && !rest.starts_with('/') {
        return req;
    }

    let path = if rest.is_empty() { "/" } else { rest };
    let path_and_query = match req.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = req.uri().clone().into_parts();
    match path_and_query.parse() {
        Ok(pq) => parts.path_and_query = Some(pq),
        Err(e) => {
            tracing::warn!("Keeping staged path {}: {e}", req.uri());
            return req;
        }
    }

    match Uri::from_parts(parts) {
        Ok(uri) => *req.uri_mut() = uri,
        Err(e) => tracing::warn!("Keeping staged path {}: {e}", req.uri()),
    }
    req
}
