//! `Authorization: ApiKey <key>` check -> ApiKeyCtx in request extensions.
//!
//! Handlers behind this middleware read the caller through
//! `ApiKeyCtxExtractor`; they never see the raw key.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::{fingerprint, get_api_key};
use crate::state::AppState;

/// Require an API key on every route of `router`.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, api_key_middleware))
}

async fn api_key_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(error = %err, path = %req.uri().path(), "api key rejected");
            return Err(err.into());
        }
    };

    let key_fingerprint = fingerprint(key);

    if !state.api_keys.accepts(key) {
        tracing::warn!(key_fingerprint = %key_fingerprint, "api key not in allowlist");
        return Err(AppError::Unauthorized);
    }

    tracing::debug!(key_fingerprint = %key_fingerprint, "api key accepted");

    // middleware -> extractor
    req.extensions_mut().insert(ApiKeyCtx::new(key_fingerprint));

    Ok(next.run(req).await)
}
