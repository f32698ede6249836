/*
 * Responsibility
 * - GET /api/v1/me
 * - Report which key the caller authenticated with (fingerprint only)
 */
use axum::Json;

use crate::api::v1::{dto::me::MeResponse, extractors::ApiKeyCtxExtractor};

pub async fn me(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        key_fingerprint: ctx.fingerprint,
    })
}
