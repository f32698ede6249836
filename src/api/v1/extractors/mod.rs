/*
 * Responsibility
 * - Request extractors shared by v1 handlers
 */
mod api_key_ctx;

pub use api_key_ctx::{ApiKeyCtx, ApiKeyCtxExtractor};
