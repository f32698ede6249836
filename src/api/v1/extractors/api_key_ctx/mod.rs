/*!
 * API key context extractor
 *
 * Responsibility:
 * - Give handlers the context of an authenticated request (ApiKeyCtx)
 * - axum plumbing stays in core, the type lives in types
 */

mod core;
mod types;

pub use core::ApiKeyCtxExtractor;
pub use types::ApiKeyCtx;
