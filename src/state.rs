/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Meant to be cloned per request (contents are Arc, cheap to clone)
 */
use std::sync::Arc;

use crate::services::auth::ApiKeyPolicy;

#[derive(Clone, Debug)]
pub struct AppState {
    pub api_keys: Arc<ApiKeyPolicy>,
}

impl AppState {
    pub fn new(api_keys: Arc<ApiKeyPolicy>) -> Self {
        Self { api_keys }
    }
}
