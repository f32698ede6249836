/*
 * Responsibility
 * - URL layout of v1
 * - Every v1 route sits behind the API key middleware
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::me::me;
use crate::middleware::auth::api_key;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let router = Router::new().route("/me", get(me));

    api_key::apply(router, state)
}
