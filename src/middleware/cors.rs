//! CORS policy for browser clients.
//!
//! Policy:
//! - Development: any origin, no credentials.
//! - Production: exact-match allowlist from `CORS_ALLOWED_ORIGINS`. An empty
//!   allowlist emits no CORS headers at all.
//!
//! The API key travels in `Authorization`, so that header must be allowed for
//! preflighted requests.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    let request_id = HeaderName::from_static("x-request-id");

    let base = if config.app_env.is_production() {
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        CorsLayer::new().allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _req| allowed.iter().any(|v| v == origin),
        ))
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    base.allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT, request_id.clone()])
        .expose_headers([request_id])
        .max_age(std::time::Duration::from_secs(60 * 10))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::time::Duration;

    use axum::{body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppEnv;

    fn config(app_env: AppEnv, origins: &[&str]) -> Config {
        Config {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            app_env,
            cors_allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            api_keys: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }

    async fn allow_origin_for(config: &Config, origin: &str) -> Option<String> {
        let app = apply(Router::new().route("/", get(|| async { "ok" })), config);
        let res = app
            .oneshot(
                Request::get("/")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let cfg = config(AppEnv::Development, &[]);
        assert_eq!(
            allow_origin_for(&cfg, "http://localhost:5173").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn production_only_allows_listed_origins() {
        let cfg = config(AppEnv::Production, &["https://notely.example"]);
        assert_eq!(
            allow_origin_for(&cfg, "https://notely.example").await.as_deref(),
            Some("https://notely.example")
        );
        assert_eq!(allow_origin_for(&cfg, "https://evil.example").await, None);
    }
}
