pub mod catalog;
pub mod extractors;
pub mod game;
pub mod handlers;
pub mod models;
pub mod names;
pub mod plays;
pub mod rejections;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use std::{sync::Arc, time::Duration};

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::{catalog::Catalog, plays::PlayStore};

#[derive(Clone, Debug)]
pub struct Settings {
    pub base_url: String,
    pub secure_cookies: bool,
    pub tier_size: usize,
    pub round_size: usize,
    pub daily_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1414".to_string(),
            secure_cookies: false,
            tier_size: names::DEFAULT_TIER_SIZE,
            round_size: names::DEFAULT_ROUND_SIZE,
            daily_size: names::DEFAULT_DAILY_SIZE,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub plays: PlayStore,
    pub settings: Settings,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings, play_ttl: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            plays: PlayStore::new(play_ttl),
            settings,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::play::routes())
        .merge(handlers::daily::routes())
        .merge(handlers::challenge::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
