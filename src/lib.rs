use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod middleware;
pub mod modules;
pub mod types;

use crate::middleware::auth::auth;
use crate::modules::auth::api::{profile, sign_in};
use crate::types::AppState;

pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/profile", get(profile))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route("/login", post(sign_in))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
