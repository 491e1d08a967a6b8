use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{user::users_handler, videos::videos_handler},
    AppState,
};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .merge(videos_handler())
        .merge(users_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new().nest("/api", api_route).layer(configure_cors())
}

pub fn configure_cors() -> CorsLayer {
    CorsLayer::permissive()
}
