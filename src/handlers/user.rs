use axum::{middleware, response::IntoResponse, routing::get, Extension, Json, Router};

use crate::{
    middleware::{auth, AuthenticatedUser},
    Result,
};

pub fn users_handler() -> Router {
    Router::new().route(
        "/user/profile",
        get(get_profile).layer(middleware::from_fn(auth)),
    )
}

async fn get_profile(Extension(user): Extension<AuthenticatedUser>) -> Result<impl IntoResponse> {
    Ok(Json(user.user))
}
