use std::sync::Arc;

use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};
use crate::{models::users::UserProfile, AppState, Error, Result};

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: UserProfile,
}

pub async fn auth(mut req: Request, next: Next) -> Result<impl IntoResponse> {
    let app_state = req
        .extensions()
        .get::<Arc<AppState>>()
        .ok_or(Error::InternalServerError)?;

    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok());

    let user = app_state.users_service.profile(authorization)?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}
