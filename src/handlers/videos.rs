use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use tracing::debug;

use crate::{
    models::query::{SearchQueryDto, SuggestionsQueryDto},
    AppState, Error, Result,
};

pub fn videos_handler() -> Router {
    Router::new()
        .route("/videos", get(get_videos))
        .route("/featured-video", get(get_featured_video))
        .route("/videos/{id}", get(get_video))
        .route("/videos/category/{category}", get(get_videos_by_category))
        .route("/videos/upload", post(upload_video))
        .route("/categories", get(get_categories))
        .route("/search/suggestions", get(get_search_suggestions))
}

async fn get_videos(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse> {
    let params = SearchQueryDto::from_pairs(pairs);
    let videos = app_state
        .videos_service
        .videos(params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(videos)))
}

async fn get_featured_video(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let video = app_state.videos_service.featured().await?;

    Ok((StatusCode::OK, Json(video)))
}

async fn get_video(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<impl IntoResponse> {
    // Only plain ASCII digits name a video; signs and whitespace do not.
    let video_id = parse_video_id(&video_id).ok_or_else(|| {
        debug!(video_id = %video_id, "Rejected non-numeric video id");
        Error::NotFound
    })?;

    let video = app_state.videos_service.video(video_id).await?;

    Ok((StatusCode::OK, Json(video)))
}

async fn get_categories(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let categories = app_state.videos_service.categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

async fn get_videos_by_category(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse> {
    let videos = app_state
        .videos_service
        .videos_by_category(&category)
        .await?;

    Ok((StatusCode::OK, Json(videos)))
}

async fn upload_video(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let ack = app_state.videos_service.upload().await?;

    Ok((StatusCode::OK, Json(ack)))
}

async fn get_search_suggestions(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse> {
    let params = SuggestionsQueryDto::from_pairs(pairs);
    let suggestions = app_state
        .videos_service
        .suggestions(params.q.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(suggestions)))
}

fn parse_video_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok()
}
