use std::sync::Arc;

use catalog::{generator::generate, rng_from_seed};
use config::Config;
use repositories::InMemoryRepo;
use routes::create_routes;
use services::{user::UserService, video::VideosService};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use self::errors::{Error, Result};

mod catalog;
mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub videos_service: VideosService,
    pub users_service: UserService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_video_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let today = chrono::Local::now().date_naive();
    let videos = generate(&mut rng_from_seed(config.catalog_seed), today);
    info!(
        videos = videos.len(),
        seeded = config.catalog_seed.is_some(),
        "Generated video catalog"
    );

    let repo = InMemoryRepo::new(videos);

    let app_state = AppState {
        videos_service: VideosService::new(Arc::new(repo), rng_from_seed(config.catalog_seed)),
        users_service: UserService::new(),
    };

    let app = create_routes(Arc::new(app_state));

    let addr = format!("[::]:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
