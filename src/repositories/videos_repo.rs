use async_trait::async_trait;
use tracing::debug;

use crate::{models::videos::Video, Error, Result};

use super::InMemoryRepo;

#[async_trait]
pub trait VideosRepository: Send + Sync {
    async fn videos(&self) -> Result<Vec<Video>>;
    async fn record_view(&self, video_id: u32) -> Result<Video>;
    async fn count(&self) -> Result<usize>;
}

#[async_trait]
impl VideosRepository for InMemoryRepo {
    async fn videos(&self) -> Result<Vec<Video>> {
        let videos = self.videos.read()?;
        Ok(videos.clone())
    }

    async fn record_view(&self, video_id: u32) -> Result<Video> {
        let mut videos = self.videos.write()?;

        let video = videos
            .iter_mut()
            .find(|v| v.id == video_id)
            .ok_or(Error::NotFound)?;
        video.views += 1;
        debug!(video_id, views = video.views, "Recorded video view");

        Ok(video.clone())
    }

    async fn count(&self) -> Result<usize> {
        let videos = self.videos.read()?;
        Ok(videos.len())
    }
}
