use std::sync::{Arc, RwLock};

use crate::models::videos::Video;

pub mod videos_repo;

/// Process-local catalog store, shared by every service clone.
#[derive(Clone)]
pub struct InMemoryRepo {
    videos: Arc<RwLock<Vec<Video>>>,
}

impl InMemoryRepo {
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            videos: Arc::new(RwLock::new(videos)),
        }
    }
}
