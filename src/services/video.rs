use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, Rng};

use crate::{
    models::{response::UploadResponse, videos::Video},
    repositories::videos_repo::VideosRepository,
    Result,
};

const SUGGESTION_MIN_CHARS: usize = 2;
const SUGGESTION_LIMIT: usize = 5;

#[derive(Clone)]
pub struct VideosService {
    repo: Arc<dyn VideosRepository>,
    rng: Arc<Mutex<StdRng>>,
}

impl VideosService {
    pub fn new(repo: Arc<dyn VideosRepository>, rng: StdRng) -> Self {
        Self {
            repo,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Full catalog in generation order, or the videos whose title contains
    /// `search` ignoring case.
    pub async fn videos(&self, search: Option<&str>) -> Result<Vec<Video>> {
        let videos = self.repo.videos().await?;

        match search.filter(|term| !term.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                Ok(videos
                    .into_iter()
                    .filter(|v| title_matches(v, &term))
                    .collect())
            }
            None => Ok(videos),
        }
    }

    pub async fn featured(&self) -> Result<Video> {
        let mut videos = self.repo.videos().await?;
        let index = {
            let mut rng = self.rng.lock()?;
            rng.gen_range(0..videos.len())
        };

        Ok(videos.swap_remove(index))
    }

    pub async fn video(&self, video_id: u32) -> Result<Video> {
        self.repo.record_view(video_id).await
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        let videos = self.repo.videos().await?;

        let mut categories = Vec::new();
        for video in &videos {
            if !categories.contains(&video.category) {
                categories.push(video.category);
            }
        }

        Ok(categories.iter().map(|c| c.to_str().to_string()).collect())
    }

    pub async fn videos_by_category(&self, category: &str) -> Result<Vec<Video>> {
        let videos = self.repo.videos().await?;

        Ok(videos
            .into_iter()
            .filter(|v| v.category.to_str() == category)
            .collect())
    }

    pub async fn suggestions(&self, query: Option<&str>) -> Result<Vec<String>> {
        let query = query.unwrap_or_default();
        if query.chars().count() < SUGGESTION_MIN_CHARS {
            return Ok(Vec::new());
        }

        let query = query.to_lowercase();
        let videos = self.repo.videos().await?;

        Ok(videos
            .into_iter()
            .filter(|v| title_matches(v, &query))
            .take(SUGGESTION_LIMIT)
            .map(|v| v.title)
            .collect())
    }

    /// Acknowledges an upload with the id the next video would get. Nothing is stored.
    pub async fn upload(&self) -> Result<UploadResponse> {
        let count = self.repo.count().await?;

        Ok(UploadResponse {
            message: "video uploaded successfully".to_string(),
            video_id: count + 1,
        })
    }
}

fn title_matches(video: &Video, lowercase_term: &str) -> bool {
    video.title.to_lowercase().contains(lowercase_term)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::{
        catalog::{generator::generate, rng_from_seed},
        repositories::InMemoryRepo,
    };

    fn service() -> VideosService {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let repo = InMemoryRepo::new(generate(&mut rng_from_seed(Some(3)), today));
        VideosService::new(Arc::new(repo), rng_from_seed(Some(3)))
    }

    #[tokio::test]
    async fn test_empty_search_returns_everything_in_order() {
        let service = service();
        let all = service.videos(None).await.unwrap();

        assert_eq!(all.len(), 20);
        assert_eq!(service.videos(Some("")).await.unwrap(), all);
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let service = service();

        assert_eq!(service.videos(Some("SAMPLE")).await.unwrap().len(), 20);

        let found = service.videos(Some("video 1 ")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        // "video 1" also matches 10..=19
        let ids: Vec<u32> = service
            .videos(Some("VIDEO 1"))
            .await
            .unwrap()
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![1, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);

        assert!(service.videos(Some("no such title")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_does_not_touch_views() {
        let service = service();
        let before = service.videos(None).await.unwrap();

        service.videos(Some("sample")).await.unwrap();
        service.videos_by_category("Movie").await.unwrap();
        service.suggestions(Some("sample")).await.unwrap();
        service.featured().await.unwrap();

        assert_eq!(service.videos(None).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_get_by_id_counts_each_view() {
        let service = service();
        let before = service.videos(None).await.unwrap()[4].clone();

        service.video(5).await.unwrap();
        service.video(5).await.unwrap();
        let after = service.video(5).await.unwrap();

        assert_eq!(after.views, before.views + 3);
        assert_eq!(Video { views: before.views, ..after }, before);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let service = service();

        assert_eq!(service.video(9999).await, Err(crate::Error::NotFound));
    }

    #[tokio::test]
    async fn test_featured_comes_from_catalog() {
        let service = service();
        let all = service.videos(None).await.unwrap();

        for _ in 0..10 {
            let featured = service.featured().await.unwrap();
            assert!(all.contains(&featured));
        }
    }

    #[tokio::test]
    async fn test_categories_are_distinct_and_present() {
        let service = service();
        let all = service.videos(None).await.unwrap();
        let categories = service.categories().await.unwrap();

        let unique: HashSet<&String> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        for category in &categories {
            assert!(all.iter().any(|v| v.category.to_str() == category));
        }
        for video in &all {
            assert!(categories.iter().any(|c| c == video.category.to_str()));
        }
    }

    #[tokio::test]
    async fn test_videos_by_category_is_exact() {
        let service = service();
        let all = service.videos(None).await.unwrap();
        let category = all[0].category.to_str();

        let matched = service.videos_by_category(category).await.unwrap();
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|v| v.category.to_str() == category));
        assert_eq!(
            matched.len(),
            all.iter().filter(|v| v.category == all[0].category).count()
        );

        let shouted = category.to_uppercase();
        assert!(service.videos_by_category(&shouted).await.unwrap().is_empty());
        assert!(service
            .videos_by_category("Nonexistent")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_need_two_chars() {
        let service = service();

        assert!(service.suggestions(None).await.unwrap().is_empty());
        assert!(service.suggestions(Some("a")).await.unwrap().is_empty());
        assert!(service.suggestions(Some("S")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_are_capped_titles() {
        let service = service();
        let all = service.videos(None).await.unwrap();

        let suggestions = service.suggestions(Some("sAmPlE")).await.unwrap();
        let expected: Vec<String> = all.iter().take(5).map(|v| v.title.clone()).collect();
        assert_eq!(suggestions, expected);

        let suggestions = service.suggestions(Some("video 2")).await.unwrap();
        assert_eq!(suggestions, vec![all[1].title.clone(), all[19].title.clone()]);
    }

    #[tokio::test]
    async fn test_upload_does_not_grow_catalog() {
        let service = service();

        let ack = service.upload().await.unwrap();
        assert_eq!(ack.video_id, 21);
        assert_eq!(service.upload().await.unwrap().video_id, 21);
        assert_eq!(service.videos(None).await.unwrap().len(), 20);
    }
}
