use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::videos::{Category, Genre, Video};

pub const CATALOG_SIZE: u32 = 20;

/// Builds the synthetic catalog. Ids run 1..=CATALOG_SIZE in order; every other
/// field is drawn from `rng`, and upload dates count back from `today`.
pub fn generate<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<Video> {
    (1..=CATALOG_SIZE).map(|id| generate_video(rng, id, today)).collect()
}

fn generate_video<R: Rng>(rng: &mut R, id: u32, today: NaiveDate) -> Video {
    let genre = Genre::ALL[rng.gen_range(0..Genre::ALL.len())];
    let owner = rng.gen_range(1..=10);
    let views = rng.gen_range(1_000..=1_000_000);
    let minutes = rng.gen_range(1..=2);
    let seconds = rng.gen_range(0..=59);
    let days_ago = rng.gen_range(1..=365);
    let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];

    Video {
        id,
        title: format!("Sample Video {} - {}", id, genre.to_str()),
        description: format!(
            "This is the detailed description of sample video {id}, full of exciting content and storyline."
        ),
        thumbnail_url: format!("https://picsum.photos/400/225?random={id}"),
        video_url: format!("/static/videos/video{id}.mp4"),
        owner: format!("Creator {owner}"),
        views,
        duration: format!("{minutes}:{seconds:02}"),
        upload_date: (today - Duration::days(days_ago))
            .format("%Y-%m-%d")
            .to_string(),
        category,
    }
}
