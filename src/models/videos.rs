use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Movie,
    #[serde(rename = "TV Series")]
    TvSeries,
    Animation,
    Documentary,
    Music,
    Education,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Movie,
        Self::TvSeries,
        Self::Animation,
        Self::Documentary,
        Self::Music,
        Self::Education,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvSeries => "TV Series",
            Self::Animation => "Animation",
            Self::Documentary => "Documentary",
            Self::Music => "Music",
            Self::Education => "Education",
        }
    }
}

/// Tag appended to every generated title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Genre {
    Action,
    Comedy,
    SciFi,
    Romance,
    Mystery,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Self::Action,
        Self::Comedy,
        Self::SciFi,
        Self::Romance,
        Self::Mystery,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::SciFi => "Sci-Fi",
            Self::Romance => "Romance",
            Self::Mystery => "Mystery",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    pub owner: String,
    pub views: u64,
    pub duration: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: String,
    pub category: Category,
}
