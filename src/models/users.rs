use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserProfile {
    pub id: u32,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "joinDate")]
    pub join_date: String,
}

impl UserProfile {
    pub fn stub() -> Self {
        UserProfile {
            id: 1,
            username: "user123".to_string(),
            name: "Video Enthusiast".to_string(),
            email: "user@example.com".to_string(),
            join_date: "2024-01-01".to_string(),
        }
    }
}
