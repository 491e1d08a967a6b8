use serde::{Deserialize, Serialize};

/// First value of `key` in a raw query string; repeated keys are not an error.
fn first_value(pairs: Vec<(String, String)>, key: &str) -> Option<String> {
    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchQueryDto {
    pub search: Option<String>,
}

impl SearchQueryDto {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            search: first_value(pairs, "search"),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SuggestionsQueryDto {
    pub q: Option<String>,
}

impl SuggestionsQueryDto {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            q: first_value(pairs, "q"),
        }
    }
}
