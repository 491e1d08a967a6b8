use tracing::warn;

use crate::{models::users::UserProfile, Error, Result};

pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Tokens are not verified; any `Bearer ` credential yields the stub profile.
    pub fn profile(&self, authorization: Option<&str>) -> Result<UserProfile> {
        match authorization.and_then(bearer_token) {
            Some(_) => Ok(UserProfile::stub()),
            None => {
                warn!("Profile requested without a bearer credential");
                Err(Error::Unauthorized)
            }
        }
    }
}

pub fn bearer_token(authorization: &str) -> Option<&str> {
    authorization.strip_prefix(BEARER_PREFIX)
}
