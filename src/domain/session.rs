use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// An authenticated session: the bearer token and who it belongs to.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub jwt_token: String,
    pub user: UserProfile,
    pub established_at: DateTime<Utc>,
}

impl Session {
    pub fn new(jwt_token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            jwt_token: jwt_token.into(),
            user,
            established_at: Utc::now(),
        }
    }
}

// The token never reaches logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user.email)
            .field("established_at", &self.established_at)
            .finish_non_exhaustive()
    }
}
