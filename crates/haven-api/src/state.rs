use haven::{Companion, User};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Shared application state passed to all handlers
///
/// The companion owns the session and every chat; handlers only talk to it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub companion: Companion,
}

impl AppState {
    pub fn new(config: Config, companion: Companion) -> Self {
        Self {
            config: Arc::new(config),
            companion,
        }
    }

    /// The signed-in user, or `401` for chat routes
    pub async fn require_user(&self) -> ApiResult<User> {
        self.companion
            .current_user()
            .await
            .ok_or(ApiError::Unauthorized)
    }
}
