//! Settings command module
//!
//! Handles application settings persistence.

use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;

/// Get current application settings
pub async fn get_settings() -> AppResult<AppSettings> {
    AppSettings::load().await
}

/// Save application settings
pub async fn save_settings(mut settings: AppSettings) -> AppResult<()> {
    if settings.sanitize() {
        log::debug!("[save_settings] Stale selections replaced before saving");
    }
    settings.save().await
}
