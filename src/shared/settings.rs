use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::core::features::unit_converter::{parse_value, Category};
use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "settings.ts")]
pub struct AppSettings {
    pub preferences: UserPreferences,
}

/// Selections pre-filled in the conversion form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "settings.ts")]
pub struct UserPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
    pub default_value: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences {
                default_category: Category::Length.to_string(),
                default_from_unit: "Meter".to_string(),
                default_to_unit: "Centimeter".to_string(),
                default_value: "1".to_string(),
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "unitconverter", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Settings("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    /// Load settings from `path`, writing defaults there if it does not exist
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Settings(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings: {}", e)))?;
        settings.sanitize();
        Ok(settings)
    }

    pub async fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;
        self.save_to(&path).await
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Settings(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Settings(format!("Failed to write settings file: {}", e)))
    }

    /// Category of the stored defaults, falling back to Length
    pub fn category(&self) -> Category {
        self.preferences.default_category.parse().unwrap_or(Category::Length)
    }

    /// Replace stored selections that no longer match the unit tables
    ///
    /// Returns `true` if anything was changed.
    pub fn sanitize(&mut self) -> bool {
        let category = match self.preferences.default_category.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                log::warn!("[AppSettings] {}, resetting to defaults", e);
                *self = Self::default();
                return true;
            }
        };

        let prefs = &mut self.preferences;
        let mut changed = false;

        // Canonical spelling
        if prefs.default_category != category.name() {
            prefs.default_category = category.to_string();
            changed = true;
        }

        let units = category.units();
        if !category.has_unit(&prefs.default_from_unit) {
            log::warn!(
                "[AppSettings] '{}' is not a {} unit, using {}",
                prefs.default_from_unit, category, units[0]
            );
            prefs.default_from_unit = units[0].to_string();
            changed = true;
        }
        if !category.has_unit(&prefs.default_to_unit) {
            let fallback = units.get(1).unwrap_or(&units[0]);
            log::warn!(
                "[AppSettings] '{}' is not a {} unit, using {}",
                prefs.default_to_unit, category, fallback
            );
            prefs.default_to_unit = fallback.to_string();
            changed = true;
        }
        if parse_value(&prefs.default_value).is_err() {
            log::warn!("[AppSettings] Invalid default value '{}', using 1", prefs.default_value);
            prefs.default_value = "1".to_string();
            changed = true;
        }

        changed
    }
}
