// SPDX-License-Identifier: MPL-2.0
//! This module handles the player configuration, including loading and saving
//! user preferences to a `player.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use new_player::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.auto_hide_delay_ms = Some(2500);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_player.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.auto_hide_delay_ms, Some(2500));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::ui::newtypes::{AutoHideDelay, ProgressInterval};
use crate::error::Result;
use crate::view_model::ViewModelConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "player.toml";
const APP_NAME: &str = "NewPlayer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auto_hide_delay_ms: Option<u32>,
    #[serde(default)]
    pub progress_interval_ms: Option<u32>,
    #[serde(default)]
    pub min_content_ratio: Option<f32>,
    #[serde(default)]
    pub max_content_ratio: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_hide_delay_ms: Some(DEFAULT_AUTO_HIDE_DELAY_MS),
            progress_interval_ms: Some(DEFAULT_PROGRESS_INTERVAL_MS),
            min_content_ratio: Some(DEFAULT_MIN_CONTENT_RATIO),
            max_content_ratio: Some(DEFAULT_MAX_CONTENT_RATIO),
        }
    }
}

impl Config {
    /// Builds the configuration injected into a view-model.
    ///
    /// Timings are clamped to their bounds. Content-ratio bounds go through
    /// the validating setters, so an invalid pair in the file is logged and
    /// the defaults are kept.
    #[must_use]
    pub fn view_model_config(&self) -> ViewModelConfig {
        let mut vm_config = ViewModelConfig::default();
        if let Some(delay) = self.auto_hide_delay_ms {
            vm_config.set_auto_hide_delay(AutoHideDelay::new(delay));
        }
        if let Some(interval) = self.progress_interval_ms {
            vm_config.set_progress_interval(ProgressInterval::new(interval));
        }
        match (self.min_content_ratio, self.max_content_ratio) {
            (Some(min), Some(max)) => {
                vm_config.set_content_ratio_bounds(min, max);
            }
            (Some(min), None) => {
                vm_config.set_min_content_ratio(min);
            }
            (None, Some(max)) => {
                vm_config.set_max_content_ratio(max);
            }
            (None, None) => {}
        }
        vm_config
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring unreadable config {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
