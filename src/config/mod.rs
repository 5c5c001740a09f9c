// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's persisted preferences, loading and saving
//! them to a `settings.toml` file.
//!
//! Construction-time behaviour of a playback session lives in
//! [`PlayerFlags`](crate::video_player::PlayerFlags); this file only keeps what
//! a user expects to survive between sessions.
//!
//! # Examples
//!
//! ```no_run
//! use tube_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.volume = Some(40);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.volume, Some(40));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::{PlaybackRate, Volume};
use crate::error::Result;
use crate::ui::state::OverlayTimeout;
use crate::video_player::ThumbnailQuality;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TubeLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub overlay_timeout_secs: Option<u32>,
    #[serde(default)]
    pub volume: Option<u8>,
    #[serde(default)]
    pub playback_rate: Option<f64>,
    #[serde(default)]
    pub thumbnail_quality: Option<ThumbnailQuality>,
    #[serde(default)]
    pub webp_thumbnails: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overlay_timeout_secs: Some(DEFAULT_OVERLAY_TIMEOUT_SECS),
            volume: Some(DEFAULT_VOLUME),
            playback_rate: Some(DEFAULT_PLAYBACK_RATE),
            thumbnail_quality: Some(ThumbnailQuality::default()),
            webp_thumbnails: Some(true),
        }
    }
}

impl Config {
    /// Overlay timeout, clamped to its valid range.
    #[must_use]
    pub fn overlay_timeout(&self) -> OverlayTimeout {
        self.overlay_timeout_secs
            .map(OverlayTimeout::new)
            .unwrap_or_default()
    }

    /// Volume, clamped to its valid range.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume.map(Volume::new).unwrap_or_default()
    }

    /// Playback rate, clamped to its valid range.
    #[must_use]
    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback_rate
            .map(PlaybackRate::new)
            .unwrap_or_default()
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
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
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
