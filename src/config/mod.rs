// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Playlist configuration.
//!
//! This module manages the options the playlist reads while navigating, and
//! the configuration file they are persisted in.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_NAME: &str = "subtune";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PlaylistConfig {
    pub version: u32,
    /// Start a song at its default subsong rather than subsong 1.
    pub prefer_default_subsong: bool,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            version: 1,
            prefer_default_subsong: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[source] confy::ConfyError),
    #[error("failed to store configuration")]
    Store(#[source] confy::ConfyError),
}

/// Loads the user configuration, falling back to defaults if it is unreadable.
pub fn load_config() -> PlaylistConfig {
    try_load_config().unwrap_or_else(|e| {
        warn!("Using default playlist configuration: {e}");
        PlaylistConfig::default()
    })
}

pub fn try_load_config() -> Result<PlaylistConfig, ConfigError> {
    confy::load(CONFIG_NAME, None).map_err(ConfigError::Load)
}

pub fn save_config(cfg: &PlaylistConfig) -> Result<(), ConfigError> {
    confy::store(CONFIG_NAME, None, cfg).map_err(ConfigError::Store)
}

/// Loads the configuration from an explicit file, creating it with defaults if
/// it does not exist yet.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<PlaylistConfig, ConfigError> {
    confy::load_path(path).map_err(ConfigError::Load)
}

pub fn save_config_to(path: impl AsRef<Path>, cfg: &PlaylistConfig) -> Result<(), ConfigError> {
    confy::store_path(path, cfg).map_err(ConfigError::Store)
}
