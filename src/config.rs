// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings come from an optional YAML file in the working directory; any
//! field left out keeps its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "boxlabel.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder opened at startup and where the folder picker starts.
    pub initial_dir: PathBuf,
    /// Directory that receives `annotations.json`.
    pub output_dir: PathBuf,
    /// Smallest drag, in screen pixels along each axis, that counts as a box.
    pub min_span: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_dir: PathBuf::from("dev"),
            output_dir: PathBuf::from("output"),
            min_span: 5.0,
        }
    }
}

impl Config {
    /// Load settings from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let config = Self::from_file(path)?;
            log::info!("Loaded settings from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No {} found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Where exports are written.
    pub fn export_path(&self) -> PathBuf {
        self.output_dir
            .join(crate::io::serialization::EXPORT_FILE_NAME)
    }
}
