// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for PIECEQ.
//!
//! Game settings are loaded from a YAML file and can be overridden by
//! command-line flags at startup.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// Queue capacity (number of upcoming pieces held at once)
    #[serde(default = "default_capacity")]
    pub queue_capacity: usize,
    /// Fixed RNG seed; omit for an entropy seed drawn at startup
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_capacity() -> usize {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_capacity(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a game configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a game configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check that the configuration describes a playable game
    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            bail!("queue_capacity must be positive");
        }
        Ok(())
    }
}
