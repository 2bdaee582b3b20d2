//! Configuration types for depth-frame log conversion.

use serde::{Deserialize, Serialize};

/// Default output log filename, matching the original Kintinuous tooling.
fn default_log_name() -> String {
    "kintinuous.klg".to_string()
}

/// Default deflate effort level (maximum compression).
fn default_level() -> u32 {
    9
}

/// Top-level conversion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Frame width in samples (X dimension).
    pub width: usize,
    /// Frame height in samples (Y dimension).
    pub height: usize,
    /// Output log filename, created inside the frame directory.
    #[serde(default = "default_log_name")]
    pub log_name: String,
    /// Deflate effort level (0-9, 9 = best compression).
    #[serde(default = "default_level")]
    pub level: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            log_name: default_log_name(),
            level: default_level(),
        }
    }
}

impl ConvertConfig {
    /// Get samples per frame (width * height).
    #[inline]
    pub fn frame_samples(&self) -> usize {
        self.width * self.height
    }

    /// Get raw frame size in bytes (16-bit samples).
    #[inline]
    pub fn frame_bytes(&self) -> usize {
        self.width * self.height * 2
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.level > 9 {
            return Err(ConfigError::InvalidLevel(self.level));
        }
        if self.log_name.is_empty() {
            return Err(ConfigError::EmptyLogName);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Frame dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Deflate level {0} out of range (0-9)")]
    InvalidLevel(u32),
    #[error("Output log name must not be empty")]
    EmptyLogName,
}
