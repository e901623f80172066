//! Conversion configuration

use serde::{Deserialize, Serialize};

/// Annotation key the hub snapshot is stored under by default
pub const DEFAULT_SNAPSHOT_KEY: &str = "netconv.x-k8s.io/conversion-data";

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionConfig {
    /// Side-channel key holding the hub snapshot
    pub snapshot_key: String,
    /// Capture a hub snapshot on down-conversion
    pub preserve_hub_data: bool,
}

impl ConversionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With snapshot key
    #[inline]
    #[must_use]
    pub fn with_snapshot_key(mut self, key: impl Into<String>) -> Self {
        self.snapshot_key = key.into();
        self
    }

    /// With hub data preservation toggled
    #[inline]
    #[must_use]
    pub fn with_preserve_hub_data(mut self, preserve: bool) -> Self {
        self.preserve_hub_data = preserve;
        self
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            preserve_hub_data: true,
        }
    }
}
