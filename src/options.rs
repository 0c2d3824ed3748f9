//! Group options with TOML preset support.
//!
//! Options serialize to/from TOML so hosts can keep transition presets next
//! to their other UI configuration. All fields use `#[serde(default)]`, so a
//! partial file (e.g. only `controller = "view-property"`) works.

use std::path::Path;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::controller::ControllerKind;
use crate::error::AnimationError;

/// Frame rate hosts use when pumping a group on a fixed clock.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Configuration applied to an
/// [`AnimationManager`](crate::animation::AnimationManager).
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Group")]
#[serde(default)]
pub struct GroupOptions {
    /// Driver variant built when the group is fused.
    #[schemars(title = "Controller")]
    pub controller: ControllerKind,
    /// Explicit group duration in milliseconds. Unset means "longest
    /// member".
    #[schemars(title = "Duration (ms)")]
    pub duration_ms: Option<u64>,
    /// Play the group backwards.
    #[schemars(title = "Reverse")]
    pub reverse: bool,
    /// Frames per second for hosts that pump the group on a fixed clock.
    #[schemars(skip)]
    pub frame_rate: u32,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            controller: ControllerKind::default(),
            duration_ms: None,
            reverse: false,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl GroupOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(GroupOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults; an
    /// unknown controller kind is rejected.
    pub fn from_toml_str(content: &str) -> Result<Self, AnimationError> {
        toml::from_str(content)
            .map_err(|e| AnimationError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AnimationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), AnimationError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AnimationError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Explicit duration, if configured.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms.map(Duration::from_millis)
    }

    /// Time between frames at the configured frame rate. A zero rate falls
    /// back to the default.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        let rate = if self.frame_rate == 0 {
            log::warn!("frame_rate = 0 is invalid, using {DEFAULT_FRAME_RATE}");
            DEFAULT_FRAME_RATE
        } else {
            self.frame_rate
        };
        Duration::from_secs(1) / rate
    }
}
