// ABOUTME: Layout configuration handling.
// ABOUTME: Pane height tables, header metrics and timing, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::LogMode;

/// Container size defaults used before the host reports a real size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    pub default_width: u32,
    pub default_height: u32,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            default_width: 450,
            default_height: 300,
        }
    }
}

/// Space above the panes taken by the container title and input sockets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSettings {
    pub title_height: u32,
    pub socket_height: u32,
    pub socket_spacing: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            title_height: 30,
            socket_height: 20,
            socket_spacing: 5,
            min_height: 80,
            max_height: 250,
        }
    }
}

impl HeaderSettings {
    /// Header height for a container with `inputs` input sockets
    pub fn height(&self, inputs: usize) -> u32 {
        if inputs == 0 {
            return self.min_height;
        }
        let per_socket = self.socket_height.saturating_add(self.socket_spacing);
        let inputs = u32::try_from(inputs).unwrap_or(u32::MAX);
        let height = self
            .title_height
            .saturating_add(inputs.saturating_mul(per_socket));
        height.max(self.min_height).min(self.max_height)
    }
}

/// Height a pane reports to the container's size aggregation, per mode.
/// Includes the pane's share of the inter-pane spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedHeights {
    pub collapsed: u32,
    pub expanded: u32,
}

impl ReportedHeights {
    pub fn constant(height: u32) -> Self {
        Self {
            collapsed: height,
            expanded: height,
        }
    }

    pub fn for_mode(&self, mode: LogMode) -> u32 {
        match mode {
            LogMode::Collapsed => self.collapsed,
            LogMode::Expanded => self.expanded,
        }
    }
}

/// Script pane: takes whatever space the log pane leaves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryPane {
    pub min_height: u32,
    pub max_height_extra: u32,
    /// Share of the available height given to the pane on first attach
    pub initial_ratio: f64,
    pub reported: ReportedHeights,
}

impl Default for PrimaryPane {
    fn default() -> Self {
        Self {
            min_height: 50,
            max_height_extra: 100,
            initial_ratio: 0.65,
            reported: ReportedHeights::constant(174),
        }
    }
}

/// Log pane: height comes from the mode table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryPane {
    pub collapsed_height: u32,
    pub expanded_height: u32,
    pub max_height_extra: u32,
    pub reported: ReportedHeights,
}

impl Default for SecondaryPane {
    fn default() -> Self {
        Self {
            collapsed_height: 53,
            expanded_height: 200,
            max_height_extra: 100,
            reported: ReportedHeights::constant(90),
        }
    }
}

impl SecondaryPane {
    pub fn height(&self, mode: LogMode) -> u32 {
        match mode {
            LogMode::Collapsed => self.collapsed_height,
            LogMode::Expanded => self.expanded_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Delay before the resize guard is released after applying sizes
    pub resize_guard_delay_ms: u64,
    /// Delay between attaching panes and activating the controller
    pub layout_wait_delay_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            resize_guard_delay_ms: 100,
            layout_wait_delay_ms: 100,
        }
    }
}

impl TimingSettings {
    pub fn resize_guard_delay(&self) -> Duration {
        Duration::from_millis(self.resize_guard_delay_ms)
    }

    pub fn layout_wait_delay(&self) -> Duration {
        Duration::from_millis(self.layout_wait_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between log pane and script pane
    pub spacing: u32,
    pub container: ContainerSettings,
    pub header: HeaderSettings,
    pub primary: PrimaryPane,
    pub secondary: SecondaryPane,
    pub timing: TimingSettings,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 30,
            container: ContainerSettings::default(),
            header: HeaderSettings::default(),
            primary: PrimaryPane::default(),
            secondary: SecondaryPane::default(),
            timing: TimingSettings::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl LayoutConfig {
    /// Get the default config file path (~/.config/dualpane/layout.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dualpane").join("layout.toml"))
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
