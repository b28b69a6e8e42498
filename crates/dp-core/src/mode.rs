// ABOUTME: Visibility mode of the secondary (log) pane.
// ABOUTME: Collapsed shows a single strip, Expanded shows the full log.

use serde::{Deserialize, Serialize};

/// Property key the mode is persisted under in a container's store
pub const MODE_KEY: &str = "logDisplayState";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogMode {
    /// Log pane reduced to its header strip (initial state)
    #[default]
    Collapsed,
    /// Log pane shown at full height
    Expanded,
}

impl LogMode {
    pub fn toggled(self) -> LogMode {
        match self {
            LogMode::Collapsed => LogMode::Expanded,
            LogMode::Expanded => LogMode::Collapsed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogMode::Collapsed => "collapsed",
            LogMode::Expanded => "expanded",
        }
    }

    /// Parse a persisted value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<LogMode> {
        match value {
            "collapsed" => Some(LogMode::Collapsed),
            "expanded" => Some(LogMode::Expanded),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
