// ABOUTME: Event scripts replayed by the simulator.
// ABOUTME: A TOML file listing host events in the order the host would fire them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One host callback, as written in a script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// Bind panes (activates after the layout wait delay when `auto_activate`)
    Attach,
    Activate,
    /// Host makes a pane available late
    AddPane { name: String },
    Resize { width: f32, height: f32 },
    Toggle,
    UserResize { height: f32 },
    /// Total widget count reported after an execution
    Widgets { total: usize },
    /// Let scheduled frame and timer callbacks run
    Wait { ms: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Input sockets shown in the container header
    pub inputs: usize,
    /// Panes present before the first event
    pub panes: Vec<String>,
    /// Persist the collapse mode here instead of in memory
    pub store: Option<PathBuf>,
    pub auto_activate: bool,
    pub events: Vec<Event>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            inputs: 0,
            panes: vec!["output".to_string(), "script".to_string()],
            store: None,
            auto_activate: true,
            events: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Script {
    pub fn load(path: &std::path::Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }
}
