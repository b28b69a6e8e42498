// ABOUTME: Shared types and configuration for dualpane.
// ABOUTME: Defines log modes, sizes, layout config and property stores.

pub mod config;
pub mod geometry;
pub mod mode;
pub mod store;

pub use config::{ConfigError, LayoutConfig, ReportedHeights};
pub use geometry::{PaneSize, Size};
pub use mode::{LogMode, MODE_KEY};
pub use store::{FileStore, MemoryStore, PropertyStore, StoreError};
