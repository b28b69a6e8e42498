// ABOUTME: Pane layout management for a script/log container.
// ABOUTME: Sizes a script pane around a collapsible log pane without resize feedback loops.

mod controller;
pub mod host;
pub mod scheduler;

pub use controller::{LayoutController, LayoutError, LayoutSnapshot, MANAGED_PANES};
pub use host::{LayoutHost, PaneId, PaneRole, RecordingHost, RedrawSignal, ReportedSize};
pub use scheduler::{ManualScheduler, Scheduler, Task};
