// ABOUTME: Collaborator interfaces between the layout controller and its host.
// ABOUTME: Pane lookup, size application, reported-size providers and redraw signal.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use dp_core::PaneSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(pub u64);

/// The two panes a controller manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneRole {
    /// Script editor, takes the remaining space
    Primary,
    /// Log viewer, sized by the collapse mode
    Secondary,
}

impl PaneRole {
    /// Name the host knows the pane by
    pub fn name(self) -> &'static str {
        match self {
            PaneRole::Primary => "script",
            PaneRole::Secondary => "output",
        }
    }
}

/// Height a pane reports to the container's size aggregation.
/// Cloned handles share the value; `get` always returns the last one set.
#[derive(Debug, Clone, Default)]
pub struct ReportedSize(Rc<Cell<u32>>);

impl ReportedSize {
    pub fn new(height: u32) -> Self {
        Self(Rc::new(Cell::new(height)))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub(crate) fn set(&self, height: u32) {
        self.0.set(height);
    }
}

/// Coalescing "visuals are stale" flag the host polls once per frame
#[derive(Debug, Clone, Default)]
pub struct RedrawSignal(Rc<Cell<bool>>);

impl RedrawSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    /// Clear the flag, returning whether a redraw was pending
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Host operations the controller needs. Every call is best effort.
pub trait LayoutHost {
    /// Find a pane by name; `None` while it is not attached yet
    fn find_pane(&self, name: &str) -> Option<PaneId>;

    /// Apply a height range to a pane's visual representation. Idempotent.
    fn apply_size(&mut self, pane: PaneId, size: PaneSize);

    /// Install the provider the container's aggregation polls for `pane`
    fn register_size_provider(&mut self, pane: PaneId, provider: ReportedSize);

    /// Number of input sockets shown in the container header
    fn input_count(&self) -> usize {
        0
    }
}

/// Headless host that records everything applied to it
#[derive(Debug, Default)]
pub struct RecordingHost {
    panes: HashMap<String, PaneId>,
    next_id: u64,
    inputs: usize,
    applied: Vec<(PaneId, PaneSize)>,
    providers: HashMap<PaneId, ReportedSize>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with both managed panes already present
    pub fn with_panes() -> Self {
        let mut host = Self::new();
        host.add_pane(PaneRole::Secondary.name());
        host.add_pane(PaneRole::Primary.name());
        host
    }

    pub fn add_pane(&mut self, name: &str) -> PaneId {
        if let Some(id) = self.panes.get(name) {
            return *id;
        }
        let id = PaneId(self.next_id);
        self.next_id += 1;
        self.panes.insert(name.to_string(), id);
        id
    }

    pub fn set_input_count(&mut self, inputs: usize) {
        self.inputs = inputs;
    }

    pub fn pane(&self, name: &str) -> Option<PaneId> {
        self.panes.get(name).copied()
    }

    /// Every size applied so far, oldest first
    pub fn applied(&self) -> &[(PaneId, PaneSize)] {
        &self.applied
    }

    pub fn last_applied(&self, pane: PaneId) -> Option<PaneSize> {
        self.applied
            .iter()
            .rev()
            .find(|(id, _)| *id == pane)
            .map(|(_, size)| *size)
    }

    /// Poll the provider registered for `pane`
    pub fn reported_height(&self, pane: PaneId) -> Option<u32> {
        self.providers.get(&pane).map(ReportedSize::get)
    }

    /// Sum of reported heights, as the container's aggregation sees it
    pub fn aggregate_height(&self) -> u32 {
        self.providers.values().map(ReportedSize::get).sum()
    }
}

impl LayoutHost for RecordingHost {
    fn find_pane(&self, name: &str) -> Option<PaneId> {
        self.pane(name)
    }

    fn apply_size(&mut self, pane: PaneId, size: PaneSize) {
        self.applied.push((pane, size));
    }

    fn register_size_provider(&mut self, pane: PaneId, provider: ReportedSize) {
        self.providers.insert(pane, provider);
    }

    fn input_count(&self) -> usize {
        self.inputs
    }
}
