// ABOUTME: Two-pane layout controller with a collapsible log pane.
// ABOUTME: Negotiates script/log heights and drops re-entrant resize storms.

use std::cell::Cell;
use std::rc::Rc;

use dp_core::{LayoutConfig, LogMode, PaneSize, PropertyStore, Size, MODE_KEY};
use serde::Serialize;

use crate::host::{LayoutHost, PaneId, PaneRole, RedrawSignal, ReportedSize};
use crate::scheduler::Scheduler;

/// Panes the controller sizes itself; anything beyond these is preview content
pub const MANAGED_PANES: usize = 2;

/// Reasons a transition did nothing this cycle. None of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("panes are not attached yet")]
    NotReady,

    #[error("invalid dimension clamped to 0")]
    InvalidSize,

    #[error("size change already in flight")]
    ReentrantCall,

    #[error("controller already activated")]
    AlreadyActive,
}

#[derive(Debug, Clone, Copy)]
struct Panes {
    primary: PaneId,
    secondary: PaneId,
}

/// Advisory "sizes are being applied" flag. Released by a deferred task;
/// a release only counts if no newer hold happened in the meantime.
#[derive(Debug, Clone, Default)]
struct ResizeGuard {
    held: Rc<Cell<bool>>,
    epoch: Rc<Cell<u64>>,
}

impl ResizeGuard {
    fn is_held(&self) -> bool {
        self.held.get()
    }

    fn hold(&self) -> u64 {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        self.held.set(true);
        epoch
    }

    fn release_task(&self, epoch: u64) -> impl FnOnce() + 'static {
        let held = self.held.clone();
        let current = self.epoch.clone();
        move || {
            if current.get() == epoch {
                held.set(false);
            }
        }
    }
}

#[derive(Debug, Clone)]
struct LayoutState {
    container_size: Size,
    mode: LogMode,
    user_override: Option<u32>,
    preview_latch: bool,
    preview_count: usize,
    primary_height: u32,
    secondary_height: u32,
    active: bool,
}

/// Serializable view of the controller's current layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub container_width: u32,
    pub container_height: u32,
    pub header_height: u32,
    pub mode: LogMode,
    pub primary_height: u32,
    pub secondary_height: u32,
    pub primary_reported: u32,
    pub secondary_reported: u32,
    pub user_override: Option<u32>,
    pub preview_latch: bool,
    pub preview_count: usize,
    pub resizing: bool,
}

pub struct LayoutController<H, S, P> {
    config: LayoutConfig,
    host: H,
    scheduler: S,
    store: P,
    state: LayoutState,
    panes: Option<Panes>,
    guard: ResizeGuard,
    redraw: RedrawSignal,
    primary_reported: ReportedSize,
    secondary_reported: ReportedSize,
}

impl<H, S, P> LayoutController<H, S, P>
where
    H: LayoutHost,
    S: Scheduler,
    P: PropertyStore,
{
    /// Create a controller for one container. The collapse mode is read
    /// from `store`; a missing or unknown value means collapsed.
    pub fn new(config: LayoutConfig, host: H, scheduler: S, store: P) -> Self {
        let mode = store
            .get(MODE_KEY)
            .and_then(|value| LogMode::parse(&value))
            .unwrap_or_default();
        let container_size = Size::new(
            config.container.default_width as f32,
            config.container.default_height as f32,
        );
        let secondary_height = config.secondary.height(mode);
        let primary_reported = ReportedSize::new(config.primary.reported.for_mode(mode));
        let secondary_reported = ReportedSize::new(config.secondary.reported.for_mode(mode));

        Self {
            state: LayoutState {
                container_size,
                mode,
                user_override: None,
                preview_latch: false,
                preview_count: 0,
                primary_height: config.primary.min_height,
                secondary_height,
                active: false,
            },
            config,
            host,
            scheduler,
            store,
            panes: None,
            guard: ResizeGuard::default(),
            redraw: RedrawSignal::new(),
            primary_reported,
            secondary_reported,
        }
    }

    pub fn mode(&self) -> LogMode {
        self.state.mode
    }

    pub fn primary_height(&self) -> u32 {
        self.state.primary_height
    }

    pub fn secondary_height(&self) -> u32 {
        self.state.secondary_height
    }

    pub fn user_override(&self) -> Option<u32> {
        self.state.user_override
    }

    pub fn container_size(&self) -> Size {
        self.state.container_size
    }

    pub fn is_resizing(&self) -> bool {
        self.guard.is_held()
    }

    pub fn is_attached(&self) -> bool {
        self.panes.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn has_preview_widgets(&self) -> bool {
        self.state.preview_latch
    }

    /// Height the given pane currently reports to the container
    pub fn reported_height(&self, role: PaneRole) -> u32 {
        match role {
            PaneRole::Primary => self.primary_reported.get(),
            PaneRole::Secondary => self.secondary_reported.get(),
        }
    }

    /// Flag the host polls to learn the container needs repainting
    pub fn redraw_signal(&self) -> RedrawSignal {
        self.redraw.clone()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Height of the title/input-socket strip above the panes
    pub fn header_height(&self) -> u32 {
        self.config.header.height(self.host.input_count())
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            container_width: self.state.container_size.width_units(),
            container_height: self.state.container_size.height_units(),
            header_height: self.header_height(),
            mode: self.state.mode,
            primary_height: self.state.primary_height,
            secondary_height: self.state.secondary_height,
            primary_reported: self.primary_reported.get(),
            secondary_reported: self.secondary_reported.get(),
            user_override: self.state.user_override,
            preview_latch: self.state.preview_latch,
            preview_count: self.state.preview_count,
            resizing: self.guard.is_held(),
        }
    }

    /// Bind both panes and apply their initial sizes. Safe to call again
    /// while panes are still missing; a no-op once bound.
    pub fn attach(&mut self) {
        if let Err(err) = self.try_attach() {
            skipped("attach", &err);
        }
    }

    /// Second lifecycle phase: apply the persisted mode and enable toggling.
    /// Runs at most once, and only after a successful `attach`.
    pub fn activate(&mut self) {
        if let Err(err) = self.try_activate() {
            skipped("activate", &err);
        }
    }

    /// Flip the log pane between collapsed and expanded
    pub fn toggle(&mut self) {
        if let Err(err) = self.try_toggle() {
            skipped("toggle", &err);
        }
    }

    /// Container was resized by the host
    pub fn on_resize(&mut self, size: Size) {
        if let Err(err) = self.try_resize(size) {
            skipped("resize", &err);
        }
    }

    /// The primary pane's rendered height changed outside of a resize
    pub fn on_user_resize(&mut self, observed_height: f32) {
        if let Err(err) = self.try_user_resize(observed_height) {
            skipped("user resize", &err);
        }
    }

    /// Extra preview panes appeared in the container. Latches for the
    /// rest of the session.
    pub fn on_preview_widgets_detected(&mut self, count: usize) {
        if count == 0 || self.state.preview_latch {
            return;
        }
        tracing::info!("Preview widgets detected: {} extra panes", count);
        self.state.preview_latch = true;
        self.state.preview_count = count;
        self.state.user_override = None;
        // dropped while the guard is held; primary keeps its old height until the next resize
        let size = self.state.container_size;
        self.on_resize(size);
    }

    /// Host reports its total widget count after an execution
    pub fn on_widgets_changed(&mut self, total: usize) {
        self.on_preview_widgets_detected(total.saturating_sub(MANAGED_PANES));
    }

    fn try_attach(&mut self) -> Result<(), LayoutError> {
        if self.panes.is_some() {
            return Ok(());
        }
        let primary = self.host.find_pane(PaneRole::Primary.name());
        let secondary = self.host.find_pane(PaneRole::Secondary.name());
        let (Some(primary), Some(secondary)) = (primary, secondary) else {
            return Err(LayoutError::NotReady);
        };
        let panes = Panes { primary, secondary };
        self.panes = Some(panes);

        self.host
            .register_size_provider(primary, self.primary_reported.clone());
        self.host
            .register_size_provider(secondary, self.secondary_reported.clone());

        let epoch = self.guard.hold();
        let available = self.available_height();
        let initial = (f64::from(available) * self.config.primary.initial_ratio).floor() as u32;
        self.state.primary_height = initial.max(self.config.primary.min_height);
        self.apply_secondary(panes);
        self.apply_primary(panes);
        self.redraw.request();
        self.release_guard_later(epoch);

        tracing::info!(
            "Attached panes: primary={:?} secondary={:?} mode={}",
            primary,
            secondary,
            self.state.mode
        );
        Ok(())
    }

    fn try_activate(&mut self) -> Result<(), LayoutError> {
        if self.state.active {
            return Err(LayoutError::AlreadyActive);
        }
        let panes = self.panes.ok_or(LayoutError::NotReady)?;
        if self.store.get(MODE_KEY).is_none() {
            self.persist_mode();
        }
        self.apply_mode(panes);
        self.state.active = true;
        Ok(())
    }

    fn try_toggle(&mut self) -> Result<(), LayoutError> {
        let panes = self.panes.ok_or(LayoutError::NotReady)?;
        if !self.state.active {
            return Err(LayoutError::NotReady);
        }
        let mode = self.state.mode.toggled();
        tracing::info!("Log pane {} -> {}", self.state.mode, mode);
        self.state.mode = mode;
        self.persist_mode();
        self.apply_mode(panes);
        Ok(())
    }

    fn try_resize(&mut self, size: Size) -> Result<(), LayoutError> {
        let panes = self.panes.ok_or(LayoutError::NotReady)?;
        if self.guard.is_held() {
            return Err(LayoutError::ReentrantCall);
        }
        let size = sanitize_size(size);
        let epoch = self.guard.hold();
        self.state.container_size = size;
        self.layout_primary(panes);
        self.redraw.request();
        self.release_guard_later(epoch);
        Ok(())
    }

    fn try_user_resize(&mut self, observed_height: f32) -> Result<(), LayoutError> {
        if self.panes.is_none() {
            return Err(LayoutError::NotReady);
        }
        if self.guard.is_held() {
            return Err(LayoutError::ReentrantCall);
        }
        if !dp_core::geometry::is_valid_dimension(observed_height) {
            clamped("observed height");
        }
        let height = dp_core::geometry::units(observed_height).max(self.config.primary.min_height);
        tracing::debug!("Manual resize detected: height={}", height);
        self.state.user_override = Some(height);
        self.state.primary_height = height;
        Ok(())
    }

    /// Apply everything that depends on the mode: log pane height,
    /// reported heights and a fresh primary height.
    fn apply_mode(&mut self, panes: Panes) {
        let epoch = self.guard.hold();
        // collapse/expand is never a user override
        self.state.user_override = None;
        self.apply_secondary(panes);
        let mode = self.state.mode;
        self.primary_reported
            .set(self.config.primary.reported.for_mode(mode));
        self.secondary_reported
            .set(self.config.secondary.reported.for_mode(mode));
        self.layout_primary(panes);

        self.redraw.request();
        let redraw = self.redraw.clone();
        self.scheduler
            .next_frame(Box::new(move || redraw.request()));
        self.release_guard_later(epoch);
    }

    fn layout_primary(&mut self, panes: Panes) {
        if self.state.preview_latch {
            self.state.primary_height = self.config.primary.min_height;
        } else if self.state.user_override.is_some() {
            return;
        } else {
            self.state.primary_height = self.computed_primary_height();
        }
        self.apply_primary(panes);
    }

    /// Space left for the script pane after header, log pane and spacing.
    /// Floored at `min_height` only; `max_height_extra` widens the applied range instead of capping this.
    fn computed_primary_height(&self) -> u32 {
        self.available_height()
            .saturating_sub(self.state.secondary_height)
            .saturating_sub(self.config.spacing)
            .max(self.config.primary.min_height)
    }

    fn available_height(&self) -> u32 {
        self.state
            .container_size
            .height_units()
            .saturating_sub(self.header_height())
    }

    fn apply_primary(&mut self, panes: Panes) {
        let size = PaneSize::new(
            self.state.primary_height,
            self.config.primary.max_height_extra,
        );
        self.host.apply_size(panes.primary, size);
    }

    fn apply_secondary(&mut self, panes: Panes) {
        let height = self.config.secondary.height(self.state.mode);
        self.state.secondary_height = height;
        let size = PaneSize::new(height, self.config.secondary.max_height_extra);
        self.host.apply_size(panes.secondary, size);
    }

    fn persist_mode(&mut self) {
        if let Err(e) = self.store.set(MODE_KEY, self.state.mode.as_str()) {
            tracing::warn!("Failed to persist log mode: {}", e);
        }
    }

    fn release_guard_later(&self, epoch: u64) {
        let delay = self.config.timing.resize_guard_delay();
        self.scheduler
            .after(delay, Box::new(self.guard.release_task(epoch)));
    }
}

fn sanitize_size(size: Size) -> Size {
    if size.is_valid() {
        size
    } else {
        clamped("container size");
        size.clamped()
    }
}

fn skipped(operation: &str, err: &LayoutError) {
    tracing::debug!("Skipping {}: {}", operation, err);
}

fn clamped(what: &str) {
    tracing::debug!("Clamping {}: {}", what, LayoutError::InvalidSize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use crate::scheduler::ManualScheduler;
    use dp_core::MemoryStore;
    use std::time::Duration;

    type Controller = LayoutController<RecordingHost, ManualScheduler, MemoryStore>;

    fn controller_with(host: RecordingHost, store: MemoryStore) -> Controller {
        LayoutController::new(LayoutConfig::default(), host, ManualScheduler::new(), store)
    }

    /// Attached, activated and settled controller at the default 450x300
    fn ready() -> Controller {
        let mut controller = controller_with(RecordingHost::with_panes(), MemoryStore::new());
        controller.attach();
        controller.activate();
        settle(&controller);
        controller
    }

    fn settle(controller: &Controller) {
        controller.scheduler().run_until_idle();
    }

    fn applied_count(controller: &Controller) -> usize {
        controller.host().applied().len()
    }

    fn primary_applied(controller: &Controller) -> Option<PaneSize> {
        let pane = controller.host().pane("script").unwrap();
        controller.host().last_applied(pane)
    }

    #[test]
    fn initial_layout_is_collapsed() {
        let mut controller = ready();
        assert_eq!(controller.mode(), LogMode::Collapsed);
        assert_eq!(controller.secondary_height(), 53);

        controller.on_resize(Size::new(450.0, 300.0));
        assert_eq!(controller.primary_height(), 137);
        assert_eq!(primary_applied(&controller), Some(PaneSize::new(137, 100)));
    }

    #[test]
    fn attach_uses_initial_ratio() {
        let mut controller = controller_with(RecordingHost::with_panes(), MemoryStore::new());
        controller.attach();
        // (300 - 80) * 0.65 = 143
        assert_eq!(controller.primary_height(), 143);
        assert!(controller.is_attached());
        assert!(!controller.is_active());
    }

    #[test]
    fn missing_panes_make_everything_a_no_op() {
        let mut host = RecordingHost::new();
        host.add_pane("output");
        let mut controller = controller_with(host, MemoryStore::new());

        controller.attach();
        controller.activate();
        controller.toggle();
        controller.on_resize(Size::new(450.0, 600.0));
        controller.on_user_resize(120.0);

        assert!(!controller.is_attached());
        assert_eq!(controller.mode(), LogMode::Collapsed);
        assert_eq!(controller.user_override(), None);
        assert_eq!(applied_count(&controller), 0);
        assert_eq!(controller.container_size(), Size::new(450.0, 300.0));
    }

    #[test]
    fn late_bound_panes_attach_on_retry() {
        let mut host = RecordingHost::new();
        host.add_pane("output");
        let mut controller = controller_with(host, MemoryStore::new());
        controller.attach();
        assert!(!controller.is_attached());

        controller.host_mut().add_pane("script");
        controller.attach();
        assert!(controller.is_attached());
        assert_eq!(applied_count(&controller), 2);

        controller.attach();
        assert_eq!(applied_count(&controller), 2);
    }

    #[test]
    fn activate_runs_at_most_once() {
        let mut controller = ready();
        let before = applied_count(&controller);
        controller.activate();
        assert_eq!(applied_count(&controller), before);
    }

    #[test]
    fn toggle_alternates_and_follows_table() {
        let mut controller = ready();
        for i in 0..6 {
            controller.toggle();
            settle(&controller);
            let expected = if i % 2 == 0 {
                LogMode::Expanded
            } else {
                LogMode::Collapsed
            };
            assert_eq!(controller.mode(), expected);
            assert_eq!(
                controller.secondary_height(),
                controller.config().secondary.height(expected)
            );
        }
    }

    #[test]
    fn toggle_requires_activation() {
        let mut controller = controller_with(RecordingHost::with_panes(), MemoryStore::new());
        controller.attach();
        controller.toggle();
        assert_eq!(controller.mode(), LogMode::Collapsed);
    }

    #[test]
    fn toggle_persists_mode() {
        let mut controller = ready();
        assert_eq!(controller.store().get(MODE_KEY).as_deref(), Some("collapsed"));
        controller.toggle();
        assert_eq!(controller.store().get(MODE_KEY).as_deref(), Some("expanded"));
    }

    #[test]
    fn persisted_mode_is_restored() {
        let mut store = MemoryStore::new();
        store.set(MODE_KEY, "expanded").unwrap();
        let mut controller = controller_with(RecordingHost::with_panes(), store);
        controller.attach();
        controller.activate();

        assert_eq!(controller.mode(), LogMode::Expanded);
        assert_eq!(controller.secondary_height(), 200);
    }

    #[test]
    fn unknown_persisted_mode_falls_back_to_collapsed() {
        let mut store = MemoryStore::new();
        store.set(MODE_KEY, "sideways").unwrap();
        let controller = controller_with(RecordingHost::with_panes(), store);
        assert_eq!(controller.mode(), LogMode::Collapsed);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut controller = ready();
        controller.on_resize(Size::new(450.0, 420.0));
        let first = controller.primary_height();
        settle(&controller);
        controller.on_resize(Size::new(450.0, 420.0));
        assert_eq!(controller.primary_height(), first);
        assert_eq!(first, 420 - 80 - 53 - 30);
    }

    #[test]
    fn reentrant_resize_is_dropped() {
        let mut controller = ready();
        controller.on_resize(Size::new(450.0, 300.0));
        assert!(controller.is_resizing());
        let applied = applied_count(&controller);
        let height = controller.primary_height();

        controller.on_resize(Size::new(450.0, 900.0));
        assert_eq!(applied_count(&controller), applied);
        assert_eq!(controller.primary_height(), height);
        assert_eq!(controller.container_size(), Size::new(450.0, 300.0));
    }

    #[test]
    fn guard_released_after_delay() {
        let mut controller = ready();
        controller.on_resize(Size::new(450.0, 300.0));

        controller.scheduler().advance(Duration::from_millis(99));
        assert!(controller.is_resizing());
        controller.scheduler().advance(Duration::from_millis(1));
        assert!(!controller.is_resizing());

        controller.on_resize(Size::new(450.0, 400.0));
        assert_eq!(controller.primary_height(), 400 - 80 - 53 - 30);
    }

    #[test]
    fn stale_release_does_not_clear_newer_hold() {
        let mut controller = ready();
        controller.toggle();
        controller.scheduler().advance(Duration::from_millis(60));
        controller.toggle();

        // first release falls due here, the second hold is still in flight
        controller.scheduler().advance(Duration::from_millis(50));
        assert!(controller.is_resizing());
        controller.scheduler().advance(Duration::from_millis(50));
        assert!(!controller.is_resizing());
    }

    #[test]
    fn user_override_survives_resize() {
        let mut controller = ready();
        controller.on_user_resize(90.0);
        assert_eq!(controller.user_override(), Some(90));

        let applied = applied_count(&controller);
        controller.on_resize(Size::new(450.0, 700.0));
        assert_eq!(controller.primary_height(), 90);
        assert_eq!(applied_count(&controller), applied);
    }

    #[test]
    fn user_resize_ignored_while_resizing() {
        let mut controller = ready();
        controller.on_resize(Size::new(450.0, 300.0));
        controller.on_user_resize(90.0);
        assert_eq!(controller.user_override(), None);
    }

    #[test]
    fn user_resize_does_not_request_redraw() {
        let mut controller = ready();
        let redraw = controller.redraw_signal();
        redraw.take();
        controller.on_user_resize(90.0);
        assert!(!redraw.is_requested());
    }

    #[test]
    fn small_container_clamps_to_min() {
        let mut controller = ready();
        controller.on_resize(Size::new(450.0, 100.0));
        assert_eq!(controller.primary_height(), 50);
        settle(&controller);
        controller.on_resize(Size::new(450.0, 10.0));
        assert_eq!(controller.primary_height(), 50);
    }

    #[test]
    fn invalid_size_is_clamped() {
        let mut controller = ready();
        controller.on_resize(Size::new(f32::NAN, -40.0));
        assert_eq!(controller.container_size(), Size::new(0.0, 0.0));
        assert_eq!(controller.primary_height(), 50);

        settle(&controller);
        controller.on_user_resize(-5.0);
        assert_eq!(controller.user_override(), Some(50));
    }

    #[test]
    fn user_resize_below_minimum_is_clamped() {
        let mut controller = ready();
        controller.on_user_resize(10.0);
        assert_eq!(controller.user_override(), Some(50));
        assert_eq!(controller.primary_height(), 50);

        controller.on_resize(Size::new(450.0, 500.0));
        assert!(controller.primary_height() >= controller.config().primary.min_height);
        assert_eq!(controller.primary_height(), 50);
    }

    #[test]
    fn preview_latch_forces_minimum() {
        let mut controller = ready();
        controller.on_user_resize(90.0);
        controller.on_widgets_changed(4);

        assert!(controller.has_preview_widgets());
        assert_eq!(controller.user_override(), None);
        assert_eq!(controller.primary_height(), 50);
        assert_eq!(controller.snapshot().preview_count, 2);

        settle(&controller);
        controller.on_resize(Size::new(450.0, 900.0));
        assert_eq!(controller.primary_height(), 50);
    }

    #[test]
    fn preview_latch_is_one_way() {
        let mut controller = ready();
        controller.on_widgets_changed(2);
        assert!(!controller.has_preview_widgets());

        controller.on_preview_widgets_detected(1);
        settle(&controller);
        controller.on_preview_widgets_detected(5);
        controller.on_widgets_changed(0);
        assert!(controller.has_preview_widgets());
        assert_eq!(controller.snapshot().preview_count, 1);

        controller.toggle();
        settle(&controller);
        assert!(controller.has_preview_widgets());
        assert_eq!(controller.primary_height(), 50);
    }

    #[test]
    fn reported_heights_stable_per_mode() {
        let mut config = LayoutConfig::default();
        config.secondary.reported = dp_core::ReportedHeights {
            collapsed: 90,
            expanded: 230,
        };
        let mut controller = LayoutController::new(
            config,
            RecordingHost::with_panes(),
            ManualScheduler::new(),
            MemoryStore::new(),
        );
        controller.attach();
        controller.activate();
        let output = controller.host().pane("output").unwrap();
        assert_eq!(controller.host().reported_height(output), Some(90));

        controller.scheduler().run_until_idle();
        controller.on_resize(Size::new(450.0, 800.0));
        assert_eq!(controller.reported_height(PaneRole::Secondary), 90);
        assert_eq!(controller.reported_height(PaneRole::Primary), 174);

        controller.toggle();
        assert_eq!(controller.host().reported_height(output), Some(230));
        assert_eq!(controller.host().aggregate_height(), 174 + 230);
    }

    #[test]
    fn header_grows_with_inputs() {
        let mut host = RecordingHost::with_panes();
        host.set_input_count(4);
        let mut controller = controller_with(host, MemoryStore::new());
        controller.attach();
        controller.activate();
        settle(&controller);

        controller.on_resize(Size::new(450.0, 400.0));
        assert_eq!(controller.header_height(), 130);
        assert_eq!(controller.primary_height(), 400 - 130 - 53 - 30);
    }

    #[test]
    fn toggle_requests_redraw_now_and_next_frame() {
        let mut controller = ready();
        let redraw = controller.redraw_signal();
        redraw.take();

        controller.toggle();
        assert!(redraw.take());
        controller.scheduler().run_frame();
        assert!(redraw.take());
    }

    #[test]
    fn collapse_expand_scenario() {
        let mut controller = ready();
        controller.on_resize(Size::new(450.0, 300.0));
        assert_eq!(controller.secondary_height(), 53);
        assert_eq!(controller.primary_height(), 137);
        settle(&controller);

        controller.toggle();
        assert_eq!(controller.mode(), LogMode::Expanded);
        assert_eq!(controller.secondary_height(), 200);
        assert_eq!(controller.primary_height(), 50);
        settle(&controller);

        controller.on_user_resize(90.0);
        assert_eq!(controller.user_override(), Some(90));
        controller.on_resize(Size::new(450.0, 350.0));
        assert_eq!(controller.primary_height(), 90);
        settle(&controller);

        controller.toggle();
        assert_eq!(controller.user_override(), None);
        assert_eq!(controller.secondary_height(), 53);
        assert_eq!(controller.primary_height(), 350 - 80 - 53 - 30);
    }
}
