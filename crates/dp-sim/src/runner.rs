// ABOUTME: Replays a script against a recording host.
// ABOUTME: Captures a layout snapshot after every event.

use std::time::Duration;

use dp_core::{FileStore, LayoutConfig, MemoryStore, PropertyStore, Size, StoreError};
use dp_layout::{LayoutController, LayoutSnapshot, RecordingHost};
use serde::Serialize;

use crate::scheduler::TokioScheduler;
use crate::script::{Event, Script};

#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: Event,
    /// Whether the controller asked for a repaint during this step
    pub redraw: bool,
    pub layout: LayoutSnapshot,
}

/// Run every event in order. Must be awaited inside a `LocalSet`.
pub async fn run(script: &Script, config: LayoutConfig) -> Result<Vec<Step>, StoreError> {
    let mut host = RecordingHost::new();
    host.set_input_count(script.inputs);
    for name in &script.panes {
        host.add_pane(name);
    }

    let store: Box<dyn PropertyStore> = match &script.store {
        Some(path) => Box::new(FileStore::open(path)?),
        None => Box::new(MemoryStore::new()),
    };

    let layout_wait = config.timing.layout_wait_delay();
    let mut controller = LayoutController::new(config, host, TokioScheduler, store);
    let redraw = controller.redraw_signal();
    let mut steps = Vec::with_capacity(script.events.len());

    for (index, event) in script.events.iter().enumerate() {
        tracing::debug!("Event {}: {:?}", index, event);
        match event {
            Event::Attach => {
                controller.attach();
                if script.auto_activate && controller.is_attached() && !controller.is_active() {
                    tokio::time::sleep(layout_wait).await;
                    controller.activate();
                }
            }
            Event::Activate => controller.activate(),
            Event::AddPane { name } => {
                controller.host_mut().add_pane(name);
            }
            Event::Resize { width, height } => controller.on_resize(Size::new(*width, *height)),
            Event::Toggle => controller.toggle(),
            Event::UserResize { height } => controller.on_user_resize(*height),
            Event::Widgets { total } => controller.on_widgets_changed(*total),
            Event::Wait { ms } => tokio::time::sleep(Duration::from_millis(*ms)).await,
        }
        tokio::task::yield_now().await;

        steps.push(Step {
            index,
            event: event.clone(),
            redraw: redraw.take(),
            layout: controller.snapshot(),
        });
    }

    Ok(steps)
}
