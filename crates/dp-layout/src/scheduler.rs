// ABOUTME: Deferred-call scheduling for frame and fixed-delay callbacks.
// ABOUTME: Includes a manual, virtual-clock scheduler for embedders and tests.

use std::cell::{Cell, RefCell};
use std::time::Duration;

pub type Task = Box<dyn FnOnce() + 'static>;

/// Fire-and-forget scheduling. Tasks cannot be cancelled.
pub trait Scheduler {
    /// Run `task` after the host's next layout/render pass
    fn next_frame(&self, task: Task);

    /// Run `task` once `delay` has elapsed
    fn after(&self, delay: Duration, task: Task);
}

struct Timer {
    deadline: Duration,
    seq: u64,
    task: Task,
}

/// Scheduler driven explicitly by the owner of the event loop
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    frame: RefCell<Vec<Task>>,
    timers: RefCell<Vec<Timer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.frame.borrow().len() + self.timers.borrow().len()
    }

    /// Run the tasks queued for the next frame. Tasks queued while
    /// running wait for the following frame.
    pub fn run_frame(&self) -> usize {
        let tasks = std::mem::take(&mut *self.frame.borrow_mut());
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }

    /// Move the clock forward, running every timer that falls due in
    /// deadline order. Returns the number of timers run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut ran = 0;
        while let Some(timer) = self.pop_due(target) {
            self.now.set(timer.deadline);
            (timer.task)();
            ran += 1;
        }
        self.now.set(target);
        ran
    }

    /// Run frames and timers until nothing is left, advancing the clock
    /// to the last deadline reached.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            ran += self.run_frame();
            let next = self.timers.borrow().iter().map(|t| t.deadline).min();
            match next {
                Some(deadline) => {
                    let by = deadline.saturating_sub(self.now.get());
                    ran += self.advance(by);
                }
                None if self.frame.borrow().is_empty() => return ran,
                None => {}
            }
        }
    }

    fn pop_due(&self, target: Duration) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= target)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(i, _)| i)?;
        Some(timers.swap_remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn next_frame(&self, task: Task) {
        self.frame.borrow_mut().push(task);
    }

    fn after(&self, delay: Duration, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.timers.borrow_mut().push(Timer {
            deadline: self.now.get() + delay,
            seq,
            task,
        });
    }
}
