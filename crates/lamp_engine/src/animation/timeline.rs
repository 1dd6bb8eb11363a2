//! Frame-driven timed callbacks
//!
//! `do_for` registers a callback that runs once per frame with the elapsed
//! time and normalized progress until its duration has passed. Progress
//! reaches exactly 1.0 on the final call, after which the task is dropped.
//! Cancelled tasks are never called again.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled timeline task
    pub struct TaskId;
}

/// Per-frame callback receiving `(elapsed, progress)`
pub type FrameCallback = Box<dyn FnMut(f32, f32)>;

struct ScheduledTask {
    duration: f32,
    elapsed: f32,
    callback: FrameCallback,
}

impl ScheduledTask {
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }
}

/// Scheduler for `do_for` style callbacks
#[derive(Default)]
pub struct Timeline {
    tasks: SlotMap<TaskId, ScheduledTask>,
    total_time: f32,
}

impl Timeline {
    /// Create an empty timeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` every frame for `duration` seconds
    pub fn do_for(&mut self, duration: f32, callback: FrameCallback) -> TaskId {
        let id = self.tasks.insert(ScheduledTask {
            duration,
            elapsed: 0.0,
            callback,
        });
        log::trace!("Timeline: scheduled {:?} for {}s", id, duration);
        id
    }

    /// Cancel a scheduled task
    ///
    /// Returns `false` when the task already finished or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let removed = self.tasks.remove(id).is_some();
        if removed {
            log::trace!("Timeline: cancelled {:?}", id);
        }
        removed
    }

    /// Whether a task is still scheduled
    pub fn is_active(&self, id: TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Number of scheduled tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are scheduled
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Total time advanced through `update`
    pub const fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Advance every task by `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) {
        self.total_time += delta_time;

        let ids: Vec<TaskId> = self.tasks.keys().collect();
        for id in ids {
            let finished = match self.tasks.get_mut(id) {
                Some(task) => {
                    task.elapsed += delta_time;
                    let progress = task.progress();
                    (task.callback)(task.elapsed, progress);
                    progress >= 1.0
                }
                None => false,
            };
            if finished {
                self.tasks.remove(id);
            }
        }
    }
}
