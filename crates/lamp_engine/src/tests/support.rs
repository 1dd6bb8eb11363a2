//! Recording host used by behavior tests
//!
//! Counts scheduling calls and logs every model mutation so tests can assert
//! on exactly what a behavior asked of its host.

use crate::animation::{FrameCallback, TaskId, Timeline};
use crate::behavior::Host;
use crate::foundation::math::Vec2;
use crate::scene::{LightContainer, LightHandle, Model, World};
use std::rc::Rc;

/// Model mutation seen by a [`RecordingModel`]
#[derive(Debug, Clone)]
pub enum ModelOp {
    /// `remove_light` was called with this node
    Removed(LightHandle),
    /// `add_light` was called with this node
    Added(LightHandle),
}

impl ModelOp {
    /// Whether this op touched the given node
    pub fn is_for(&self, light: &LightHandle) -> bool {
        match self {
            Self::Removed(node) | Self::Added(node) => Rc::ptr_eq(node, light),
        }
    }
}

/// Model wrapper that logs mutations
#[derive(Debug, Default)]
pub struct RecordingModel {
    /// Real model receiving the mutations
    pub inner: Model,
    /// Mutations in call order
    pub ops: Vec<ModelOp>,
}

impl LightContainer for RecordingModel {
    fn remove_light(&mut self, light: &LightHandle) -> bool {
        self.ops.push(ModelOp::Removed(Rc::clone(light)));
        self.inner.remove_light(light)
    }

    fn add_light(&mut self, light: LightHandle) {
        self.ops.push(ModelOp::Added(Rc::clone(&light)));
        self.inner.add_light(light);
    }
}

/// Host that records what behaviors ask of it
pub struct RecordingHost {
    /// Facing reported to behaviors
    pub direction: Vec2,
    /// Logged model
    pub model: RecordingModel,
    /// Optional world
    pub world: Option<World>,
    /// Scheduler backing `do_for`
    pub timeline: Timeline,
    /// Number of `do_for` calls
    pub scheduled: usize,
    /// Durations passed to `do_for`, in call order
    pub durations: Vec<f32>,
    /// Number of `cancel` calls that stopped a live task
    pub cancelled: usize,
}

impl RecordingHost {
    /// Host facing right, without a world
    pub fn new() -> Self {
        Self {
            direction: Vec2::new(1.0, 0.0),
            model: RecordingModel::default(),
            world: None,
            timeline: Timeline::new(),
            scheduled: 0,
            durations: Vec::new(),
            cancelled: 0,
        }
    }

    /// Builder pattern: Place the host in a world
    #[must_use]
    pub fn with_world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Advance scheduled callbacks by one frame
    pub fn step(&mut self, delta_time: f32) {
        self.timeline.update(delta_time);
    }
}

impl Host for RecordingHost {
    fn direction(&self) -> Vec2 {
        self.direction
    }

    fn model_mut(&mut self) -> &mut dyn LightContainer {
        &mut self.model
    }

    fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    fn do_for(&mut self, duration: f32, callback: FrameCallback) -> TaskId {
        self.scheduled += 1;
        self.durations.push(duration);
        self.timeline.do_for(duration, callback)
    }

    fn cancel(&mut self, task: TaskId) -> bool {
        let cancelled = self.timeline.cancel(task);
        if cancelled {
            self.cancelled += 1;
        }
        cancelled
    }
}
