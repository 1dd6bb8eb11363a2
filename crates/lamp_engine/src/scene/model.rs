//! Host visual model
//!
//! The model is the node group an actor renders. Lamps parent their light
//! nodes here so the lights follow the actor.
//!
//! A light node has a single parent slot. Adding a node to a model first
//! detaches it from whichever model held it before, so a node never shows
//! up in two models at once.

use super::LightHandle;
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

type ChildList = RefCell<Vec<LightHandle>>;

/// Back-link from a light node to the child list of its parent model
#[derive(Debug, Default)]
pub struct ParentSlot(Option<Weak<ChildList>>);

impl ParentSlot {
    /// Whether the node is currently a child of a live model
    pub fn is_set(&self) -> bool {
        self.0.as_ref().is_some_and(|parent| parent.strong_count() > 0)
    }

    fn is(&self, children: &Rc<ChildList>) -> bool {
        self.0
            .as_ref()
            .is_some_and(|parent| Weak::ptr_eq(parent, &Rc::downgrade(children)))
    }
}

// A copied node starts without a parent
impl Clone for ParentSlot {
    fn clone(&self) -> Self {
        Self::default()
    }
}

// Parenting is scene-graph placement, not part of a light's value
impl PartialEq for ParentSlot {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Container that light nodes can be parented into
pub trait LightContainer {
    /// Detach a light node, returns whether it was a child
    fn remove_light(&mut self, light: &LightHandle) -> bool;

    /// Attach a light node as the last child, detaching it from any previous parent
    fn add_light(&mut self, light: LightHandle);
}

/// Node group forming an actor's visual model
#[derive(Debug, Default)]
pub struct Model {
    children: Rc<ChildList>,
}

impl Model {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Child light nodes in draw order
    pub fn lights(&self) -> Ref<'_, [LightHandle]> {
        Ref::map(self.children.borrow(), Vec::as_slice)
    }

    /// Whether the given node is a child of this model
    pub fn contains(&self, light: &LightHandle) -> bool {
        self.children.borrow().iter().any(|child| Rc::ptr_eq(child, light))
    }

    /// Number of child light nodes
    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    /// Whether the model has no light nodes
    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }
}

impl LightContainer for Model {
    fn remove_light(&mut self, light: &LightHandle) -> bool {
        let mut node = light.borrow_mut();
        if !node.parent.is(&self.children) {
            return false;
        }
        node.parent = ParentSlot::default();
        self.children.borrow_mut().retain(|child| !Rc::ptr_eq(child, light));
        true
    }

    fn add_light(&mut self, light: LightHandle) {
        detach(&light);
        light.borrow_mut().parent = ParentSlot(Some(Rc::downgrade(&self.children)));
        self.children.borrow_mut().push(light);
    }
}

/// Remove a node from the child list of its current parent, if any
fn detach(light: &LightHandle) {
    let previous = std::mem::take(&mut light.borrow_mut().parent);
    if let Some(children) = previous.0.and_then(|parent| parent.upgrade()) {
        children.borrow_mut().retain(|child| !Rc::ptr_eq(child, light));
        log::trace!("Model: detached light from previous parent");
    }
}
