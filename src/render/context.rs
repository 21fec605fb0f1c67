//! Render context: the whole mutable state of one mounted UI.
//!
//! A [`RenderContext`] owns the root mount point, the root component and
//! the hook-value store. It is an explicit object rather than process
//! state, so independent mounts can coexist without interference: clone
//! the handle to share it, create a fresh one for a separate mount.
//!
//! ## Rendering model
//!
//! There is no diffing and no reconciliation. [`RenderContext::rerender`]
//! discards every child of the root and invokes the root component to
//! build a brand-new tree. State lives outside the tree, in the hook
//! slots, which is the only reason it survives a render pass.
//!
//! ## Hook slots
//!
//! State created with [`use_state`](crate::render::use_state) is stored in
//! an ordered slot vector indexed by call position. The cursor resets to
//! zero at the start of every render pass and advances once per hook call,
//! so the slots line up across passes only if every render makes the same
//! hook calls in the same order. Conditional hook calls misattribute
//! state; this is not guarded against.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{DomError, Node};

/// A root component: builds a fresh tree from the current hook state.
pub type Component = Rc<dyn Fn(&RenderContext) -> Result<Node, RenderError>>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("render context has no mounted root (mount must run first)")]
    NotMounted,
    #[error("render context is already mounted")]
    AlreadyMounted,
    #[error(transparent)]
    Dom(#[from] DomError),
}

pub(crate) type HookSlot = Rc<RefCell<Box<dyn Any>>>;

pub(crate) struct ContextInner {
    /// Mount target; set once, read on every rerender.
    pub(crate) root_node: Option<Node>,
    /// Root component; set once, invoked on every rerender.
    pub(crate) root_component: Option<Component>,
    /// Ordered hook slots. Grows as new call positions are first visited,
    /// never shrinks.
    pub(crate) hook_values: Vec<HookSlot>,
    /// Index of the next hook call in the current render pass.
    pub(crate) hook_cursor: usize,
}

#[derive(Clone)]
pub struct RenderContext {
    pub(crate) inner: Rc<RefCell<ContextInner>>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContextInner {
                root_node: None,
                root_component: None,
                hook_values: Vec::new(),
                hook_cursor: 0,
            })),
        }
    }

    pub(crate) fn from_inner(inner: Rc<RefCell<ContextInner>>) -> Self {
        Self { inner }
    }

    /// Record the mount target and root component, build the initial tree
    /// and append it under `target`.
    ///
    /// Pre-existing children of `target` are left in place. Mounting a
    /// context twice is an error; use a second context for a second mount.
    pub fn mount<F>(&self, target: &Node, component: F) -> Result<(), RenderError>
    where
        F: Fn(&RenderContext) -> Result<Node, RenderError> + 'static,
    {
        let component: Component = Rc::new(component);
        {
            let mut inner = self.inner.borrow_mut();
            if inner.root_node.is_some() {
                return Err(RenderError::AlreadyMounted);
            }
            inner.root_node = Some(target.clone());
            inner.root_component = Some(component.clone());
            inner.hook_cursor = 0;
        }
        log::debug!("mount: building initial tree under <{}>", target.tag());
        let tree = component(self)?;
        target.append_child(&tree);
        Ok(())
    }

    /// Throw the current tree away and build a new one.
    ///
    /// Resets the hook cursor, discards every child of the root and
    /// appends the root component's fresh output. Every node is destroyed
    /// and rebuilt; nothing is updated in place.
    pub fn rerender(&self) -> Result<(), RenderError> {
        let (root, component) = {
            let mut inner = self.inner.borrow_mut();
            let root = inner.root_node.clone().ok_or(RenderError::NotMounted)?;
            let component = inner
                .root_component
                .clone()
                .ok_or(RenderError::NotMounted)?;
            inner.hook_cursor = 0;
            (root, component)
        };
        root.clear_children();
        let tree = component(self)?;
        root.append_child(&tree);
        log::debug!("rerender: rebuilt tree under <{}>", root.tag());
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().root_node.is_some()
    }

    /// Number of hook slots seeded so far.
    pub fn hook_count(&self) -> usize {
        self.inner.borrow().hook_values.len()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
