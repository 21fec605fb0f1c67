use std::fmt;
use std::rc::Rc;

use super::node::{AttrValue, Node};

/// Attribute name under which click handlers are stored.
pub const ON_CLICK: &str = "onclick";

/// A cloneable zero-argument callback attached to a node.
#[derive(Clone)]
pub struct EventHandler {
    callback: Rc<dyn Fn()>,
}

impl EventHandler {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    pub fn invoke(&self) {
        (self.callback)();
    }

    pub(crate) fn ptr_eq(&self, other: &EventHandler) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler")
    }
}

impl Node {
    /// Register a click handler. Re-registering replaces the previous
    /// handler, like any other attribute write.
    pub fn on_click(&self, callback: impl Fn() + 'static) {
        self.set_attribute(ON_CLICK, EventHandler::new(callback));
    }

    /// Synchronously dispatch a click to this node's handler, if any.
    /// Returns whether a handler ran.
    ///
    /// The handler is invoked with no node borrow held, so it may freely
    /// trigger a rerender that drops the very tree this node sits in.
    pub fn click(&self) -> bool {
        match self.attribute(ON_CLICK) {
            Some(AttrValue::Handler(handler)) => {
                handler.invoke();
                true
            }
            _ => {
                log::debug!("click on <{}> with no handler attached", self.tag());
                false
            }
        }
    }
}
