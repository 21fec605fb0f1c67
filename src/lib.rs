//! A tiny educational UI library: components are plain functions, state
//! lives in call-order-indexed hook slots, and every state change throws
//! the whole tree away and rebuilds it from the root. Nothing here is
//! production machinery; the point is to show the mechanism with as few
//! moving parts as possible.

pub mod dom;
pub mod render;

pub mod prelude {
    pub use crate::dom::{create_element, AttrValue, DomError, EventHandler, Node};
    pub use crate::render::{
        create_node, el, use_state, Child, IntoChild, RenderContext, RenderError, StateSetter,
    };
}
