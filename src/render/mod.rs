pub mod context;
pub mod element;
pub mod hooks;

pub use context::{Component, RenderContext, RenderError};
pub use element::{create_node, el, Child, DeferredChild, Element, IntoChild, StaticChild};
pub use hooks::{use_state, StateSetter};
