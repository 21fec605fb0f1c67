//! In-memory stand-in for a host document API: node creation, attribute
//! assignment, child attachment, content clearing and synchronous event
//! dispatch. The render layer treats these as provided primitives.

pub mod document;
pub mod event;
pub mod node;

pub use document::{create_element, DomError};
pub use event::{EventHandler, ON_CLICK};
pub use node::{AttrValue, Node};
