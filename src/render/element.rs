use crate::dom::{create_element, AttrValue, EventHandler, Node, ON_CLICK};

use super::context::RenderError;

/// Marker type for a child that is already a built node.
pub struct StaticChild;

/// Marker type for a child produced by a zero-argument closure.
pub struct DeferredChild;

/// One child of an element under construction: either a built node or a
/// closure that produces one (component-as-child composition). Closures
/// run immediately during construction.
pub enum Child {
    Built(Node),
    Deferred(Box<dyn FnOnce() -> Result<Node, RenderError>>),
}

/// Trait for values accepted as element children.
///
/// The marker type parameter disambiguates between already-built nodes
/// and component closures, which would otherwise need overlapping impls.
/// It defaults to `StaticChild` and is inferred at call sites.
pub trait IntoChild<Marker = StaticChild> {
    fn into_child(self) -> Child;
}

impl IntoChild<StaticChild> for Node {
    fn into_child(self) -> Child {
        Child::Built(self)
    }
}

impl IntoChild<StaticChild> for &Node {
    fn into_child(self) -> Child {
        Child::Built(self.clone())
    }
}

impl<F> IntoChild<DeferredChild> for F
where
    F: FnOnce() -> Result<Node, RenderError> + 'static,
{
    fn into_child(self) -> Child {
        Child::Deferred(Box::new(self))
    }
}

/// Construct one node: allocate it, apply each attribute in order (last
/// write wins), then append each child. Deferred children are invoked on
/// the spot and their output appended.
///
/// The node is returned unattached; the caller is responsible for
/// placement.
pub fn create_node<N, V>(
    tag: &str,
    attributes: impl IntoIterator<Item = (N, V)>,
    children: impl IntoIterator<Item = Child>,
) -> Result<Node, RenderError>
where
    N: Into<String>,
    V: Into<AttrValue>,
{
    let node = create_element(tag)?;
    for (name, value) in attributes {
        node.set_attribute(name, value);
    }
    for child in children {
        let child = match child {
            Child::Built(node) => node,
            Child::Deferred(component) => component()?,
        };
        node.append_child(&child);
    }
    Ok(node)
}

/// Chainable element construction, sugar over [`create_node`]:
///
/// ```ignore
/// el("div")
///     .attr("style", "display: flex")
///     .child(el("h1").attr("text", count).build()?)
///     .child(move || item_list(&ctx))
///     .build()
/// ```
pub struct Element {
    tag: String,
    attributes: Vec<(String, AttrValue)>,
    children: Vec<Child>,
}

/// Start building an element of the given kind.
pub fn el(tag: impl Into<String>) -> Element {
    Element {
        tag: tag.into(),
        attributes: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn on_click(self, callback: impl Fn() + 'static) -> Self {
        self.attr(ON_CLICK, EventHandler::new(callback))
    }

    pub fn child<M>(mut self, child: impl IntoChild<M>) -> Self {
        self.children.push(child.into_child());
        self
    }

    pub fn build(self) -> Result<Node, RenderError> {
        create_node(&self.tag, self.attributes, self.children)
    }
}
