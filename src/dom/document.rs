use super::node::Node;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("invalid element tag {0:?}")]
    InvalidTag(String),
}

// Tag names: ASCII-alphabetic start, then ASCII alphanumerics or '-'.
fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Allocate a new, unattached element of the given kind.
///
/// The node is not placed anywhere; the caller decides where it goes.
pub fn create_element(tag: &str) -> Result<Node, DomError> {
    if !is_valid_tag(tag) {
        return Err(DomError::InvalidTag(tag.to_string()));
    }
    Ok(Node::with_tag(tag.to_string()))
}
