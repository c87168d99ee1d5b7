//! Small helpers for navigating tree-sitter nodes.

use tree_sitter::Node;

/// Text of a node, or the empty string when the source slice is not valid
/// UTF-8 at that range.
pub fn node_text<'s>(node: Node, source: &'s [u8]) -> &'s str {
    node.utf8_text(source).unwrap_or("")
}

/// First named child with the given grammar kind.
pub fn first_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .find(|child| child.kind() == kind)
}

/// Whether any child (named or anonymous token) has the given kind.
/// Used for keyword-style modifiers like `static`.
pub fn has_token(node: Node, kind: &str) -> bool {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .any(|child| child.kind() == kind)
}

/// All named children, in order.
pub fn named_children<'t>(node: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    (0..node.named_child_count()).filter_map(move |i| node.named_child(i))
}
