//! Depth-first tree walker.

use crate::tree::{Node, Relation};

/// Walk `root` depth-first in pre-order, calling `visit` on every node.
///
/// A node is visited before any of its descendants. After the visit, every
/// relation in the node's `KindSet::relations` is followed in order, so a
/// node that satisfies several kinds has all of its edges walked.
///
/// A context menu attached to a container is a secondary subtree: its items
/// are walked after the container's controls, but the menu itself is not
/// passed to `visit`. A context menu given as `root` is visited like any
/// other root.
///
/// The walker never changes tree structure; `visit` may mutate the node it is
/// given.
///
/// # Example
/// ```
/// use ui_locale::tree::{walk, Node, NodeKind, Widget};
///
/// let mut form = Widget::new(NodeKind::GenericContainer)
///     .with_control(Widget::label("Start"))
///     .with_control(Widget::label("Stop"));
///
/// let mut seen = Vec::new();
/// walk(&mut form, |node| seen.push(node.text().unwrap_or("").to_string()));
/// assert_eq!(seen, vec!["", "Start", "Stop"]);
/// ```
pub fn walk<F>(root: &mut dyn Node, mut visit: F)
where
    F: FnMut(&mut dyn Node),
{
    walk_node(root, &mut visit);
}

fn walk_node(node: &mut dyn Node, visit: &mut dyn FnMut(&mut dyn Node)) {
    visit(&mut *node);
    walk_children(node, visit);
}

fn walk_children(node: &mut dyn Node, visit: &mut dyn FnMut(&mut dyn Node)) {
    for relation in node.kinds().relations() {
        match relation {
            Relation::AttachedContextMenu => {
                node.for_each_child(relation, &mut |menu| walk_children(menu, &mut *visit))
            }
            _ => node.for_each_child(relation, &mut |child| walk_node(child, &mut *visit)),
        }
    }
}

/// Count the nodes reachable from `root`, including `root` itself.
pub fn count_nodes(root: &mut dyn Node) -> usize {
    let mut count = 0;
    walk(root, |_| count += 1);
    count
}
