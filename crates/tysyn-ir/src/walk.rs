//! Pre-order walks built on `do_children`.
//!
//! Later passes (formatting, instantiation, inlining) walk type syntax
//! through these instead of matching on shapes themselves.

use std::convert::Infallible;

use crate::arena::NodeArena;
use crate::node::{Node, NodeId};

/// Call `f` on `root` and then on every node below it, pre-order.
pub fn visit(nodes: &NodeArena, root: NodeId, f: &mut impl FnMut(NodeId)) {
    f(root);
    nodes
        .do_children(root, |child| {
            visit(nodes, child, f);
            Ok::<(), Infallible>(())
        })
        .unwrap_or_else(|never| match never {});
}

/// Whether any node in the subtree satisfies `pred`.
///
/// Stops at the first match; nodes after it are not visited.
pub fn any(nodes: &NodeArena, root: NodeId, mut pred: impl FnMut(&Node) -> bool) -> bool {
    struct Found;

    fn walk(
        nodes: &NodeArena,
        id: NodeId,
        pred: &mut dyn FnMut(&Node) -> bool,
    ) -> Result<(), Found> {
        if pred(nodes.get(id)) {
            return Err(Found);
        }
        nodes.do_children(id, |child| walk(nodes, child, pred))
    }

    walk(nodes, root, &mut pred).is_err()
}

/// Ids of the subtree in pre-order.
pub fn collect(nodes: &NodeArena, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    visit(nodes, root, &mut |id| out.push(id));
    out
}
