use crate::Node;
use tracing::debug;

/// Deallocate the given node and all children of the given node, returning
/// the number of nodes released.
///
/// Children are always released before their parent. This will also drop
/// every record stored in the tree. An absent root releases nothing.
///
/// The walk uses an explicit stack, so tall trees do not recurse once per
/// level as the default `Drop` of nested boxes would.
pub fn deallocate_tree<V>(root: Option<Box<Node<V>>>) -> usize {
    let mut stack: Vec<Box<Node<V>>> = root.into_iter().collect();
    let mut released = 0;

    while let Some(mut node) = stack.pop() {
        let zero = node.branch_zero.take();
        let one = node.branch_one.take();

        if zero.is_none() && one.is_none() {
            drop(node);
            released += 1;
            continue;
        }

        // Revisit this node once both children are gone
        stack.push(node);
        stack.extend(one);
        stack.extend(zero);
    }

    debug!(released, "deallocated tree");
    released
}
