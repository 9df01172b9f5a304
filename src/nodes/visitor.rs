//! Utilities for inspecting the trie structure.

mod pretty_printer;
mod tree_stats;
mod well_formed;

use crate::{Node, NodeType};
pub use pretty_printer::*;
pub use tree_stats::*;
pub use well_formed::*;

/// The `Visitable` trait allows [`Visitor`]s to traverse the structure of the
/// implementing type and produce some output.
pub trait Visitable<T> {
    /// This function provides the default traversal behavior for the
    /// implementing type.
    ///
    /// The implementation should call `visit_with(visitor)` for all relevant
    /// sub-fields of the type. If there are no relevant sub-fields, it should
    /// just produce the default output.
    fn super_visit_with<V: Visitor<T>>(&self, visitor: &mut V) -> V::Output;

    /// This function will traverse the implementing type and execute any
    /// specific logic from the given [`Visitor`].
    ///
    /// For a [`Node`] this dispatches on [`Node::node_type`], so a visitor can
    /// handle split, terminal and leaf nodes separately.
    fn visit_with<V: Visitor<T>>(&self, visitor: &mut V) -> V::Output {
        self.super_visit_with(visitor)
    }
}

impl<T> Visitable<T> for Node<T> {
    fn super_visit_with<V: Visitor<T>>(&self, visitor: &mut V) -> V::Output {
        let mut children = self.children();
        if let Some((_, first)) = children.next() {
            let mut accum = first.visit_with(visitor);
            for (_, child) in children {
                let output = child.visit_with(visitor);
                accum = visitor.combine_output(accum, output);
            }

            accum
        } else {
            visitor.default_output()
        }
    }

    fn visit_with<V: Visitor<T>>(&self, visitor: &mut V) -> V::Output {
        match self.node_type() {
            NodeType::Split => visitor.visit_split(self),
            NodeType::Terminal => visitor.visit_terminal(self),
            NodeType::Leaf => visitor.visit_leaf(self),
        }
    }
}

/// The `Visitor` trait allows creating new operations on the trie by
/// overriding specific handling methods for each of the node types.
pub trait Visitor<T>: Sized {
    /// The type of value that the visitor produces.
    type Output;

    /// Produce the default value of the [`Self::Output`] type.
    fn default_output(&self) -> Self::Output;

    /// Combine two instances of the [`Self::Output`] type for this [`Visitor`].
    fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output;

    /// Visit a node that holds no record and forks two subtrees.
    fn visit_split(&mut self, t: &Node<T>) -> Self::Output {
        t.super_visit_with(self)
    }

    /// Visit a node that holds a record and has children.
    fn visit_terminal(&mut self, t: &Node<T>) -> Self::Output {
        t.super_visit_with(self)
    }

    /// Visit a node that holds a record and has no children.
    fn visit_leaf(&mut self, t: &Node<T>) -> Self::Output {
        t.super_visit_with(self)
    }
}
