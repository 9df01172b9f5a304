//! Trie node representation and manipulation

mod comparison;
mod operations;
mod representation;

pub mod visitor;

pub use comparison::*;
pub use operations::*;
pub use representation::*;
