pub mod ordered_tree;
pub mod tree;

pub use ordered_tree::OrderedTree;
pub use tree::TreeOps;
