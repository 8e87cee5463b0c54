//! Tree Module
//!
//! Binary trees and binary search trees.
//!
//! ## Responsibilities
//! - `binary`: position-agnostic binary tree filled in level order, with the
//!   four classic traversals
//! - `bst`: ordered binary search tree with the textbook insert, search, and
//!   three-case delete

mod binary;
mod bst;

pub use binary::BinaryTree;
pub use bst::Bst;
