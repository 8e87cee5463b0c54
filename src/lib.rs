//! # algolab
//!
//! A teaching corpus of classic data structures and textbook algorithms:
//! - Basic structures: dynamic arrays, linked lists, stacks, queues, hash tables
//! - Intermediate structures: binary trees, binary search trees, heaps, graphs
//! - Algorithms: searching, sorting, graph traversal, shortest paths, MST,
//!   max flow, dynamic programming, greedy, backtracking
//!
//! Every module is a standalone exercise: there is no shared runtime, no
//! persistent state, and no integration between topics beyond this crate
//! root. Each module follows the standard textbook treatment of its topic
//! and carries its own example walkthrough in the demo binary.
//!
//! ## Module Map
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Basic Structures                        │
//! │   list::array   list::linked   stack   queue   hash::table   │
//! ├──────────────────────────────────────────────────────────────┤
//! │                   Intermediate Structures                    │
//! │        tree::binary   tree::bst   heap   graph               │
//! ├──────────────────────────────────────────────────────────────┤
//! │                        Algorithms                            │
//! │   search   sort   graph::{traversal, shortest_path,          │
//! │   components, mst, flow}   dp   greedy   backtracking        │
//! └──────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod list;
pub mod stack;
pub mod queue;
pub mod hash;

pub mod tree;
pub mod heap;
pub mod graph;

pub mod search;
pub mod sort;
pub mod dp;
pub mod greedy;
pub mod backtracking;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AlgoError, Result};

pub use graph::Graph;
pub use hash::HashTable;
pub use heap::{Heap, HeapKind};
pub use list::{DynamicArray, SinglyLinkedList};
pub use queue::Queue;
pub use stack::Stack;
pub use tree::{BinaryTree, Bst};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of algolab
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
