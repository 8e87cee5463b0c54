//! Hash Table Module
//!
//! Associative key-value mapping with separate chaining.
//!
//! ## Responsibilities
//! - Hash keys into a fixed set of buckets
//! - Resolve collisions by chaining within a bucket
//! - Grow and rehash when the load factor passes its limit

mod table;

pub use table::HashTable;
