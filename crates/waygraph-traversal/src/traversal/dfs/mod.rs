//! Depth-first traversal.
//!
//! Two eager forms, recursive ([`dfs_visit`]) and stack-based
//! ([`dfs_visit_stack`]), plus a lazy single-pass iterator ([`DfsIter`]).
//! All three cover the same reachable set; only visitation order differs
//! between the recursive and stack-driven forms.

mod iterator;
mod visit;


pub use self::iterator::DfsIter;
pub use self::visit::{dfs_visit, dfs_visit_stack};
