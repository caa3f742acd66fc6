//! Generic UI tree traversal.
//!
//! # Architecture
//!
//! - `node`: `Node` trait, `NodeKind`, `KindSet` capability descriptor and child `Relation`s
//! - `visitor`: depth-first pre-order `walk`
//! - `widget`: `Widget`, an owned serde-friendly tree implementing `Node`

mod node;
mod visitor;
mod widget;

pub use node::{KindSet, Node, NodeKind, Relation};
pub use visitor::{count_nodes, walk};
pub use widget::Widget;
