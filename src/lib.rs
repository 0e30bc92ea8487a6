//! This crate links a fixed pool of points into lists and binary search
//! trees, and reads those structures back out as sequences.
//!
//! ## Values and builders
//!
//! A [`GraphValue`] carries arbitrary "dimensions" (the data a structure is
//! ordered by) and a set of [`Linkages`]: the `next`, `prev`, `left`, `right`
//! and `parent` edges to other values. A [`GraphBuilder`] owns the values in
//! a shared pool and holds an ordering over them plus a `root` (and, for
//! lists, an `end`).
//!
//! Every builder operation returns a new builder over the _same_ values. The
//! values' linkages are rewritten in place along the way, so builders are
//! best thought of as successive views of one pool:
//!
//! ```
//! use graph_builder::{dimension_comparator, GraphBuilder, GraphValue};
//!
//! let values = [5, 1, 10, 0, 2, 15, 12, 17]
//!     .into_iter()
//!     .map(|x| GraphValue::new().with_dimension("x", x))
//!     .collect();
//! let graph = GraphBuilder::new(values).unwrap();
//!
//! fn xs(graph: &GraphBuilder<GraphValue<&str, i32>>) -> Vec<i32> {
//!     graph.map_values(|v| v.dimensions()["x"])
//! }
//!
//! let tree = graph.binary_search_tree("x");
//! assert_eq!(xs(&tree.to_sorted_order()), vec![0, 1, 2, 5, 10, 12, 15, 17]);
//! assert_eq!(xs(&tree.to_original_order()), vec![5, 1, 10, 0, 2, 15, 12, 17]);
//!
//! let balanced = tree.balance_tree(dimension_comparator("x"));
//! assert!(balanced.is_balanced());
//! assert_eq!(xs(&balanced.to_original_order()), vec![5, 1, 12, 0, 2, 10, 15, 17]);
//! ```
//!
//! ## Linkages are handles, not owners
//!
//! `parent`/`left` and `next`/`prev` point at each other, so edges are
//! [`NodeId`]s into the builder's pool rather than references. The pool owns
//! every value; a value never owns another.
//!
//! ## Binary search trees
//!
//! Trees are built by plain insertion: a comparator `goes_left(candidate,
//! here)` decides at every step whether the candidate descends left or right
//! until it reaches a free slot. Nothing rebalances on insert. Walks over
//! trees (in order, level order, rebalancing) use explicit stacks and queues,
//! so degenerate trees cost memory rather than call depth.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
pub mod builder;
pub mod error;
mod list;
pub mod search;
mod traverse;
mod util;
pub mod value;

pub use builder::GraphBuilder;
pub use error::{GraphError, Result};
pub use search::dimension_comparator;
pub use value::{GraphValue, Link, Linkages, Linked, NodeId};
