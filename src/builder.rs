//! The [`GraphBuilder`] container: a pool of nodes, an ordering over them and
//! the entry points of whatever structure their linkages currently encode.
//!
//! # Examples
//!
//! ```
//! use graph_builder::{GraphBuilder, GraphValue};
//!
//! let values = [3, 1, 2]
//!     .into_iter()
//!     .map(|x| GraphValue::new().with_dimension("x", x))
//!     .collect();
//! let graph = GraphBuilder::new(values).unwrap();
//!
//! // Every transformation hands back a new builder over the very same nodes.
//! let tree = graph.binary_search_tree("x");
//! assert!(tree.shares_pool_with(&graph));
//!
//! let sorted = tree.to_sorted_order();
//! assert_eq!(sorted.map_values(|v| v.dimensions()["x"]), vec![1, 2, 3]);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::{GraphError, Result};
use crate::value::{Linkages, Linked, NodeId};

/// An ordered view over a shared pool of nodes plus a `root` (head of a list
/// or root of a tree) and, for lists, an `end`.
///
/// Transformations never touch the builder they are called on. They rewrite
/// the linkages of the pooled nodes in place and return a new builder that
/// aliases the same pool, so a node keeps its [`NodeId`] across every builder
/// derived from the same construction.
pub struct GraphBuilder<N> {
    pool: Rc<RefCell<Vec<N>>>,
    values: Vec<NodeId>,
    root: Option<NodeId>,
    end: Option<NodeId>,
}

/// Manual implementation of `Clone` so nodes don't have to be `Clone`. A clone
/// shares the pool with the original.
impl<N> Clone for GraphBuilder<N> {
    fn clone(&self) -> Self {
        Self {
            pool: Rc::clone(&self.pool),
            values: self.values.clone(),
            root: self.root,
            end: self.end,
        }
    }
}

impl<N> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self {
            pool: Rc::new(RefCell::new(Vec::new())),
            values: Vec::new(),
            root: None,
            end: None,
        }
    }
}

impl<N> fmt::Debug for GraphBuilder<N>
where
    N: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("GraphBuilder");
        builder
            .field("values", &self.values)
            .field("root", &self.root)
            .field("end", &self.end);
        match self.pool.try_borrow() {
            Ok(nodes) => builder.field("nodes", &*nodes),
            Err(_) => builder.field("nodes", &"<borrowed>"),
        };
        builder.finish()
    }
}

impl<N> GraphBuilder<N>
where
    N: Linked,
{
    /// Wraps `values` without designating a root or an end. The node at
    /// position `i` gets the handle `NodeId::new(i)`.
    ///
    /// Values may arrive with linkages already written on them; those must
    /// point inside `values` and must not close a `left`/`right` or `next`
    /// loop, otherwise this fails with [`GraphError::InvalidArgument`].
    pub fn new(values: Vec<N>) -> Result<Self> {
        Self::with_ends(values, None, None)
    }

    /// Like [`new`](Self::new) but with an explicit `root` and `end`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidArgument`] when `root`, `end` or any pre-set
    /// linkage names a node outside `values`, or when the `left`/`right` or
    /// `next` edges of any value loop back on themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use graph_builder::{GraphBuilder, GraphError, GraphValue, NodeId};
    ///
    /// let values = vec![GraphValue::<&str, i32>::new(), GraphValue::new()];
    /// let graph = GraphBuilder::with_ends(values, Some(NodeId::new(0)), Some(NodeId::new(1)));
    /// assert!(graph.is_ok());
    ///
    /// let values = vec![GraphValue::<&str, i32>::new()];
    /// let graph = GraphBuilder::with_ends(values, Some(NodeId::new(4)), None);
    /// assert!(matches!(graph, Err(GraphError::InvalidArgument(_))));
    /// ```
    pub fn with_ends(values: Vec<N>, root: Option<NodeId>, end: Option<NodeId>) -> Result<Self> {
        let len = values.len();
        check_handle(len, root, "root")?;
        check_handle(len, end, "end")?;
        for (index, value) in values.iter().enumerate() {
            for (link, target) in value.linkages().iter() {
                if target.index() >= len {
                    return Err(GraphError::InvalidArgument(format!(
                        "value {index} links {link:?} to {target} but only {len} values were passed"
                    )));
                }
            }
        }
        check_acyclic(&values, "left/right", |l| [l.left, l.right])?;
        check_acyclic(&values, "next", |l| [l.next, None])?;

        Ok(Self {
            pool: Rc::new(RefCell::new(values)),
            values: (0..len).map(NodeId::new).collect(),
            root,
            end,
        })
    }

    /// A new builder over the same pool.
    pub(crate) fn derive(
        &self,
        values: Vec<NodeId>,
        root: Option<NodeId>,
        end: Option<NodeId>,
    ) -> Self {
        Self {
            pool: Rc::clone(&self.pool),
            values,
            root,
            end,
        }
    }

    pub(crate) fn pool(&self) -> &RefCell<Vec<N>> {
        &self.pool
    }
}

impl<N> GraphBuilder<N> {
    /// Handles of the nodes in this builder, in this builder's order.
    pub fn values(&self) -> &[NodeId] {
        &self.values
    }

    /// Entry point of the current structure.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Tail of the current list. Trees don't have one.
    pub fn end(&self) -> Option<NodeId> {
        self.end
    }

    /// Number of nodes in this builder's sequence.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this builder's sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrows the node behind `id`, if the pool has one.
    ///
    /// The borrow must be released before running another transformation on
    /// any builder sharing this pool.
    pub fn node(&self, id: NodeId) -> Option<Ref<'_, N>> {
        Ref::filter_map(self.pool.borrow(), |nodes| nodes.get(id.index())).ok()
    }

    /// Projects every node of the sequence, in order.
    pub fn map_values<F, R>(&self, mut f: F) -> Vec<R>
    where
        F: FnMut(&N) -> R,
    {
        let nodes = self.pool.borrow();
        self.values
            .iter()
            .filter_map(|id| nodes.get(id.index()))
            .map(|node| f(node))
            .collect()
    }

    /// Whether both builders alias the same node pool.
    pub fn shares_pool_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pool, &other.pool)
    }
}

fn check_handle(len: usize, id: Option<NodeId>, name: &str) -> Result<()> {
    match id {
        Some(id) if id.index() >= len => Err(GraphError::InvalidArgument(format!(
            "{name} {id} is not one of the {len} passed values"
        ))),
        _ => Ok(()),
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    Unseen,
    OnPath,
    Done,
}

/// Depth first over the `edges` of every value, failing as soon as an edge
/// leads back onto the current path. Handles are already known to be in
/// range.
fn check_acyclic<N>(
    values: &[N],
    kind: &str,
    edges: fn(&Linkages) -> [Option<NodeId>; 2],
) -> Result<()>
where
    N: Linked,
{
    let mut marks = vec![Mark::Unseen; values.len()];
    for start in 0..values.len() {
        if marks[start] != Mark::Unseen {
            continue;
        }
        marks[start] = Mark::OnPath;
        // Each entry is a node on the path and the next of its edges to try.
        let mut path = vec![(NodeId::new(start), 0)];
        while let Some((id, edge)) = path.last_mut() {
            let id = *id;
            match edges(values[id.index()].linkages()).get(*edge).copied() {
                Some(target) => {
                    *edge += 1;
                    let Some(target) = target else { continue };
                    match marks[target.index()] {
                        Mark::OnPath => {
                            return Err(GraphError::InvalidArgument(format!(
                                "{kind} edges loop from {id} back to {target}"
                            )));
                        }
                        Mark::Unseen => {
                            marks[target.index()] = Mark::OnPath;
                            path.push((target, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[id.index()] = Mark::Done;
                    path.pop();
                }
            }
        }
    }

    Ok(())
}
