//! Binary search tree construction.
//!
//! Trees here are plain, unbalanced insertion trees: the first node becomes
//! the root and every later node walks down from it, going left whenever the
//! comparator says so and right otherwise, until it finds a free slot. Call
//! [`balance_tree`](GraphBuilder::balance_tree) to rebuild one with minimal
//! height.

use std::cell::RefCell;

use tracing::{debug, trace};

use crate::builder::GraphBuilder;
use crate::util::Side;
use crate::value::{Linkages, Linked, NodeId};

/// Builds the comparator [`binary_search_tree`](GraphBuilder::binary_search_tree)
/// uses: a candidate goes left of a node iff its `key` dimension is strictly
/// less. Ties go right. A node missing the dimension sorts before every node
/// that has it.
///
/// # Examples
///
/// ```
/// use graph_builder::{dimension_comparator, GraphValue};
///
/// let goes_left = dimension_comparator::<GraphValue<&str, i32>>("x");
/// let one = GraphValue::new().with_dimension("x", 1);
/// let two = GraphValue::new().with_dimension("x", 2);
///
/// assert!(goes_left(&one, &two));
/// assert!(!goes_left(&two, &one));
/// assert!(!goes_left(&one, &one));
/// ```
pub fn dimension_comparator<N>(key: N::Key) -> impl Fn(&N, &N) -> bool
where
    N: Linked,
    N::Value: PartialOrd,
{
    move |candidate, here| candidate.dimension(&key) < here.dimension(&key)
}

impl<N> GraphBuilder<N>
where
    N: Linked,
{
    /// Builds a binary search tree ordered by the `key` dimension. See
    /// [`dimension_comparator`] for how nodes are compared.
    pub fn binary_search_tree(&self, key: N::Key) -> Self
    where
        N::Value: PartialOrd,
    {
        self.search_tree(dimension_comparator::<N>(key))
    }

    /// [`binary_search_tree`](Self::binary_search_tree), calling `on_parent`
    /// every time a node gets its `parent` set.
    pub fn binary_search_tree_with<F>(&self, key: N::Key, on_parent: F) -> Self
    where
        N::Value: PartialOrd,
        F: FnMut(&N),
    {
        self.search_tree_with(dimension_comparator::<N>(key), on_parent)
    }

    /// Builds a search tree over the sequence, in sequence order.
    ///
    /// `goes_left(candidate, here)` decides whether `candidate` belongs in
    /// `here`'s left subtree. Existing `left`/`right`/`parent` edges on the
    /// sequence's nodes are discarded first. The returned builder keeps the
    /// same sequence and is rooted at its first node.
    ///
    /// The comparator may read other nodes through [`node`](Self::node) but
    /// must not run transformations.
    pub fn search_tree<C>(&self, goes_left: C) -> Self
    where
        C: FnMut(&N, &N) -> bool,
    {
        self.search_tree_with(goes_left, |_| {})
    }

    /// [`search_tree`](Self::search_tree), calling `on_parent` every time a
    /// node gets its `parent` set.
    pub fn search_tree_with<C, F>(&self, mut goes_left: C, mut on_parent: F) -> Self
    where
        C: FnMut(&N, &N) -> bool,
        F: FnMut(&N),
    {
        {
            let mut nodes = self.pool().borrow_mut();
            for id in self.values() {
                nodes[id.index()].linkages_mut().clear_tree();
            }
        }

        let mut ids = self.values().iter().copied();
        let root = ids.next();
        if let Some(root) = root {
            for candidate in ids {
                attach(self.pool(), root, candidate, &mut goes_left, &mut on_parent);
            }
        }

        let tree = self.derive(self.values().to_vec(), root, None);
        debug!(nodes = tree.len(), root = ?root, "built search tree");
        tree
    }

    /// Adds `node` to the pool and hangs it off the existing tree, walking
    /// down from the current root the same way [`search_tree`](Self::search_tree)
    /// does. If there is no root, `node` becomes it.
    ///
    /// Existing nodes only ever gain a child edge. Any linkages `node`
    /// arrives with are dropped since they can't refer to this pool. The new
    /// node's handle is the last entry of the returned builder's
    /// [`values`](Self::values).
    ///
    /// # Examples
    ///
    /// ```
    /// use graph_builder::{dimension_comparator, GraphBuilder, GraphValue};
    ///
    /// let values = [5, 1, 10].into_iter().map(|x| GraphValue::new().with_dimension("x", x)).collect();
    /// let tree = GraphBuilder::new(values).unwrap().binary_search_tree("x");
    ///
    /// let tree = tree.insert_into_search_tree(GraphValue::new().with_dimension("x", 6), dimension_comparator("x"));
    /// let six = *tree.values().last().unwrap();
    ///
    /// assert_eq!(tree.node(six).unwrap().linkages().parent, Some(tree.values()[2]));
    /// ```
    pub fn insert_into_search_tree<C>(&self, mut node: N, mut goes_left: C) -> Self
    where
        C: FnMut(&N, &N) -> bool,
    {
        *node.linkages_mut() = Linkages::default();
        let id = {
            let mut nodes = self.pool().borrow_mut();
            nodes.push(node);
            NodeId::new(nodes.len() - 1)
        };

        let root = match self.root() {
            Some(root) => {
                attach(self.pool(), root, id, &mut goes_left, &mut |_: &N| {});
                root
            }
            None => id,
        };

        let mut values = self.values().to_vec();
        values.push(id);
        debug!(node = %id, root = %root, "inserted into search tree");
        self.derive(values, Some(root), None)
    }

    /// Hangs an already pooled, unlinked `candidate` under the tree rooted at
    /// `root`.
    pub(crate) fn attach_existing<C>(&self, root: NodeId, candidate: NodeId, goes_left: &mut C)
    where
        C: FnMut(&N, &N) -> bool,
    {
        attach(self.pool(), root, candidate, goes_left, &mut |_: &N| {});
    }
}

/// Walks down from `root` until `candidate` finds a free child slot and links
/// it there. The pool is only borrowed mutably while edges are written so the
/// comparator and callback can still read through the builder.
fn attach<N, C, F>(
    pool: &RefCell<Vec<N>>,
    root: NodeId,
    candidate: NodeId,
    goes_left: &mut C,
    on_parent: &mut F,
) where
    N: Linked,
    C: FnMut(&N, &N) -> bool,
    F: FnMut(&N),
{
    let mut here = root;
    loop {
        let (side, child) = {
            let nodes = pool.borrow();
            let side = Side::from_goes_left(goes_left(&nodes[candidate.index()], &nodes[here.index()]));
            (side, side.child(nodes[here.index()].linkages()))
        };

        match child {
            Some(child) => here = child,
            None => {
                {
                    let mut nodes = pool.borrow_mut();
                    side.set_child(nodes[here.index()].linkages_mut(), Some(candidate));
                    nodes[candidate.index()].linkages_mut().parent = Some(here);
                }
                trace!(node = %candidate, parent = %here, ?side, "placed node");
                on_parent(&pool.borrow()[candidate.index()]);
                return;
            }
        }
    }
}
