//! Reading a tree's shape back out as a sequence.
//!
//! Both walks start at the builder's `root` and follow `left`/`right` edges
//! only. They use an explicit stack or queue, so a degenerate (list shaped)
//! tree costs memory rather than call depth.

use std::collections::VecDeque;

use tracing::debug;

use crate::builder::GraphBuilder;
use crate::value::{Linked, NodeId};

impl<N> GraphBuilder<N>
where
    N: Linked,
{
    /// Folds the tree in order: left subtree, node, right subtree. For a
    /// search tree that is ascending comparator order.
    ///
    /// # Examples
    ///
    /// ```
    /// use graph_builder::{GraphBuilder, GraphValue};
    ///
    /// let values = [5, 1, 10, 0, 2].into_iter().map(|x| GraphValue::new().with_dimension("x", x)).collect();
    /// let tree = GraphBuilder::new(values).unwrap().binary_search_tree("x");
    ///
    /// let xs = tree.depth_first_iteration(Vec::new(), |mut xs, v| {
    ///     xs.push(v.dimensions()["x"]);
    ///     xs
    /// });
    /// assert_eq!(xs, vec![0, 1, 2, 5, 10]);
    /// ```
    pub fn depth_first_iteration<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &N) -> A,
    {
        self.fold_ids(&self.in_order(), init, f)
    }

    /// Folds the tree level by level, each level left to right.
    pub fn breadth_first_iteration<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &N) -> A,
    {
        self.fold_ids(&self.level_order(), init, f)
    }

    /// A builder whose sequence is this tree in order. Keeps the root.
    pub fn to_sorted_order(&self) -> Self {
        let values = self.in_order();
        debug!(nodes = values.len(), "collected in order");
        self.derive(values, self.root(), None)
    }

    /// A builder whose sequence is this tree in level order. Keeps the root.
    ///
    /// Right after [`search_tree`](Self::search_tree) this reproduces the
    /// order the nodes were inserted in, since each node lands in the first
    /// free slot on its path. Once [`insert_into_search_tree`](Self::insert_into_search_tree)
    /// or [`balance_tree`](Self::balance_tree) reshape the tree it is just
    /// level order.
    pub fn to_original_order(&self) -> Self {
        let values = self.level_order();
        debug!(nodes = values.len(), "collected in level order");
        self.derive(values, self.root(), None)
    }

    pub(crate) fn in_order(&self) -> Vec<NodeId> {
        let nodes = self.pool().borrow();
        let mut order = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cursor = self.root();
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = nodes[id.index()].linkages().left;
            }
            match stack.pop() {
                Some(id) => {
                    order.push(id);
                    cursor = nodes[id.index()].linkages().right;
                }
                None => break,
            }
        }

        order
    }

    pub(crate) fn level_order(&self) -> Vec<NodeId> {
        let nodes = self.pool().borrow();
        let mut order = Vec::with_capacity(self.len());
        let mut queue: VecDeque<NodeId> = self.root().into_iter().collect();
        while let Some(id) = queue.pop_front() {
            order.push(id);
            let linkages = nodes[id.index()].linkages();
            queue.extend(linkages.left);
            queue.extend(linkages.right);
        }

        order
    }

    fn fold_ids<A, F>(&self, ids: &[NodeId], init: A, mut f: F) -> A
    where
        F: FnMut(A, &N) -> A,
    {
        let nodes = self.pool().borrow();
        ids.iter().fold(init, |acc, id| f(acc, &nodes[id.index()]))
    }
}
