//! Rebuilding a tree with minimal height.
//!
//! This is a one-shot rebuild, not a self-balancing discipline: nothing keeps
//! the tree balanced once more nodes are inserted.

use tracing::debug;

use crate::builder::GraphBuilder;
use crate::value::{Linked, NodeId};

impl<N> GraphBuilder<N>
where
    N: Linked,
{
    /// Rebuilds the tree from its own in-order sequence: the middle node
    /// (the lower one on even lengths) becomes the root, then the middles of
    /// the left and right halves go in under it, and so on down. Each node is
    /// placed with the same walk as [`insert_into_search_tree`](Self::insert_into_search_tree).
    ///
    /// For a comparator that strictly orders distinct keys the result keeps
    /// the in-order sequence and has height `⌈log2(n + 1)⌉`. Equal keys go
    /// right like everywhere else, which can cost height and reorder ties.
    /// Either way the returned sequence is the new tree's in-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use graph_builder::{dimension_comparator, GraphBuilder, GraphValue};
    ///
    /// let values = (0..7).map(|x| GraphValue::new().with_dimension("x", x)).collect();
    /// let tree = GraphBuilder::new(values).unwrap().binary_search_tree("x");
    /// assert_eq!(tree.height(), 7);
    ///
    /// let balanced = tree.balance_tree(dimension_comparator("x"));
    /// assert_eq!(balanced.height(), 3);
    /// assert_eq!(balanced.root(), Some(balanced.values()[3]));
    /// ```
    pub fn balance_tree<C>(&self, mut goes_left: C) -> Self
    where
        C: FnMut(&N, &N) -> bool,
    {
        let sorted = self.in_order();
        {
            let mut nodes = self.pool().borrow_mut();
            for id in &sorted {
                nodes[id.index()].linkages_mut().clear_tree();
            }
        }

        let mut root = None;
        // Half open ranges of `sorted` still to be placed.
        let mut pending = vec![(0, sorted.len())];
        while let Some((start, end)) = pending.pop() {
            if start >= end {
                continue;
            }
            let mid = start + (end - start - 1) / 2;
            let id = sorted[mid];
            match root {
                Some(root) => self.attach_existing(root, id, &mut goes_left),
                None => root = Some(id),
            }
            pending.push((mid + 1, end));
            pending.push((start, mid));
        }

        // Ties placed from the left half end up to the right of the
        // midpoint, so the sequence is read back off the new shape.
        let tree = self.derive(sorted, root, None).to_sorted_order();
        debug!(nodes = tree.len(), root = ?root, height = tree.height(), "balanced tree");
        tree
    }

    /// Number of nodes on the longest path from the root down `left`/`right`
    /// edges. Zero without a root.
    pub fn height(&self) -> usize {
        let heights = self.subtree_heights();
        self.root().map_or(0, |root| heights[root.index()])
    }

    /// Whether, at every node, the heights of the two subtrees differ by at
    /// most one.
    pub fn is_balanced(&self) -> bool {
        let heights = self.subtree_heights();
        let nodes = self.pool().borrow();
        let height_of = |child: Option<NodeId>| child.map_or(0, |c| heights[c.index()]);

        self.level_order().into_iter().all(|id| {
            let linkages = nodes[id.index()].linkages();
            height_of(linkages.left).abs_diff(height_of(linkages.right)) <= 1
        })
    }

    /// Height of the subtree under every node reachable from the root,
    /// indexed by pool position. Unreachable nodes are left at zero.
    fn subtree_heights(&self) -> Vec<usize> {
        let order = self.level_order();
        let nodes = self.pool().borrow();
        let mut heights = vec![0; nodes.len()];
        // Children come after their parents in level order.
        for id in order.into_iter().rev() {
            let linkages = nodes[id.index()].linkages();
            let left = linkages.left.map_or(0, |c| heights[c.index()]);
            let right = linkages.right.map_or(0, |c| heights[c.index()]);
            heights[id.index()] = left.max(right) + 1;
        }

        heights
    }
}
