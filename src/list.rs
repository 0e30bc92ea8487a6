//! Linked list construction.

use tracing::debug;

use crate::builder::GraphBuilder;
use crate::util::pairs;
use crate::value::Linked;

impl<N> GraphBuilder<N>
where
    N: Linked,
{
    /// Links the sequence into a singly linked list: every node's `next`
    /// points at its successor and its `parent` is cleared. The first node
    /// becomes the `root`, the last one the `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use graph_builder::{GraphBuilder, GraphValue};
    ///
    /// let values = (0..3).map(|x| GraphValue::new().with_dimension("x", x)).collect();
    /// let graph = GraphBuilder::new(values).unwrap();
    /// let list = graph.singly_linked_list();
    ///
    /// let (head, tail) = (list.values()[0], list.values()[2]);
    /// assert_eq!(list.root(), Some(head));
    /// assert_eq!(list.end(), Some(tail));
    /// assert_eq!(list.node(head).unwrap().linkages().next, Some(list.values()[1]));
    /// assert_eq!(list.node(tail).unwrap().linkages().next, None);
    /// ```
    pub fn singly_linked_list(&self) -> Self {
        self.singly_linked_list_with(|_, _| {})
    }

    /// [`singly_linked_list`](Self::singly_linked_list), calling `each_pair`
    /// with every node and its successor once the links are written. The last
    /// node is passed with `None`.
    pub fn singly_linked_list_with<F>(&self, each_pair: F) -> Self
    where
        F: FnMut(&N, Option<&N>),
    {
        {
            let mut nodes = self.pool().borrow_mut();
            for (node, next) in pairs(self.values()) {
                let linkages = nodes[node.index()].linkages_mut();
                linkages.next = next;
                linkages.parent = None;
            }
        }

        let list = self.derive(
            self.values().to_vec(),
            self.values().first().copied(),
            self.values().last().copied(),
        );
        debug!(nodes = list.len(), root = ?list.root(), end = ?list.end(), "linked singly linked list");
        list.visit_pairs(each_pair);
        list
    }

    /// Links the sequence into a doubly linked list. Same as
    /// [`singly_linked_list`](Self::singly_linked_list) with every successor's
    /// `prev` pointing back and the head's `prev` cleared.
    pub fn doubly_linked_list(&self) -> Self {
        self.doubly_linked_list_with(|_, _| {})
    }

    /// [`doubly_linked_list`](Self::doubly_linked_list) with the same
    /// callback contract as [`singly_linked_list_with`](Self::singly_linked_list_with).
    pub fn doubly_linked_list_with<F>(&self, each_pair: F) -> Self
    where
        F: FnMut(&N, Option<&N>),
    {
        let list = self.singly_linked_list();
        {
            let mut nodes = list.pool().borrow_mut();
            if let Some(head) = list.root() {
                nodes[head.index()].linkages_mut().prev = None;
            }
            for (node, next) in pairs(list.values()) {
                if let Some(next) = next {
                    nodes[next.index()].linkages_mut().prev = Some(node);
                }
            }
        }

        debug!(nodes = list.len(), "linked prev edges");
        list.visit_pairs(each_pair);
        list
    }

    fn visit_pairs<F>(&self, mut each_pair: F)
    where
        F: FnMut(&N, Option<&N>),
    {
        let nodes = self.pool().borrow();
        for (node, next) in pairs(self.values()) {
            each_pair(&nodes[node.index()], next.map(|next| &nodes[next.index()]));
        }
    }
}
