//! The payload side of the crate: the points a [`GraphBuilder`](crate::GraphBuilder)
//! arranges and the edges it writes onto them.
//!
//! # Examples
//!
//! ```
//! use graph_builder::{GraphValue, Link, Linked};
//!
//! let value = GraphValue::new().with_dimension("x", 0).with_dimension("y", 1);
//!
//! assert_eq!(value.dimensions().get("y"), Some(&1));
//! assert_eq!(value.dimension(&"x"), Some(&0));
//!
//! // Nothing links anywhere until a builder says so.
//! assert_eq!(value.linkages().get(Link::Next), None);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A handle to one node in a builder's pool. Handles are plain indices: they
/// never own the node they point at, so `parent`/`left` and `next`/`prev`
/// can point at each other freely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The handle of the node at `index` in the sequence a builder was
    /// constructed from.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in its pool.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The names of the structural edges a node can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// Successor in a list.
    Next,
    /// Predecessor in a doubly linked list.
    Prev,
    /// Left child in a tree.
    Left,
    /// Right child in a tree.
    Right,
    /// Structural parent in a tree.
    Parent,
}

impl Link {
    /// Every edge name, in declaration order.
    pub const ALL: [Link; 5] = [Link::Next, Link::Prev, Link::Left, Link::Right, Link::Parent];
}

/// The edges leaving one node. An empty slot means "no such edge".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Linkages {
    /// See [`Link::Next`].
    pub next: Option<NodeId>,
    /// See [`Link::Prev`].
    pub prev: Option<NodeId>,
    /// See [`Link::Left`].
    pub left: Option<NodeId>,
    /// See [`Link::Right`].
    pub right: Option<NodeId>,
    /// See [`Link::Parent`].
    pub parent: Option<NodeId>,
}

impl Linkages {
    /// Reads the edge with the given name.
    pub fn get(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Next => self.next,
            Link::Prev => self.prev,
            Link::Left => self.left,
            Link::Right => self.right,
            Link::Parent => self.parent,
        }
    }

    /// Overwrites the edge with the given name.
    pub fn set(&mut self, link: Link, target: Option<NodeId>) {
        let slot = match link {
            Link::Next => &mut self.next,
            Link::Prev => &mut self.prev,
            Link::Left => &mut self.left,
            Link::Right => &mut self.right,
            Link::Parent => &mut self.parent,
        };
        *slot = target;
    }

    /// Iterates the occupied edges.
    pub fn iter(&self) -> impl Iterator<Item = (Link, NodeId)> + '_ {
        Link::ALL
            .into_iter()
            .filter_map(move |link| self.get(link).map(|target| (link, target)))
    }

    /// Empties the tree edges (`left`, `right`, `parent`) and leaves list
    /// edges alone.
    pub(crate) fn clear_tree(&mut self) {
        self.left = None;
        self.right = None;
        self.parent = None;
    }
}

/// Anything a builder can arrange: it carries comparable dimensions and a
/// set of [`Linkages`] the builder is free to rewrite.
pub trait Linked {
    /// Names of dimensions.
    type Key;
    /// What a dimension holds.
    type Value;

    /// Looks up a single dimension.
    fn dimension(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// The node's edges.
    fn linkages(&self) -> &Linkages;

    /// The node's edges, for rewriting.
    fn linkages_mut(&mut self) -> &mut Linkages;
}

/// A point in a graph: arbitrary dimensions plus links to other points.
#[derive(Clone, Debug)]
pub struct GraphValue<K, V> {
    dimensions: HashMap<K, V>,
    linkages: Linkages,
}

impl<K, V> Default for GraphValue<K, V> {
    fn default() -> Self {
        Self {
            dimensions: HashMap::new(),
            linkages: Linkages::default(),
        }
    }
}

impl<K, V> GraphValue<K, V> {
    /// A value with no dimensions and no linkages.
    pub fn new() -> Self {
        Self::default()
    }

    /// A value carrying the given dimensions.
    pub fn with_dimensions(dimensions: HashMap<K, V>) -> Self {
        Self {
            dimensions,
            linkages: Linkages::default(),
        }
    }

    /// Replaces this value's linkages.
    pub fn with_linkages(self, linkages: Linkages) -> Self {
        Self { linkages, ..self }
    }

    /// Adds (or overwrites) one dimension.
    pub fn with_dimension(mut self, key: K, value: V) -> Self
    where
        K: Eq + Hash,
    {
        self.dimensions.insert(key, value);
        self
    }

    /// All dimensions of this value.
    pub fn dimensions(&self) -> &HashMap<K, V> {
        &self.dimensions
    }

    /// All dimensions of this value, for in-place edits.
    pub fn dimensions_mut(&mut self) -> &mut HashMap<K, V> {
        &mut self.dimensions
    }

    /// The edges currently written on this value.
    pub fn linkages(&self) -> &Linkages {
        &self.linkages
    }

    /// The edges currently written on this value, for in-place edits.
    pub fn linkages_mut(&mut self) -> &mut Linkages {
        &mut self.linkages
    }
}

impl<K, V> Linked for GraphValue<K, V>
where
    K: Eq + Hash,
{
    type Key = K;
    type Value = V;

    fn dimension(&self, key: &K) -> Option<&V> {
        self.dimensions.get(key)
    }

    fn linkages(&self) -> &Linkages {
        &self.linkages
    }

    fn linkages_mut(&mut self) -> &mut Linkages {
        &mut self.linkages
    }
}
