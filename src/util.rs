use std::iter;

use crate::value::{Linkages, NodeId};

/// Which child slot a descent goes into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// `true` from a comparator means "belongs on the left".
    pub(crate) fn from_goes_left(goes_left: bool) -> Self {
        if goes_left {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub(crate) fn child(self, linkages: &Linkages) -> Option<NodeId> {
        match self {
            Self::Left => linkages.left,
            Self::Right => linkages.right,
        }
    }

    pub(crate) fn set_child(self, linkages: &mut Linkages, child: Option<NodeId>) {
        match self {
            Self::Left => linkages.left = child,
            Self::Right => linkages.right = child,
        }
    }
}

/// Each id alongside its successor. The last id is paired with `None`.
pub(crate) fn pairs(ids: &[NodeId]) -> impl Iterator<Item = (NodeId, Option<NodeId>)> + '_ {
    let successors = ids.iter().skip(1).copied().map(Some).chain(iter::once(None));
    ids.iter().copied().zip(successors)
}
