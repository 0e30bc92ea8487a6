use std::collections::HashSet;

use graph_builder::{dimension_comparator, GraphValue, NodeId};

use crate::{graph, xs};

#[quickcheck]
fn sorted_order_is_sorted_input(keys: Vec<i8>) -> bool {
    let tree = graph(&keys).binary_search_tree("x");

    let mut expected = keys;
    expected.sort();
    xs(&tree.to_sorted_order()) == expected
}

#[quickcheck]
fn sorted_order_is_stable_for_ties(keys: Vec<i8>) -> bool {
    // Ties go right, so equal keys come out in insertion order.
    let tree = graph(&keys).binary_search_tree("x");

    let mut expected: Vec<NodeId> = (0..keys.len()).map(NodeId::new).collect();
    expected.sort_by_key(|id| keys[id.index()]);
    tree.to_sorted_order().values() == expected
}

#[quickcheck]
fn level_order_input_is_reproduced(keys: Vec<i8>) -> bool {
    // Any sequence that is already some tree's level order lists every node
    // after its ancestors, so rebuilding from it lands each node back in its
    // slot and the level order comes out unchanged.
    let level_order = graph(&keys).binary_search_tree("x").to_original_order();
    let rebuilt = level_order.binary_search_tree("x");

    rebuilt.to_original_order().values() == level_order.values()
}

#[test]
fn original_order_right_after_construction() {
    let keys = [5, 1, 10, 0, 2, 15, 12, 17];
    let tree = graph(&keys).binary_search_tree("x");

    assert_eq!(xs(&tree.to_original_order()), keys.to_vec());

    // Not a general guarantee: 0 sits a level below 10 here.
    let tree = graph(&[5, 1, 0, 10]).binary_search_tree("x");
    assert_eq!(xs(&tree.to_original_order()), vec![5, 1, 10, 0]);
}

#[quickcheck]
fn insert_adds_one_leaf_and_keeps_old_edges(keys: Vec<i8>, new_key: i8) -> bool {
    let tree = graph(&keys).binary_search_tree("x");
    let before: Vec<_> = tree.map_values(|v| *v.linkages());

    let grown = tree.insert_into_search_tree(
        GraphValue::new().with_dimension("x", new_key),
        dimension_comparator("x"),
    );
    let new_id = *grown.values().last().unwrap();
    let new_node = grown.node(new_id).unwrap();
    let is_leaf = new_node.linkages().left.is_none() && new_node.linkages().right.is_none();

    // Exactly one old node gained exactly one child edge: the new node.
    let after: Vec<_> = tree.map_values(|v| *v.linkages());
    let changed: Vec<_> = before.iter().zip(&after).filter(|(b, a)| b != a).collect();
    let one_new_edge = match (new_node.linkages().parent, changed.as_slice()) {
        (None, []) => keys.is_empty(),
        (Some(_), [(b, a)]) => {
            (b.left.is_none() && a.left == Some(new_id) && b.right == a.right)
                || (b.right.is_none() && a.right == Some(new_id) && b.left == a.left)
        }
        _ => false,
    };
    drop(new_node);

    let mut expected = keys;
    expected.push(new_key);
    expected.sort();
    is_leaf && one_new_edge && xs(&grown.to_sorted_order()) == expected
}

#[quickcheck]
fn balance_keeps_in_order_and_bounds_height(keys: HashSet<i8>) -> bool {
    let keys: Vec<_> = keys.into_iter().collect();
    let tree = graph(&keys).binary_search_tree("x");
    let before = tree.to_sorted_order();

    let balanced = tree.balance_tree(dimension_comparator("x"));
    let bound = (usize::BITS - keys.len().leading_zeros()) as usize;

    balanced.to_sorted_order().values() == before.values() && balanced.height() <= bound
}

#[test]
fn concrete_tree_shape() {
    //            5
    //           / \
    //          1   10
    //         / \    \
    //        0   2   15
    //                / \
    //               12  17
    let tree = graph(&[5, 1, 10, 0, 2, 15, 12, 17]).binary_search_tree("x");
    let child = |id: usize| {
        let node = tree.node(NodeId::new(id)).unwrap();
        let linkages = node.linkages();
        (
            linkages.left.map(NodeId::index),
            linkages.right.map(NodeId::index),
        )
    };

    assert_eq!(tree.root(), Some(NodeId::new(0)));
    assert_eq!(child(0), (Some(1), Some(2)));
    assert_eq!(child(1), (Some(3), Some(4)));
    assert_eq!(child(2), (None, Some(5)));
    assert_eq!(child(5), (Some(6), Some(7)));
    assert_eq!(xs(&tree.to_sorted_order()), vec![0, 1, 2, 5, 10, 12, 15, 17]);

    let tree = tree.insert_into_search_tree(GraphValue::new().with_dimension("x", 6), dimension_comparator("x"));
    assert_eq!(xs(&tree.to_sorted_order()), vec![0, 1, 2, 5, 6, 10, 12, 15, 17]);
    let tree = tree.insert_into_search_tree(GraphValue::new().with_dimension("x", 11), dimension_comparator("x"));
    assert_eq!(xs(&tree.to_sorted_order()), vec![0, 1, 2, 5, 6, 10, 11, 12, 15, 17]);
}

#[test]
fn sorted_then_original_is_not_a_round_trip() {
    // Level order follows shape, and the sorted view keeps the old shape.
    let tree = graph(&[5, 1, 10]).binary_search_tree("x");
    let sorted = tree.to_sorted_order();

    assert_eq!(xs(&sorted), vec![1, 5, 10]);
    assert_eq!(xs(&sorted.to_original_order()), vec![5, 1, 10]);

    // Rebuilding from the sorted view changes the shape and so the level order.
    let rebuilt = sorted.binary_search_tree("x");
    assert_eq!(xs(&rebuilt.to_original_order()), vec![1, 5, 10]);
}
