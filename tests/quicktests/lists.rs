use graph_builder::NodeId;

use crate::graph;

#[quickcheck]
fn root_is_first_and_end_is_last(xs: Vec<i8>) -> bool {
    let graph = graph(&xs);
    let list = graph.singly_linked_list();

    list.root() == graph.values().first().copied() && list.end() == graph.values().last().copied()
}

#[quickcheck]
fn next_and_prev_mirror_each_other(xs: Vec<i8>) -> bool {
    let list = graph(&xs).doubly_linked_list();

    list.values().windows(2).all(|pair| {
        let (a, b) = (pair[0], pair[1]);
        list.node(a).unwrap().linkages().next == Some(b)
            && list.node(b).unwrap().linkages().prev == Some(a)
    })
}

#[quickcheck]
fn following_next_visits_every_node_once(xs: Vec<i8>) -> bool {
    let list = graph(&xs).doubly_linked_list();

    let mut visited = Vec::new();
    let mut cursor = list.root();
    while let Some(id) = cursor {
        visited.push(id);
        cursor = list.node(id).unwrap().linkages().next;
    }

    visited == list.values() && visited.last().copied() == list.end()
}

#[quickcheck]
fn callback_sees_every_pair(xs: Vec<i8>) -> bool {
    let mut seen = Vec::new();
    graph(&xs).singly_linked_list_with(|a, b| {
        seen.push((a.dimensions()["x"], b.map(|b| b.dimensions()["x"])))
    });

    let expected: Vec<_> = xs
        .iter()
        .enumerate()
        .map(|(i, &x)| (x, xs.get(i + 1).copied()))
        .collect();
    seen == expected
}

#[test]
fn list_from_a_tree_keeps_node_identity() {
    let tree = graph(&[2, 1, 3]).binary_search_tree("x");
    let list = tree.to_sorted_order().doubly_linked_list();

    assert_eq!(list.values(), &[NodeId::new(1), NodeId::new(0), NodeId::new(2)]);
    assert!(list.shares_pool_with(&tree));
    assert_eq!(list.node(NodeId::new(0)).unwrap().linkages().prev, Some(NodeId::new(1)));
}
