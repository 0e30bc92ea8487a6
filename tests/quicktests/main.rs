#[macro_use]
extern crate quickcheck_macros;

mod lists;
mod trees;

use graph_builder::{GraphBuilder, GraphValue};

pub(crate) type Value = GraphValue<&'static str, i8>;

/// A builder over one node per key, in the given order.
pub(crate) fn graph(xs: &[i8]) -> GraphBuilder<Value> {
    let values = xs
        .iter()
        .map(|&x| GraphValue::new().with_dimension("x", x))
        .collect();
    GraphBuilder::new(values).unwrap()
}

/// The `x` of every node in the builder's sequence.
pub(crate) fn xs(graph: &GraphBuilder<Value>) -> Vec<i8> {
    graph.map_values(|v| v.dimensions()["x"])
}
