use itertools::Itertools;
use js_sys::Int32Array;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::builder::NetworkBuilder;
use crate::network::Capacity;
use crate::solver::MaxFlow;

/// A flow value too large for the `Int32Array` handed back to JavaScript.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("flow {0} does not fit in a 32-bit integer")]
pub struct FlowOutOfRange(pub Capacity);

fn to_index(value: i32) -> Result<usize, JsError> {
    usize::try_from(value).map_err(|_| JsError::new(&format!("{value} is not a vertex")))
}

// arc capacities come in as i32, but their sum through the source may not fit back
fn flow_array(solution: &MaxFlow) -> Result<Vec<i32>, FlowOutOfRange> {
    std::iter::once(solution.value)
        .chain(solution.arc_flows.iter().copied())
        .map(|flow| i32::try_from(flow).map_err(|_| FlowOutOfRange(flow)))
        .collect()
}

/// Solve a network given as a flat array of `tail, head, capacity` triples with 0-based vertices.
///
/// Returns `[value, flow_0, flow_1, ...]` with arc flows in input order, or an error if the value exceeds `i32`.
#[wasm_bindgen(js_name = maxFlow)]
pub fn max_flow(vertex_count: usize, source: usize, sink: usize, arcs: &[i32]) -> Result<Int32Array, JsError> {
    if arcs.len() % 3 != 0 {
        return Err(JsError::new("arcs must be a whole number of (tail, head, capacity) triples"));
    }

    let mut builder = NetworkBuilder::new(vertex_count, source, sink);
    builder.declare_arc_count(arcs.len() / 3);
    for (tail, head, capacity) in arcs.iter().copied().tuples() {
        builder.add_arc(to_index(tail)?, to_index(head)?, capacity.into());
    }

    let mut network = builder.build()
        .map_err(|reasons| JsError::new(&reasons.iter().join("; ")))?;
    let solution = network.max_flow()?;

    Ok(Int32Array::from(flow_array(&solution)?.as_slice()))
}

#[cfg(test)]
mod tests {
    use crate::builder::NetworkBuilder;
    use crate::network::Capacity;

    use super::{flow_array, FlowOutOfRange};

    #[test]
    fn value_at_i32_max_fits() {
        let mut network = NetworkBuilder::new(3, 0, 2)
            .add_arcs([(0, 1, i32::MAX.into()), (1, 2, i32::MAX.into())])
            .build()
            .unwrap();

        let solution = network.max_flow().unwrap();
        assert_eq!(flow_array(&solution), Ok(vec![i32::MAX, i32::MAX, i32::MAX]));
    }

    #[test]
    fn value_past_i32_max_is_an_error() {
        let mut network = NetworkBuilder::new(2, 0, 1)
            .add_arcs([(0, 1, i32::MAX.into()), (0, 1, i32::MAX.into()), (0, 1, i32::MAX.into())])
            .build()
            .unwrap();

        let solution = network.max_flow().unwrap();
        assert_eq!(flow_array(&solution), Err(FlowOutOfRange(3 * Capacity::from(i32::MAX))));
    }
}
