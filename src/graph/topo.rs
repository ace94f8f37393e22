//! Deterministic topological ordering for link order
//!
//! Orders a package set so that every package appears before the packages
//! it depends on, which is exactly the order a single-pass linker wants its
//! `-l` flags in. Ties break toward the lexicographically smallest eligible
//! package, so output is byte-stable across runs and hash-seed changes.
//! Cycles never abort: members that can never reach zero in-degree are
//! reported and appended in lexicographic order, keeping the result a total
//! ordering of the input set.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::model::PackageGraph;

/// Result of ordering one package set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoOrder {
    /// Every package of the input set, dependents before dependencies
    pub order: Vec<String>,
    /// Cycle members, sorted lexicographically; these are also the final
    /// entries of `order`. Empty when the subgraph is acyclic.
    pub cycle: Vec<String>,
}

/// Sort `nodes` so that for every dependency edge `a -> b` within the set,
/// `a` comes before `b`.
///
/// Kahn's algorithm over the induced subgraph: edges whose endpoint lies
/// outside `nodes` are ignored entirely. The ready frontier is a min-heap
/// keyed on the package name, so whenever several packages are eligible the
/// smallest one is emitted first.
pub fn topological_sort(graph: &PackageGraph, nodes: &HashSet<String>) -> TopoOrder {
    // Intra-set successor lists and in-degrees.
    let mut in_degree: HashMap<&str, usize> = nodes.iter().map(|n| (n.as_str(), 0)).collect();
    let mut successors: HashMap<&str, Vec<&str>> = HashMap::new();

    for node in nodes {
        if let Some(deps) = graph.dependencies_of(node) {
            for dep in deps {
                if let Some(degree) = in_degree.get_mut(dep.as_str()) {
                    *degree += 1;
                    successors
                        .entry(node.as_str())
                        .or_default()
                        .push(dep.as_str());
                }
            }
        }
    }
    for succ in successors.values_mut() {
        succ.sort_unstable();
    }

    let mut frontier: BinaryHeap<Reverse<&str>> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(&name, _)| Reverse(name))
        .collect();

    let mut order: Vec<String> = Vec::with_capacity(nodes.len());

    while let Some(Reverse(node)) = frontier.pop() {
        order.push(node.to_string());
        if let Some(succ) = successors.get(node) {
            for &dep in succ {
                if let Some(degree) = in_degree.get_mut(dep) {
                    *degree -= 1;
                    if *degree == 0 {
                        frontier.push(Reverse(dep));
                    }
                }
            }
        }
    }

    // Anything not emitted sits on a cycle. Append it in lexicographic
    // order so the caller still gets a total ordering.
    let cycle = if order.len() != nodes.len() {
        let emitted: HashSet<&str> = order.iter().map(|n| n.as_str()).collect();
        let mut remaining: Vec<String> = nodes
            .iter()
            .filter(|n| !emitted.contains(n.as_str()))
            .cloned()
            .collect();
        remaining.sort_unstable();
        order.extend(remaining.iter().cloned());
        remaining
    } else {
        Vec::new()
    };

    TopoOrder { order, cycle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn graph_from_edges(edges: &[(&str, &str)]) -> PackageGraph {
        let mut graph = PackageGraph::new();
        for (source, target) in edges {
            graph.add_edge(source, target);
        }
        graph
    }

    fn node_set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_dependents_come_before_dependencies() {
        let graph = graph_from_edges(&[
            ("app", "libfoo"),
            ("app", "libbar"),
            ("libbar", "libfoo"),
        ]);
        let result = topological_sort(&graph, &node_set(&["app", "libbar", "libfoo"]));

        assert_eq!(result.order, vec!["app", "libbar", "libfoo"]);
        assert!(result.cycle.is_empty());
    }

    #[test]
    fn test_independent_nodes_emit_in_lexicographic_order() {
        let graph = PackageGraph::new();
        let result = topological_sort(&graph, &node_set(&["zlib", "attr", "musl"]));

        assert_eq!(result.order, vec!["attr", "musl", "zlib"]);
    }

    #[test]
    fn test_tie_break_is_lexicographic_at_every_step() {
        // After "app" both siblings are ready at once.
        let graph = graph_from_edges(&[("app", "libz"), ("app", "liba")]);
        let result = topological_sort(&graph, &node_set(&["app", "liba", "libz"]));

        assert_eq!(result.order, vec!["app", "liba", "libz"]);
    }

    #[test]
    fn test_two_node_cycle_is_appended_sorted() {
        let graph = graph_from_edges(&[("y", "x"), ("x", "y")]);
        let result = topological_sort(&graph, &node_set(&["x", "y"]));

        assert_eq!(result.order, vec!["x", "y"]);
        assert_eq!(result.cycle, vec!["x", "y"]);
    }

    #[test]
    fn test_acyclic_prefix_survives_a_cycle() {
        let graph = graph_from_edges(&[("app", "x"), ("x", "y"), ("y", "x")]);
        let result = topological_sort(&graph, &node_set(&["app", "x", "y"]));

        assert_eq!(result.order, vec!["app", "x", "y"]);
        assert_eq!(result.cycle, vec!["x", "y"]);
    }

    #[test]
    fn test_self_loop_counts_as_cycle() {
        let graph = graph_from_edges(&[("selfish", "selfish")]);
        let result = topological_sort(&graph, &node_set(&["selfish"]));

        assert_eq!(result.order, vec!["selfish"]);
        assert_eq!(result.cycle, vec!["selfish"]);
    }

    #[test]
    fn test_edges_leaving_the_set_are_ignored() {
        let graph = graph_from_edges(&[("app", "libfoo"), ("libfoo", "outside")]);
        let result = topological_sort(&graph, &node_set(&["app", "libfoo"]));

        assert_eq!(result.order, vec!["app", "libfoo"]);
    }

    #[test]
    fn test_edges_entering_from_outside_are_ignored() {
        let graph = graph_from_edges(&[("outside", "app"), ("app", "libfoo")]);
        let result = topological_sort(&graph, &node_set(&["app", "libfoo"]));

        assert_eq!(result.order, vec!["app", "libfoo"]);
    }

    #[test]
    fn test_empty_set_yields_empty_order() {
        let graph = graph_from_edges(&[("app", "libfoo")]);
        let result = topological_sort(&graph, &HashSet::new());

        assert!(result.order.is_empty());
        assert!(result.cycle.is_empty());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let graph = graph_from_edges(&[
            ("app", "liba"),
            ("app", "libb"),
            ("liba", "libc"),
            ("libb", "libc"),
        ]);
        let nodes = node_set(&["app", "liba", "libb", "libc"]);

        assert_eq!(
            topological_sort(&graph, &nodes),
            topological_sort(&graph, &nodes)
        );
    }

    // ------------------------------------------------------------------
    // Property tests
    // ------------------------------------------------------------------

    const NODE_NAMES: &[&str] = &[
        "pkg-a", "pkg-b", "pkg-c", "pkg-d", "pkg-e", "pkg-f", "pkg-g", "pkg-h",
    ];

    fn graph_from_index_pairs(pairs: &[(usize, usize)]) -> PackageGraph {
        let mut graph = PackageGraph::new();
        for &(source, target) in pairs {
            graph.add_edge(NODE_NAMES[source], NODE_NAMES[target]);
        }
        graph
    }

    proptest! {
        #[test]
        fn prop_order_is_a_total_ordering_of_the_set(
            pairs in prop::collection::vec((0..8usize, 0..8usize), 0..40),
        ) {
            let graph = graph_from_index_pairs(&pairs);
            let nodes = graph.nodes().clone();
            let result = topological_sort(&graph, &nodes);

            let mut output = result.order.clone();
            output.sort_unstable();
            let mut input: Vec<String> = nodes.iter().cloned().collect();
            input.sort_unstable();
            prop_assert_eq!(output, input);

            // Cycle members sit sorted at the tail of the order.
            if !result.cycle.is_empty() {
                let tail = &result.order[result.order.len() - result.cycle.len()..];
                prop_assert_eq!(tail, result.cycle.as_slice());
                let mut sorted_cycle = result.cycle.clone();
                sorted_cycle.sort_unstable();
                prop_assert_eq!(&sorted_cycle, &result.cycle);
            }
        }

        #[test]
        fn prop_edges_are_respected_outside_the_cycle_remainder(
            pairs in prop::collection::vec((0..8usize, 0..8usize), 0..40),
        ) {
            let graph = graph_from_index_pairs(&pairs);
            let nodes = graph.nodes().clone();
            let result = topological_sort(&graph, &nodes);

            let position: HashMap<&str, usize> = result
                .order
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), i))
                .collect();
            let in_cycle: HashSet<&str> =
                result.cycle.iter().map(|n| n.as_str()).collect();

            for node in &nodes {
                if in_cycle.contains(node.as_str()) {
                    continue;
                }
                if let Some(deps) = graph.dependencies_of(node) {
                    for dep in deps {
                        if nodes.contains(dep) && !in_cycle.contains(dep.as_str()) {
                            prop_assert!(position[node.as_str()] < position[dep.as_str()]);
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_sort_is_deterministic(
            pairs in prop::collection::vec((0..8usize, 0..8usize), 0..40),
        ) {
            let graph = graph_from_index_pairs(&pairs);
            let nodes = graph.nodes().clone();

            prop_assert_eq!(
                topological_sort(&graph, &nodes),
                topological_sort(&graph, &nodes)
            );
        }
    }
}
