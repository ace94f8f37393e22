//! Package dependency graph model
//!
//! `PackageGraph` holds everything the parser extracts from a `.dot` dump:
//! the full node set, set-backed adjacency (package -> packages it depends
//! on), and the linker flags each package provides. Duplicate edge records
//! and duplicate flags collapse naturally.

use std::collections::{HashMap, HashSet, VecDeque};

/// Directed package dependency graph with per-package linker flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageGraph {
    /// Package -> set of packages it depends on
    depends: HashMap<String, HashSet<String>>,
    /// Package -> linker flags it provides (e.g. "-ljpeg")
    provided_libs: HashMap<String, HashSet<String>>,
    /// Every package mentioned by any edge record
    nodes: HashSet<String>,
}

impl PackageGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `source` depends on `target`, registering both endpoints.
    ///
    /// Inserting the same edge twice has no further effect.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        self.nodes.insert(source.to_string());
        self.nodes.insert(target.to_string());
        self.depends
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string());
    }

    /// Record a linker flag provided by `package`
    pub fn add_provided_lib(&mut self, package: &str, flag: String) {
        self.provided_libs
            .entry(package.to_string())
            .or_default()
            .insert(flag);
    }

    /// All package names found in the input
    pub fn nodes(&self) -> &HashSet<String> {
        &self.nodes
    }

    /// Direct dependencies of a package, if it has any outgoing edges
    pub fn dependencies_of(&self, package: &str) -> Option<&HashSet<String>> {
        self.depends.get(package)
    }

    /// Linker flags a package provides, if any
    pub fn provided_libs(&self, package: &str) -> Option<&HashSet<String>> {
        self.provided_libs.get(package)
    }

    /// Number of distinct packages
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct dependency edges
    pub fn edge_count(&self) -> usize {
        self.depends.values().map(|targets| targets.len()).sum()
    }

    /// All packages reachable from `start` along dependency edges,
    /// including `start` itself.
    ///
    /// Breadth-first with a visited set, so traversal terminates on cyclic
    /// graphs. A package with no outgoing edges is a leaf, not an error, and
    /// a `start` the graph has never seen yields just `{start}`.
    pub fn closure(&self, start: &str) -> HashSet<String> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(start.to_string());

        while let Some(package) = queue.pop_front() {
            if !visited.insert(package.clone()) {
                continue;
            }
            if let Some(deps) = self.depends.get(&package) {
                for dep in deps {
                    if !visited.contains(dep) {
                        queue.push_back(dep.clone());
                    }
                }
            }
        }

        visited
    }
}
