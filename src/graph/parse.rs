//! Graphviz `.dot` edge-record parsing
//!
//! Builds a [`PackageGraph`] from a `.dot` dependency dump such as the one
//! `apk dot` emits. Each input line is matched independently against the
//! edge-record shape `"<source>" -> "<target>" [<attributes>]`; headers,
//! node declarations, and closing braces are skipped without ceremony. An
//! edge label of the form `so:lib<name>.so[.N...]` names a shared library
//! the *target* package provides, recorded as the linker flag `-l<name>`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::graph::model::PackageGraph;

/// A line that mentions the edge arrow but does not match the full
/// edge-record shape. Skipped by default, reported under `--strict`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEdge {
    /// 1-based line number in the input
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
}

/// Parse outcome: the graph plus any suspect lines
#[derive(Debug, Clone)]
pub struct ParsedDot {
    pub graph: PackageGraph,
    pub malformed: Vec<MalformedEdge>,
}

/// Parse `.dot` text into a package graph.
///
/// Stateless: the same input always yields the same graph. Edge records
/// must carry an attribute bracket (`[...]`, possibly empty) to be
/// recognized; arrow lines without one are collected as malformed.
pub fn parse_dot(input: &str) -> ParsedDot {
    let edge_re = Regex::new(r#""([^"]+)"\s*->\s*"([^"]+)"\s*\[([^\]]*)\]"#).unwrap();
    let label_re = Regex::new(r#"label="([^"]*)""#).unwrap();
    let so_lib_re = Regex::new(r"^so:lib(.+?)\.so(?:\.\d+)*$").unwrap();

    let mut graph = PackageGraph::new();
    let mut malformed = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let caps = match edge_re.captures(line) {
            Some(caps) => caps,
            None => {
                if line.contains("->") {
                    malformed.push(MalformedEdge {
                        line: idx + 1,
                        text: line.trim().to_string(),
                    });
                }
                continue;
            }
        };

        let source = &caps[1];
        let target = &caps[2];
        let attrs = &caps[3];

        graph.add_edge(source, target);

        // A so: label marks a shared library satisfied by the edge target.
        if let Some(label) = label_re.captures(attrs) {
            if let Some(so) = so_lib_re.captures(&label[1]) {
                graph.add_provided_lib(target, format!("-l{}", &so[1]));
            }
        }
    }

    ParsedDot { graph, malformed }
}

/// Read and parse a `.dot` file
pub fn parse_dot_file(path: &Path) -> Result<ParsedDot> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_dot(&input))
}
