//! Link-order report: exclusion filtering and rendering
//!
//! The report is the ordered dependency list minus the start package and
//! anything on the exclusion list. Text output prints one line per
//! surviving package; JSON mirrors the same sequence for tooling.

use serde::Serialize;

use crate::graph::{PackageGraph, TopoOrder};

/// Base-system packages that are part of every image and never need
/// explicit linker flags.
pub const EXCLUDED_PREFIXES: &[&str] = &[
    "musl-",
    "busybox-",
    "alpine-",
    "ca-certificates-",
    "pkgconf-",
];

/// Effective exclusion set for one run
#[derive(Debug, Clone)]
pub struct ExcludeList {
    prefixes: Vec<String>,
}

impl ExcludeList {
    /// Built-in prefixes plus any extras from the command line
    pub fn new(use_defaults: bool, extra: &[String]) -> Self {
        let mut prefixes: Vec<String> = if use_defaults {
            EXCLUDED_PREFIXES.iter().map(|p| p.to_string()).collect()
        } else {
            Vec::new()
        };
        prefixes.extend(extra.iter().cloned());
        Self { prefixes }
    }

    pub fn is_excluded(&self, package: &str) -> bool {
        self.prefixes.iter().any(|p| package.starts_with(p))
    }
}

/// One report row: a package in link position with the flags it provides
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub package: String,
    /// Sorted linker flags; empty for grouping or metadata packages
    pub flags: Vec<String>,
}

/// Full link-order report for one query
#[derive(Serialize, Debug, Clone)]
pub struct LinkReport {
    /// The resolved start package; never listed among `dependencies`
    pub start: String,
    pub dependencies: Vec<LinkEntry>,
    /// Cycle members that defeated the ordering, sorted lexicographically
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cycle: Vec<String>,
}

impl LinkReport {
    /// Build the report from a sorted ordering, dropping the start package
    /// and everything the exclusion list covers.
    pub fn build(
        graph: &PackageGraph,
        start: &str,
        sorted: &TopoOrder,
        excludes: &ExcludeList,
    ) -> Self {
        let mut dependencies = Vec::new();
        for package in &sorted.order {
            if package == start || excludes.is_excluded(package) {
                continue;
            }
            let mut flags: Vec<String> = graph
                .provided_libs(package)
                .map(|libs| libs.iter().cloned().collect())
                .unwrap_or_default();
            flags.sort_unstable();
            dependencies.push(LinkEntry {
                package: package.clone(),
                flags,
            });
        }

        Self {
            start: start.to_string(),
            dependencies,
            cycle: sorted.cycle.clone(),
        }
    }

    /// Render the text format, one line per dependency
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.dependencies {
            if entry.flags.is_empty() {
                out.push_str(&format!("# {}  (no library flags)\n", entry.package));
            } else {
                out.push_str(&format!(
                    "{}  # {}\n",
                    entry.flags.join(" "),
                    entry.package
                ));
            }
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
