//! CLI argument parsing and pipeline orchestration
//!
//! `deporder <dotfile> <package>` walks the transitive dependencies of the
//! requested package and prints them in linker order, flags first and the
//! package name as a trailing comment. Warnings and status lines go to
//! stderr so stdout stays clean for the report.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::graph::{parse_dot_file, topological_sort};
use crate::output::{ExcludeList, LinkReport};
use crate::resolve::find_package;
use crate::utils::terminal::{print_info, print_warning};

/// Output format for the link-order report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One line per package: flags, then `# package` (default)
    #[default]
    Text,
    /// JSON object with start, dependencies, and any cycle members
    Json,
}

/// Extract linker-ordered dependency lists from a Graphviz .dot file
///
/// Reads a package dependency dump (e.g. from `apk dot`), collects every
/// transitive dependency of one package, and prints them dependents-first,
/// the order a single-pass linker wants its -l flags in.
#[derive(Parser, Debug)]
#[command(name = "deporder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the .dot dependency graph
    pub dot_file: PathBuf,

    /// Package name, or any unique name prefix (e.g. `tiff`, `vips-8`)
    pub package: String,

    /// Output format: text, json
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Warn about lines that mention `->` but do not parse as edge records
    #[arg(long)]
    pub strict: bool,

    /// Additional package-name prefix to exclude (repeatable)
    #[arg(long = "exclude", value_name = "PREFIX")]
    pub exclude: Vec<String>,

    /// Skip the built-in base-system exclusion list
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the parse -> resolve -> collect -> sort -> render pipeline
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let parsed = parse_dot_file(&self.dot_file)?;
        if self.strict {
            for bad in &parsed.malformed {
                print_warning(&format!(
                    "line {}: unparsable edge record: {}",
                    bad.line, bad.text
                ));
            }
        }

        let graph = parsed.graph;
        if self.verbose {
            print_info(&format!(
                "parsed {} packages, {} dependency edges",
                graph.node_count(),
                graph.edge_count()
            ));
        }

        let start = match find_package(graph.nodes(), &self.package) {
            Ok(name) => name,
            Err(err) => {
                err.display_with_hints();
                std::process::exit(1);
            }
        };
        eprintln!("# Starting from: {}", start);

        let members = graph.closure(&start);
        if self.verbose {
            print_info(&format!(
                "dependency closure contains {} packages",
                members.len()
            ));
        }

        let sorted = topological_sort(&graph, &members);
        if !sorted.cycle.is_empty() {
            print_warning(&format!(
                "cycle detected involving: {}",
                sorted.cycle.join(", ")
            ));
        }

        let excludes = ExcludeList::new(!self.no_default_excludes, &self.exclude);
        let report = LinkReport::build(&graph, &start, &sorted, &excludes);

        match self.format {
            OutputFormat::Text => print!("{}", report.to_text()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
