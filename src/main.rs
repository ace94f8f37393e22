//! deporder - linker-ordered dependency lists from Graphviz package graphs
//!
//! Reads a `.dot` dependency dump (e.g. `apk dot`), collects the transitive
//! dependencies of one package, and prints them dependents-first with the
//! linker flags each package provides.
//!
//! ## Architecture
//!
//! ```text
//! .dot text → graph::parse → resolve (prefix) → PackageGraph::closure
//!           → graph::topo (stable Kahn) → output (text/JSON)
//! ```

mod cli;
mod error;
mod graph;
mod output;
mod resolve;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
