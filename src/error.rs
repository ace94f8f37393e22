//! Error types for fatal package-lookup failures
//!
//! Only two conditions abort a run before any output is produced: a prefix
//! that matches nothing, and a prefix that matches several packages with no
//! exact-match tiebreak. Everything else (unparsable input lines, cycles in
//! the graph) is recovered and reported as a warning.

use thiserror::Error;

/// Fatal lookup errors, displayed with hints before exiting non-zero
#[derive(Error, Debug)]
pub enum DeporderError {
    /// No package name starts with the requested prefix
    #[error("no package matching prefix '{prefix}'")]
    PackageNotFound { prefix: String },

    /// Several packages share the prefix and none equals it exactly
    #[error("ambiguous prefix '{prefix}' ({} matches)", .matches.len())]
    AmbiguousPrefix {
        prefix: String,
        /// All matching package names, sorted lexicographically
        matches: Vec<String>,
    },
}

impl DeporderError {
    /// Create a not-found error for a prefix
    pub fn package_not_found(prefix: impl Into<String>) -> Self {
        Self::PackageNotFound {
            prefix: prefix.into(),
        }
    }

    /// Create an ambiguous-prefix error listing all candidates
    pub fn ambiguous_prefix(prefix: impl Into<String>, matches: Vec<String>) -> Self {
        Self::AmbiguousPrefix {
            prefix: prefix.into(),
            matches,
        }
    }

    /// Display the error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            DeporderError::PackageNotFound { .. } => {
                eprintln!(
                    "\n{} {}",
                    style("HINT:").yellow().bold(),
                    "Packages match by name prefix; check the spelling or try a shorter prefix."
                );
            }
            DeporderError::AmbiguousPrefix { matches, .. } => {
                eprintln!("\n{}", style("MATCHES:").cyan().bold());
                for name in matches {
                    eprintln!("  • {}", name);
                }
                eprintln!(
                    "\n{} {}",
                    style("HINT:").yellow().bold(),
                    "Use a longer prefix or the full package name."
                );
            }
        }

        eprintln!();
    }
}
