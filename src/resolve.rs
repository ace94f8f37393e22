//! Prefix-based package lookup
//!
//! Package names in apk-style graphs carry version and release suffixes
//! (`vips-8.14.2-r0`), so the CLI accepts any name prefix. Resolution must
//! end on exactly one package; an exact match beats longer candidates so
//! that `lib-a` stays addressable even when `lib-ab` exists.

use std::collections::HashSet;

use crate::error::DeporderError;

/// Find the single package matching `prefix`.
///
/// Rules, in order: no candidate is fatal; a unique candidate wins; among
/// several candidates an exact match wins; otherwise the lookup is
/// ambiguous and all candidates are reported sorted.
pub fn find_package(nodes: &HashSet<String>, prefix: &str) -> Result<String, DeporderError> {
    let mut matches: Vec<String> = nodes
        .iter()
        .filter(|name| name.starts_with(prefix))
        .cloned()
        .collect();
    matches.sort_unstable();

    if matches.is_empty() {
        return Err(DeporderError::package_not_found(prefix));
    }
    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }
    // Exact match takes priority over longer candidates.
    if matches.iter().any(|name| name == prefix) {
        return Ok(prefix.to_string());
    }
    Err(DeporderError::ambiguous_prefix(prefix, matches))
}
