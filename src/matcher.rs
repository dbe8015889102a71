//! Jurisdiction check: does a request belong to this engine at all?

use crate::config::EngineConfig;

/// Returns true iff the absolute URL starts with one of the configured
/// jurisdiction prefixes. Exact prefix match, case-sensitive, no wildcards.
///
/// When this returns false the engine must leave the request entirely
/// alone: pass-through, not a consumed-and-refetched request.
pub fn in_jurisdiction(config: &EngineConfig, url: &str) -> bool {
    config
        .jurisdiction()
        .iter()
        .any(|prefix| url.starts_with(prefix.as_str()))
}
