//! Serde schema of a streams config document.

use crate::router::RawRule;
use serde::Deserialize;

/// Top-level document. `streams` is required; its absence is reported by the loader, not serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Ordered routing rules; first match wins.
    pub streams: Option<Vec<RawRule>>,
    /// Overrides the programmatic fallback level.
    pub fallback_level: Option<String>,
    /// Older name for the catch-all level. Rejected so the two can never disagree.
    pub default_level: Option<String>,
}
