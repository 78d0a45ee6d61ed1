use crate::domains::field::{MapPreset, NodeId};
use crate::domains::report::SearchStats;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// What the search agent hands over: its figures and the nodes it visited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInput {
    /// Overrides the configured preset.
    #[serde(default)]
    pub preset: Option<MapPreset>,
    /// Overrides the configured open taps.
    #[serde(default)]
    pub open_taps: Option<BTreeSet<NodeId>>,
    pub stats: SearchStats,
    pub movements: Vec<NodeId>,
}

impl SessionInput {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_input_parses() {
        let input = SessionInput::from_json_str(
            r#"{
                "stats": {"time_taken_ms": 0.5, "node_count": 3, "max_depth": 2, "peak_memory_bytes": 4096},
                "movements": [1, 2, 7]
            }"#,
        )
        .unwrap();
        assert_eq!(input.movements, vec![1, 2, 7]);
        assert_eq!(input.stats.path_count(), 2);
        assert!(input.preset.is_none());
        assert!(input.open_taps.is_none());
    }

    #[test]
    fn test_overrides_parse() {
        let input = SessionInput::from_json_str(
            r#"{
                "preset": "field25",
                "open_taps": [7, 13],
                "stats": {"time_taken_ms": 0.0, "node_count": 0, "max_depth": 0, "peak_memory_bytes": 0},
                "movements": []
            }"#,
        )
        .unwrap();
        assert_eq!(input.preset, Some(MapPreset::Field25));
        assert_eq!(input.open_taps, Some(BTreeSet::from([7, 13])));
    }
}
