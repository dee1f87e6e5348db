//! Evaluator configuration.

use serde::{Deserialize, Serialize};

/// How the evaluator locates the segment enclosing a query time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentSearch {
    /// Front-to-back scan for the first key later than `t`.
    Linear,
    /// `partition_point` over key times. Requires non-decreasing times;
    /// on unsorted keys it may pick a different segment than `Linear`.
    Binary,
    /// Linear below `binary_search_min_keys`, binary at or above it.
    /// Same ordering requirement as `Binary` once the threshold is reached.
    /// Use `Linear` for snapshots that fail
    /// [`KeyframeSnapshot::validate`](crate::snapshot::KeyframeSnapshot::validate).
    #[default]
    Auto,
}

/// Configuration for curve evaluation.
/// Both strategies give identical results on sorted snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub segment_search: SegmentSearch,
    /// Key count at which `Auto` switches to binary search.
    pub binary_search_min_keys: usize,
}

impl Config {
    /// Whether a snapshot with `len` keys should use binary search.
    #[inline]
    pub fn use_binary_search(&self, len: usize) -> bool {
        match self.segment_search {
            SegmentSearch::Linear => false,
            SegmentSearch::Binary => true,
            SegmentSearch::Auto => len >= self.binary_search_min_keys,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment_search: SegmentSearch::Auto,
            binary_search_min_keys: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_switches_at_threshold() {
        let cfg = Config::default();
        assert!(!cfg.use_binary_search(15));
        assert!(cfg.use_binary_search(16));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "segment_search": "linear" }"#).unwrap();
        assert_eq!(cfg.segment_search, SegmentSearch::Linear);
        assert_eq!(cfg.binary_search_min_keys, 16);
        assert!(!cfg.use_binary_search(1000));
    }
}
