//! Error types for the fallible curve surfaces (loading, validation, baking).
//!
//! Evaluation itself never fails; see [`crate::evaluator::CurveEvaluator`].

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CurveError {
    /// Stored curve JSON could not be parsed.
    #[error("Curve parse error: {reason}")]
    Parse { reason: String },

    /// A keyframe carries a NaN or infinite field.
    #[error("Keyframe {index} has a non-finite {field}")]
    NonFiniteKeyframe { index: usize, field: String },

    /// Keyframe times decrease between two neighbours.
    #[error("Keyframe {index} time {time} precedes previous time {previous}")]
    NonMonotonicTime {
        index: usize,
        time: f32,
        previous: f32,
    },

    /// Baking window is empty or inverted.
    #[error("Invalid baking window [{start}, {end}]")]
    InvalidBakingWindow { start: f32, end: f32 },

    /// Baking window and frame rate ask for more frames than allowed.
    #[error("Bake would produce {frames} frames (limit: {limit})")]
    FrameCountOverflow { frames: f64, limit: usize },
}

impl CurveError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "serialization",
            Self::NonFiniteKeyframe { .. } | Self::NonMonotonicTime { .. } => "validation",
            Self::InvalidBakingWindow { .. } | Self::FrameCountOverflow { .. } => "baking",
        }
    }
}

impl From<serde_json::Error> for CurveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
