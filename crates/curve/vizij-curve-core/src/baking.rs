//! Baking API: sample a curve at a fixed frame rate over a time window.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::evaluator::CurveEvaluator;

const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Upper bound on frames produced by one bake (end frame included).
pub const MAX_BAKE_FRAMES: usize = 1 << 20;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f32,
    /// Start time in curve space; if None, uses the first key's time.
    pub start_time: Option<f32>,
    /// End time in curve space; if None, uses the last key's time.
    pub end_time: Option<f32>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            start_time: None,
            end_time: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedCurve {
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    /// Sampled values at each frame, end inclusive.
    pub values: Vec<f32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedDerivativeCurve {
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    pub values: Vec<f32>,
}

/// Bake curve values using the provided config.
pub fn bake_curve(eval: &CurveEvaluator, cfg: &BakingConfig) -> Result<BakedCurve, CurveError> {
    bake_curve_with_derivatives(eval, cfg).map(|(values, _)| values)
}

/// Bake values and slopes simultaneously.
pub fn bake_curve_with_derivatives(
    eval: &CurveEvaluator,
    cfg: &BakingConfig,
) -> Result<(BakedCurve, BakedDerivativeCurve), CurveError> {
    let sr = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
        cfg.frame_rate
    } else {
        log::warn!(
            "invalid bake frame rate {}, falling back to {DEFAULT_FRAME_RATE} Hz",
            cfg.frame_rate
        );
        DEFAULT_FRAME_RATE
    };
    let (first, last) = eval.time_range().unwrap_or((0.0, 0.0));
    let start = cfg.start_time.unwrap_or(first);
    let end = cfg.end_time.unwrap_or(last);
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(CurveError::InvalidBakingWindow { start, end });
    }

    let span = f64::from(end) - f64::from(start);
    let frames_f = (span * f64::from(sr)).ceil() + 1.0; // inclusive of end
    if !frames_f.is_finite() || frames_f > MAX_BAKE_FRAMES as f64 {
        log::warn!("bake of {frames_f} frames exceeds limit {MAX_BAKE_FRAMES}");
        return Err(CurveError::FrameCountOverflow {
            frames: frames_f,
            limit: MAX_BAKE_FRAMES,
        });
    }
    let frame_count = frames_f as usize;

    let mut values = Vec::with_capacity(frame_count);
    let mut derivatives = Vec::with_capacity(frame_count);
    for f in 0..frame_count {
        let t = (start + f as f32 / sr).min(end);
        let (v, d) = eval.evaluate_with_derivative(t);
        values.push(v);
        derivatives.push(d);
    }
    log::debug!("baked {frame_count} frames over [{start}, {end}] at {sr} Hz");

    Ok((
        BakedCurve {
            frame_rate: sr,
            start_time: start,
            end_time: end,
            values,
        },
        BakedDerivativeCurve {
            frame_rate: sr,
            start_time: start,
            end_time: end,
            values: derivatives,
        },
    ))
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedCurve) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}

/// Export baked values and derivatives as serde_json::Value.
pub fn export_baked_with_derivatives_json(
    baked: &BakedCurve,
    derivatives: &BakedDerivativeCurve,
) -> serde_json::Value {
    serde_json::json!({
        "values": baked,
        "derivatives": derivatives,
    })
}
