use std::sync::Arc;

use serde::Deserialize;

use crate::error::CurveError;
use crate::evaluator::CurveEvaluator;
use crate::keyframe::Keyframe;
use crate::snapshot::KeyframeSnapshot;

/// A named curve loaded from JSON, already frozen into a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredCurve {
    pub name: String,
    pub snapshot: Arc<KeyframeSnapshot>,
}

impl StoredCurve {
    pub fn evaluator(&self) -> CurveEvaluator {
        CurveEvaluator::from(Arc::clone(&self.snapshot))
    }
}

/// Public API: parse stored-curve JSON into a validated snapshot.
///
/// Shape: `{ "name"?: string, "keys": [{ "time", "value", "inTangent"?, "outTangent"? }],
/// "preWrapMode"?: string, "postWrapMode"?: string }`.
///
/// Notes:
/// - Missing tangents are flat (0).
/// - Only clamp wrapping is evaluated; any other wrap mode is accepted but
///   logged and treated as clamp.
/// - Keys must be finite with non-decreasing times.
pub fn parse_stored_curve_json(s: &str) -> Result<StoredCurve, CurveError> {
    let sc: RawStoredCurve = serde_json::from_str(s)?;

    for mode in [&sc.pre_wrap_mode, &sc.post_wrap_mode].into_iter().flatten() {
        if !is_clamp_mode(mode) {
            log::warn!(
                "curve '{}': wrap mode '{mode}' unsupported, evaluating as clamp",
                sc.name
            );
        }
    }

    let keys: Vec<Keyframe> = sc
        .keys
        .iter()
        .map(|k| Keyframe {
            time: k.time as f32,
            value: k.value as f32,
            in_tangent: k.in_tangent as f32,
            out_tangent: k.out_tangent as f32,
        })
        .collect();

    let snapshot = KeyframeSnapshot::from_keyframes(keys);
    snapshot.validate()?;
    log::debug!("loaded curve '{}' ({} keys)", sc.name, snapshot.len());

    Ok(StoredCurve {
        name: sc.name,
        snapshot: Arc::new(snapshot),
    })
}

fn is_clamp_mode(mode: &str) -> bool {
    matches!(
        mode.to_ascii_lowercase().as_str(),
        "clamp" | "clampforever" | "clamp_forever" | "default" | "once"
    )
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStoredCurve {
    #[serde(default)]
    pub name: String,
    pub keys: Vec<RawKey>,
    #[serde(default)]
    pub pre_wrap_mode: Option<String>,
    #[serde(default)]
    pub post_wrap_mode: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKey {
    pub time: f64,
    pub value: f64,
    #[serde(default)]
    pub in_tangent: f64,
    #[serde(default)]
    pub out_tangent: f64,
}
