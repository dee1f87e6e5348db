//! Keyframe data model and the live-curve source abstraction.

use serde::{Deserialize, Serialize};

/// One authored control point of a Hermite curve.
///
/// Tangents are derivatives per unit of time (value units per second when
/// `time` is in seconds); they are scaled by segment duration at evaluation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    /// Arrival slope, used when this key is the right end of a segment.
    #[serde(default)]
    pub in_tangent: f32,
    /// Departure slope, used when this key is the left end of a segment.
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    /// Keyframe with flat (zero) tangents.
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    pub fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }

    /// Name of the first non-finite field, if any.
    pub(crate) fn non_finite_field(&self) -> Option<&'static str> {
        if !self.time.is_finite() {
            Some("time")
        } else if !self.value.is_finite() {
            Some("value")
        } else if !self.in_tangent.is_finite() {
            Some("inTangent")
        } else if !self.out_tangent.is_finite() {
            Some("outTangent")
        } else {
            None
        }
    }
}

/// A live, possibly mutable curve that can be captured into a
/// [`KeyframeSnapshot`](crate::snapshot::KeyframeSnapshot).
///
/// Implementors expose their keys as an ordered slice; capture copies it.
pub trait KeyframeSource {
    fn keyframes(&self) -> &[Keyframe];
}

impl KeyframeSource for [Keyframe] {
    fn keyframes(&self) -> &[Keyframe] {
        self
    }
}

impl KeyframeSource for Vec<Keyframe> {
    fn keyframes(&self) -> &[Keyframe] {
        self.as_slice()
    }
}

impl<const N: usize> KeyframeSource for [Keyframe; N] {
    fn keyframes(&self) -> &[Keyframe] {
        self.as_slice()
    }
}

impl<S: KeyframeSource + ?Sized> KeyframeSource for &S {
    fn keyframes(&self) -> &[Keyframe] {
        (**self).keyframes()
    }
}
