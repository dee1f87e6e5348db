//! Immutable keyframe snapshots.
//!
//! A snapshot is a by-value copy of a live curve's keys taken at an explicit
//! checkpoint on the owning thread. It is never mutated afterwards, so any
//! number of readers may share it (usually behind an `Arc`) without locks.
//! A later capture produces a new snapshot; the old one is dropped once its
//! last reader lets go.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::keyframe::{Keyframe, KeyframeSource};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct KeyframeSnapshot {
    keys: Vec<Keyframe>,
}

impl KeyframeSnapshot {
    /// Copy the source's keys into a new snapshot.
    ///
    /// Must run on the thread that owns the live curve, before the result is
    /// handed to readers. An empty source yields an empty snapshot.
    pub fn capture<S: KeyframeSource + ?Sized>(source: &S) -> Self {
        let keys = source.keyframes().to_vec();
        log::debug!("captured keyframe snapshot ({} keys)", keys.len());
        Self { keys }
    }

    /// Capture and wrap in an `Arc` ready for publishing to readers.
    pub fn capture_shared<S: KeyframeSource + ?Sized>(source: &S) -> Arc<Self> {
        Arc::new(Self::capture(source))
    }

    /// Take ownership of an already-built key list.
    pub fn from_keyframes(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn first(&self) -> Option<&Keyframe> {
        self.keys.first()
    }

    pub fn last(&self) -> Option<&Keyframe> {
        self.keys.last()
    }

    /// `(first.time, last.time)`, or `None` for an empty snapshot.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }

    /// Check that every field is finite and times are non-decreasing.
    ///
    /// Capture does not enforce this; evaluation stays well-defined either
    /// way, but segment lookup assumes sorted times.
    pub fn validate(&self) -> Result<(), CurveError> {
        let mut previous = f32::NEG_INFINITY;
        for (index, key) in self.keys.iter().enumerate() {
            if let Some(field) = key.non_finite_field() {
                log::warn!("keyframe {index} has non-finite {field}");
                return Err(CurveError::NonFiniteKeyframe {
                    index,
                    field: field.to_string(),
                });
            }
            if key.time < previous {
                log::warn!(
                    "keyframe {index} time {} precedes previous time {previous}",
                    key.time
                );
                return Err(CurveError::NonMonotonicTime {
                    index,
                    time: key.time,
                    previous,
                });
            }
            previous = key.time;
        }
        Ok(())
    }
}

impl KeyframeSource for KeyframeSnapshot {
    fn keyframes(&self) -> &[Keyframe] {
        &self.keys
    }
}

impl From<Vec<Keyframe>> for KeyframeSnapshot {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::from_keyframes(keys)
    }
}
