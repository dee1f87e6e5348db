//! Owner-side pairing of a live curve with its last published snapshot.

use std::sync::Arc;

use crate::config::Config;
use crate::evaluator::CurveEvaluator;
use crate::keyframe::KeyframeSource;
use crate::snapshot::KeyframeSnapshot;

/// Holds a live curve plus the evaluator built from its most recent capture.
///
/// The owning thread edits the curve through [`curve_mut`](Self::curve_mut)
/// and calls [`cache_keyframes`](Self::cache_keyframes) at checkpoints.
/// Workers get their own [`CurveEvaluator`] via [`evaluator`](Self::evaluator)
/// and never see the live curve. Until the first capture every evaluation
/// returns `0.0`.
#[derive(Debug)]
pub struct ThreadableCurve<S> {
    curve: S,
    evaluator: CurveEvaluator,
}

impl<S: KeyframeSource> ThreadableCurve<S> {
    pub fn new(curve: S) -> Self {
        Self::with_config(curve, Config::default())
    }

    pub fn with_config(curve: S, cfg: Config) -> Self {
        Self {
            curve,
            evaluator: CurveEvaluator::new(cfg),
        }
    }

    pub fn curve(&self) -> &S {
        &self.curve
    }

    /// Edits land in the live curve only; published snapshots are unaffected
    /// until the next [`cache_keyframes`](Self::cache_keyframes).
    pub fn curve_mut(&mut self) -> &mut S {
        &mut self.curve
    }

    /// Copy the live keys into a fresh snapshot and publish it.
    ///
    /// Unsorted or non-finite keys are still published, with a warning:
    /// evaluation stays defined, but only `SegmentSearch::Linear` follows
    /// the front-to-back scan on such curves.
    pub fn cache_keyframes(&mut self) -> Arc<KeyframeSnapshot> {
        let snapshot = KeyframeSnapshot::capture_shared(&self.curve);
        if let Err(err) = snapshot.validate() {
            log::warn!("caching keyframes that fail validation: {err}");
        }
        self.evaluator.set_snapshot(Arc::clone(&snapshot));
        snapshot
    }

    /// Whether a snapshot has been published yet.
    pub fn is_cached(&self) -> bool {
        self.evaluator.snapshot().is_some()
    }

    /// Evaluator over the current snapshot, for handing to workers.
    pub fn evaluator(&self) -> CurveEvaluator {
        self.evaluator.clone()
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        self.evaluator.evaluate(t)
    }

    pub fn into_inner(self) -> S {
        self.curve
    }
}
