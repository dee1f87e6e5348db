//! Lock-free curve evaluation over a shared snapshot.

use std::sync::Arc;

use crate::config::Config;
use crate::sampling::{sample_keys, sample_keys_with_derivative};
use crate::snapshot::KeyframeSnapshot;

/// Evaluates a clamp-mode Hermite curve from an immutable snapshot.
///
/// Cloning is cheap (an `Arc` bump), and `evaluate` takes `&self`, so one
/// evaluator can be shared by reference or cloned into as many worker
/// threads as needed. An evaluator with no snapshot behaves like an empty
/// curve and returns `0.0`.
#[derive(Clone, Debug, Default)]
pub struct CurveEvaluator {
    snapshot: Option<Arc<KeyframeSnapshot>>,
    cfg: Config,
}

impl CurveEvaluator {
    /// Evaluator with no snapshot yet.
    pub fn new(cfg: Config) -> Self {
        Self {
            snapshot: None,
            cfg,
        }
    }

    pub fn with_snapshot(snapshot: Arc<KeyframeSnapshot>, cfg: Config) -> Self {
        Self {
            snapshot: Some(snapshot),
            cfg,
        }
    }

    /// Replace the snapshot wholesale. Readers holding clones of this
    /// evaluator keep the previous one.
    pub fn set_snapshot(&mut self, snapshot: Arc<KeyframeSnapshot>) {
        log::debug!("evaluator snapshot replaced ({} keys)", snapshot.len());
        self.snapshot = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<&Arc<KeyframeSnapshot>> {
        self.snapshot.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Sample the curve at `t`. Never fails.
    ///
    /// - no snapshot or no keys: `0.0`
    /// - one key, `t` before the first key, or `t` at/after the last key:
    ///   the nearest key's value
    /// - otherwise: Hermite interpolation over the enclosing segment
    pub fn evaluate(&self, t: f32) -> f32 {
        match &self.snapshot {
            Some(snap) => sample_keys(snap.keyframes(), t, &self.cfg),
            None => {
                log::trace!("evaluate({t}) before any snapshot was set");
                0.0
            }
        }
    }

    /// Sample value and slope (per unit time) at `t`.
    pub fn evaluate_with_derivative(&self, t: f32) -> (f32, f32) {
        match &self.snapshot {
            Some(snap) => sample_keys_with_derivative(snap.keyframes(), t, &self.cfg),
            None => (0.0, 0.0),
        }
    }

    /// `(first.time, last.time)` of the current snapshot.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        self.snapshot.as_ref().and_then(|s| s.time_range())
    }
}

impl From<Arc<KeyframeSnapshot>> for CurveEvaluator {
    fn from(snapshot: Arc<KeyframeSnapshot>) -> Self {
        Self::with_snapshot(snapshot, Config::default())
    }
}

impl From<KeyframeSnapshot> for CurveEvaluator {
    fn from(snapshot: KeyframeSnapshot) -> Self {
        Self::with_snapshot(Arc::new(snapshot), Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframe::Keyframe;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn evaluator_is_send_sync() {
        assert_send_sync::<CurveEvaluator>();
        assert_send_sync::<KeyframeSnapshot>();
    }

    #[test]
    fn unset_evaluator_returns_zero() {
        let eval = CurveEvaluator::default();
        assert_eq!(eval.evaluate(0.0), 0.0);
        assert_eq!(eval.evaluate(-3.0), 0.0);
        assert_eq!(eval.evaluate_with_derivative(1.0), (0.0, 0.0));
        assert_eq!(eval.time_range(), None);
    }

    #[test]
    fn set_snapshot_leaves_clones_alone() {
        let mut eval: CurveEvaluator =
            KeyframeSnapshot::from_keyframes(vec![Keyframe::new(0.0, 1.0)]).into();
        let held = eval.clone();
        eval.set_snapshot(Arc::new(KeyframeSnapshot::from_keyframes(vec![
            Keyframe::new(0.0, 2.0),
        ])));
        assert_eq!(held.evaluate(0.0), 1.0);
        assert_eq!(eval.evaluate(0.0), 2.0);
    }
}
