//! Vizij Curve Core (engine-agnostic)
//!
//! Thread-safe evaluation of clamp-mode cubic Hermite keyframe curves.
//!
//! The owning thread captures a live curve into an immutable
//! [`KeyframeSnapshot`]; any number of [`CurveEvaluator`]s then sample it
//! concurrently without locks. Queries outside the keyed range hold the
//! boundary value, an empty or not-yet-captured curve samples to `0.0`, and
//! evaluation never fails.
//!
//! ```
//! use std::sync::Arc;
//! use vizij_curve_core::{CurveEvaluator, Keyframe, KeyframeSnapshot};
//!
//! let live = vec![Keyframe::new(0.0, 0.0), Keyframe::new(2.0, 10.0)];
//! let snapshot = KeyframeSnapshot::capture_shared(&live);
//! let eval = CurveEvaluator::from(Arc::clone(&snapshot));
//! assert_eq!(eval.evaluate(1.0), 5.0);
//! ```

pub mod baking;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod interp;
pub mod keyframe;
pub mod sampling;
pub mod snapshot;
pub mod stored_curve;
pub mod threadable;

// Re-exports for consumers (adapters)
pub use baking::{BakedCurve, BakingConfig};
pub use config::{Config, SegmentSearch};
pub use error::CurveError;
pub use evaluator::CurveEvaluator;
pub use keyframe::{Keyframe, KeyframeSource};
pub use sampling::{sample_keys, Segment};
pub use snapshot::KeyframeSnapshot;
pub use stored_curve::{parse_stored_curve_json, StoredCurve};
pub use threadable::ThreadableCurve;
