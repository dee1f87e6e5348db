//! Segment lookup and clamp-mode sampling over a keyframe slice.
//!
//! Model:
//! - Keys are ordered by non-decreasing `time`.
//! - Queries before the first key hold the first value, queries at or after
//!   the last key hold the last value (clamp wrap mode, both ends).
//! - Inside the range, the enclosing segment is `[k(i-1), k(i)]` where `k(i)`
//!   is the first key whose time is strictly greater than `t`.
//!
//! API:
//! - sample_keys(&[Keyframe], t, &Config) / sample_keys_with_derivative(...)

use crate::config::Config;
use crate::interp::hermite::{eval_segment, eval_segment_with_derivative};
use crate::keyframe::Keyframe;

/// Where a query time falls relative to the keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// No keys at all.
    Empty,
    /// Hold the value of the key at this index.
    Clamp(usize),
    /// Interpolate between `index - 1` and `index`.
    Between(usize),
}

/// Index of the first key after `keys[0]` whose time exceeds `t`, scanning
/// front to back. Returns `keys.len()` when there is none.
#[inline]
fn first_later_linear(keys: &[Keyframe], t: f32) -> usize {
    for (i, key) in keys.iter().enumerate().skip(1) {
        if t < key.time {
            return i;
        }
    }
    keys.len()
}

/// Binary-search twin of [`first_later_linear`]; agrees with it whenever
/// key times are non-decreasing (NaN `t` included).
#[inline]
fn first_later_binary(keys: &[Keyframe], t: f32) -> usize {
    1 + keys[1..].partition_point(|key| !(t < key.time))
}

/// Locate `t` among `keys`.
pub fn find_segment(keys: &[Keyframe], t: f32, cfg: &Config) -> Segment {
    let n = keys.len();
    match n {
        0 => Segment::Empty,
        1 => Segment::Clamp(0),
        _ => {
            if t < keys[0].time {
                return Segment::Clamp(0);
            }
            let i = if cfg.use_binary_search(n) {
                first_later_binary(keys, t)
            } else {
                first_later_linear(keys, t)
            };
            if i >= n {
                Segment::Clamp(n - 1)
            } else {
                Segment::Between(i)
            }
        }
    }
}

/// Sample the curve described by `keys` at time `t`.
/// Empty keys sample to `0.0`.
pub fn sample_keys(keys: &[Keyframe], t: f32, cfg: &Config) -> f32 {
    match find_segment(keys, t, cfg) {
        Segment::Empty => 0.0,
        Segment::Clamp(i) => keys[i].value,
        Segment::Between(i) => eval_segment(&keys[i - 1], &keys[i], t),
    }
}

/// Sample value and dv/dt at time `t`. Clamped regions have zero slope.
pub fn sample_keys_with_derivative(keys: &[Keyframe], t: f32, cfg: &Config) -> (f32, f32) {
    match find_segment(keys, t, cfg) {
        Segment::Empty => (0.0, 0.0),
        Segment::Clamp(i) => (keys[i].value, 0.0),
        Segment::Between(i) => eval_segment_with_derivative(&keys[i - 1], &keys[i], t),
    }
}
