//! Cubic Hermite basis and per-segment evaluation.
//!
//! Segment parameter `u` is normalized to [0,1] over the segment. Key tangents
//! are slopes per unit time, so they are scaled by the segment duration
//! before entering the basis.
//!
//! Duration and `u` are computed in f64 so segments between extreme but
//! finite f32 times (e.g. -3e38 .. 3e38) still interpolate.

use crate::keyframe::Keyframe;

/// Basis weights `[h00, h10, h01, h11]` at `u`.
#[inline]
pub fn hermite_basis(u: f32) -> [f32; 4] {
    let u2 = u * u;
    let u3 = u2 * u;
    [
        2.0 * u3 - 3.0 * u2 + 1.0,
        u3 - 2.0 * u2 + u,
        u3 - u2,
        -2.0 * u3 + 3.0 * u2,
    ]
}

/// d/du of the basis weights.
#[inline]
pub fn hermite_basis_derivative(u: f32) -> [f32; 4] {
    let u2 = u * u;
    [
        6.0 * u2 - 6.0 * u,
        3.0 * u2 - 4.0 * u + 1.0,
        3.0 * u2 - 2.0 * u,
        -6.0 * u2 + 6.0 * u,
    ]
}

/// Two-point Hermite with already-scaled tangents `m0`, `m1`.
#[inline]
pub fn hermite(p0: f32, m0: f32, m1: f32, p1: f32, u: f32) -> f32 {
    let [h00, h10, h01, h11] = hermite_basis(u);
    h00 * p0 + h10 * m0 + h01 * m1 + h11 * p1
}

/// Segment duration, or `None` when it cannot be normalized over
/// (coincident, inverted or infinite times).
#[inline]
fn segment_duration(k0: &Keyframe, k1: &Keyframe) -> Option<f64> {
    let dt = f64::from(k1.time) - f64::from(k0.time);
    (dt.is_finite() && dt > 0.0).then_some(dt)
}

#[inline]
fn local_param(t: f32, t0: f32, dt: f64) -> f32 {
    ((f64::from(t) - f64::from(t0)) / dt).clamp(0.0, 1.0) as f32
}

#[inline]
fn scale_tangent(tangent: f32, dt: f64) -> f32 {
    (f64::from(tangent) * dt) as f32
}

/// Evaluate the segment `k0 -> k1` at absolute time `t`.
///
/// Degenerate segments return `k0.value`.
pub fn eval_segment(k0: &Keyframe, k1: &Keyframe, t: f32) -> f32 {
    let Some(dt) = segment_duration(k0, k1) else {
        return k0.value;
    };
    let u = local_param(t, k0.time, dt);
    hermite(
        k0.value,
        scale_tangent(k0.out_tangent, dt),
        scale_tangent(k1.in_tangent, dt),
        k1.value,
        u,
    )
}

/// Value and dv/dt of the segment `k0 -> k1` at absolute time `t`.
///
/// Degenerate segments return `(k0.value, 0.0)`.
pub fn eval_segment_with_derivative(k0: &Keyframe, k1: &Keyframe, t: f32) -> (f32, f32) {
    let Some(dt) = segment_duration(k0, k1) else {
        return (k0.value, 0.0);
    };
    let u = local_param(t, k0.time, dt);
    let m0 = scale_tangent(k0.out_tangent, dt);
    let m1 = scale_tangent(k1.in_tangent, dt);
    let value = hermite(k0.value, m0, m1, k1.value, u);
    let [d00, d10, d01, d11] = hermite_basis_derivative(u);
    let dv_du = d00 * k0.value + d10 * m0 + d01 * m1 + d11 * k1.value;
    (value, (f64::from(dv_du) / dt) as f32)
}
