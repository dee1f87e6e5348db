//! Interpolation helpers.
//!
//! v1 ships the cubic Hermite basis used by keyframe curves.

pub mod hermite;
