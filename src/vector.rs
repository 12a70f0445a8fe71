//! Vector math used by every geometric computation.
//!
//! The tracer works on [`Vector3`] (a `glam::DVec3`), where arity is enforced
//! by the type. The slice helpers below cover vectors whose length is only
//! known at runtime, such as coordinates read from a scene file, and report
//! mismatched lengths instead of silently truncating.

use glam::DVec3;

use crate::error::{RenderError, RenderResult};

/// 3-component vector with `f64` precision.
pub type Vector3 = DVec3;

/// Number of components in a [`Vector3`].
pub const COMPONENTS: usize = 3;

/// Whether [`combine`] adds or subtracts its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Elementwise `x + y`
    Add,
    /// Elementwise `x - y`
    Subtract,
}

fn ensure_same_len(u: &[f64], v: &[f64]) -> RenderResult<()> {
    if u.len() != v.len() {
        return Err(RenderError::DimensionMismatch {
            left: u.len(),
            right: v.len(),
        });
    }
    Ok(())
}

/// Sum of the elementwise products of `u` and `v`.
pub fn dot(u: &[f64], v: &[f64]) -> RenderResult<f64> {
    ensure_same_len(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a * b).sum())
}

/// Multiply every component of `v` by `k`.
pub fn scale(k: f64, v: &[f64]) -> Vec<f64> {
    v.iter().map(|c| k * c).collect()
}

/// Elementwise sum or difference of two vectors of equal length.
pub fn combine(x: &[f64], y: &[f64], op: Combine) -> RenderResult<Vec<f64>> {
    ensure_same_len(x, y)?;
    let combined = x
        .iter()
        .zip(y)
        .map(|(a, b)| match op {
            Combine::Add => a + b,
            Combine::Subtract => a - b,
        })
        .collect();
    Ok(combined)
}

/// Convert a runtime-length slice into a [`Vector3`].
pub fn to_vector3(v: &[f64]) -> RenderResult<Vector3> {
    match v {
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => Err(RenderError::DimensionMismatch {
            left: v.len(),
            right: COMPONENTS,
        }),
    }
}
