//! Diffuse light accumulation at a surface point.
//!
//! Ambient lights add their intensity unconditionally. Point and directional
//! lights add `intensity · (N·L) / norm` when `N·L > 0`, where `norm` depends
//! on the [`ShadingModel`]:
//!
//! - [`ShadingModel::Reference`] divides by the product of the component
//!   counts of N and L (always 3·3). This is not true Lambertian falloff; it
//!   stays the default so existing renders remain byte-identical.
//! - [`ShadingModel::Lambertian`] divides by the Euclidean norms `|N|·|L|`.

use serde::Deserialize;

use crate::scene::Light;
use crate::vector::{Vector3, COMPONENTS};

/// Normalisation applied to `N·L`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingModel {
    /// Divide by component counts.
    #[default]
    Reference,
    /// Divide by vector norms.
    Lambertian,
}

/// Total light intensity reaching `position` with surface normal `normal`.
pub fn compute_lighting(
    position: Vector3,
    normal: Vector3,
    lights: &[Light],
    model: ShadingModel,
) -> f64 {
    let mut total = 0.0;

    for light in lights {
        let (intensity, to_light) = match *light {
            Light::Ambient { intensity } => {
                total += intensity;
                continue;
            }
            Light::Point {
                intensity,
                position: light_position,
            } => (intensity, light_position - position),
            Light::Directional {
                intensity,
                direction,
            } => (intensity, direction),
        };

        let n_dot_l = normal.dot(to_light);
        // Surfaces facing away get nothing from this light
        if n_dot_l > 0.0 {
            let norm = match model {
                ShadingModel::Reference => (COMPONENTS * COMPONENTS) as f64,
                ShadingModel::Lambertian => normal.length() * to_light.length(),
            };
            total += intensity * n_dot_l / norm;
        }
    }

    total
}
