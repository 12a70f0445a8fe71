//! Scene description: spheres, lights and the viewport rays pass through.
//!
//! Everything here is built once before tracing and only read afterwards, so
//! a [`Scene`] can be shared across render threads without synchronisation.

use crate::color::Color;
use crate::sphere::Sphere;
use crate::vector::Vector3;

/// Light source, matched exhaustively when computing lighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Constant contribution to every lit point.
    Ambient {
        /// Light intensity
        intensity: f64,
    },
    /// Light radiating from a point in space.
    Point {
        /// Light intensity
        intensity: f64,
        /// World position of the light
        position: Vector3,
    },
    /// Light arriving from a fixed direction.
    Directional {
        /// Light intensity
        intensity: f64,
        /// Direction towards the light, not necessarily normalized
        direction: Vector3,
    },
}

impl Light {
    /// Intensity regardless of kind.
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

/// Rectangle in front of the eye that canvas pixels are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in world units
    pub width: f64,
    /// Height in world units
    pub height: f64,
    /// Distance from the eye along +z
    pub distance: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

/// Objects and lights to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Spheres, tested in order
    pub spheres: Vec<Sphere>,
    /// Lights summed at every hit point
    pub lights: Vec<Light>,
    /// Color of rays that hit nothing
    pub background: Color,
}

impl Scene {
    /// Scene with no spheres or lights on a white background.
    pub fn empty() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background: Color::WHITE,
        }
    }

    /// Three colored unit spheres resting on a large yellow ground sphere,
    /// lit by ambient, point and directional light.
    pub fn reference() -> Self {
        Self {
            spheres: vec![
                Sphere::new(Vector3::new(0.0, -1.0, 3.0), 1.0, Color::new(255.0, 0.0, 0.0)),
                Sphere::new(Vector3::new(2.0, 0.0, 4.0), 1.0, Color::new(0.0, 0.0, 255.0)),
                Sphere::new(Vector3::new(-2.0, 0.0, 4.0), 1.0, Color::new(0.0, 255.0, 0.0)),
                Sphere::new(
                    Vector3::new(0.0, -5001.0, 0.0),
                    5000.0,
                    Color::new(255.0, 255.0, 0.0),
                ),
            ],
            lights: vec![
                Light::Ambient { intensity: 0.2 },
                Light::Point {
                    intensity: 0.6,
                    position: Vector3::new(2.0, 1.0, 0.0),
                },
                Light::Directional {
                    intensity: 0.2,
                    direction: Vector3::new(1.0, 4.0, 4.0),
                },
            ],
            background: Color::WHITE,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_intensity() {
        let lights = Scene::reference().lights;
        let total: f64 = lights.iter().map(Light::intensity).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::empty();
        assert!(scene.spheres.is_empty());
        assert_eq!(scene.background, Color::WHITE);
    }
}
