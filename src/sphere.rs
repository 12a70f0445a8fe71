//! Sphere primitive and ray-sphere intersection.
//!
//! Solves the quadratic |origin + t·direction - center|² = r² for t and
//! reports both roots. Misses, including degenerate zero-length directions,
//! come back as a pair of infinities so they never win a closest-hit test.

use serde::Deserialize;

use crate::color::Color;
use crate::ray::Ray;
use crate::vector::Vector3;

/// Roots reported for a ray that misses.
pub const NO_HIT: (f64, f64) = (f64::INFINITY, f64::INFINITY);

/// How the quadratic roots are divided out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum RootSolver {
    /// Real-valued division.
    #[default]
    #[serde(rename = "real")]
    Real,
    /// Each root floored toward negative infinity, as integer division does.
    #[serde(rename = "integer")]
    IntegerDivision,
}

/// Uniformly colored sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point in world coordinates.
    pub center: Vector3,
    /// Radius, expected to be positive.
    pub radius: f64,
    /// Base color before lighting.
    pub color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vector3, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Both intersection parameters of `ray` with this sphere.
    ///
    /// Returns `(t1, t2)` with `t1 = (-b + √disc) / 2a` and
    /// `t2 = (-b - √disc) / 2a`, or [`NO_HIT`].
    pub fn intersect(&self, ray: &Ray, solver: RootSolver) -> (f64, f64) {
        let co = ray.origin - self.center;

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * co.dot(ray.direction);
        let c = co.dot(co) - self.radius * self.radius;

        // A zero-length direction has no quadratic to solve
        if a == 0.0 {
            return NO_HIT;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return NO_HIT;
        }

        let sqrtd = discriminant.sqrt();
        let divide = |numerator: f64| match solver {
            RootSolver::Real => numerator / (2.0 * a),
            RootSolver::IntegerDivision => (numerator / (2.0 * a)).floor(),
        };
        (divide(-b + sqrtd), divide(-b - sqrtd))
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.center) / self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_sphere(center: Vector3) -> Sphere {
        Sphere::new(center, 1.0, Color::new(255.0, 0.0, 0.0))
    }

    fn forward() -> Ray {
        Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn test_head_on_hit() {
        let sphere = unit_sphere(Vector3::new(0.0, 0.0, 5.0));
        let (t1, t2) = sphere.intersect(&forward(), RootSolver::Real);
        assert_relative_eq!(t1, 6.0);
        assert_relative_eq!(t2, 4.0);
    }

    #[test]
    fn test_tangent_ray_has_double_root() {
        let sphere = unit_sphere(Vector3::new(1.0, 0.0, 5.0));
        let (t1, t2) = sphere.intersect(&forward(), RootSolver::Real);
        assert_eq!(t1, t2);
        assert_relative_eq!(t1, 5.0);
    }

    #[test]
    fn test_negative_discriminant_misses() {
        let sphere = unit_sphere(Vector3::new(3.0, 0.0, 5.0));
        assert_eq!(sphere.intersect(&forward(), RootSolver::Real), NO_HIT);
    }

    #[test]
    fn test_zero_direction_misses() {
        let sphere = unit_sphere(Vector3::ZERO);
        let ray = Ray::new(Vector3::ZERO, Vector3::ZERO);
        assert_eq!(sphere.intersect(&ray, RootSolver::Real), NO_HIT);
    }

    #[test]
    fn test_sphere_behind_eye_has_negative_roots() {
        let sphere = unit_sphere(Vector3::new(0.0, 0.0, -5.0));
        let (t1, t2) = sphere.intersect(&forward(), RootSolver::Real);
        assert!(t1 < 0.0 && t2 < 0.0);
    }

    #[test]
    fn test_integer_division_floors_roots() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, 5.0), 1.5, Color::WHITE);
        let (t1, t2) = sphere.intersect(&forward(), RootSolver::IntegerDivision);
        assert_eq!((t1, t2), (6.0, 3.0));

        let (r1, r2) = sphere.intersect(&forward(), RootSolver::Real);
        assert_relative_eq!(r1, 6.5);
        assert_relative_eq!(r2, 3.5);
    }

    #[test]
    fn test_normal_at_is_unit_length() {
        let sphere = Sphere::new(Vector3::new(1.0, 2.0, 3.0), 2.0, Color::WHITE);
        let normal = sphere.normal_at(Vector3::new(1.0, 4.0, 3.0));
        assert_eq!(normal, Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(normal.length(), 1.0);
    }
}
