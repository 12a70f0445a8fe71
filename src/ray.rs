//! Rays cast from the eye through the viewport.
//!
//! A ray is r(t) = origin + t * direction. Directions are left unnormalized:
//! `t = 1` lands exactly on the viewport plane, which is what the trace
//! bounds are expressed against.

use crate::vector::Vector3;

/// Semi-infinite line used for intersection testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point, the eye for primary rays.
    pub origin: Vector3,
    /// Direction through the viewport cell of the pixel being traced.
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.5, 2.0));
        assert_eq!(ray.at(0.0), ray.origin);
        assert_eq!(ray.at(2.0), Vector3::new(1.0, 1.0, 4.0));
    }
}
