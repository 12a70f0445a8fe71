//! Open parameter ranges for accepting intersection roots.

/// Range of ray parameters `t` a hit may fall in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Exclusive lower bound
    pub min: f64,
    /// Exclusive upper bound
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// True when no value can satisfy [`Interval::surrounds`].
    pub fn is_empty(&self) -> bool {
        !(self.min < self.max)
    }
}

impl Default for Interval {
    /// Everything beyond the viewport plane.
    fn default() -> Self {
        Self::new(1.0, f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounds_is_strict() {
        let bounds = Interval::new(1.0, 5.0);
        assert!(bounds.surrounds(1.5));
        assert!(!bounds.surrounds(1.0));
        assert!(!bounds.surrounds(5.0));
        assert!(!bounds.surrounds(-2.0));
    }

    #[test]
    fn test_default_rejects_infinity() {
        let bounds = Interval::default();
        assert!(bounds.surrounds(1e12));
        assert!(!bounds.surrounds(f64::INFINITY));
        assert!(!bounds.is_empty());
        assert!(Interval::new(3.0, 3.0).is_empty());
    }
}
