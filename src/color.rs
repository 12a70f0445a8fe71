//! RGB colors in the 0..=255 range.
//!
//! Channels stay real-valued while shading so light intensities can scale a
//! base color without rounding. [`Color::clamp`] bounds them before a color
//! is stored, and [`Color::to_hex`] produces the canonical `rrggbb` key the
//! image encoder deduplicates on.

use std::fmt;

/// Real-valued RGB triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Color {
    /// Background color for rays that escape the scene.
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);
    /// Black, the result of shading with zero light.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// Create a color from raw channel values.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `k`.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// Return a copy with every channel bounded to [0, 255].
    pub fn clamp(self) -> Self {
        Self::new(
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b),
        )
    }

    /// Clamped channels truncated to bytes.
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.clamp();
        // `as` truncates toward zero and maps NaN to 0
        [c.r as u8, c.g as u8, c.b as u8]
    }

    /// Lowercase `rrggbb` rendering of the clamped color.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

fn clamp_channel(c: f64) -> f64 {
    if c < 0.0 {
        0.0
    } else if c > 255.0 {
        255.0
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds_channels() {
        let c = Color::new(-12.0, 300.5, 128.25).clamp();
        assert_eq!(c, Color::new(0.0, 255.0, 128.25));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let samples = [
            Color::new(-1.0, 0.0, 1.0),
            Color::new(254.9, 255.1, 1e9),
            Color::new(-1e9, 42.0, 255.0),
        ];
        for c in samples {
            let once = c.clamp();
            assert_eq!(once.clamp(), once);
            for channel in [once.r, once.g, once.b] {
                assert!((0.0..=255.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::new(255.0, 0.0, 0.0).to_hex(), "ff0000");
        assert_eq!(Color::new(1.0, 10.0, 171.0).to_hex(), "010aab");
        assert_eq!(Color::WHITE.to_hex(), "ffffff");
    }

    #[test]
    fn test_to_hex_clamps_and_truncates() {
        assert_eq!(Color::new(400.0, -3.0, 15.9).to_hex(), "ff000f");
        // colors equal after truncation share a key
        assert_eq!(
            Color::new(51.2, 0.0, 0.0).to_hex(),
            Color::new(51.7, 0.0, 0.0).to_hex()
        );
    }

    #[test]
    fn test_scale_and_display() {
        let c = Color::new(255.0, 0.0, 100.0).scale(0.5);
        assert_eq!(c, Color::new(127.5, 0.0, 50.0));
        assert_eq!(c.to_string(), "#7f0032");
    }
}
