//! Point colors
//!
//! Colors are stored per point as linear RGB floats in `[0, 1]`, which is
//! what stroke renderers consume directly.

use serde::{Deserialize, Serialize};

/// An RGB color with float components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a color from float components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Components as an array, in r, g, b order
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(0.988, 0.384, 0.333);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::new(0.514, 0.757, 0.404);
    pub const GREEN_D: Color = Color::new(0.467, 0.690, 0.365);
    pub const BLUE: Color = Color::new(0.345, 0.769, 0.867);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let c: Color = serde_json::from_str(r#"{"r": 0.5, "g": 0.25, "b": 1.0}"#).unwrap();
        assert_eq!(c.to_array(), [0.5, 0.25, 1.0]);
    }
}
