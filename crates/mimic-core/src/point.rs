//! Point - a single landmark position
//!
//! Coordinates are normalized image space as delivered by the landmark
//! extractor. An undetected landmark is the zero point.

use serde::{Deserialize, Serialize};

/// 3D position (normalized coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point on the image plane (z = 0)
    pub fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Is this the undetected-landmark sentinel?
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sentinel() {
        assert!(Point3::zero().is_zero());
        assert!(Point3::default().is_zero());
        assert!(!Point3::new(0.0, 0.0, 0.1).is_zero());
    }

    #[test]
    fn test_array_conversion() {
        let p = Point3::from([0.25, 0.5, -0.1]);
        assert_eq!(p, Point3::new(0.25, 0.5, -0.1));
        let back: [f64; 3] = p.into();
        assert_eq!(back, [0.25, 0.5, -0.1]);
    }

    #[test]
    fn test_planar_has_zero_depth() {
        let p = Point3::planar(0.3, 0.7);
        assert_eq!(p.z, 0.0);
    }
}
