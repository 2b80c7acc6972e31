//! Vector, angle and color types
//!
//! These mirror the layout of the engine's `Vector`, `QAngle` and `Color`
//! so schema fields of those types can be read and written by value.

use std::fmt;
use std::ops::{Add, Sub};

/// 3D vector (world units)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    /// The origin
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Copy of this vector with `dz` added to the Z component
    #[inline]
    pub fn offset_z(self, dz: f32) -> Self {
        Self::new(self.x, self.y, self.z + dz)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {:.2} {:.2}", self.x, self.y, self.z)
    }
}

/// Euler angles in degrees
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QAngle {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl QAngle {
    /// No rotation
    pub const ZERO: QAngle = QAngle::new(0.0, 0.0, 0.0);

    /// Create a new angle
    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

impl fmt::Display for QAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {:.2} {:.2}", self.pitch, self.yaw, self.roll)
    }
}

/// 8-bit RGBA color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a color from its four channels
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Pack as `R | G << 8 | B << 16 | A << 24`
    ///
    /// This is the wire layout user messages expect for color fields.
    #[inline]
    pub const fn packed(&self) -> u32 {
        (self.r as u32) | (self.g as u32) << 8 | (self.b as u32) << 16 | (self.a as u32) << 24
    }

    /// Inverse of [`Color::packed`]
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self::rgba(
            value as u8,
            (value >> 8) as u8,
            (value >> 16) as u8,
            (value >> 24) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_packing() {
        let color = Color::rgba(1, 2, 3, 4);
        assert_eq!(color.packed(), 1 | (2 << 8) | (3 << 16) | (4 << 24));
    }

    #[test]
    fn test_color_packing_high_alpha() {
        // Alpha lands in the top byte, which is the sign bit once cast to i32
        let packed = Color::rgba(0, 0, 0, 255).packed();
        assert_eq!(packed, 0xFF00_0000);
        assert!((packed as i32) < 0);
    }

    #[test]
    fn test_color_from_packed() {
        let color = Color::rgba(10, 20, 30, 40);
        assert_eq!(Color::from_packed(color.packed()), color);
    }

    #[test]
    fn test_vector_offset_z() {
        let v = Vector::new(1.0, 2.0, 3.0).offset_z(-10.0);
        assert_eq!(v, Vector::new(1.0, 2.0, -7.0));
    }

    #[test]
    fn test_vector_ops() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector::new(0.5, 1.5, 2.5));
    }
}
