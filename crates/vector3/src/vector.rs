//! The `Vector3` value type and its geometric operations

use bytemuck::{Pod, Zeroable};

use crate::logging::trace;

/// A 3-component `f32` vector used for positions, directions and scales.
///
/// Plain value semantics: the type is `Copy`, lives on the stack or inline in
/// the owning struct, and is laid out as three consecutive `f32`s so it can be
/// handed to the GPU through `bytemuck`.
///
/// None of the operations fail. Degenerate input either hits an explicit
/// guard (zero-length [`normalize`](Self::normalize), parallel
/// [`slerp`](Self::slerp)) or propagates as NaN/infinity.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3 {
    /// Create a vector from its three components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with `value` in every component
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The zero vector
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// The vector with every component set to one
    pub const fn one() -> Self {
        Self::splat(1.0)
    }

    /// Unit vector along +X
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Unit vector along +Y
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along +Z
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Cross product `self × other`
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Dot product
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Same as [`length`](Self::length)
    pub fn magnitude(&self) -> f32 {
        self.length()
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Return a unit-length copy of this vector.
    ///
    /// A vector whose length is exactly `0.0` is returned unchanged.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Scale this vector to unit length in place.
    ///
    /// Does nothing when the length is exactly `0.0`.
    pub fn normalize(&mut self) {
        let length = self.length();
        if length == 0.0 {
            trace!("normalize skipped for zero-length vector");
            return;
        }

        let norm = 1.0 / length;
        self.x *= norm;
        self.y *= norm;
        self.z *= norm;
    }

    /// Linearly interpolate towards `to`.
    ///
    /// `t` is clamped to `[0, 1]` first, so values outside the range give the
    /// nearest endpoint.
    pub fn lerp(&self, to: Self, t: f32) -> Self {
        let t = clamp_unit(t);
        Self::new(
            self.x + (to.x - self.x) * t,
            self.y + (to.y - self.y) * t,
            self.z + (to.z - self.z) * t,
        )
    }

    /// Reflect this vector off the plane with the given normal.
    ///
    /// `normal` must already be unit length.
    pub fn reflect(&self, normal: Self) -> Self {
        let d = self.dot(normal);
        Self::new(
            self.x - 2.0 * d * normal.x,
            self.y - 2.0 * d * normal.y,
            self.z - 2.0 * d * normal.z,
        )
    }

    /// Spherically interpolate towards `to`.
    ///
    /// Both vectors are expected to be unit length; other input is not
    /// checked and may produce NaN. `t` is clamped to `[0, 1]`. When the
    /// sine of the angle between the vectors is exactly zero this falls
    /// back to [`lerp`](Self::lerp).
    pub fn slerp(&self, to: Self, t: f32) -> Self {
        let t = clamp_unit(t);
        let theta = self.dot(to).acos();
        let sin_theta = theta.sin();

        if sin_theta == 0.0 {
            trace!("slerp between parallel vectors, using lerp");
            return self.lerp(to, t);
        }

        let w1 = ((1.0 - t) * theta).sin() / sin_theta;
        let w2 = (t * theta).sin() / sin_theta;

        Self::new(
            self.x * w1 + to.x * w2,
            self.y * w1 + to.y * w2,
            self.z * w1 + to.z * w2,
        )
    }
}

/// Clamp an interpolation factor to `[0, 1]`; NaN resolves to `1.0`.
fn clamp_unit(t: f32) -> f32 {
    t.min(1.0).max(0.0)
}
