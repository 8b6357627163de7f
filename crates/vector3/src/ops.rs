//! Component-wise operator implementations for `Vector3`
//!
//! Every binary operator comes in a vector-vector and a vector-scalar form,
//! each with its compound-assignment counterpart. Division by zero follows
//! IEEE 754 and never panics.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::vector::Vector3;

macro_rules! impl_componentwise_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl $op_trait for Vector3 {
            type Output = Self;

            fn $op_fn(self, rhs: Self) -> Self {
                Self::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl $op_trait<f32> for Vector3 {
            type Output = Self;

            fn $op_fn(self, rhs: f32) -> Self {
                Self::new(self.x $op rhs, self.y $op rhs, self.z $op rhs)
            }
        }

        impl $assign_trait for Vector3 {
            fn $assign_fn(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl $assign_trait<f32> for Vector3 {
            fn $assign_fn(&mut self, rhs: f32) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_componentwise_op!(Add, add, AddAssign, add_assign, +);
impl_componentwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise_op!(Div, div, DivAssign, div_assign, /);

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
