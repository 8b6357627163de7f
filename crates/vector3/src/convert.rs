//! Conversions between `Vector3` and other representations

use crate::vector::Vector3;

impl From<f32> for Vector3 {
    fn from(value: f32) -> Self {
        Self::splat(value)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for (f32, f32, f32) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_broadcast() {
        assert_eq!(Vector3::from(-1.5), Vector3::new(-1.5, -1.5, -1.5));
    }

    #[test]
    fn test_array_conversion() {
        let v: Vector3 = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let array: [f32; 3] = v.into();
        assert_eq!(array, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_tuple_conversion() {
        let v = Vector3::from((4.0, 5.0, 6.0));
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(<(f32, f32, f32)>::from(v), (4.0, 5.0, 6.0));
    }

    #[cfg(feature = "nalgebra")]
    #[test]
    fn test_nalgebra_conversion() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let na: nalgebra::Vector3<f32> = v.into();

        assert_eq!(na, nalgebra::Vector3::new(1.0, -2.0, 3.5));
        assert_eq!(Vector3::from(na), v);

        // Cross products agree between the two representations
        let a = Vector3::new(1.0, 2.0, -3.0);
        let b = Vector3::new(-6.0, 7.0, 0.5);
        let na_cross = nalgebra::Vector3::from(a).cross(&nalgebra::Vector3::from(b));
        assert_eq!(Vector3::from(na_cross), a.cross(b));
    }

    #[test]
    fn test_bytemuck_cast() {
        let vectors = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vectors);

        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(std::mem::size_of::<Vector3>(), 3 * std::mem::size_of::<f32>());
        assert_eq!(<Vector3 as bytemuck::Zeroable>::zeroed(), Vector3::zero());
    }
}
