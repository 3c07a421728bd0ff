use itertools::Itertools;
use nalgebra::{Matrix3, Matrix4, Rotation3, Scale3, Translation3};

pub type Mat4 = Matrix4<f64>;

/// Inverse with an identity fallback for singular matrices.
pub fn safe_inverse(matrix: &Mat4) -> Mat4 {
    matrix.try_inverse().unwrap_or_else(Mat4::identity)
}

pub fn parent_local(parent: Option<&Mat4>, own: &Mat4) -> Mat4 {
    match parent {
        Some(parent) => safe_inverse(parent) * own,
        None => *own,
    }
}

pub fn translation_part(matrix: &Mat4) -> [f64; 3] {
    [matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]]
}

pub fn scale_part(matrix: &Mat4) -> [f64; 3] {
    let basis = matrix.fixed_view::<3, 3>(0, 0);
    [basis.column(0).norm(), basis.column(1).norm(), basis.column(2).norm()]
}

// Assumes the basis is rotation * scale, no shear.
pub fn rotation_part(matrix: &Mat4) -> Rotation3<f64> {
    let mut basis: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();

    for mut column in basis.column_iter_mut() {
        let length = column.norm();
        if length > 0.0 {
            column /= length;
        }
    }

    Rotation3::from_matrix_unchecked(basis)
}

/// Euler angles in XYZ order, converted to degrees.
pub fn euler_degrees(matrix: &Mat4) -> [f64; 3] {
    let (x, y, z) = rotation_part(matrix).euler_angles();
    [x.to_degrees(), y.to_degrees(), z.to_degrees()]
}

pub fn compose_trs(translation: &[f64; 3], rotation: &Rotation3<f64>, scale: &[f64; 3]) -> Mat4 {
    Translation3::new(translation[0], translation[1], translation[2]).to_homogeneous()
        * rotation.to_homogeneous()
        * Scale3::new(scale[0], scale[1], scale[2]).to_homogeneous()
}

pub fn round_component(value: f64) -> f64 {
    let rounded = (value * 1_000_000.0).round() / 1_000_000.0;

    // Collapse negative zero
    if rounded == 0.0 { 0.0 } else { rounded }
}

pub fn format_components(values: &[f64; 3]) -> String {
    values
        .iter()
        .map(|v| round_component(*v).to_string())
        .join(" ")
}
