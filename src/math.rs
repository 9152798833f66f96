use std::f64::consts::TAU;

/// A column vector `(x, y)` with y pointing towards 12 o'clock
pub type Vector2 = [f64; 2];

/// Builds a column vector from its two components
pub fn column_vector(x: f64, y: f64) -> Vector2 {
    [x, y]
}

/// Rotation matrix that turns a vector clockwise by `alpha` radians
pub fn rotation_matrix(alpha: f64) -> [[f64; 2]; 2] {
    let (sin_a, cos_a) = alpha.sin_cos();
    [[cos_a, sin_a], [-sin_a, cos_a]]
}

/// Multiplies a 2x2 matrix by a 2-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 2]; 2], vector: &Vector2) -> Vector2 {
    let mut result = [0.0; 2];
    for i in 0..2 {
        for j in 0..2 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Rotates a vector clockwise by `alpha` radians
pub fn rotate(vector: &Vector2, alpha: f64) -> Vector2 {
    multiply_matrix_vector(&rotation_matrix(alpha), vector)
}

/// Euclidean length of a vector
pub fn length(vector: &Vector2) -> f64 {
    (vector[0] * vector[0] + vector[1] * vector[1]).sqrt()
}

/// Angle of a vector measured clockwise from 12 o'clock, in `[0, 2π)`
pub fn clock_angle(vector: &Vector2) -> f64 {
    let angle = vector[0].atan2(vector[1]);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Point on the face at `angle` (clockwise from 12) and distance `scale` from the center
pub fn face_point(angle: f64, scale: f64) -> Vector2 {
    let (sin_a, cos_a) = angle.sin_cos();
    [scale * sin_a, scale * cos_a]
}
