/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Returns the golden ratio `(1 + sqrt(5)) / 2`.
#[must_use]
pub fn golden_ratio() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}
