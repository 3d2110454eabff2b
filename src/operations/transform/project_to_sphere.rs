use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// Radially projects points onto a sphere centered at the origin.
///
/// Each point is rescaled by `radius / |p|`. Points at the origin have no
/// direction and are left where they are.
pub struct ProjectToSphere {
    radius: f64,
}

impl ProjectToSphere {
    /// Creates a new `ProjectToSphere` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Executes the projection, modifying the points in-place.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] if the radius is not finite
    /// or not strictly positive.
    pub fn execute(&self, points: &mut [Point3]) -> Result<()> {
        validate_radius(self.radius)?;

        for p in points.iter_mut() {
            let length = p.coords.norm();
            if length > 0.0 {
                p.coords = p.coords / length * self.radius;
            }
        }
        Ok(())
    }
}

/// Checks that `radius` is finite and strictly positive.
pub(crate) fn validate_radius(radius: f64) -> std::result::Result<(), GeometryError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRadius(radius))
    }
}
