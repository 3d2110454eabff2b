mod project_to_sphere;

pub(crate) use project_to_sphere::validate_radius;
pub use project_to_sphere::ProjectToSphere;
