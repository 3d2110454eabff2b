//! Transport-agnostic request handlers and response bodies.

mod environment;
mod health;
mod planet;

pub use environment::{EnvironmentLog, EnvironmentRecord, SaveStatus, DEFAULT_ENV_LOG_FILE};
pub use health::{health, HealthStatus};
pub use planet::{MeshMetadata, PlanetResponse, DEFAULT_PLANET_RADIUS};
