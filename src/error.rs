use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the Drifter planet kernel.
#[derive(Debug, Error)]
pub enum DrifterError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
}

/// Errors related to mesh topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("invalid face {face}: {reason}")]
    InvalidFace { face: usize, reason: String },

    #[error("face {face} references vertex {vertex}, but the mesh has {count} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        count: usize,
    },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors raised while appending to the environment log.
///
/// The messages double as the client-facing error bodies of the boundary
/// layer, so they are kept short and stable.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("empty request body")]
    EmptyBody,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("failed to marshal record")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to prepare log directory {}", path.display())]
    PrepareDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write log {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EnvironmentError {
    /// Returns `true` if the error was caused by the request body rather
    /// than by the log storage.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyBody | Self::InvalidJson(_))
    }
}

/// Errors related to configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Convenience type alias for results using [`DrifterError`].
pub type Result<T> = std::result::Result<T, DrifterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_radius_display() {
        let err = GeometryError::InvalidRadius(-1.5);
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn wrapped_errors_are_transparent() {
        let err: DrifterError = TopologyError::InvalidTopology("open surface".into()).into();
        assert_eq!(err.to_string(), "invalid topology: open surface");
    }

    #[test]
    fn environment_error_classification() {
        assert!(EnvironmentError::EmptyBody.is_client_error());
        let open = EnvironmentError::Open {
            path: PathBuf::from("logs/environments.log"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!open.is_client_error());
        assert!(open.to_string().starts_with("failed to open log"));
    }
}
