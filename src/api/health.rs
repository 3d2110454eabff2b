use serde::Serialize;

/// Body of the liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Reports that the service is alive.
#[must_use]
pub fn health() -> HealthStatus {
    HealthStatus { status: "ok" }
}
