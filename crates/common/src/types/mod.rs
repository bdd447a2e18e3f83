use serde::Serialize;

/// Body of `GET /health`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
}

impl HealthReport {
    pub fn up() -> Self {
        Self { status: "ok", database: "up" }
    }

    pub fn down() -> Self {
        Self { status: "degraded", database: "down" }
    }
}
