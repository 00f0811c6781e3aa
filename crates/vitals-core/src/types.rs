use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value of `status` in every health response.
pub const STATUS_OK: &str = "ok";

/// The only path a responder answers on.
pub const HEALTH_PATH: &str = "/health";

/// Identity and bind address of one responder instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProfile {
    pub name: String,
    pub description: String,
    pub host: String,
    pub port: u16,
}

impl ServiceProfile {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            host: host.into(),
            port,
        }
    }

    /// The segmentation agent placeholder on `localhost:8001`.
    #[must_use]
    pub fn segmentation() -> Self {
        Self::new(
            "Segmentation Agent",
            "Medical image segmentation service is running",
            "localhost",
            8001,
        )
    }

    /// The analysis agent placeholder on `localhost:8003`.
    #[must_use]
    pub fn analysis() -> Self {
        Self::new(
            "Analysis Agent",
            "AI-powered medical analysis service is running",
            "localhost",
            8003,
        )
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port`, as passed to the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr())
    }

    pub fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.base_url())
    }
}

/// Body of a successful health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub description: String,
}

impl HealthResponse {
    /// Build the response a profile gives at instant `at`.
    #[must_use]
    pub fn new(profile: &ServiceProfile, at: DateTime<Utc>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            service: profile.name.clone(),
            timestamp: epoch_seconds(at),
            description: profile.description.clone(),
        }
    }
}

/// Fractional seconds since the Unix epoch, at microsecond resolution.
#[allow(clippy::cast_precision_loss)]
pub fn epoch_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}
