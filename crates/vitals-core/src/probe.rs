//! Client-side view of health endpoints: classifying answers, rolling them up.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::traits::HealthProbe;
use crate::types::{ServiceProfile, STATUS_OK};

/// Per-check timeout when none is given.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const LAST_CHECK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Health of one service as seen by the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Online,
    Degraded,
    Offline,
}

/// Health of a whole set of services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Healthy,
    Degraded,
}

/// Outcome of one health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub status: ProbeStatus,
    pub message: String,
    /// Seconds from sending the request to reading the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<f64>,
    /// Local time of the check, `YYYY-MM-DD HH:MM:SS`.
    pub last_check: String,
    /// Parsed body of an answer that was not a healthy one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl ProbeReport {
    fn at_now(status: ProbeStatus, message: String) -> Self {
        Self {
            status,
            message,
            response_time: None,
            last_check: Local::now().format(LAST_CHECK_FORMAT).to_string(),
            response: None,
        }
    }

    /// Classify an HTTP answer from a health endpoint.
    ///
    /// A 2xx answer whose JSON body has `"status": "ok"` is online. Any other
    /// 2xx answer is degraded. Everything else is offline.
    pub fn classify(http_status: u16, body: &[u8]) -> Self {
        if !(200..300).contains(&http_status) {
            return Self::at_now(
                ProbeStatus::Offline,
                format!("Service returned HTTP {http_status}"),
            );
        }

        let parsed: Option<Value> = serde_json::from_slice(body).ok();
        let status = parsed
            .as_ref()
            .and_then(|v| v.get("status"))
            .and_then(Value::as_str);

        if status == Some(STATUS_OK) {
            let message = parsed
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("Service is healthy")
                .to_string();
            return Self::at_now(ProbeStatus::Online, message);
        }

        let mut report = Self::at_now(
            ProbeStatus::Degraded,
            "Service responded but status is not ok".to_string(),
        );
        report.response = parsed;
        report
    }

    /// Report for an endpoint that could not be reached at all.
    pub fn unreachable(err: &impl fmt::Display) -> Self {
        Self::at_now(ProbeStatus::Offline, format!("Service unreachable: {err}"))
    }

    #[must_use]
    pub fn with_response_time(mut self, secs: f64) -> Self {
        self.response_time = Some(secs);
        self
    }
}

/// A named health endpoint to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeTarget {
    pub name: String,
    pub url: String,
    pub timeout_secs: u64,
}

impl ProbeTarget {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Per-request timeout; `0` seconds means none.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl From<&ServiceProfile> for ProbeTarget {
    fn from(profile: &ServiceProfile) -> Self {
        Self::new(profile.name.clone(), profile.health_url())
    }
}

/// Parses `name=url`.
impl FromStr for ProbeTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, url) = s
            .split_once('=')
            .ok_or_else(|| Error::InvalidTarget(format!("expected name=url, got '{s}'")))?;
        let (name, url) = (name.trim(), url.trim());
        if name.is_empty() || url.is_empty() {
            return Err(Error::InvalidTarget(format!(
                "name and url must both be non-empty in '{s}'"
            )));
        }
        Ok(Self::new(name, url))
    }
}

/// A target together with the result of checking it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub report: ProbeReport,
}

/// Roll-up of a set of checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth {
    pub status: OverallStatus,
    pub services: Vec<ServiceHealth>,
}

impl SystemHealth {
    #[must_use]
    pub fn new(services: Vec<ServiceHealth>) -> Self {
        let status = overall_status(services.iter().map(|s| &s.report));
        Self { status, services }
    }
}

/// Degraded as soon as one service is not online.
pub fn overall_status<'a>(reports: impl IntoIterator<Item = &'a ProbeReport>) -> OverallStatus {
    let any_unhealthy = reports.into_iter().any(|r| match r.status {
        ProbeStatus::Offline | ProbeStatus::Degraded => true,
        ProbeStatus::Online => false,
    });
    if any_unhealthy {
        OverallStatus::Degraded
    } else {
        OverallStatus::Healthy
    }
}

/// Check every target concurrently. Results keep the order of `targets`.
pub async fn check_many<P>(probe: &P, targets: &[ProbeTarget]) -> Vec<ServiceHealth>
where
    P: HealthProbe + ?Sized,
{
    let checks = targets.iter().map(|target| async move {
        let report = probe.check(target).await;
        ServiceHealth {
            name: target.name.clone(),
            url: target.url.clone(),
            report,
        }
    });
    futures::future::join_all(checks).await
}
