use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;

use vitals_core::{HealthProbe, ProbeReport, ProbeStatus, ProbeTarget};

/// Probes health endpoints over HTTP.
#[derive(Clone, Default)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HealthProbe for HttpProbe {
    async fn check(&self, target: &ProbeTarget) -> ProbeReport {
        let started = Instant::now();

        let mut req = self.client.get(&target.url);
        if let Some(timeout) = target.timeout() {
            req = req.timeout(timeout);
        }
        let result = req.send().await;
        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(url = %target.url, error = %e, "health check failed");
                return ProbeReport::unreachable(&e);
            }
        };

        let status = resp.status().as_u16();
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %target.url, error = %e, "health check body unreadable");
                return ProbeReport::unreachable(&e);
            }
        };

        let report = ProbeReport::classify(status, &body);
        tracing::debug!(url = %target.url, status = ?report.status, "health checked");
        if report.status == ProbeStatus::Online {
            report.with_response_time(started.elapsed().as_secs_f64())
        } else {
            report
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use vitals_core::{check_many, OverallStatus, ServiceProfile, SystemClock, SystemHealth};
    use vitals_server::Responder;

    use super::*;

    async fn spawn_responder(profile: ServiceProfile) -> SocketAddr {
        let profile = profile.with_host("127.0.0.1").with_port(0);
        let responder = Responder::bind(profile, Arc::new(SystemClock)).await.unwrap();
        let addr = responder.local_addr();
        tokio::spawn(responder.run());
        addr
    }

    /// A loopback address with nothing listening on it.
    fn closed_addr() -> SocketAddr {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    }

    #[tokio::test]
    async fn live_responder_is_online() {
        let addr = spawn_responder(ServiceProfile::segmentation()).await;
        let target = ProbeTarget::new("seg", format!("http://{addr}/health"));

        let report = HttpProbe::new().check(&target).await;
        assert_eq!(report.status, ProbeStatus::Online);
        assert_eq!(report.message, "Service is healthy");
        assert!(report.response_time.is_some());
    }

    #[tokio::test]
    async fn wrong_path_is_offline() {
        let addr = spawn_responder(ServiceProfile::analysis()).await;
        let target = ProbeTarget::new("analysis", format!("http://{addr}/status"));

        let report = HttpProbe::new().check(&target).await;
        assert_eq!(report.status, ProbeStatus::Offline);
        assert_eq!(report.message, "Service returned HTTP 404");
        assert!(report.response_time.is_none());
    }

    #[tokio::test]
    async fn zero_timeout_does_not_fail_fast() {
        let addr = spawn_responder(ServiceProfile::segmentation()).await;
        let target = ProbeTarget::new("seg", format!("http://{addr}/health")).with_timeout(0);

        let report = HttpProbe::new().check(&target).await;
        assert_eq!(report.status, ProbeStatus::Online);
    }

    #[tokio::test]
    async fn closed_port_is_unreachable() {
        let addr = closed_addr();
        let target = ProbeTarget::new("gone", format!("http://{addr}/health")).with_timeout(2);

        let report = HttpProbe::new().check(&target).await;
        assert_eq!(report.status, ProbeStatus::Offline);
        assert!(
            report.message.starts_with("Service unreachable: "),
            "unexpected message: {}",
            report.message
        );
    }

    #[tokio::test]
    async fn system_health_across_agents() {
        let seg = spawn_responder(ServiceProfile::segmentation()).await;
        let analysis = spawn_responder(ServiceProfile::analysis()).await;
        let targets = vec![
            ProbeTarget::new("Segmentation Agent", format!("http://{seg}/health")),
            ProbeTarget::new("Analysis Agent", format!("http://{analysis}/health")),
        ];

        let healthy = SystemHealth::new(check_many(&HttpProbe::new(), &targets).await);
        assert_eq!(healthy.status, OverallStatus::Healthy);
        assert_eq!(healthy.services[0].name, "Segmentation Agent");

        let mut with_gone = targets;
        with_gone.push(ProbeTarget::new("gone", format!("http://{}/health", closed_addr())));
        let degraded = SystemHealth::new(check_many(&HttpProbe::new(), &with_gone).await);
        assert_eq!(degraded.status, OverallStatus::Degraded);
        assert_eq!(degraded.services[2].report.status, ProbeStatus::Offline);
    }
}
