use vitals_core::{HealthProbe, ProbeStatus, ProbeTarget};

use crate::probe::HttpProbe;

/// Probe one health endpoint and print the report. Returns whether it was online.
pub async fn run(url: &str, timeout_secs: u64) -> anyhow::Result<bool> {
    let target = ProbeTarget::new(url, url).with_timeout(timeout_secs);
    let report = HttpProbe::new().check(&target).await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(report.status == ProbeStatus::Online)
}
