use vitals_core::{check_many, OverallStatus, ProbeTarget, ServiceProfile, SystemHealth};

use crate::probe::HttpProbe;

/// The two local agents, at their published addresses.
pub fn default_targets() -> Vec<ProbeTarget> {
    [ServiceProfile::segmentation(), ServiceProfile::analysis()]
        .iter()
        .map(ProbeTarget::from)
        .collect()
}

/// Probe every target, print the roll-up. Returns whether the system is healthy.
pub async fn run(targets: Vec<ProbeTarget>, timeout_secs: u64) -> anyhow::Result<bool> {
    let targets = if targets.is_empty() {
        default_targets()
    } else {
        targets
    };
    let targets: Vec<_> = targets
        .into_iter()
        .map(|t| t.with_timeout(timeout_secs))
        .collect();

    let system = SystemHealth::new(check_many(&HttpProbe::new(), &targets).await);
    tracing::info!(status = ?system.status, services = system.services.len(), "system checked");

    println!("{}", serde_json::to_string_pretty(&system)?);

    Ok(system.status == OverallStatus::Healthy)
}
