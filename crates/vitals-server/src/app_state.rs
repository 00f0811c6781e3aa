use std::sync::Arc;

use vitals_core::{Clock, ServiceProfile};

/// Shared application state: the instance's identity and its clock.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<ServiceProfile>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    #[must_use]
    pub fn new(profile: ServiceProfile, clock: Arc<dyn Clock>) -> Self {
        Self {
            profile: Arc::new(profile),
            clock,
        }
    }
}
