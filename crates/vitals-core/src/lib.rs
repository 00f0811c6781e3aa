pub mod error;
pub mod probe;
pub mod traits;
pub mod types;

pub use error::Error;
pub use probe::{
    check_many, overall_status, OverallStatus, ProbeReport, ProbeStatus, ProbeTarget,
    ServiceHealth, SystemHealth,
};
pub use traits::{Clock, FixedClock, HealthProbe, SystemClock};
pub use types::{HealthResponse, ServiceProfile, HEALTH_PATH, STATUS_OK};
