use crate::wire::HealthRes;

/// Simple health service for the donation APIs
///
/// Provides a standardised way to check the health status of the service.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Donation service is alive".into(),
        }
    }
}
