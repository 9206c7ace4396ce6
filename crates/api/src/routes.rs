/// Liveness and version probes
pub mod health;
/// Availability endpoint
pub mod slots;
