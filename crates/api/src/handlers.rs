/// Availability lookup
pub mod slots;
