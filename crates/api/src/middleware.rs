/// CORS policy and preflight handling
pub mod cors;
/// Error to response mapping and failure logging
pub mod error_handling;
