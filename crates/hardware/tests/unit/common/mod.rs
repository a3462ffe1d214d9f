
/// Fault display and classification.
pub mod error;
