pub mod envelope;
pub mod validation;

pub use envelope::ApiEnvelope;
