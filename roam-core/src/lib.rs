pub mod payment;

pub use payment::{PaymentError, PaymentGateway, PaymentOutcome, PaymentRequest, SimulatedGateway};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Payment processing failed: {0}")]
    Payment(#[from] payment::PaymentError),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
