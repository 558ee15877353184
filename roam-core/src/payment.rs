use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

/// Default processing delay for the simulated gateway.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Default approval probability for the simulated gateway.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.95;

/// Outcome of a payment attempt. A decline is a normal business result,
/// not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    Approved,
    Declined,
}

/// A single payment attempt as handed to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: i64,
    pub payment_method_id: Uuid,
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment cancelled before completion")]
    Cancelled,

    #[error("Payment gateway unavailable: {0}")]
    GatewayUnavailable(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Process a single payment attempt. No retry happens inside the
    /// gateway; a declined payment is resolved, not retried.
    async fn process_payment(
        &self,
        request: &PaymentRequest,
        cancel: &CancellationToken,
    ) -> Result<PaymentOutcome, PaymentError>;
}

/// Gateway stand-in: suspends for a fixed delay, then approves with a
/// fixed probability. Nothing is validated and nothing is persisted.
pub struct SimulatedGateway {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedGateway {
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self {
            delay,
            success_rate,
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_SUCCESS_RATE)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn process_payment(
        &self,
        request: &PaymentRequest,
        cancel: &CancellationToken,
    ) -> Result<PaymentOutcome, PaymentError> {
        tokio::select! {
            _ = cancel.cancelled() => return Err(PaymentError::Cancelled),
            _ = tokio::time::sleep(self.delay) => {}
        }

        let outcome = if rand::thread_rng().gen::<f64>() < self.success_rate {
            PaymentOutcome::Approved
        } else {
            PaymentOutcome::Declined
        };

        info!(
            amount = request.amount,
            method = %request.payment_method_id,
            ?outcome,
            "Payment resolved: {}",
            request.description
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PaymentRequest {
        PaymentRequest {
            amount: 45000,
            payment_method_id: Uuid::new_v4(),
            description: "Flight booking".to_string(),
        }
    }

    #[tokio::test]
    async fn certain_gateway_always_approves() {
        let gateway = SimulatedGateway::new(Duration::ZERO, 1.0);
        let outcome = gateway
            .process_payment(&request(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(outcome, PaymentOutcome::Approved);
    }

    #[tokio::test]
    async fn hopeless_gateway_always_declines() {
        let gateway = SimulatedGateway::new(Duration::ZERO, 0.0);
        let outcome = gateway
            .process_payment(&request(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(outcome, PaymentOutcome::Declined);
    }

    #[tokio::test]
    async fn success_rate_is_statistically_close_to_configured() {
        let gateway = SimulatedGateway::new(Duration::ZERO, 0.95);
        let cancel = CancellationToken::new();
        let req = request();

        let mut approved = 0;
        for _ in 0..1000 {
            if gateway.process_payment(&req, &cancel).await.unwrap() == PaymentOutcome::Approved {
                approved += 1;
            }
        }

        // Binomial(1000, 0.95) has a standard deviation of ~6.9, so a
        // window of +/- 40 around 950 keeps the test stable.
        assert!(
            (910..=990).contains(&approved),
            "approval count {} outside expected band",
            approved
        );
    }

    #[tokio::test]
    async fn cancellation_resolves_before_the_delay() {
        let gateway = SimulatedGateway::new(Duration::from_secs(60), 1.0);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = gateway.process_payment(&request(), &cancel).await;
        assert!(matches!(result, Err(PaymentError::Cancelled)));
    }
}
