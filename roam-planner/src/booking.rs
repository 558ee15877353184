use crate::models::{Expense, ExpenseDraft, Trip, TripDraft, TripStatus};
use crate::planner::TripPlanner;
use chrono::{Duration, NaiveDate};
use roam_catalog::Destination;
use roam_core::{CoreResult, PaymentGateway, PaymentOutcome, PaymentRequest};
use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

/// Result of driving an expense through the booking flow.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// The expense was recorded (directly, or after an approved payment).
    Recorded(Expense),
    /// The gateway declined; nothing was committed. The user may retry.
    Declined,
}

/// Result of booking a catalog destination as a new trip.
#[derive(Debug, Clone, PartialEq)]
pub enum TripBookingOutcome {
    Booked(Trip),
    Declined,
}

/// The confirm-then-commit flow around payments: amounts above the
/// configured threshold must clear the payment gateway first, and only an
/// approved payment commits state. Small expense amounts are recorded
/// directly; destination bookings always go through the gateway.
pub struct BookingFlow<'g> {
    gateway: &'g dyn PaymentGateway,
    confirmation_threshold: i64,
}

impl<'g> BookingFlow<'g> {
    pub fn new(gateway: &'g dyn PaymentGateway, confirmation_threshold: i64) -> Self {
        Self {
            gateway,
            confirmation_threshold,
        }
    }

    pub async fn record_expense(
        &self,
        planner: &mut TripPlanner,
        mut draft: ExpenseDraft,
        payment_method_id: Uuid,
        cancel: &CancellationToken,
    ) -> CoreResult<BookingOutcome> {
        if draft.amount <= self.confirmation_threshold {
            let expense = planner.add_expense(draft).await;
            return Ok(BookingOutcome::Recorded(expense));
        }

        let request = PaymentRequest {
            amount: draft.amount,
            payment_method_id,
            description: draft.description.clone(),
        };
        match self.gateway.process_payment(&request, cancel).await? {
            PaymentOutcome::Approved => {
                // Snapshot the method onto the expense, not a live reference.
                draft.payment_method = planner
                    .payment_methods()
                    .iter()
                    .find(|m| m.id == payment_method_id)
                    .cloned();
                let expense = planner.add_expense(draft).await;
                Ok(BookingOutcome::Recorded(expense))
            }
            PaymentOutcome::Declined => {
                info!("Payment declined, expense not recorded");
                Ok(BookingOutcome::Declined)
            }
        }
    }

    /// Book a catalog destination: pay for a 7-day trip package priced at
    /// the destination's average daily cost, and only on approval create the
    /// trip, starting 30 days out, with the method snapshotted onto it.
    pub async fn book_destination(
        &self,
        planner: &mut TripPlanner,
        destination: &Destination,
        payment_method_id: Uuid,
        today: NaiveDate,
        cancel: &CancellationToken,
    ) -> CoreResult<TripBookingOutcome> {
        let amount = destination.average_cost * 7;
        let request = PaymentRequest {
            amount,
            payment_method_id,
            description: format!("Trip package to {}", destination.name),
        };

        match self.gateway.process_payment(&request, cancel).await? {
            PaymentOutcome::Approved => {
                let start_date = today + Duration::days(30);
                let end_date = start_date + Duration::days(7);
                let payment_method = planner
                    .payment_methods()
                    .iter()
                    .find(|m| m.id == payment_method_id)
                    .cloned();

                let trip = planner
                    .add_trip(TripDraft {
                        title: format!("Adventure in {}", destination.name),
                        destination: format!("{}, {}", destination.name, destination.country),
                        start_date,
                        end_date,
                        budget: amount,
                        spent: 0,
                        image: destination.image.clone(),
                        status: TripStatus::Upcoming,
                        payment_method,
                    })
                    .await;
                Ok(TripBookingOutcome::Booked(trip))
            }
            PaymentOutcome::Declined => {
                info!("Payment declined, destination not booked");
                Ok(TripBookingOutcome::Declined)
            }
        }
    }
}
