pub mod booking;
pub mod budget;
pub mod models;
pub mod planner;
pub mod seed;

pub use booking::{BookingFlow, BookingOutcome, TripBookingOutcome};
pub use budget::{BudgetSummary, CategorySpend, DashboardStats};
pub use models::{
    Expense, ExpenseDraft, ItineraryItem, ItineraryItemDraft, ItineraryItemUpdate, ItineraryKind,
    PackingItem, PackingItemDraft, PackingItemUpdate, PaymentMethod, PaymentMethodDraft,
    PaymentMethodKind, PaymentMethodUpdate, Trip, TripDraft, TripStatus, TripUpdate,
};
pub use planner::{PlannerError, TripPlanner};
