use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trip status over its lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Upcoming,
    Ongoing,
    Completed,
}

/// Kinds of scheduled itinerary entries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItineraryKind {
    Flight,
    Hotel,
    Activity,
    Restaurant,
    Transport,
}

/// Stored payment method descriptors. Never actual credentials.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    CreditCard,
    DebitCard,
    Upi,
    NetBanking,
    Wallet,
}

/// A user-planned travel event. The snapshot layout keeps the original
/// camelCase field names so existing stored data deserializes unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: i64,
    /// Cached sum of matching expense amounts. Written only by
    /// `TripPlanner::add_expense`; everything else reads it.
    pub spent: i64,
    pub image: String,
    pub status: TripStatus,
    pub itinerary: Vec<ItineraryItem>,
    pub packing_list: Vec<PackingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone)]
pub struct TripDraft {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: i64,
    pub spent: i64,
    pub image: String,
    pub status: TripStatus,
    pub payment_method: Option<PaymentMethod>,
}

/// Partial trip update. `spent` is deliberately absent: the spent cache has
/// a single writer path through `TripPlanner::add_expense`.
#[derive(Debug, Clone, Default)]
pub struct TripUpdate {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<i64>,
    pub image: Option<String>,
    pub status: Option<TripStatus>,
    pub payment_method: Option<PaymentMethod>,
}

impl Trip {
    /// Build a trip from a draft. Itinerary and packing list always start
    /// empty regardless of what the caller supplied elsewhere.
    pub fn new(draft: TripDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            destination: draft.destination,
            start_date: draft.start_date,
            end_date: draft.end_date,
            budget: draft.budget,
            spent: draft.spent,
            image: draft.image,
            status: draft.status,
            itinerary: Vec::new(),
            packing_list: Vec::new(),
            payment_method: draft.payment_method,
        }
    }

    pub fn apply_update(&mut self, update: TripUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(destination) = update.destination {
            self.destination = destination;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(budget) = update.budget {
            self.budget = budget;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(payment_method) = update.payment_method {
            self.payment_method = Some(payment_method);
        }
    }

    pub fn remaining_budget(&self) -> i64 {
        self.budget - self.spent
    }

    /// Share of the budget already spent, capped at 100.
    pub fn budget_used_percent(&self) -> f64 {
        if self.budget <= 0 {
            return 0.0;
        }
        ((self.spent as f64 / self.budget as f64) * 100.0).min(100.0)
    }

    /// Packed share of the packing list in percent; 0 for an empty list.
    pub fn packing_progress(&self) -> f64 {
        if self.packing_list.is_empty() {
            return 0.0;
        }
        let packed = self.packing_list.iter().filter(|i| i.packed).count();
        (packed as f64 / self.packing_list.len() as f64) * 100.0
    }

    pub fn days_until_start(&self, today: NaiveDate) -> i64 {
        (self.start_date - today).num_days()
    }
}

/// A scheduled sub-activity of a trip, owned exclusively by it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: ItineraryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ItineraryItemDraft {
    pub date: NaiveDate,
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub kind: ItineraryKind,
    pub cost: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct ItineraryItemUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub kind: Option<ItineraryKind>,
    pub cost: Option<i64>,
}

impl ItineraryItem {
    pub fn new(draft: ItineraryItemDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            time: draft.time,
            title: draft.title,
            description: draft.description,
            location: draft.location,
            kind: draft.kind,
            cost: draft.cost,
        }
    }

    pub fn apply_update(&mut self, update: ItineraryItemUpdate) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(cost) = update.cost {
            self.cost = Some(cost);
        }
    }
}

/// A per-trip checklist entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackingItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub packed: bool,
    pub essential: bool,
}

#[derive(Debug, Clone)]
pub struct PackingItemDraft {
    pub name: String,
    pub category: String,
    pub packed: bool,
    pub essential: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PackingItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub packed: Option<bool>,
    pub essential: Option<bool>,
}

impl PackingItem {
    pub fn new(draft: PackingItemDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            category: draft.category,
            packed: draft.packed,
            essential: draft.essential,
        }
    }

    pub fn apply_update(&mut self, update: PackingItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(packed) = update.packed {
            self.packed = packed;
        }
        if let Some(essential) = update.essential {
            self.essential = essential;
        }
    }
}

/// A monetary record attributed to a trip. `trip_id` is a weak reference:
/// the trip it names may already be gone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub amount: i64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    /// Snapshot copied at creation time, not a live reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub trip_id: Uuid,
    pub amount: i64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub payment_method: Option<PaymentMethod>,
}

impl Expense {
    pub fn new(draft: ExpenseDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            trip_id: draft.trip_id,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
            payment_method: draft.payment_method,
        }
    }
}

/// A stored way to pay. Display data only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: PaymentMethodKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<u32>,
    pub is_default: bool,
}

#[derive(Debug, Clone)]
pub struct PaymentMethodDraft {
    pub kind: PaymentMethodKind,
    pub name: String,
    pub last4: Option<String>,
    pub expiry_month: Option<u32>,
    pub expiry_year: Option<u32>,
    pub is_default: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentMethodUpdate {
    pub kind: Option<PaymentMethodKind>,
    pub name: Option<String>,
    pub last4: Option<String>,
    pub expiry_month: Option<u32>,
    pub expiry_year: Option<u32>,
    pub is_default: Option<bool>,
}

impl PaymentMethod {
    pub fn new(draft: PaymentMethodDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: draft.kind,
            name: draft.name,
            last4: draft.last4,
            expiry_month: draft.expiry_month,
            expiry_year: draft.expiry_year,
            is_default: draft.is_default,
        }
    }

    pub fn apply_update(&mut self, update: PaymentMethodUpdate) {
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(last4) = update.last4 {
            self.last4 = Some(last4);
        }
        if let Some(expiry_month) = update.expiry_month {
            self.expiry_month = Some(expiry_month);
        }
        if let Some(expiry_year) = update.expiry_year {
            self.expiry_year = Some(expiry_year);
        }
        if let Some(is_default) = update.is_default {
            self.is_default = is_default;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_trip() -> Trip {
        Trip::new(TripDraft {
            title: "Paris Trip".to_string(),
            destination: "Paris, France".to_string(),
            start_date: date(2026, 9, 10),
            end_date: date(2026, 9, 20),
            budget: 100000,
            spent: 0,
            image: String::new(),
            status: TripStatus::Upcoming,
            payment_method: None,
        })
    }

    #[test]
    fn new_trip_starts_with_empty_itinerary_and_packing_list() {
        let trip = sample_trip();
        assert!(trip.itinerary.is_empty());
        assert!(trip.packing_list.is_empty());
        assert!(!trip.id.is_nil());
    }

    #[test]
    fn budget_helpers() {
        let mut trip = sample_trip();
        trip.spent = 25000;
        assert_eq!(trip.remaining_budget(), 75000);
        assert!((trip.budget_used_percent() - 25.0).abs() < f64::EPSILON);

        trip.spent = 250000;
        assert!((trip.budget_used_percent() - 100.0).abs() < f64::EPSILON);

        trip.budget = 0;
        assert!((trip.budget_used_percent() - 0.0).abs() < f64::EPSILON);

        assert_eq!(trip.days_until_start(date(2026, 9, 1)), 9);
    }

    #[test]
    fn packing_progress_handles_empty_list() {
        let mut trip = sample_trip();
        assert!((trip.packing_progress() - 0.0).abs() < f64::EPSILON);

        trip.packing_list.push(PackingItem::new(PackingItemDraft {
            name: "Passport".to_string(),
            category: "Documents".to_string(),
            packed: true,
            essential: true,
        }));
        trip.packing_list.push(PackingItem::new(PackingItemDraft {
            name: "Sunscreen".to_string(),
            category: "Toiletries".to_string(),
            packed: false,
            essential: false,
        }));
        assert!((trip.packing_progress() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_layout_matches_the_documented_format() {
        let mut trip = sample_trip();
        trip.itinerary.push(ItineraryItem::new(ItineraryItemDraft {
            date: date(2026, 9, 10),
            time: "10:00".to_string(),
            title: "Flight".to_string(),
            description: String::new(),
            location: "IGI Airport, Delhi".to_string(),
            kind: ItineraryKind::Flight,
            cost: Some(37500),
        }));

        let json = serde_json::to_string(&trip).unwrap();
        assert!(json.contains("\"startDate\":\"2026-09-10\""));
        assert!(json.contains("\"packingList\""));
        assert!(json.contains("\"type\":\"flight\""));
        assert!(json.contains("\"status\":\"upcoming\""));

        let method = PaymentMethod::new(PaymentMethodDraft {
            kind: PaymentMethodKind::CreditCard,
            name: "HDFC Credit Card".to_string(),
            last4: Some("4567".to_string()),
            expiry_month: Some(12),
            expiry_year: Some(2027),
            is_default: true,
        });
        let json = serde_json::to_string(&method).unwrap();
        assert!(json.contains("\"type\":\"credit_card\""));
        assert!(json.contains("\"isDefault\":true"));
        assert!(json.contains("\"expiryMonth\":12"));
    }

    #[test]
    fn trip_round_trips_through_json() {
        let trip = sample_trip();
        let json = serde_json::to_string(&trip).unwrap();
        let back: Trip = serde_json::from_str(&json).unwrap();
        assert_eq!(trip, back);
    }

    #[test]
    fn partial_update_leaves_unset_fields_alone() {
        let mut trip = sample_trip();
        trip.apply_update(TripUpdate {
            title: Some("Autumn in Paris".to_string()),
            budget: Some(120000),
            ..Default::default()
        });
        assert_eq!(trip.title, "Autumn in Paris");
        assert_eq!(trip.budget, 120000);
        assert_eq!(trip.destination, "Paris, France");
        assert_eq!(trip.status, TripStatus::Upcoming);
    }
}
