use crate::models::{
    ItineraryItem, ItineraryKind, PackingItem, PaymentMethod, PaymentMethodKind, Trip, TripStatus,
};
use chrono::NaiveDate;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// First-run trip collection: one fully fleshed-out example trip so a fresh
/// install has something to show.
pub fn trips() -> Vec<Trip> {
    vec![Trip {
        id: Uuid::new_v4(),
        title: "European Adventure".to_string(),
        destination: "Paris, France".to_string(),
        start_date: date(2024, 6, 15),
        end_date: date(2024, 6, 25),
        budget: 250000,
        spent: 104000,
        image: "https://images.pexels.com/photos/338515/pexels-photo-338515.jpeg?auto=compress&cs=tinysrgb&w=800"
            .to_string(),
        status: TripStatus::Upcoming,
        itinerary: vec![
            ItineraryItem {
                id: Uuid::new_v4(),
                date: date(2024, 6, 15),
                time: "10:00".to_string(),
                title: "Flight to Paris".to_string(),
                description: "Departure from Delhi Airport".to_string(),
                location: "IGI Airport, Delhi".to_string(),
                kind: ItineraryKind::Flight,
                cost: Some(37500),
            },
            ItineraryItem {
                id: Uuid::new_v4(),
                date: date(2024, 6, 15),
                time: "15:30".to_string(),
                title: "Hotel Check-in".to_string(),
                description: "Check into Hotel des Arts".to_string(),
                location: "Montmartre, Paris".to_string(),
                kind: ItineraryKind::Hotel,
                cost: Some(10000),
            },
        ],
        packing_list: vec![
            PackingItem {
                id: Uuid::new_v4(),
                name: "Passport".to_string(),
                category: "Documents".to_string(),
                packed: true,
                essential: true,
            },
            PackingItem {
                id: Uuid::new_v4(),
                name: "Travel Insurance".to_string(),
                category: "Documents".to_string(),
                packed: false,
                essential: true,
            },
            PackingItem {
                id: Uuid::new_v4(),
                name: "Casual Shirts".to_string(),
                category: "Clothing".to_string(),
                packed: false,
                essential: false,
            },
        ],
        payment_method: None,
    }]
}

/// First-run payment methods: one default card plus two alternatives.
pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: Uuid::new_v4(),
            kind: PaymentMethodKind::CreditCard,
            name: "HDFC Credit Card".to_string(),
            last4: Some("4567".to_string()),
            expiry_month: Some(12),
            expiry_year: Some(2027),
            is_default: true,
        },
        PaymentMethod {
            id: Uuid::new_v4(),
            kind: PaymentMethodKind::Upi,
            name: "PhonePe UPI".to_string(),
            last4: None,
            expiry_month: None,
            expiry_year: None,
            is_default: false,
        },
        PaymentMethod {
            id: Uuid::new_v4(),
            kind: PaymentMethodKind::DebitCard,
            name: "SBI Debit Card".to_string(),
            last4: Some("8901".to_string()),
            expiry_month: Some(8),
            expiry_year: Some(2026),
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_trip_is_coherent() {
        let trips = trips();
        assert_eq!(trips.len(), 1);
        let trip = &trips[0];
        assert_eq!(trip.itinerary.len(), 2);
        assert_eq!(trip.packing_list.len(), 3);
        assert!(trip.start_date < trip.end_date);
        assert!(trip.spent <= trip.budget);
    }

    #[test]
    fn exactly_one_seed_method_is_default() {
        let methods = payment_methods();
        assert_eq!(methods.len(), 3);
        assert_eq!(methods.iter().filter(|m| m.is_default).count(), 1);
    }

    #[test]
    fn seed_ids_are_unique() {
        let a = trips();
        let b = trips();
        assert_ne!(a[0].id, b[0].id);
    }
}
