use crate::models::{Expense, Trip, TripStatus};
use crate::planner::TripPlanner;
use std::collections::BTreeMap;

/// Totals across every trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total_budget: i64,
    pub total_spent: i64,
    pub remaining: i64,
}

/// Spend attributed to one expense category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    pub category: String,
    pub amount: i64,
}

/// The headline numbers the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub upcoming_trips: usize,
    pub total_budget: i64,
    pub total_spent: i64,
    pub average_packing_progress: f64,
}

pub fn summarize(trips: &[Trip]) -> BudgetSummary {
    let total_budget = trips.iter().map(|t| t.budget).sum();
    let total_spent = trips.iter().map(|t| t.spent).sum();
    BudgetSummary {
        total_budget,
        total_spent,
        remaining: total_budget - total_spent,
    }
}

/// Fold expenses into per-category totals, ordered by category name.
pub fn by_category(expenses: &[Expense]) -> Vec<CategorySpend> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.as_str()).or_insert(0) += expense.amount;
    }
    totals
        .into_iter()
        .map(|(category, amount)| CategorySpend {
            category: category.to_string(),
            amount,
        })
        .collect()
}

pub fn dashboard_stats(trips: &[Trip]) -> DashboardStats {
    let summary = summarize(trips);
    let average_packing_progress = if trips.is_empty() {
        0.0
    } else {
        trips.iter().map(Trip::packing_progress).sum::<f64>() / trips.len() as f64
    };

    DashboardStats {
        upcoming_trips: trips
            .iter()
            .filter(|t| t.status == TripStatus::Upcoming)
            .count(),
        total_budget: summary.total_budget,
        total_spent: summary.total_spent,
        average_packing_progress,
    }
}

impl TripPlanner {
    pub fn budget_summary(&self) -> BudgetSummary {
        summarize(self.trips())
    }

    pub fn expenses_by_category(&self) -> Vec<CategorySpend> {
        by_category(self.expenses())
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        dashboard_stats(self.trips())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, PackingItem, PackingItemDraft, Trip, TripDraft};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(budget: i64, spent: i64, status: TripStatus) -> Trip {
        let mut trip = Trip::new(TripDraft {
            title: "Trip".to_string(),
            destination: "Anywhere".to_string(),
            start_date: date(2026, 5, 1),
            end_date: date(2026, 5, 10),
            budget,
            spent: 0,
            image: String::new(),
            status,
            payment_method: None,
        });
        trip.spent = spent;
        trip
    }

    fn expense(category: &str, amount: i64) -> crate::models::Expense {
        crate::models::Expense::new(ExpenseDraft {
            trip_id: Uuid::new_v4(),
            amount,
            category: category.to_string(),
            description: String::new(),
            date: date(2026, 5, 2),
            payment_method: None,
        })
    }

    #[test]
    fn summary_totals_over_all_trips() {
        let trips = vec![
            trip(100000, 40000, TripStatus::Upcoming),
            trip(50000, 50000, TripStatus::Completed),
        ];
        let summary = summarize(&trips);
        assert_eq!(summary.total_budget, 150000);
        assert_eq!(summary.total_spent, 90000);
        assert_eq!(summary.remaining, 60000);
    }

    #[test]
    fn category_breakdown_is_sorted_and_summed() {
        let expenses = vec![
            expense("Food & Drinks", 500),
            expense("Accommodation", 8000),
            expense("Food & Drinks", 1500),
        ];
        let breakdown = by_category(&expenses);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Accommodation");
        assert_eq!(breakdown[0].amount, 8000);
        assert_eq!(breakdown[1].category, "Food & Drinks");
        assert_eq!(breakdown[1].amount, 2000);
    }

    #[test]
    fn dashboard_counts_upcoming_and_averages_packing() {
        let mut first = trip(10000, 0, TripStatus::Upcoming);
        first.packing_list = vec![
            PackingItem::new(PackingItemDraft {
                name: "Passport".to_string(),
                category: "Documents".to_string(),
                packed: true,
                essential: true,
            }),
            PackingItem::new(PackingItemDraft {
                name: "Charger".to_string(),
                category: "Electronics".to_string(),
                packed: false,
                essential: false,
            }),
        ];
        let second = trip(20000, 5000, TripStatus::Completed);

        let stats = dashboard_stats(&[first, second]);
        assert_eq!(stats.upcoming_trips, 1);
        assert_eq!(stats.total_budget, 30000);
        assert_eq!(stats.total_spent, 5000);
        // 50% on the first trip, 0% on the second.
        assert!((stats.average_packing_progress - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_collections_stay_at_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_budget, 0);
        assert_eq!(summary.remaining, 0);
        assert!(by_category(&[]).is_empty());
        let stats = dashboard_stats(&[]);
        assert_eq!(stats.upcoming_trips, 0);
        assert!((stats.average_packing_progress - 0.0).abs() < f64::EPSILON);
    }
}
