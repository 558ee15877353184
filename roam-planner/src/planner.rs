use crate::models::{
    Expense, ExpenseDraft, ItineraryItem, ItineraryItemDraft, ItineraryItemUpdate, PackingItem,
    PackingItemDraft, PackingItemUpdate, PaymentMethod, PaymentMethodDraft, PaymentMethodUpdate,
    Trip, TripDraft, TripUpdate,
};
use crate::seed;
use roam_store::{SnapshotKey, SnapshotStore, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("Snapshot store failure: {0}")]
    Store(#[from] StoreError),

    #[error("Malformed {key} snapshot: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// The domain state container: three owned collections plus the currently
/// viewed trip. Constructed explicitly at application start and passed down;
/// there is no global instance.
///
/// Every mutation derives the new collection value, then writes the whole
/// collection through to the snapshot store. A failed write is logged and
/// otherwise ignored; in-memory state is the session's source of truth.
pub struct TripPlanner {
    store: Arc<dyn SnapshotStore>,
    trips: Vec<Trip>,
    expenses: Vec<Expense>,
    payment_methods: Vec<PaymentMethod>,
    current_trip: Option<Trip>,
}

impl TripPlanner {
    /// Load all three snapshots, falling back to the seed collections on
    /// first run (absent snapshots are seeded and immediately written back).
    /// A present but malformed snapshot fails the whole load.
    pub async fn load(store: Arc<dyn SnapshotStore>) -> Result<Self, PlannerError> {
        let trips = load_or_seed(&*store, SnapshotKey::Trips, seed::trips).await?;
        let expenses = load_or_seed(&*store, SnapshotKey::Expenses, Vec::new).await?;
        let payment_methods =
            load_or_seed(&*store, SnapshotKey::PaymentMethods, seed::payment_methods).await?;

        info!(
            trips = trips.len(),
            expenses = expenses.len(),
            payment_methods = payment_methods.len(),
            "Trip planner loaded"
        );

        Ok(Self {
            store,
            trips,
            expenses,
            payment_methods,
            current_trip: None,
        })
    }

    // --- read API ---

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip(&self, trip_id: Uuid) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == trip_id)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expenses_for_trip(&self, trip_id: Uuid) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .collect()
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    pub fn default_payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|m| m.is_default)
    }

    pub fn current_trip(&self) -> Option<&Trip> {
        self.current_trip.as_ref()
    }

    // --- trips ---

    pub async fn add_trip(&mut self, draft: TripDraft) -> Trip {
        let trip = Trip::new(draft);
        info!("Trip added: {} ({})", trip.title, trip.id);
        self.trips.push(trip.clone());
        self.persist_trips().await;
        trip
    }

    /// Merge partial fields into the matching trip. Silent no-op when the id
    /// matches nothing.
    pub async fn update_trip(&mut self, trip_id: Uuid, update: TripUpdate) {
        let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) else {
            return;
        };
        trip.apply_update(update);
        self.refresh_current_trip();
        self.persist_trips().await;
    }

    /// Remove the trip and clear the current-trip pointer if it matched.
    /// Expenses referencing the trip are left in place as historical records.
    pub async fn delete_trip(&mut self, trip_id: Uuid) {
        let before = self.trips.len();
        self.trips.retain(|t| t.id != trip_id);
        if self.trips.len() == before {
            return;
        }
        info!("Trip deleted: {}", trip_id);
        self.refresh_current_trip();
        self.persist_trips().await;
    }

    pub fn set_current_trip(&mut self, trip: Option<Trip>) {
        self.current_trip = trip;
    }

    // --- itinerary ---

    pub async fn add_itinerary_item(&mut self, trip_id: Uuid, draft: ItineraryItemDraft) {
        self.mutate_trip(trip_id, |trip| {
            trip.itinerary.push(ItineraryItem::new(draft));
        })
        .await;
    }

    pub async fn update_itinerary_item(
        &mut self,
        trip_id: Uuid,
        item_id: Uuid,
        update: ItineraryItemUpdate,
    ) {
        self.mutate_trip(trip_id, |trip| {
            if let Some(item) = trip.itinerary.iter_mut().find(|i| i.id == item_id) {
                item.apply_update(update);
            }
        })
        .await;
    }

    pub async fn delete_itinerary_item(&mut self, trip_id: Uuid, item_id: Uuid) {
        self.mutate_trip(trip_id, |trip| {
            trip.itinerary.retain(|i| i.id != item_id);
        })
        .await;
    }

    // --- packing list ---

    pub async fn add_packing_item(&mut self, trip_id: Uuid, draft: PackingItemDraft) {
        self.mutate_trip(trip_id, |trip| {
            trip.packing_list.push(PackingItem::new(draft));
        })
        .await;
    }

    pub async fn update_packing_item(
        &mut self,
        trip_id: Uuid,
        item_id: Uuid,
        update: PackingItemUpdate,
    ) {
        self.mutate_trip(trip_id, |trip| {
            if let Some(item) = trip.packing_list.iter_mut().find(|i| i.id == item_id) {
                item.apply_update(update);
            }
        })
        .await;
    }

    pub async fn delete_packing_item(&mut self, trip_id: Uuid, item_id: Uuid) {
        self.mutate_trip(trip_id, |trip| {
            trip.packing_list.retain(|i| i.id != item_id);
        })
        .await;
    }

    // --- expenses ---

    /// Append the expense and, when its trip exists, add the amount to that
    /// trip's spent cache. Both snapshots are written within the one call;
    /// this method is the only writer of `Trip::spent`.
    pub async fn add_expense(&mut self, draft: ExpenseDraft) -> Expense {
        let expense = Expense::new(draft);
        self.expenses.push(expense.clone());
        self.persist_expenses().await;

        if let Some(trip) = self.trips.iter_mut().find(|t| t.id == expense.trip_id) {
            trip.spent += expense.amount;
            info!(
                "Expense of {} recorded against trip {} (spent now {})",
                expense.amount, trip.id, trip.spent
            );
            self.refresh_current_trip();
            self.persist_trips().await;
        }

        expense
    }

    // --- payment methods ---

    pub async fn add_payment_method(&mut self, draft: PaymentMethodDraft) -> PaymentMethod {
        let method = PaymentMethod::new(draft);
        self.payment_methods.push(method.clone());
        self.persist_payment_methods().await;
        method
    }

    /// Raw partial merge. Does NOT maintain the at-most-one-default
    /// invariant; use `set_default_payment_method` for that.
    pub async fn update_payment_method(&mut self, method_id: Uuid, update: PaymentMethodUpdate) {
        let Some(method) = self.payment_methods.iter_mut().find(|m| m.id == method_id) else {
            return;
        };
        method.apply_update(update);
        self.persist_payment_methods().await;
    }

    pub async fn delete_payment_method(&mut self, method_id: Uuid) {
        let before = self.payment_methods.len();
        self.payment_methods.retain(|m| m.id != method_id);
        if self.payment_methods.len() == before {
            return;
        }
        self.persist_payment_methods().await;
    }

    /// Make exactly one method the default, clearing every other flag in the
    /// same mutation. No-op if the id matches nothing.
    pub async fn set_default_payment_method(&mut self, method_id: Uuid) {
        if !self.payment_methods.iter().any(|m| m.id == method_id) {
            return;
        }
        for method in &mut self.payment_methods {
            method.is_default = method.id == method_id;
        }
        self.persist_payment_methods().await;
    }

    // --- internals ---

    /// Apply `f` to the matching trip, refresh the current-trip pointer and
    /// write the trips snapshot through. Silent no-op when the id is absent.
    async fn mutate_trip(&mut self, trip_id: Uuid, f: impl FnOnce(&mut Trip)) {
        let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) else {
            return;
        };
        f(trip);
        self.refresh_current_trip();
        self.persist_trips().await;
    }

    /// Keep viewers of the current trip consistent with the collection.
    fn refresh_current_trip(&mut self) {
        if let Some(current) = &self.current_trip {
            let id = current.id;
            self.current_trip = self.trips.iter().find(|t| t.id == id).cloned();
        }
    }

    async fn persist_trips(&self) {
        persist(&*self.store, SnapshotKey::Trips, &self.trips).await;
    }

    async fn persist_expenses(&self) {
        persist(&*self.store, SnapshotKey::Expenses, &self.expenses).await;
    }

    async fn persist_payment_methods(&self) {
        persist(&*self.store, SnapshotKey::PaymentMethods, &self.payment_methods).await;
    }
}

async fn load_or_seed<T>(
    store: &dyn SnapshotStore,
    key: SnapshotKey,
    seed: impl FnOnce() -> Vec<T>,
) -> Result<Vec<T>, PlannerError>
where
    T: Serialize + DeserializeOwned,
{
    match store.load(key).await? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| PlannerError::Malformed {
            key: key.as_str(),
            source,
        }),
        None => {
            let collection = seed();
            info!("No {} snapshot found, seeding {} records", key.as_str(), collection.len());
            persist(store, key, &collection).await;
            Ok(collection)
        }
    }
}

/// Write-through of a whole collection. A failed write never fails the
/// mutation: the error is logged and in-memory state stands.
async fn persist<T: Serialize>(store: &dyn SnapshotStore, key: SnapshotKey, collection: &[T]) {
    match serde_json::to_string(collection) {
        Ok(payload) => {
            if let Err(e) = store.save(key, &payload).await {
                error!("Snapshot write failed for {}: {}", key.as_str(), e);
            }
        }
        Err(e) => error!("Snapshot serialization failed for {}: {}", key.as_str(), e),
    }
}
