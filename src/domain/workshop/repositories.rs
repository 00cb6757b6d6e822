use crate::domain::errors::RemoteFetchError;
use crate::domain::workshop::{
    Craftsman, Money, OrderStatus, Payment, PendingProduct, Priority, RecordId, ServiceOrder,
    Timestamp,
};

/// Filter for order queries; `None` fields are not constrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub craftsman_id: Option<RecordId>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn for_craftsman(craftsman_id: RecordId) -> Self {
        Self { craftsman_id: Some(craftsman_id), status: None }
    }

    pub fn with_status(status: OrderStatus) -> Self {
        Self { craftsman_id: None, status: Some(status) }
    }
}

/// Read contract the console requires from the hosted Record Store.
///
/// Every call is a single-attempt async request that fails with a
/// `RemoteFetchError`; retries and user-visible handling are the caller's
/// concern.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// All craftsman accounts, ordered by name.
    async fn fetch_craftsmen(&self) -> Result<Vec<Craftsman>, RemoteFetchError>;

    /// Orders matching the filter, newest first.
    async fn fetch_orders(&self, filter: &OrderFilter) -> Result<Vec<ServiceOrder>, RemoteFetchError>;

    /// Concluded orders of one craftsman, most recently completed first.
    async fn fetch_completed_orders(
        &self,
        craftsman_id: &RecordId,
    ) -> Result<Vec<ServiceOrder>, RemoteFetchError>;

    /// Payments, optionally scoped to one craftsman, newest first.
    async fn fetch_payments(
        &self,
        craftsman_id: Option<&RecordId>,
    ) -> Result<Vec<Payment>, RemoteFetchError>;

    /// Unassigned backlog items in board order.
    async fn fetch_pending_products(&self) -> Result<Vec<PendingProduct>, RemoteFetchError>;
}

/// Payload for inserting a new service order.
#[derive(Debug, Clone)]
pub struct NewServiceOrder {
    pub title: String,
    pub description: Option<String>,
    pub craftsman_id: RecordId,
    pub value: Money,
    pub deadline: Option<Timestamp>,
    pub photo_url: Option<String>,
}

/// Partial update of an existing order; `None` fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub craftsman_id: Option<RecordId>,
    pub value: Option<Money>,
    pub deadline: Option<Timestamp>,
    pub photo_url: Option<String>,
}

/// Payload for inserting a new payment.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub craftsman_id: RecordId,
    pub value: Money,
    pub date: Timestamp,
    pub note: Option<String>,
}

/// Payload for inserting a new backlog item.
#[derive(Debug, Clone)]
pub struct NewPendingProduct {
    pub name: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub priority: Priority,
    pub position: i32,
}

/// Partial update of a backlog item.
#[derive(Debug, Clone, Default)]
pub struct PendingProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub priority: Option<Priority>,
    pub position: Option<i32>,
}

/// Data a backlog item needs before it can become a service order.
#[derive(Debug, Clone)]
pub struct ProductAssignment {
    pub craftsman_id: RecordId,
    pub value: Money,
    pub deadline: Option<Timestamp>,
}

/// Write contract for the console forms. Separate from `RecordStore` so the
/// dashboard loader depends on reads only.
#[allow(async_fn_in_trait)]
pub trait RecordEditor {
    async fn create_order(&self, order: NewServiceOrder) -> Result<ServiceOrder, RemoteFetchError>;

    async fn update_order(
        &self,
        id: &RecordId,
        update: OrderUpdate,
    ) -> Result<ServiceOrder, RemoteFetchError>;

    /// Status transition; `completed_at` must be supplied exactly when the
    /// new status is `Concluido`.
    async fn update_order_status(
        &self,
        id: &RecordId,
        status: OrderStatus,
        completed_at: Option<Timestamp>,
    ) -> Result<ServiceOrder, RemoteFetchError>;

    async fn mark_order_viewed(&self, id: &RecordId) -> Result<ServiceOrder, RemoteFetchError>;

    async fn delete_order(&self, id: &RecordId) -> Result<(), RemoteFetchError>;

    async fn create_payment(&self, payment: NewPayment) -> Result<Payment, RemoteFetchError>;

    async fn create_pending_product(
        &self,
        product: NewPendingProduct,
    ) -> Result<PendingProduct, RemoteFetchError>;

    async fn update_pending_product(
        &self,
        id: &RecordId,
        update: PendingProductUpdate,
    ) -> Result<PendingProduct, RemoteFetchError>;

    async fn delete_pending_product(&self, id: &RecordId) -> Result<(), RemoteFetchError>;

    /// Marks a backlog item as handed to a craftsman. The conversion itself
    /// (insert order, then flag) is orchestrated by the application layer.
    async fn flag_product_assigned(
        &self,
        id: &RecordId,
    ) -> Result<PendingProduct, RemoteFetchError>;
}
