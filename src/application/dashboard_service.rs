use crate::application::session::{AdminDashboard, CraftsmanDashboard};
use crate::domain::errors::{DataIntegrityError, RemoteFetchError};
use crate::domain::finance::{FinanceService, HistoryEntry};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::workshop::repositories::{OrderFilter, RecordStore};
use crate::domain::workshop::{OrderStatus, RecordId};
use std::cell::Cell;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Failure of a dashboard load cycle.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Another load is still awaiting the Record Store; loads are serialized
    /// per service instance so two rapid triggers cannot interleave renders.
    AlreadyInFlight,
    Fetch(RemoteFetchError),
    Integrity(DataIntegrityError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LoadError::AlreadyInFlight => write!(f, "a data load is already in flight"),
            LoadError::Fetch(e) => write!(f, "{}", e),
            LoadError::Integrity(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<RemoteFetchError> for LoadError {
    fn from(error: RemoteFetchError) -> Self {
        LoadError::Fetch(error)
    }
}

impl From<DataIntegrityError> for LoadError {
    fn from(error: DataIntegrityError) -> Self {
        LoadError::Integrity(error)
    }
}

/// Application service - role-specific data-load cycles.
///
/// Fetches are issued and awaited sequentially in a fixed order; the derived
/// aggregates are computed locally from the fetched snapshot. One load at a
/// time per instance.
pub struct DashboardService<R: RecordStore> {
    store: R,
    finance: FinanceService,
    load_in_flight: Cell<bool>,
}

/// Releases the in-flight flag on every exit path, early errors included.
struct LoadGuard<'a>(&'a Cell<bool>);

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<R: RecordStore> DashboardService<R> {
    pub fn new(store: R) -> Self {
        Self { store, finance: FinanceService::new(), load_in_flight: Cell::new(false) }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    fn begin_load(&self) -> Result<LoadGuard<'_>, LoadError> {
        if self.load_in_flight.replace(true) {
            get_logger().warn(
                LogComponent::Application("DashboardService"),
                "load rejected: previous load still in flight",
            );
            return Err(LoadError::AlreadyInFlight);
        }
        Ok(LoadGuard(&self.load_in_flight))
    }

    /// Admin load cycle: craftsmen, all orders, statistics, balances from one
    /// batched orders+payments snapshot, then the product backlog.
    pub async fn load_admin_dashboard(&self) -> Result<AdminDashboard, LoadError> {
        let _guard = self.begin_load()?;

        let craftsmen = self.store.fetch_craftsmen().await?;
        let orders = self.store.fetch_orders(&OrderFilter::default()).await?;
        let statistics = self.finance.admin_statistics(&orders);

        let completed =
            self.store.fetch_orders(&OrderFilter::with_status(OrderStatus::Concluido)).await?;
        let payments = self.store.fetch_payments(None).await?;
        let balances = self.finance.craftsman_balances(&craftsmen, &completed, &payments);

        let pending_products = self.store.fetch_pending_products().await?;

        get_logger().info(
            LogComponent::Application("DashboardService"),
            &format!(
                "admin dashboard loaded: {} orders, {} craftsmen, {} backlog items",
                orders.len(),
                craftsmen.len(),
                pending_products.len()
            ),
        );

        Ok(AdminDashboard { craftsmen, orders, statistics, balances, pending_products })
    }

    /// Craftsman load cycle: own orders, badge count, then the financial
    /// summary from concluded orders and payments.
    pub async fn load_craftsman_dashboard(
        &self,
        craftsman_id: &RecordId,
    ) -> Result<CraftsmanDashboard, LoadError> {
        let _guard = self.begin_load()?;

        let orders =
            self.store.fetch_orders(&OrderFilter::for_craftsman(craftsman_id.clone())).await?;
        let unseen_count = self.finance.unseen_count(&orders, craftsman_id);

        let completed = self.store.fetch_completed_orders(craftsman_id).await?;
        let payments = self.store.fetch_payments(Some(craftsman_id)).await?;
        let summary = self.finance.summary(&completed, &payments);

        get_logger().info(
            LogComponent::Application("DashboardService"),
            &format!("craftsman dashboard loaded: {} orders, {} unseen", orders.len(), unseen_count),
        );

        Ok(CraftsmanDashboard { orders, unseen_count, summary })
    }

    /// Merged work-and-payment ledger for one craftsman, newest first.
    pub async fn load_financial_history(
        &self,
        craftsman_id: &RecordId,
    ) -> Result<Vec<HistoryEntry>, LoadError> {
        let _guard = self.begin_load()?;

        let completed = self.store.fetch_completed_orders(craftsman_id).await?;
        let payments = self.store.fetch_payments(Some(craftsman_id)).await?;
        Ok(self.finance.merge_history(&completed, &payments)?)
    }
}
