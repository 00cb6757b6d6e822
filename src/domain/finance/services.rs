use crate::domain::errors::DataIntegrityError;
use crate::domain::finance::{
    AdminStatistics, CraftsmanBalance, FinancialSummary, HistoryEntry, HistoryKind,
};
use crate::domain::workshop::{Craftsman, Money, Payment, RecordId, ServiceOrder};
use std::collections::HashMap;

/// Fallback description for payments saved without a note.
pub const DEFAULT_PAYMENT_NOTE: &str = "Pagamento semanal";

/// Domain service - pure financial aggregation over already-fetched records.
///
/// No I/O, no caching, no hidden state: every operation is deterministic in
/// its inputs and recomputed from scratch on each load cycle.
#[derive(Debug, Clone, Default)]
pub struct FinanceService;

impl FinanceService {
    pub fn new() -> Self {
        Self
    }

    /// Per-craftsman reconciliation: realized (concluded) order value minus
    /// payouts received. Orders in other statuses are ignored even if the
    /// caller forgot to pre-filter.
    pub fn summary(&self, orders: &[ServiceOrder], payments: &[Payment]) -> FinancialSummary {
        let total_completed: Money =
            orders.iter().filter(|o| o.is_completed()).map(|o| o.value).sum();
        let total_paid: Money = payments.iter().map(|p| p.value).sum();

        FinancialSummary { total_completed, total_paid, balance: total_completed - total_paid }
    }

    /// Shop-wide statistics over ALL orders. Note the asymmetry with
    /// `summary`: `total_value` includes open orders on purpose, it reports
    /// contracted value, not realized value.
    pub fn admin_statistics(&self, orders: &[ServiceOrder]) -> AdminStatistics {
        AdminStatistics {
            total_orders: orders.len(),
            pending_count: orders.iter().filter(|o| o.is_pending()).count(),
            in_progress_count: orders.iter().filter(|o| o.is_in_progress()).count(),
            completed_count: orders.iter().filter(|o| o.is_completed()).count(),
            total_value: orders.iter().map(|o| o.value).sum(),
        }
    }

    /// Balance listing for every craftsman, input order preserved.
    ///
    /// Takes one batched snapshot of orders and payments and groups locally,
    /// instead of issuing one fetch pair per craftsman.
    pub fn craftsman_balances(
        &self,
        craftsmen: &[Craftsman],
        orders: &[ServiceOrder],
        payments: &[Payment],
    ) -> Vec<CraftsmanBalance> {
        let mut orders_by_craftsman: HashMap<&RecordId, Vec<&ServiceOrder>> = HashMap::new();
        for order in orders {
            orders_by_craftsman.entry(&order.craftsman_id).or_default().push(order);
        }
        let mut payments_by_craftsman: HashMap<&RecordId, Vec<&Payment>> = HashMap::new();
        for payment in payments {
            payments_by_craftsman.entry(&payment.craftsman_id).or_default().push(payment);
        }

        craftsmen
            .iter()
            .map(|craftsman| {
                let own_orders = orders_by_craftsman.get(&craftsman.id);
                let own_payments = payments_by_craftsman.get(&craftsman.id);

                let summary = if own_orders.is_none() && own_payments.is_none() {
                    FinancialSummary::EMPTY
                } else {
                    let orders: Vec<ServiceOrder> = own_orders
                        .map(|refs| refs.iter().map(|o| (*o).clone()).collect())
                        .unwrap_or_default();
                    let payments: Vec<Payment> = own_payments
                        .map(|refs| refs.iter().map(|p| (*p).clone()).collect())
                        .unwrap_or_default();
                    self.summary(&orders, &payments)
                };

                CraftsmanBalance { craftsman: craftsman.clone(), summary }
            })
            .collect()
    }

    /// Unified chronological ledger: concluded work and payments merged,
    /// most recent first. Stable sort; at equal timestamps service entries
    /// keep their place ahead of payment entries.
    ///
    /// A concluded order without a completion date cannot be ordered and is
    /// reported instead of being sorted into an arbitrary position.
    pub fn merge_history(
        &self,
        orders: &[ServiceOrder],
        payments: &[Payment],
    ) -> Result<Vec<HistoryEntry>, DataIntegrityError> {
        let mut entries = Vec::with_capacity(orders.len() + payments.len());

        for order in orders.iter().filter(|o| o.is_completed()) {
            entries.push(HistoryEntry {
                id: order.id.clone(),
                kind: HistoryKind::Service,
                description: order.title.clone(),
                amount: order.value,
                date: order.completion_date()?,
            });
        }

        for payment in payments {
            let description = match &payment.note {
                Some(note) if !note.trim().is_empty() => note.clone(),
                _ => DEFAULT_PAYMENT_NOTE.to_string(),
            };
            entries.push(HistoryEntry {
                id: payment.id.clone(),
                kind: HistoryKind::Payment,
                description,
                amount: payment.value,
                date: payment.date,
            });
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Notification badge count: orders of this craftsman not yet seen.
    /// Always recomputed from the fetched set, never decremented in place.
    pub fn unseen_count(&self, orders: &[ServiceOrder], craftsman_id: &RecordId) -> usize {
        orders.iter().filter(|o| &o.craftsman_id == craftsman_id && !o.viewed).count()
    }
}
