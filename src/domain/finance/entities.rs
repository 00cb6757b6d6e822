use crate::domain::workshop::{Craftsman, Money, RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Derived entity - realized value vs. payouts for one craftsman.
/// Recomputed on every load cycle, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum over concluded orders only; open orders do not count as realized.
    pub total_completed: Money,
    pub total_paid: Money,
    /// `total_completed - total_paid`; may be negative (advance payments).
    pub balance: Money,
}

impl FinancialSummary {
    pub const EMPTY: FinancialSummary =
        FinancialSummary { total_completed: Money::ZERO, total_paid: Money::ZERO, balance: Money::ZERO };
}

/// Derived entity - shop-wide order statistics for the admin dashboard.
///
/// `total_value` intentionally sums ALL orders regardless of status: the admin
/// figure is total contracted value, while per-craftsman summaries count only
/// realized (concluded) work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdminStatistics {
    pub total_orders: usize,
    pub pending_count: usize,
    pub in_progress_count: usize,
    pub completed_count: usize,
    pub total_value: Money,
}

impl AdminStatistics {
    /// Holds for any well-formed input; statuses form a closed enum.
    pub fn counts_are_consistent(&self) -> bool {
        self.pending_count + self.in_progress_count + self.completed_count == self.total_orders
    }
}

/// Origin of a history feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum HistoryKind {
    #[strum(serialize = "servico")]
    #[serde(rename = "servico")]
    Service,

    #[strum(serialize = "pagamento")]
    #[serde(rename = "pagamento")]
    Payment,
}

/// Derived entity - one line of the merged chronological ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: RecordId,
    pub kind: HistoryKind,
    pub description: String,
    pub amount: Money,
    pub date: Timestamp,
}

/// Derived entity - craftsman joined with its financial summary,
/// the admin-side balance listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftsmanBalance {
    pub craftsman: Craftsman,
    pub summary: FinancialSummary,
}
