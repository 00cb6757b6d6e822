pub use super::value_objects::{Money, OrderStatus, Priority, RecordId, Timestamp};
use crate::domain::errors::DataIntegrityError;
use serde::{Deserialize, Serialize};

/// Domain entity - contracted unit of work owned by one craftsman
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: RecordId,
    pub craftsman_id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub value: Money,
    pub status: OrderStatus,
    pub deadline: Option<Timestamp>,
    pub photo_url: Option<String>,
    /// Set exactly when the status transitions to `Concluido`.
    pub completed_at: Option<Timestamp>,
    /// Craftsman-side "seen" flag feeding the notification badge.
    pub viewed: bool,
    pub created_at: Option<Timestamp>,
}

impl ServiceOrder {
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pendente
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == OrderStatus::EmAndamento
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Concluido
    }

    /// Completion instant of a concluded order. A concluded order without a
    /// completion date violates the lifecycle invariant and is surfaced
    /// rather than sorted into an arbitrary position.
    pub fn completion_date(&self) -> Result<Timestamp, DataIntegrityError> {
        self.completed_at
            .ok_or_else(|| DataIntegrityError::MissingCompletionDate { order_id: self.id.clone() })
    }
}

/// Domain entity - weekly or ad-hoc payout to a craftsman.
/// Immutable once created; there is no update or delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: RecordId,
    pub craftsman_id: RecordId,
    pub value: Money,
    pub date: Timestamp,
    pub note: Option<String>,
}

/// Domain entity - craftsman (marceneiro) account, read-only here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craftsman {
    pub id: RecordId,
    pub name: String,
}

/// Domain entity - backlog item not yet assigned to a craftsman,
/// convertible into a ServiceOrder on assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingProduct {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub priority: Priority,
    pub assigned: bool,
    /// Manual ordering within the backlog board.
    pub position: i32,
}
