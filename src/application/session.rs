use crate::domain::finance::{AdminStatistics, CraftsmanBalance, FinancialSummary};
use crate::domain::workshop::{Craftsman, PendingProduct, RecordId, ServiceOrder};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Console role decided by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Role {
    #[strum(serialize = "admin")]
    #[serde(rename = "admin")]
    Admin,

    #[strum(serialize = "marceneiro")]
    #[serde(rename = "marceneiro")]
    Marceneiro,
}

/// Authenticated user as handed over by the identity provider.
/// Passed explicitly to whoever needs it; there is no ambient session global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: RecordId,
    pub name: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Immutable snapshot backing the admin dashboard render.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub craftsmen: Vec<Craftsman>,
    pub orders: Vec<ServiceOrder>,
    pub statistics: AdminStatistics,
    pub balances: Vec<CraftsmanBalance>,
    pub pending_products: Vec<PendingProduct>,
}

/// Immutable snapshot backing the craftsman dashboard render.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftsmanDashboard {
    pub orders: Vec<ServiceOrder>,
    /// Badge count, recomputed from `orders` on every load.
    pub unseen_count: usize,
    pub summary: FinancialSummary,
}
