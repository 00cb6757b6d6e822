use crate::time_utils;
use derive_more::{Add, Constructor, Display, From, Into, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - opaque Record Store identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct RecordId(String);

impl RecordId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - monetary amount in BRL
///
/// The Record Store serializes currency columns as either decimal strings or
/// numbers; `parse_lenient` accepts both and maps anything unparsable to zero
/// so a single bad record never poisons an aggregate.
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Constructor, Add, Sub, Neg, Serialize, Deserialize,
)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Null-safe parse of a raw currency field: absent, empty, or non-numeric
    /// values contribute zero instead of failing the whole aggregation.
    pub fn parse_lenient(raw: &serde_json::Value) -> Money {
        match raw {
            serde_json::Value::Number(n) => Money(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => Money(s.trim().parse::<f64>().unwrap_or(0.0)),
            _ => Money::ZERO,
        }
    }

    /// Serialize to the decimal string shape the Record Store accepts,
    /// keeping the two decimal places of currency precision.
    pub fn to_decimal_string(&self) -> String {
        format!("{:.2}", self.0)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// Value Object - timestamp in epoch milliseconds (UTC)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_millis(value: i64) -> Self {
        Self(value)
    }

    /// Parse the RFC 3339 shape the Record Store serializes timestamps in.
    pub fn parse_rfc3339(raw: &str) -> Option<Self> {
        time_utils::parse_rfc3339_millis(raw).map(Self)
    }

    pub fn to_rfc3339(&self) -> String {
        time_utils::format_rfc3339_millis(self.0)
    }
}

/// Value Object - service order lifecycle status
///
/// Wire names follow the backend schema; the set is closed, unknown values
/// are rejected at decode time as a data-integrity violation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum OrderStatus {
    #[strum(serialize = "pendente")]
    #[serde(rename = "pendente")]
    Pendente,

    #[strum(serialize = "andamento")]
    #[serde(rename = "andamento")]
    EmAndamento,

    #[strum(serialize = "concluido")]
    #[serde(rename = "concluido")]
    Concluido,
}

impl OrderStatus {
    pub fn to_query_str(&self) -> &str {
        self.as_ref()
    }
}

/// Value Object - backlog priority for pending products
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Priority {
    #[strum(serialize = "baixa")]
    #[serde(rename = "baixa")]
    Baixa,

    #[strum(serialize = "media")]
    #[serde(rename = "media")]
    Media,

    #[strum(serialize = "alta")]
    #[serde(rename = "alta")]
    Alta,
}
