use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;

/// A duty rotation category. Each duty type has its own history table and
/// its own pair of turn-tracking columns on `employees`, so rotations are
/// fully independent. Adding a duty type means adding a variant here plus
/// its table/column mapping and migration; the selection algorithm itself
/// is generic over the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DutyType {
    Breakfast,
    Orders,
}

impl DutyType {
    pub const ALL: [DutyType; 2] = [DutyType::Breakfast, DutyType::Orders];

    pub fn as_str(&self) -> &'static str {
        match self {
            DutyType::Breakfast => "breakfast",
            DutyType::Orders => "orders",
        }
    }

    /// History table backing this duty type.
    pub(crate) fn history_table(&self) -> &'static str {
        match self {
            DutyType::Breakfast => "breakfast_history",
            DutyType::Orders => "orders_history",
        }
    }

    /// `(last_turn_date, turn_count)` column names on `employees`.
    pub(crate) fn turn_columns(&self) -> (&'static str, &'static str) {
        match self {
            DutyType::Breakfast => ("breakfast_last_turn_date", "breakfast_turn_count"),
            DutyType::Orders => ("orders_last_turn_date", "orders_turn_count"),
        }
    }
}

impl FromStr for DutyType {
    type Err = StorageError;

    /// Unknown keys are rejected rather than defaulted to a bucket.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(DutyType::Breakfast),
            "orders" => Ok(DutyType::Orders),
            other => Err(StorageError::InvalidDutyType(other.to_string())),
        }
    }
}

impl fmt::Display for DutyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
