//! Closed enums for every string union in the data model.
//!
//! Each of these is stored as a short string column and matched exhaustively
//! at every consumption site, so adding a variant is a compile-time-checked
//! change rather than a stray string literal.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Measurement unit for chemical quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum Unit {
    /// Milliliters
    #[sea_orm(string_value = "ml")]
    #[serde(rename = "ml")]
    Ml,
    /// Liters
    #[sea_orm(string_value = "L")]
    #[serde(rename = "L")]
    Liter,
    /// Grams
    #[sea_orm(string_value = "g")]
    #[serde(rename = "g")]
    Gram,
    /// Kilograms
    #[sea_orm(string_value = "kg")]
    #[serde(rename = "kg")]
    Kilogram,
    /// Milligrams
    #[sea_orm(string_value = "mg")]
    #[serde(rename = "mg")]
    Milligram,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Ml => "ml",
            Self::Liter => "L",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Milligram => "mg",
        };
        write!(f, "{symbol}")
    }
}

/// Condition state of a chemical record.
///
/// Condition and quantity are advisory, not mutually exclusive: a `Broken`
/// chemical still carries its last quantity, and a `Normal` chemical at or
/// below its minimum limit is "low stock" without this field saying so.
/// `Used` is only ever set by manual edit; no code path sets or clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "snake_case")]
pub enum ChemicalCondition {
    /// In active use
    #[sea_orm(string_value = "normal")]
    Normal,
    /// Manually flagged as used up / set aside
    #[sea_orm(string_value = "used")]
    Used,
    /// Out of service
    #[sea_orm(string_value = "broken")]
    Broken,
}

/// Condition state of an equipment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCondition {
    /// In active use
    #[sea_orm(string_value = "normal")]
    Normal,
    /// Out of service
    #[sea_orm(string_value = "broken")]
    Broken,
}

/// Which live collection a snapshot or log row refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A row in the chemicals table
    #[sea_orm(string_value = "chemical")]
    Chemical,
    /// A row in the equipment table
    #[sea_orm(string_value = "equipment")]
    Equipment,
}

impl ItemKind {
    /// Capitalized label used when composing reminder messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chemical => "Chemical",
            Self::Equipment => "Equipment",
        }
    }
}

/// Alert category of a reminder row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Quantity at or below the configured minimum limit
    #[sea_orm(string_value = "low_stock")]
    LowStock,
    /// Expiry date inside the warning window
    #[sea_orm(string_value = "expiry")]
    Expiry,
    /// Item reported broken
    #[sea_orm(string_value = "broken")]
    Broken,
}
