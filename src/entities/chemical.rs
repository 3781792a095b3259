//! Chemical entity - a stocked reagent with quantity and expiry tracking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::{ChemicalCondition, Unit};

/// Chemical database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chemicals")]
pub struct Model {
    /// Unique identifier, assigned by the store and immutable thereafter
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Hydrochloric Acid")
    pub name: String,
    /// Manufacturer or supplier brand
    pub brand: String,
    /// Current stock, in `unit`. Non-negative at entry; usage deduction can
    /// drive it negative and the value is preserved as-is
    pub quantity: f64,
    /// Measurement unit for `quantity` and `min_limit`
    pub unit: Unit,
    /// Storage location within the lab
    pub location: String,
    /// Date of purchase
    pub purchase_date: Date,
    /// Expiry date; the reminder scan warns inside a window before this
    pub expiry_date: Date,
    /// Minimum-stock limit; at or below this the chemical is "low stock"
    pub min_limit: f64,
    /// Advisory condition state
    pub condition: ChemicalCondition,
    /// Free-text notes
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
