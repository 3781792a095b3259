//! Equipment entity - durable apparatus tracked by count and condition.
//!
//! Equipment has no expiry and no minimum-stock limit; usage against it is
//! logged for audit only and never touches the quantity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::EquipmentCondition;

/// Equipment database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    /// Unique identifier, assigned by the store and immutable thereafter
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Bunsen Burner")
    pub name: String,
    /// Manufacturer or supplier brand
    pub brand: String,
    /// Unit count. Entry policy requires at least 1; not enforced on update
    pub quantity: i32,
    /// Storage location within the lab
    pub location: String,
    /// Date of purchase
    pub purchase_date: Date,
    /// Advisory condition state
    pub condition: EquipmentCondition,
    /// Free-text notes
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
