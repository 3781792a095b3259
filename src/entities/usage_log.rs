//! Usage-log entity - immutable append-only record of one consumption event.
//!
//! Core logic only ever inserts these; they are never mutated or deleted
//! except by explicit user action at the UI layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::ItemKind;

/// Usage-log database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usage_logs")]
pub struct Model {
    /// Unique identifier, assigned by the store and immutable thereafter
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Which collection the consumed item belongs to
    pub item_kind: ItemKind,
    /// Id of the consumed item
    pub item_id: i64,
    /// Denormalized copy of the item's name at logging time
    pub item_name: String,
    /// Amount consumed
    pub quantity_used: f64,
    /// Class/staff/student identifier supplied by the caller
    pub used_by: String,
    /// Purpose or experiment description
    pub purpose: String,
    /// Date of the consumption event
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
