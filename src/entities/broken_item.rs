//! Broken-item entity - a denormalized snapshot of a breakage or depletion.
//!
//! A snapshot is not a live reference to the source record: it freezes the
//! name and quantity at the time of the report. `source_id` carries a stable
//! reference to the originating row when the snapshot was produced from one
//! (marked broken or consumed to depletion); manually reported items have no
//! source and fall back to name matching on restore.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::ItemKind;

/// Broken-item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "broken_items")]
pub struct Model {
    /// Unique identifier, assigned by the store and immutable thereafter
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Which collection the item came from
    pub kind: ItemKind,
    /// Item name at time of report
    pub name: String,
    /// Quantity at time of report (0 for depletion snapshots)
    pub quantity: f64,
    /// Free-text cause (e.g., "Marked as broken", "Depleted through usage")
    pub cause: String,
    /// Who reported it
    pub reported_by: String,
    /// When the snapshot was taken
    pub date: DateTimeUtc,
    /// Free-text remarks
    pub remarks: String,
    /// Id of the originating record, if the snapshot was taken from one
    pub source_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
