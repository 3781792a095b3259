//! Reminder entity - an alert record kept consistent with inventory state.
//!
//! Invariant upheld by the reminder engine: at most one **unresolved**
//! reminder per (kind, `item_id`) pair for `LowStock` and `Expiry` kinds,
//! enforced by a pre-insert check rather than a store-level constraint.
//! `Broken` reminders carry no `item_id` and are created unconditionally.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::ReminderKind;

/// Reminder database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reminders")]
pub struct Model {
    /// Unique identifier, assigned by the store and immutable thereafter
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Alert category
    pub kind: ReminderKind,
    /// Rendered message text
    pub message: String,
    /// Creation timestamp
    pub date: DateTimeUtc,
    /// Whether the alert has been acknowledged/cleared
    pub resolved: bool,
    /// Originating item id; absent for `Broken`-kind reminders
    pub item_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
