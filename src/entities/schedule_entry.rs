//! Schedule entity - one cell of the lab timetable grid.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Schedule-entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    /// Unique identifier, assigned by the store and immutable thereafter
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day of the teaching week, 0-5
    pub day: i32,
    /// Period within the day, 0-7
    pub period: i32,
    /// Class occupying the slot
    pub class_name: String,
    /// Experiment planned for the slot
    pub experiment: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
