//! Equipment operations - validated CRUD for durable apparatus.
//!
//! Equipment has no reminder interaction: no expiry, no minimum limit. The
//! at-least-one quantity rule is an entry policy only and is deliberately not
//! enforced on update.

use chrono::NaiveDate;
use sea_orm::{IntoActiveModel, QueryOrder, Set, prelude::*};

use crate::entities::{Equipment, EquipmentCondition, equipment};
use crate::errors::{Error, Result};
use crate::store;

/// Field values for a new equipment record, as validated by the entry form.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    /// Display name
    pub name: String,
    /// Manufacturer or supplier brand
    pub brand: String,
    /// Unit count; must be at least 1 at entry
    pub quantity: i32,
    /// Storage location
    pub location: String,
    /// Date of purchase
    pub purchase_date: NaiveDate,
    /// Initial condition
    pub condition: EquipmentCondition,
    /// Free-text notes
    pub notes: String,
}

/// Creates an equipment record.
pub async fn create_equipment(
    db: &DatabaseConnection,
    new: NewEquipment,
) -> Result<equipment::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Equipment name cannot be empty".to_string(),
        });
    }
    if new.quantity < 1 {
        return Err(Error::InvalidQuantity {
            quantity: f64::from(new.quantity),
        });
    }

    store::insert(
        db,
        equipment::ActiveModel {
            name: Set(new.name.trim().to_string()),
            brand: Set(new.brand),
            quantity: Set(new.quantity),
            location: Set(new.location),
            purchase_date: Set(new.purchase_date),
            condition: Set(new.condition),
            notes: Set(new.notes),
            ..Default::default()
        },
    )
    .await
}

/// Full replace-by-id update. The entry-time quantity policy does not apply.
pub async fn update_equipment(
    db: &DatabaseConnection,
    updated: equipment::Model,
) -> Result<equipment::Model> {
    Equipment::find_by_id(updated.id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ItemNotFound {
            name: updated.id.to_string(),
        })?;

    store::update(db, updated.into_active_model().reset_all()).await
}

/// All equipment, ordered alphabetically by name.
pub async fn get_all_equipment(db: &DatabaseConnection) -> Result<Vec<equipment::Model>> {
    Equipment::find()
        .order_by_asc(equipment::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// One equipment record by id, or `None` if absent.
pub async fn get_equipment_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<equipment::Model>> {
    store::get::<_, Equipment>(db, id).await
}

/// Removes an equipment record (explicit user action at the UI layer).
pub async fn delete_equipment(db: &DatabaseConnection, id: i64) -> Result<()> {
    store::delete::<_, Equipment>(db, id).await
}
