//! Chemical operations - the validated entry points the form layer calls.
//!
//! Creation and update both finish with a reminder scan so alert records stay
//! synchronized with the latest stock state. An update that raises quantity
//! back above the minimum limit resolves that chemical's outstanding low-stock
//! reminders; this edit path is the only place such resolution happens.

use chrono::{NaiveDate, Utc};
use sea_orm::{IntoActiveModel, QueryOrder, Set, TransactionTrait, prelude::*};

use crate::core::reminder;
use crate::entities::{
    Chemical, ChemicalCondition, ReminderKind, Unit, chemical,
};
use crate::errors::{Error, Result};
use crate::store;

/// Field values for a new chemical, as validated by the entry form.
#[derive(Debug, Clone)]
pub struct NewChemical {
    /// Display name
    pub name: String,
    /// Manufacturer or supplier brand
    pub brand: String,
    /// Opening stock; must be non-negative
    pub quantity: f64,
    /// Measurement unit
    pub unit: Unit,
    /// Storage location
    pub location: String,
    /// Date of purchase
    pub purchase_date: NaiveDate,
    /// Expiry date
    pub expiry_date: NaiveDate,
    /// Minimum-stock limit; must be non-negative
    pub min_limit: f64,
    /// Initial condition
    pub condition: ChemicalCondition,
    /// Free-text notes
    pub notes: String,
}

/// Creates a chemical and immediately scans for alerts, so a record entered
/// already below its limit or near expiry is flagged at once.
pub async fn create_chemical(
    db: &DatabaseConnection,
    new: NewChemical,
) -> Result<chemical::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Chemical name cannot be empty".to_string(),
        });
    }
    if !new.quantity.is_finite() || new.quantity < 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: new.quantity,
        });
    }
    if !new.min_limit.is_finite() || new.min_limit < 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: new.min_limit,
        });
    }

    let txn = db.begin().await?;

    let created = store::insert(
        &txn,
        chemical::ActiveModel {
            name: Set(new.name.trim().to_string()),
            brand: Set(new.brand),
            quantity: Set(new.quantity),
            unit: Set(new.unit),
            location: Set(new.location),
            purchase_date: Set(new.purchase_date),
            expiry_date: Set(new.expiry_date),
            min_limit: Set(new.min_limit),
            condition: Set(new.condition),
            notes: Set(new.notes),
            ..Default::default()
        },
    )
    .await?;

    reminder::scan(&txn, Utc::now().date_naive()).await?;
    txn.commit().await?;
    Ok(created)
}

/// Full replace-by-id update from the edit form.
///
/// When the edit crosses the low-stock boundary upward (old quantity at or
/// below the old limit, new quantity above the new limit), the chemical's
/// unresolved low-stock reminders are resolved before the closing scan.
pub async fn update_chemical(
    db: &DatabaseConnection,
    updated: chemical::Model,
) -> Result<chemical::Model> {
    let old = Chemical::find_by_id(updated.id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ItemNotFound {
            name: updated.id.to_string(),
        })?;

    let txn = db.begin().await?;

    let stored = store::update(&txn, updated.clone().into_active_model().reset_all()).await?;

    if updated.quantity > updated.min_limit && old.quantity <= old.min_limit {
        reminder::resolve_item_reminders(&txn, updated.id, ReminderKind::LowStock).await?;
    }

    reminder::scan(&txn, Utc::now().date_naive()).await?;
    txn.commit().await?;
    Ok(stored)
}

/// All chemicals, ordered alphabetically by name.
pub async fn get_all_chemicals(db: &DatabaseConnection) -> Result<Vec<chemical::Model>> {
    Chemical::find()
        .order_by_asc(chemical::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// One chemical by id, or `None` if absent.
pub async fn get_chemical_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<chemical::Model>> {
    store::get::<_, Chemical>(db, id).await
}

/// Removes a chemical record (explicit user action at the UI layer).
pub async fn delete_chemical(db: &DatabaseConnection, id: i64) -> Result<()> {
    store::delete::<_, Chemical>(db, id).await
}
