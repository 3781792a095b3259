//! Broken-item tracker - transitions records into the broken condition,
//! mirrors them into the broken-items collection, and restores them back.
//!
//! Restore resolves the live record by the snapshot's `source_id` when one was
//! captured; manually reported snapshots carry no source and fall back to the
//! first name match, a known ambiguity the tests assert rather than fix.

use chrono::Utc;
use sea_orm::{IntoActiveModel, QueryOrder, Set, TransactionTrait, prelude::*};

use crate::core::reminder;
use crate::entities::{
    BrokenItem, Chemical, ChemicalCondition, Equipment, EquipmentCondition, ItemKind, broken_item,
    chemical, equipment,
};
use crate::errors::Result;
use crate::store;

/// Marks a chemical as broken: persists the condition, snapshots the record,
/// and raises a breakage alert, all in one transaction.
///
/// The quantity and every other field are left unchanged. A repeat call
/// produces a second snapshot and a second alert by design.
pub async fn mark_chemical_broken(
    db: &DatabaseConnection,
    item: &chemical::Model,
) -> Result<broken_item::Model> {
    let txn = db.begin().await?;

    let mut active = item.clone().into_active_model().reset_all();
    active.condition = Set(ChemicalCondition::Broken);
    store::update(&txn, active).await?;

    let snapshot = store::insert(
        &txn,
        broken_item::ActiveModel {
            kind: Set(ItemKind::Chemical),
            name: Set(item.name.clone()),
            quantity: Set(item.quantity),
            cause: Set("Marked as broken".to_string()),
            reported_by: Set("System".to_string()),
            date: Set(Utc::now()),
            remarks: Set(format!("Brand: {}, Location: {}", item.brand, item.location)),
            source_id: Set(Some(item.id)),
            ..Default::default()
        },
    )
    .await?;

    reminder::create_broken_item_reminder(&txn, ItemKind::Chemical, &item.name).await?;

    txn.commit().await?;
    tracing::info!(chemical = %item.name, "marked as broken");
    Ok(snapshot)
}

/// Marks an equipment record as broken. Same shape as the chemical path.
pub async fn mark_equipment_broken(
    db: &DatabaseConnection,
    item: &equipment::Model,
) -> Result<broken_item::Model> {
    let txn = db.begin().await?;

    let mut active = item.clone().into_active_model().reset_all();
    active.condition = Set(EquipmentCondition::Broken);
    store::update(&txn, active).await?;

    let snapshot = store::insert(
        &txn,
        broken_item::ActiveModel {
            kind: Set(ItemKind::Equipment),
            name: Set(item.name.clone()),
            quantity: Set(f64::from(item.quantity)),
            cause: Set("Marked as broken".to_string()),
            reported_by: Set("System".to_string()),
            date: Set(Utc::now()),
            remarks: Set(format!("Brand: {}, Location: {}", item.brand, item.location)),
            source_id: Set(Some(item.id)),
            ..Default::default()
        },
    )
    .await?;

    reminder::create_broken_item_reminder(&txn, ItemKind::Equipment, &item.name).await?;

    txn.commit().await?;
    tracing::info!(equipment = %item.name, "marked as broken");
    Ok(snapshot)
}

/// Fields for a manually reported broken item (no originating record).
#[derive(Debug, Clone)]
pub struct BrokenReport {
    /// Which collection the item nominally belongs to
    pub kind: ItemKind,
    /// Item name as reported
    pub name: String,
    /// Quantity at time of report
    pub quantity: f64,
    /// Free-text cause
    pub cause: String,
    /// Who reported it
    pub reported_by: String,
    /// Free-text remarks
    pub remarks: String,
}

/// Records a manually reported broken item plus its breakage alert.
///
/// The snapshot carries no `source_id`; restoring it later falls back to name
/// matching.
pub async fn report_broken_item(
    db: &DatabaseConnection,
    report: BrokenReport,
) -> Result<broken_item::Model> {
    let txn = db.begin().await?;

    let snapshot = store::insert(
        &txn,
        broken_item::ActiveModel {
            kind: Set(report.kind),
            name: Set(report.name.clone()),
            quantity: Set(report.quantity),
            cause: Set(report.cause),
            reported_by: Set(report.reported_by),
            date: Set(Utc::now()),
            remarks: Set(report.remarks),
            source_id: Set(None),
            ..Default::default()
        },
    )
    .await?;

    reminder::create_broken_item_reminder(&txn, report.kind, &report.name).await?;

    txn.commit().await?;
    Ok(snapshot)
}

/// Restores a broken record to active inventory.
///
/// Finds the live record by `source_id` (or first name match for manual
/// snapshots), sets its condition back to `Normal` with every other field
/// unchanged, and deletes the snapshot. A snapshot that resolves to no live
/// record is simply discarded. Outstanding reminders are deliberately left
/// alone; resolution only happens on the chemical edit path.
pub async fn restore(db: &DatabaseConnection, snapshot: &broken_item::Model) -> Result<()> {
    let txn = db.begin().await?;

    match snapshot.kind {
        ItemKind::Chemical => {
            let target = match snapshot.source_id {
                Some(id) => store::get::<_, Chemical>(&txn, id).await?,
                None => {
                    Chemical::find()
                        .filter(chemical::Column::Name.eq(snapshot.name.as_str()))
                        .order_by_asc(chemical::Column::Id)
                        .one(&txn)
                        .await?
                }
            };
            if let Some(original) = target {
                let mut active = original.into_active_model().reset_all();
                active.condition = Set(ChemicalCondition::Normal);
                store::update(&txn, active).await?;
            }
        }
        ItemKind::Equipment => {
            let target = match snapshot.source_id {
                Some(id) => store::get::<_, Equipment>(&txn, id).await?,
                None => {
                    Equipment::find()
                        .filter(equipment::Column::Name.eq(snapshot.name.as_str()))
                        .order_by_asc(equipment::Column::Id)
                        .one(&txn)
                        .await?
                }
            };
            if let Some(original) = target {
                let mut active = original.into_active_model().reset_all();
                active.condition = Set(EquipmentCondition::Normal);
                store::update(&txn, active).await?;
            }
        }
    }

    store::delete::<_, BrokenItem>(&txn, snapshot.id).await?;

    txn.commit().await?;
    tracing::info!(name = %snapshot.name, "restored to active inventory");
    Ok(())
}

/// All broken-item snapshots, newest first, for display.
pub async fn get_all_broken_items(db: &DatabaseConnection) -> Result<Vec<broken_item::Model>> {
    BrokenItem::find()
        .order_by_desc(broken_item::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}
