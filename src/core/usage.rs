//! Usage processor - converts a consumption event into a usage-log entry and,
//! for chemicals, a quantity deduction plus its consequential state changes.
//!
//! The whole operation runs in one database transaction: the log insert, the
//! quantity update, any low-stock reminder, any depletion snapshot, and the
//! closing reminder scan commit together or not at all.

use chrono::{NaiveDate, Utc};
use sea_orm::{IntoActiveModel, QueryOrder, Set, TransactionTrait, prelude::*};

use crate::core::{reminder, session::Session};
use crate::entities::{ItemKind, broken_item, chemical, equipment, usage_log};
use crate::errors::{Error, Result};
use crate::store;

/// The item a consumption event is logged against.
#[derive(Debug, Clone, Copy)]
pub enum UsageItem<'a> {
    /// A chemical: usage deducts from its quantity
    Chemical(&'a chemical::Model),
    /// Equipment: usage is logged for audit only, quantity untouched
    Equipment(&'a equipment::Model),
}

impl UsageItem<'_> {
    const fn kind(&self) -> ItemKind {
        match self {
            Self::Chemical(_) => ItemKind::Chemical,
            Self::Equipment(_) => ItemKind::Equipment,
        }
    }

    fn identity(&self) -> (i64, &str) {
        match self {
            Self::Chemical(model) => (model.id, model.name.as_str()),
            Self::Equipment(model) => (model.id, model.name.as_str()),
        }
    }
}

/// Records one consumption event.
///
/// For chemicals the stored quantity is reduced by exactly `quantity_used`,
/// with no floor at zero: the caller constrains input against current stock,
/// and a negative result is preserved as-is rather than silently corrected.
/// Dropping to zero or below additionally produces a depletion snapshot in the
/// broken-items collection; the chemical's condition field is left unchanged
/// and the record is not deleted.
///
/// Returns the inserted usage-log row.
pub async fn record_usage(
    db: &DatabaseConnection,
    session: &Session,
    item: UsageItem<'_>,
    quantity_used: f64,
    purpose: String,
    date: NaiveDate,
) -> Result<usage_log::Model> {
    if !quantity_used.is_finite() || quantity_used <= 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: quantity_used,
        });
    }

    let txn = db.begin().await?;

    let (item_id, item_name) = item.identity();
    let log = store::insert(
        &txn,
        usage_log::ActiveModel {
            item_kind: Set(item.kind()),
            item_id: Set(item_id),
            item_name: Set(item_name.to_string()),
            quantity_used: Set(quantity_used),
            used_by: Set(session.user().to_string()),
            purpose: Set(purpose),
            date: Set(date),
            ..Default::default()
        },
    )
    .await?;

    if let UsageItem::Chemical(original) = item {
        let new_quantity = original.quantity - quantity_used;
        let updated = chemical::Model {
            quantity: new_quantity,
            ..original.clone()
        };

        let active = updated.clone().into_active_model().reset_all();
        store::update(&txn, active).await?;
        tracing::info!(
            chemical = %updated.name,
            quantity_used,
            new_quantity,
            "usage deducted"
        );

        if new_quantity > 0.0 && new_quantity <= updated.min_limit {
            reminder::ensure_item_reminder(
                &txn,
                crate::entities::ReminderKind::LowStock,
                updated.id,
                reminder::low_stock_message(&updated),
            )
            .await?;
        }

        if new_quantity <= 0.0 {
            store::insert(
                &txn,
                broken_item::ActiveModel {
                    kind: Set(ItemKind::Chemical),
                    name: Set(updated.name.clone()),
                    quantity: Set(0.0),
                    cause: Set("Depleted through usage".to_string()),
                    reported_by: Set(session.user().to_string()),
                    date: Set(Utc::now()),
                    remarks: Set("Stock depleted".to_string()),
                    source_id: Set(Some(updated.id)),
                    ..Default::default()
                },
            )
            .await?;
            tracing::info!(chemical = %updated.name, "stock depleted");
        }
    }

    // Any other qualifying chemicals also get alerts in the same operation
    reminder::scan(&txn, Utc::now().date_naive()).await?;

    txn.commit().await?;
    Ok(log)
}

/// All usage logs, newest first, for display.
pub async fn get_all_usage_logs(db: &DatabaseConnection) -> Result<Vec<usage_log::Model>> {
    crate::entities::UsageLog::find()
        .order_by_desc(usage_log::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}
