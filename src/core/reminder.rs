//! Reminder engine - keeps alert records consistent with inventory state.
//!
//! [`scan`] is idempotent: it inspects every `Normal`-condition chemical and
//! ensures exactly one unresolved reminder per qualifying (kind, item) pair.
//! All `LowStock`/`Expiry` insertion goes through [`ensure_item_reminder`],
//! including the usage processor's low-stock path, so no call site can bypass
//! the dedup check. `Broken` reminders are the deliberate exception: they are
//! created unconditionally on every report.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{IntoActiveModel, QueryOrder, Set, prelude::*};

use crate::config::DEFAULT_EXPIRY_WINDOW_DAYS;
use crate::entities::{
    Chemical, ChemicalCondition, ItemKind, Reminder, ReminderKind, chemical, reminder,
};
use crate::errors::{Error, Result};
use crate::store;

/// Counts of reminders created by one [`scan`] invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Low-stock reminders inserted
    pub low_stock_created: usize,
    /// Expiry reminders inserted
    pub expiry_created: usize,
}

/// Renders the low-stock alert message for a chemical at its current quantity.
pub(crate) fn low_stock_message(chemical: &chemical::Model) -> String {
    format!(
        "Low stock alert: {} is at {}{} (minimum: {}{})",
        chemical.name, chemical.quantity, chemical.unit, chemical.min_limit, chemical.unit
    )
}

/// Scans active chemicals with the default expiry window.
pub async fn scan<C>(db: &C, today: NaiveDate) -> Result<ScanOutcome>
where
    C: ConnectionTrait,
{
    scan_with_window(db, today, DEFAULT_EXPIRY_WINDOW_DAYS).await
}

/// Scans every `Normal`-condition chemical for low-stock and upcoming-expiry
/// conditions, creating unresolved reminders where none exist.
///
/// Chemicals in `Used` or `Broken` condition are excluded from both checks.
pub async fn scan_with_window<C>(
    db: &C,
    today: NaiveDate,
    window_days: i64,
) -> Result<ScanOutcome>
where
    C: ConnectionTrait,
{
    let chemicals = Chemical::find()
        .filter(chemical::Column::Condition.eq(ChemicalCondition::Normal))
        .all(db)
        .await?;

    let horizon = today + Duration::days(window_days);
    let mut outcome = ScanOutcome::default();

    for item in chemicals {
        if item.quantity <= item.min_limit
            && ensure_item_reminder(db, ReminderKind::LowStock, item.id, low_stock_message(&item))
                .await?
        {
            outcome.low_stock_created += 1;
        }

        if item.expiry_date > today && item.expiry_date <= horizon {
            let days_remaining = (item.expiry_date - today).num_days();
            let message = format!(
                "{} will expire in {} days ({})",
                item.name, days_remaining, item.expiry_date
            );
            if ensure_item_reminder(db, ReminderKind::Expiry, item.id, message).await? {
                outcome.expiry_created += 1;
            }
        }
    }

    tracing::debug!(
        low_stock = outcome.low_stock_created,
        expiry = outcome.expiry_created,
        "reminder scan complete"
    );
    Ok(outcome)
}

/// Inserts an unresolved reminder for (kind, item) unless one already exists.
///
/// This is the single creation path for `LowStock` and `Expiry` reminders;
/// returns `true` if a reminder was inserted.
pub async fn ensure_item_reminder<C>(
    db: &C,
    kind: ReminderKind,
    item_id: i64,
    message: String,
) -> Result<bool>
where
    C: ConnectionTrait,
{
    let existing = Reminder::find()
        .filter(reminder::Column::Kind.eq(kind))
        .filter(reminder::Column::ItemId.eq(item_id))
        .filter(reminder::Column::Resolved.eq(false))
        .one(db)
        .await?;

    if existing.is_some() {
        return Ok(false);
    }

    store::insert(
        db,
        reminder::ActiveModel {
            kind: Set(kind),
            message: Set(message),
            date: Set(Utc::now()),
            resolved: Set(false),
            item_id: Set(Some(item_id)),
            ..Default::default()
        },
    )
    .await?;
    tracing::info!(?kind, item_id, "reminder created");
    Ok(true)
}

/// Inserts a `Broken` reminder unconditionally, with no item reference.
///
/// Repeated reports for the same name produce repeated reminders; that is the
/// intended behavior for breakage alerts.
pub async fn create_broken_item_reminder<C>(
    db: &C,
    kind: ItemKind,
    name: &str,
) -> Result<reminder::Model>
where
    C: ConnectionTrait,
{
    store::insert(
        db,
        reminder::ActiveModel {
            kind: Set(ReminderKind::Broken),
            message: Set(format!("{} marked as broken: {name}", kind.label())),
            date: Set(Utc::now()),
            resolved: Set(false),
            item_id: Set(None),
            ..Default::default()
        },
    )
    .await
}

/// Flips every unresolved reminder matching (`item_id`, kind) to resolved.
///
/// Returns the number of reminders resolved. Invoked from the chemical edit
/// path when an edit raises quantity back above the minimum limit.
pub async fn resolve_item_reminders<C>(db: &C, item_id: i64, kind: ReminderKind) -> Result<u64>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    let result = Reminder::update_many()
        .col_expr(reminder::Column::Resolved, Expr::value(true))
        .filter(reminder::Column::ItemId.eq(item_id))
        .filter(reminder::Column::Kind.eq(kind))
        .filter(reminder::Column::Resolved.eq(false))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        tracing::info!(item_id, ?kind, count = result.rows_affected, "reminders resolved");
    }
    Ok(result.rows_affected)
}

/// Resolves a single reminder by id (the manual resolve action).
pub async fn resolve<C>(db: &C, reminder_id: i64) -> Result<reminder::Model>
where
    C: ConnectionTrait,
{
    let existing = store::get::<C, Reminder>(db, reminder_id)
        .await?
        .ok_or_else(|| Error::ItemNotFound {
            name: reminder_id.to_string(),
        })?;

    let mut active = existing.into_active_model().reset_all();
    active.resolved = Set(true);
    store::update(db, active).await
}

/// All unresolved reminders, newest first.
pub async fn unresolved<C>(db: &C) -> Result<Vec<reminder::Model>>
where
    C: ConnectionTrait,
{
    Reminder::find()
        .filter(reminder::Column::Resolved.eq(false))
        .order_by_desc(reminder::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Every reminder, newest first, for display.
pub async fn all_by_date_desc<C>(db: &C) -> Result<Vec<reminder::Model>>
where
    C: ConnectionTrait,
{
    Reminder::find()
        .order_by_desc(reminder::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::chemical::update_chemical;
    use crate::test_utils::{
        create_custom_chemical, create_test_chemical, date, new_chemical, setup_test_db,
    };

    #[tokio::test]
    async fn test_scan_is_idempotent_for_low_stock() -> Result<()> {
        let db = setup_test_db().await?;
        let mut fields = new_chemical("Ethanol");
        fields.quantity = 3.0;
        fields.min_limit = 5.0;
        create_custom_chemical(&db, fields).await?;

        // Entry-time scan already flagged the fixture; start from a clean slate
        // so the measured scan does the creating.
        store::clear::<_, Reminder>(&db).await?;

        let today = date(2026, 8, 27);
        let first = scan(&db, today).await?;
        assert_eq!(first.low_stock_created, 1);

        let second = scan(&db, today).await?;
        assert_eq!(second.low_stock_created, 0);

        let open = unresolved(&db).await?;
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].kind, ReminderKind::LowStock);
        Ok(())
    }

    #[tokio::test]
    async fn test_scan_excludes_used_and_broken_chemicals() -> Result<()> {
        let db = setup_test_db().await?;

        let mut used = new_chemical("Acetone");
        used.quantity = 1.0;
        used.condition = ChemicalCondition::Used;
        create_custom_chemical(&db, used).await?;

        let mut broken = new_chemical("Benzene");
        broken.quantity = 1.0;
        broken.condition = ChemicalCondition::Broken;
        create_custom_chemical(&db, broken).await?;

        let outcome = scan(&db, date(2026, 8, 27)).await?;
        assert_eq!(outcome, ScanOutcome::default());
        assert!(unresolved(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_expiry_window_boundaries() -> Result<()> {
        let db = setup_test_db().await?;
        let today = date(2026, 8, 27);

        // Expires exactly at the edge of the window: included
        let mut edge = new_chemical("Formalin");
        edge.expiry_date = today + Duration::days(30);
        create_custom_chemical(&db, edge).await?;

        // Expires today: excluded (strictly future dates only)
        let mut due = new_chemical("Iodine");
        due.expiry_date = today;
        create_custom_chemical(&db, due).await?;

        // Expires beyond the window: excluded
        let mut far = new_chemical("Glycerol");
        far.expiry_date = today + Duration::days(31);
        create_custom_chemical(&db, far).await?;

        // The create path scans on the wall-clock date; discard anything it
        // produced so the fixed-date scan below is what gets measured.
        store::clear::<_, Reminder>(&db).await?;

        let outcome = scan(&db, today).await?;
        assert_eq!(outcome.expiry_created, 1);

        let open = unresolved(&db).await?;
        assert_eq!(open.len(), 1);
        assert!(open[0].message.contains("Formalin will expire in 30 days"));
        Ok(())
    }

    #[tokio::test]
    async fn test_expiry_reminder_dedup() -> Result<()> {
        let db = setup_test_db().await?;
        let today = date(2026, 8, 27);

        let mut fields = new_chemical("Formalin");
        fields.expiry_date = today + Duration::days(10);
        create_custom_chemical(&db, fields).await?;

        scan(&db, today).await?;
        let outcome = scan(&db, today).await?;
        assert_eq!(outcome.expiry_created, 0);
        assert_eq!(unresolved(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_broken_reminders_are_unconditional() -> Result<()> {
        let db = setup_test_db().await?;

        create_broken_item_reminder(&db, ItemKind::Equipment, "Beaker").await?;
        create_broken_item_reminder(&db, ItemKind::Equipment, "Beaker").await?;

        let open = unresolved(&db).await?;
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].message, "Equipment marked as broken: Beaker");
        assert_eq!(open[0].item_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_item_reminders_flips_all_matching() -> Result<()> {
        let db = setup_test_db().await?;
        let chemical = create_test_chemical(&db, "Ethanol").await?;

        ensure_item_reminder(&db, ReminderKind::LowStock, chemical.id, "low".to_string())
            .await?;
        ensure_item_reminder(&db, ReminderKind::Expiry, chemical.id, "exp".to_string()).await?;

        let resolved = resolve_item_reminders(&db, chemical.id, ReminderKind::LowStock).await?;
        assert_eq!(resolved, 1);

        let open = unresolved(&db).await?;
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].kind, ReminderKind::Expiry);
        Ok(())
    }

    #[tokio::test]
    async fn test_manual_resolve_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let created =
            create_broken_item_reminder(&db, ItemKind::Chemical, "Ethanol").await?;

        let resolved = resolve(&db, created.id).await?;
        assert!(resolved.resolved);
        assert!(unresolved(&db).await?.is_empty());

        let missing = resolve(&db, 999).await;
        assert!(matches!(missing, Err(Error::ItemNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_resolved_reminder_does_not_block_new_alert() -> Result<()> {
        let db = setup_test_db().await?;
        let today = date(2026, 8, 27);

        let mut fields = new_chemical("Ethanol");
        fields.quantity = 3.0;
        fields.min_limit = 5.0;
        let chemical = create_custom_chemical(&db, fields).await?;

        scan(&db, today).await?;
        resolve_item_reminders(&db, chemical.id, ReminderKind::LowStock).await?;

        // Still below the limit, so a fresh unresolved reminder is warranted:
        // only the unresolved subset participates in the dedup check.
        let outcome = scan(&db, today).await?;
        assert_eq!(outcome.low_stock_created, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_restored_above_limit_resolves_on_edit() -> Result<()> {
        let db = setup_test_db().await?;
        let today = date(2026, 8, 27);

        let mut fields = new_chemical("Ethanol");
        fields.quantity = 3.0;
        fields.min_limit = 5.0;
        let chemical = create_custom_chemical(&db, fields).await?;
        scan(&db, today).await?;
        assert_eq!(unresolved(&db).await?.len(), 1);

        let mut edited = chemical.clone();
        edited.quantity = 20.0;
        update_chemical(&db, edited).await?;

        assert!(unresolved(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_all_by_date_desc_includes_resolved_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        let now = Utc::now();

        store::insert(
            &db,
            reminder::ActiveModel {
                kind: Set(ReminderKind::Broken),
                message: Set("older, already handled".to_string()),
                date: Set(now - Duration::hours(2)),
                resolved: Set(true),
                item_id: Set(None),
                ..Default::default()
            },
        )
        .await?;
        store::insert(
            &db,
            reminder::ActiveModel {
                kind: Set(ReminderKind::LowStock),
                message: Set("newer, still open".to_string()),
                date: Set(now),
                resolved: Set(false),
                item_id: Set(Some(1)),
                ..Default::default()
            },
        )
        .await?;

        let listed = all_by_date_desc(&db).await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].message, "newer, still open");
        assert_eq!(listed[1].message, "older, already handled");
        Ok(())
    }
}
