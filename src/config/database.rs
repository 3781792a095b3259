//! Database connection and table creation.
//!
//! Table creation uses `SeaORM`'s `Schema::create_table_from_entity` so the
//! schema always matches the entity definitions; there is no migration story
//! beyond additive creation. All six collections must be created before any
//! store operation is issued.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::{BrokenItem, Chemical, Equipment, Reminder, ScheduleEntry, UsageLog};
use crate::errors::Result;

/// Default local `SQLite` database path.
#[must_use]
pub fn default_database_url() -> String {
    "sqlite://data/labstock.sqlite?mode=rwc".to_string()
}

/// Establishes a connection to the database at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all inventory tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let chemical_table = schema.create_table_from_entity(Chemical);
    let equipment_table = schema.create_table_from_entity(Equipment);
    let broken_item_table = schema.create_table_from_entity(BrokenItem);
    let usage_log_table = schema.create_table_from_entity(UsageLog);
    let reminder_table = schema.create_table_from_entity(Reminder);
    let schedule_table = schema.create_table_from_entity(ScheduleEntry);

    db.execute(builder.build(&chemical_table)).await?;
    db.execute(builder.build(&equipment_table)).await?;
    db.execute(builder.build(&broken_item_table)).await?;
    db.execute(builder.build(&usage_log_table)).await?;
    db.execute(builder.build(&reminder_table)).await?;
    db.execute(builder.build(&schedule_table)).await?;

    Ok(())
}
