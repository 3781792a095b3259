//! Shared test utilities for `LabStock`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.
#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::core::chemical::{self, NewChemical};
use crate::core::equipment::{self, NewEquipment};
use crate::core::session::Session;
use crate::entities::{ChemicalCondition, EquipmentCondition, Unit};
use crate::errors::Result;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date in test fixtures.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The session all tests record usage under.
pub fn test_session() -> Session {
    Session::new("test_user")
}

/// New-chemical fields with sensible defaults.
///
/// # Defaults
/// * `quantity`: 10.0 ml
/// * `min_limit`: 5.0
/// * `condition`: Normal
/// * `expiry_date`: far future (no expiry alert)
pub fn new_chemical(name: &str) -> NewChemical {
    NewChemical {
        name: name.to_string(),
        brand: "LabCo".to_string(),
        quantity: 10.0,
        unit: Unit::Ml,
        location: "Shelf A".to_string(),
        purchase_date: date(2026, 1, 15),
        expiry_date: date(2099, 1, 1),
        min_limit: 5.0,
        condition: ChemicalCondition::Normal,
        notes: String::new(),
    }
}

/// New-equipment fields with sensible defaults (quantity 1, Normal).
pub fn new_equipment(name: &str) -> NewEquipment {
    NewEquipment {
        name: name.to_string(),
        brand: "LabCo".to_string(),
        quantity: 1,
        location: "Cabinet 2".to_string(),
        purchase_date: date(2026, 1, 15),
        condition: EquipmentCondition::Normal,
        notes: String::new(),
    }
}

/// Creates a test chemical with the default fields.
pub async fn create_test_chemical(
    db: &DatabaseConnection,
    name: &str,
) -> Result<crate::entities::chemical::Model> {
    chemical::create_chemical(db, new_chemical(name)).await
}

/// Creates a chemical from customized fields.
/// Use this when a test needs a specific stock or expiry configuration.
pub async fn create_custom_chemical(
    db: &DatabaseConnection,
    new: NewChemical,
) -> Result<crate::entities::chemical::Model> {
    chemical::create_chemical(db, new).await
}

/// Creates a test equipment record with the default fields.
pub async fn create_test_equipment(
    db: &DatabaseConnection,
    name: &str,
) -> Result<crate::entities::equipment::Model> {
    equipment::create_equipment(db, new_equipment(name)).await
}
