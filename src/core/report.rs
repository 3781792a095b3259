//! Inventory summary - structured dashboard numbers.
//!
//! Returns plain data for the view layer to format. The stock value is a
//! placeholder estimate; valuation accuracy is explicitly out of scope.

use chrono::{Duration, NaiveDate};
use sea_orm::prelude::*;

use crate::config::DEFAULT_EXPIRY_WINDOW_DAYS;
use crate::entities::{BrokenItem, Chemical, ChemicalCondition, Equipment};
use crate::errors::Result;
use crate::store;

/// Placeholder per-record value used in the stock estimate.
const CHEMICAL_UNIT_VALUE: f64 = 1000.0;
const EQUIPMENT_UNIT_VALUE: f64 = 5000.0;

/// Aggregate counts over the inventory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    /// Total chemical records
    pub total_chemicals: usize,
    /// Total equipment records
    pub total_equipment: usize,
    /// Chemicals at or below their minimum limit
    pub low_stock: usize,
    /// Chemicals expiring inside the warning window
    pub expiring_soon: usize,
    /// Broken-item snapshots on file
    pub broken: usize,
    /// Placeholder stock value estimate
    pub estimated_stock_value: f64,
}

/// Computes the dashboard summary as of `today`.
pub async fn inventory_summary(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<InventorySummary> {
    let chemicals = store::get_all::<_, Chemical>(db).await?;
    let equipment = store::get_all::<_, Equipment>(db).await?;
    let broken_items = store::get_all::<_, BrokenItem>(db).await?;

    let horizon = today + Duration::days(DEFAULT_EXPIRY_WINDOW_DAYS);
    // Only active records count toward low stock; broken and used-up
    // chemicals are tracked elsewhere. Expiry applies regardless of condition.
    let low_stock = chemicals
        .iter()
        .filter(|c| c.condition == ChemicalCondition::Normal && c.quantity <= c.min_limit)
        .count();
    let expiring_soon = chemicals
        .iter()
        .filter(|c| c.expiry_date > today && c.expiry_date <= horizon)
        .count();

    #[allow(clippy::cast_precision_loss)]
    let estimated_stock_value = chemicals.len() as f64 * CHEMICAL_UNIT_VALUE
        + equipment.len() as f64 * EQUIPMENT_UNIT_VALUE;

    Ok(InventorySummary {
        total_chemicals: chemicals.len(),
        total_equipment: equipment.len(),
        low_stock,
        expiring_soon,
        broken: broken_items.len(),
        estimated_stock_value,
    })
}
