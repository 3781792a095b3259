//! Core business logic - framework-agnostic inventory, usage, and reminder
//! operations.
//!
//! Every multi-step mutation here runs inside a database transaction so a
//! partial failure rolls back instead of leaving stock, snapshots, and alerts
//! out of sync.

/// Full-database export and import
pub mod backup;
/// Broken-item tracking: mark, report, restore
pub mod broken;
/// Chemical CRUD entry points
pub mod chemical;
/// Equipment CRUD entry points
pub mod equipment;
/// Reminder scanning, creation, and resolution
pub mod reminder;
/// Structured inventory summary for the dashboard
pub mod report;
/// Explicit session context passed into the core
pub mod session;
/// Usage processing: consumption logging and quantity deduction
pub mod usage;
