//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod broken_item;
pub mod chemical;
pub mod equipment;
pub mod reminder;
pub mod schedule_entry;
pub mod types;
pub mod usage_log;

// Re-export specific types to avoid conflicts
pub use broken_item::{
    Column as BrokenItemColumn, Entity as BrokenItem, Model as BrokenItemModel,
};
pub use chemical::{Column as ChemicalColumn, Entity as Chemical, Model as ChemicalModel};
pub use equipment::{Column as EquipmentColumn, Entity as Equipment, Model as EquipmentModel};
pub use reminder::{Column as ReminderColumn, Entity as Reminder, Model as ReminderModel};
pub use schedule_entry::{
    Column as ScheduleEntryColumn, Entity as ScheduleEntry, Model as ScheduleEntryModel,
};
pub use types::{ChemicalCondition, EquipmentCondition, ItemKind, ReminderKind, Unit};
pub use usage_log::{Column as UsageLogColumn, Entity as UsageLog, Model as UsageLogModel};
