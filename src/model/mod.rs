// File: ./src/model/mod.rs
pub mod budget;
pub mod display;
pub mod draft;
pub mod item;

pub use budget::{BudgetKind, BudgetLedger, BudgetLine, BudgetTotals};
pub use draft::TaskDraft;
pub use item::{BoardGroup, Emphasis, Priority, TaskRecord};
