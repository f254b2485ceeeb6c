//! Core data models for kakeibo-cli
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, the category taxonomy, policies, and
//! user settings.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod settings;

pub use category::{Category, CategoryPolicy, Frequency};
pub use expense::{Expense, ExpenseKind};
pub use ids::ExpenseId;
pub use money::Money;
pub use settings::{CategoryPolicyEntry, UserSettings};
