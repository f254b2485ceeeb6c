//! Business logic layer
//!
//! Services validate input at the boundary, mutate the repositories and
//! persist the result. The calculation and aggregation layers below assume
//! data that already passed through here.

pub mod expense;
pub mod policy;
pub mod settings;

pub use expense::ExpenseService;
pub use policy::PolicyService;
pub use settings::SettingsService;
