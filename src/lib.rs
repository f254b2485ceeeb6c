//! kakeibo-cli - Command-line household expense tracker
//!
//! This library provides the core functionality for the kakeibo expense
//! tracker. Every recorded expense - one-off, monthly, yearly or lifetime -
//! is normalized to comparable daily/monthly/yearly cost, so reports can
//! aggregate across recurrence kinds.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, policies, settings)
//! - `calc`: The normalization engine (pure)
//! - `reports`: Aggregation and report generation
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal output formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::config::paths::KakeiboPaths;
//! use kakeibo::storage::Storage;
//!
//! let paths = KakeiboPaths::new()?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod calc;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{KakeiboError, KakeiboResult};
