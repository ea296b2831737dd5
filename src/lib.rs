//! Settings-backed registry of COBOL dialect plugins
//!
//! Dialect providers register a [`DialectDescriptor`] under a single settings
//! key; consumers list them, for example to hand dialect grammar paths to a
//! language server at startup.
//!
//! ```text
//! ┌──────────────────┐        ┌──────────────────────────┐
//! │  DialectCatalog  │───────▶│       ConfigStore        │
//! │ (list, register) │ get/set│ (memory, json, sqlite)   │
//! └──────────────────┘        └──────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: descriptor type and the catalog itself
//! - [`store`]: the `ConfigStore` trait and its implementations
//! - [`config`]: settings key constants and default paths
//! - [`logging`]: subscriber setup for the binary

pub mod catalog;
pub mod config;
pub mod logging;
pub mod store;

pub use catalog::{DialectCatalog, DialectDescriptor};
pub use store::{ConfigStore, JsonFileStore, MemoryStore, SqliteStore, StoreError};
