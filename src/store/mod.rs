//! Settings store layer
//! - traits.rs: ConfigStore trait definition
//! - error.rs: StoreError
//! - memory.rs: in-process store
//! - json_file.rs: flat settings.json store
//! - sqlite.rs: SQLite key/value store

pub mod error;
pub mod json_file;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ConfigStore;
