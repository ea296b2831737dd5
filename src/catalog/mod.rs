//! Dialect catalog layer
//! - descriptor.rs: DialectDescriptor value type
//! - dialects.rs: DialectCatalog over a ConfigStore

pub mod descriptor;
pub mod dialects;

pub use descriptor::DialectDescriptor;
pub use dialects::DialectCatalog;
