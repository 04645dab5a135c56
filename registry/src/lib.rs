//! iconset Registry
//!
//! Identifier → renderable-unit lookup. The registry is immutable after
//! construction via RegistryBuilder.

mod builder;
mod config;
mod registry;

pub use builder::{RegistryBuilder, RegistryError, RegistryResult};
pub use config::RegistryConfig;
pub use registry::{Entry, Identifiers, Registry};
