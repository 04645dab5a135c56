//! iconset Core Types
//!
//! This crate provides the foundational types shared by the registry and the
//! icon catalog:
//! - Identifier types (Identifier, IdentifierFormat)
//! - The renderable-unit capability (RenderableUnit) and its handle (Handle)
//! - Identifier validation errors

mod error;
mod identifier;
mod unit;

pub use error::*;
pub use identifier::*;
pub use unit::*;
