//! iconset
//!
//! One importable namespace for every icon:
//! - Named exports ([`HOME_ICON`], [`SETTINGS_ICON`]) for call sites that know
//!   which icon they want
//! - [`CATALOG`], the fixed list of (identifier, icon) pairs
//! - [`build_registry`], which seals the catalog into a [`Registry`] for
//!   generic tooling (pickers, documentation generators)
//!
//! The registry is an owned value: build it once at startup and lend it out.
//!
//! ```
//! let registry = iconset::build_registry().unwrap();
//! let home = registry.resolve("HomeIcon").unwrap();
//! assert_eq!(home.title(), "Home");
//! ```

mod home;
mod icon;
mod missing;
mod settings;

pub use home::HOME_ICON;
pub use icon::IconDef;
pub use missing::MISSING_ICON;
pub use settings::SETTINGS_ICON;

pub use iconset_core::{Handle, Identifier, IdentifierFormat, RenderableUnit};
pub use iconset_registry::{
    Entry, Registry, RegistryBuilder, RegistryConfig, RegistryError, RegistryResult,
};

/// Every exported icon, under the identifier it is resolved by.
pub static CATALOG: &[(&str, &dyn RenderableUnit)] = &[
    ("HomeIcon", &HOME_ICON),
    ("SettingsIcon", &SETTINGS_ICON),
];

/// Seal [`CATALOG`] into a registry.
///
/// Catalog identifiers must be PascalCase; an error here is a defect in the
/// catalog and should abort startup.
pub fn build_registry() -> RegistryResult<Registry<'static>> {
    Registry::from_entries_with_config(
        RegistryConfig::strict(),
        CATALOG
            .iter()
            .map(|&(identifier, unit)| (identifier, Handle::new(unit))),
    )
}
