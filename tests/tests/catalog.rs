//! The exported icon catalog.

use iconset::{build_registry, IconDef, CATALOG, HOME_ICON, MISSING_ICON, SETTINGS_ICON};
use iconset_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_every_catalog_entry_resolves_to_its_unit() {
    let registry = build_registry().unwrap();
    assert_eq!(registry.len(), CATALOG.len());

    for &(name, unit) in CATALOG {
        assert_eq!(registry.resolve(name), Ok(Handle::new(unit)), "{name}");
    }
}

#[test]
fn test_catalog_names_satisfy_strict_config() {
    let config = RegistryConfig::strict();
    for &(name, _) in CATALOG {
        assert!(config.validate(name).is_ok(), "{name}");
    }
}

#[test]
fn test_named_exports() {
    let registry = build_registry().unwrap();
    let home: &IconDef = &HOME_ICON;
    assert_eq!(registry.resolve("HomeIcon").unwrap(), Handle::from(home));
    assert_eq!(registry.resolve("SettingsIcon").unwrap(), Handle::from(&SETTINGS_ICON));
    assert!(!registry.contains("MissingIcon"));
}

#[test]
fn test_icons_render_one_row_at_any_width() {
    let registry = build_registry().unwrap();
    for entry in &registry {
        for width in 1..6 {
            let lines = entry.handle().render(width);
            assert_eq!(lines.len(), 1, "{}", entry.identifier());
        }
        assert!(entry.handle().render(0).is_empty());
        assert!(!entry.handle().title().is_empty());
    }
}

#[test]
fn test_missing_icon_for_callers() {
    let registry = build_registry().unwrap();
    let shown = registry.resolve_or("TrashIcon", Handle::from(&MISSING_ICON));
    assert_eq!(shown, Handle::from(&MISSING_ICON));
    assert_eq!(shown.title(), "Missing icon");
}
