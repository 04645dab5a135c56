use crate::IconDef;

/// Gear.
pub static SETTINGS_ICON: IconDef = IconDef::new("⚙", "S", "Settings");
