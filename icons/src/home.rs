use crate::IconDef;

/// House outline.
pub static HOME_ICON: IconDef = IconDef::new("⌂", "H", "Home");
