use crate::IconDef;

/// Placeholder for callers that choose to show a "missing icon" marker.
///
/// Not part of [`CATALOG`](crate::CATALOG): the registry never substitutes it
/// on its own.
pub static MISSING_ICON: IconDef = IconDef::new("�", "?", "Missing icon");
