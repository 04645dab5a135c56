//! Renderable unit capability and the handles the registry hands out.

use std::fmt;

/// Capability every registrable unit provides.
///
/// Units are defined elsewhere and only borrowed by the registry, so they must
/// be shareable across threads.
pub trait RenderableUnit: Send + Sync {
    /// Render to a list of lines at the given cell width.
    fn render(&self, width: usize) -> Vec<String>;

    /// Human-readable label for pickers and documentation tooling.
    fn title(&self) -> &str {
        ""
    }
}

/// Non-owning, shared reference to a renderable unit.
///
/// Equality is identity: two handles are equal when they point at the same
/// unit. Zero-sized units may share an address, so distinct units should
/// carry data.
#[derive(Clone, Copy)]
pub struct Handle<'u> {
    unit: &'u dyn RenderableUnit,
}

impl<'u> Handle<'u> {
    /// Create a handle to an already defined unit.
    pub fn new(unit: &'u dyn RenderableUnit) -> Self {
        Self { unit }
    }

    /// The referenced unit.
    pub fn unit(self) -> &'u dyn RenderableUnit {
        self.unit
    }

    pub fn render(self, width: usize) -> Vec<String> {
        self.unit.render(width)
    }

    pub fn title(self) -> &'u str {
        self.unit.title()
    }

    /// Returns true if both handles reference the same unit.
    pub fn same_unit(self, other: Handle<'_>) -> bool {
        std::ptr::addr_eq(
            self.unit as *const dyn RenderableUnit,
            other.unit as *const dyn RenderableUnit,
        )
    }
}

impl<'u, U: RenderableUnit> From<&'u U> for Handle<'u> {
    fn from(unit: &'u U) -> Self {
        Self::new(unit)
    }
}

impl PartialEq for Handle<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_unit(*other)
    }
}

impl Eq for Handle<'_> {}

impl fmt::Debug for Handle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("unit", &(self.unit as *const dyn RenderableUnit as *const ()))
            .field("title", &self.unit.title())
            .finish()
    }
}
