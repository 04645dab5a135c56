//! Icon definition shared by every exported icon.

use iconset_core::RenderableUnit;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A single-cell-row icon: a glyph, an ASCII fallback for narrow slots, and a title.
#[derive(Debug)]
pub struct IconDef {
    glyph: &'static str,
    ascii: &'static str,
    title: &'static str,
}

impl IconDef {
    pub const fn new(glyph: &'static str, ascii: &'static str, title: &'static str) -> Self {
        Self {
            glyph,
            ascii,
            title,
        }
    }

    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    pub fn ascii(&self) -> &'static str {
        self.ascii
    }

    /// The text shown in a slot `width` cells wide.
    fn face(&self, width: usize) -> &'static str {
        if UnicodeWidthStr::width(self.glyph) <= width {
            self.glyph
        } else {
            self.ascii
        }
    }
}

impl RenderableUnit for IconDef {
    fn render(&self, width: usize) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        vec![center(self.face(width), width)]
    }

    fn title(&self) -> &str {
        self.title
    }
}

/// Center `text` in exactly `width` cells, cutting it when it does not fit.
fn center(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return truncate(text, width);
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
