//! # Page Geometry
//!
//! The fixed page the editor lays components onto: an A4-equivalent sheet
//! in CSS pixels, landscape. Two jobs live here: the advisory display
//! clamp (a component whose stored position drifted out of bounds still
//! renders fully on-page, without writing back to the model) and the
//! drop-point conversion from viewport space to page space.

use serde::{Deserialize, Serialize};

use crate::geom::clamp_origin;
use crate::model::{Component, FALLBACK_HEIGHT, FALLBACK_WIDTH};

/// A4 landscape width in CSS pixels.
pub const A4_WIDTH_PX: f64 = 1123.0;
/// A4 landscape height in CSS pixels.
pub const A4_HEIGHT_PX: f64 = 794.0;

/// The fixed dimensions of the document page, in page-space units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for PageBounds {
    fn default() -> Self {
        Self::a4_landscape()
    }
}

impl PageBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn a4_landscape() -> Self {
        Self {
            width: A4_WIDTH_PX,
            height: A4_HEIGHT_PX,
        }
    }

    /// On-page display position for a component: its stored position,
    /// clamped so the full box stays inside the page. Display-only — the
    /// model is not mutated.
    pub fn display_position(&self, component: &Component) -> (f64, f64) {
        let (w, h) = component.size();
        (
            clamp_origin(component.x, w, self.width),
            clamp_origin(component.y, h, self.height),
        )
    }

    /// Convert a pointer position in viewport space to a clamped page-space
    /// drop position. `page_origin` is the page surface's on-screen origin,
    /// handed in by the interaction layer rather than looked up globally.
    /// New components have no declared size yet, so the clamp uses the
    /// layout fallback box.
    pub fn drop_position(&self, pointer: (f64, f64), page_origin: (f64, f64)) -> (f64, f64) {
        let x = pointer.0 - page_origin.0;
        let y = pointer.1 - page_origin.1;
        (
            clamp_origin(x, FALLBACK_WIDTH, self.width),
            clamp_origin(y, FALLBACK_HEIGHT, self.height),
        )
    }
}
