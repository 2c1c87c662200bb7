//! # Maquette
//!
//! The core of a drag-and-drop page editor: components are placed on a
//! fixed-size page, moved, resized, restyled and restacked through a
//! canonical store, and the result exports as JSON or as a single-page
//! PDF that reproduces the on-screen layout.
//!
//! The presentational layer is not here — panels, drag wiring and file
//! pickers live in the host. They call into the store on user input and
//! re-render from the snapshot it exposes.
//!
//! ## Architecture
//!
//! ```text
//! host gestures
//!       ↓
//!   [store]    — place / select / move / resize / update / remove
//!   [zorder]   — bring forward / send backward
//!   [page]     — display clamp, drop-point conversion
//!       ↓ snapshot (&[Component])
//!   [pdf]      — background, per-kind draw routines, fonts, images
//!       ↓
//!   PDF bytes / JSON
//! ```

pub mod error;
pub mod font;
pub mod geom;
pub mod image;
pub mod model;
pub mod page;
pub mod pdf;
pub mod store;
pub mod text;
pub mod zorder;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::MaquetteError;
pub use model::{Component, ComponentKind};
pub use page::PageBounds;
pub use pdf::{ExportOptions, PdfWriter};
pub use store::{CanvasStore, PropertyField, PropertyUpdate};

/// Render a component snapshot to PDF bytes.
///
/// The snapshot is read-only; edits made while an export is running can
/// never corrupt the output because the caller hands in the list by
/// reference and the pipeline copies what it needs up front.
pub fn export_pdf(
    components: &[Component],
    options: &ExportOptions,
) -> Result<Vec<u8>, MaquetteError> {
    PdfWriter::with_options(options.clone()).write(components)
}

/// Render a JSON component list (the JSON export format) to PDF bytes.
pub fn export_pdf_json(json: &str) -> Result<Vec<u8>, MaquetteError> {
    let components: Vec<Component> = serde_json::from_str(json)?;
    export_pdf(&components, &ExportOptions::default())
}

/// Serialize a component snapshot verbatim — the JSON interchange format.
pub fn export_json(components: &[Component]) -> Result<String, MaquetteError> {
    Ok(serde_json::to_string_pretty(components)?)
}
