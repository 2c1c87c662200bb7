//! # PDF Export
//!
//! Renders a component list to a single fixed-size PDF page, reproducing
//! the on-page layout and typography as closely as the format allows.
//!
//! This is a from-scratch PDF 1.7 writer. We write the raw bytes ourselves
//! because the subset needed here — one page, the four standard Helvetica
//! faces, Flate-compressed content streams, JPEG/PNG image XObjects — is
//! small enough that full control beats a dependency.
//!
//! ## Structure
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- Catalog, page tree, fonts, XObjects, content
//! ...
//! xref                <- byte offsets of each object
//! trailer             <- points at the Catalog
//! %%EOF
//! ```
//!
//! ## Coordinate systems
//!
//! The document model's origin is top-left with y growing downward; PDF's
//! page origin is bottom-left with y growing upward. Every box draws at
//! `(x, page_height - y - height)`. Component page-space units are used as
//! PDF points verbatim. An optional normalization pass subtracts the
//! minimum component `y` first so exported content is top-anchored
//! regardless of where on the canvas it was edited.

use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::error::MaquetteError;
use crate::font::{winansi_byte, FontVariant};
use crate::image::{self, ImageData};
use crate::model::{
    Component, ComponentKind, DividerProps, FontStyle, FontWeight, LineStyle, SignatureProps,
    TextAlign, TextDecoration, TextProps, VerticalAlign,
};
use crate::text;
use crate::zorder;

/// A4 landscape in PDF points.
pub const PAGE_WIDTH_PT: f64 = 842.0;
pub const PAGE_HEIGHT_PT: f64 = 595.0;

/// Inset between a component's box and its text, per side.
const TEXT_PADDING: f64 = 8.0;
/// Baseline-to-baseline distance as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Export configuration. The defaults match the editor's export button:
/// A4 landscape, coordinates taken as-is.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub page_width: f64,
    pub page_height: f64,
    /// Subtract the minimum component `y` before drawing, top-anchoring
    /// the content on the page.
    pub normalize_top: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH_PT,
            page_height: PAGE_HEIGHT_PT,
            normalize_top: false,
        }
    }
}

/// Writes a component list as a one-page PDF.
pub struct PdfWriter {
    options: ExportOptions,
}

struct PdfObject {
    data: Vec<u8>,
}

/// Object table built up during writing. Indices are PDF object numbers;
/// slot 0 is the conventional free object, 1 the Catalog, 2 the page tree.
struct PdfBuilder {
    objects: Vec<PdfObject>,
}

impl PdfBuilder {
    fn new() -> Self {
        Self {
            objects: vec![
                PdfObject { data: vec![] }, // 0: free
                PdfObject { data: vec![] }, // 1: Catalog
                PdfObject { data: vec![] }, // 2: Pages
            ],
        }
    }

    fn push(&mut self, data: Vec<u8>) -> usize {
        self.objects.push(PdfObject { data });
        self.objects.len() - 1
    }
}

/// Font resources for the page, `/F0`-style names indexed by position.
struct FontTable {
    entries: Vec<(FontVariant, usize)>,
}

impl FontTable {
    fn index_of(&self, variant: FontVariant) -> usize {
        self.entries
            .iter()
            .position(|(v, _)| *v == variant)
            .unwrap_or(0)
    }
}

/// One embedded image: which component it belongs to and its XObject.
struct ImageSlot {
    component_id: String,
    object_id: usize,
    width_px: u32,
    height_px: u32,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render `components` to PDF bytes. The slice is a snapshot: nothing
    /// here mutates or retains it. A bad image degrades that component to
    /// a placeholder box; any other failure aborts the export.
    pub fn write(&self, components: &[Component]) -> Result<Vec<u8>, MaquetteError> {
        let ordered = zorder::render_order(components);
        let y_offset = if self.options.normalize_top && !components.is_empty() {
            components.iter().map(|c| c.y).fold(f64::INFINITY, f64::min)
        } else {
            0.0
        };

        let mut builder = PdfBuilder::new();
        let fonts = self.register_fonts(&mut builder, &ordered);
        let images = self.register_images(&mut builder, &ordered);

        let mut stream = String::new();
        self.fill_page_background(&mut stream);
        for component in &ordered {
            self.draw_component(&mut stream, component, y_offset, &fonts, &images);
        }

        let compressed = compress_to_vec_zlib(stream.as_bytes(), 6);
        let mut content_data: Vec<u8> = Vec::new();
        let _ = write!(
            content_data,
            "<< /Length {} /Filter /FlateDecode >>\nstream\n",
            compressed.len()
        );
        content_data.extend_from_slice(&compressed);
        content_data.extend_from_slice(b"\nendstream");
        let content_id = builder.push(content_data);

        let font_resources: String = fonts
            .entries
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ");
        let xobject_resources: String = images
            .iter()
            .enumerate()
            .map(|(i, slot)| format!("/Im{} {} 0 R", i, slot.object_id))
            .collect::<Vec<_>>()
            .join(" ");
        let resources = if xobject_resources.is_empty() {
            format!("/Font << {} >>", font_resources)
        } else {
            format!(
                "/Font << {} >> /XObject << {} >>",
                font_resources, xobject_resources
            )
        };

        let page_id = builder.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << {} >> >>",
                self.options.page_width, self.options.page_height, content_id, resources
            )
            .into_bytes(),
        );

        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();
        builder.objects[2].data =
            format!("<< /Type /Pages /Kids [{} 0 R] /Count 1 >>", page_id).into_bytes();

        let info_id = builder.push(
            b"<< /Producer (Maquette 0.3) /Creator (Maquette) >>".to_vec(),
        );

        log::debug!(
            "pdf export: {} components, {} fonts, {} images, {} objects",
            ordered.len(),
            fonts.entries.len(),
            images.len(),
            builder.objects.len()
        );

        Ok(self.serialize(&builder, info_id))
    }

    // ── Resources ──────────────────────────────────────────────

    /// Register a Type1 font object per face actually used on the page.
    /// Helvetica regular is always present — placeholder labels and empty
    /// pages still need a valid resource dictionary.
    fn register_fonts(&self, builder: &mut PdfBuilder, ordered: &[&Component]) -> FontTable {
        let mut used: Vec<FontVariant> = vec![FontVariant::Regular];
        for component in ordered {
            let variant = match &component.kind {
                ComponentKind::Text(t) => FontVariant::select(
                    t.font_weight == FontWeight::Bold,
                    t.font_style == FontStyle::Italic,
                ),
                ComponentKind::Signature(s) => {
                    FontVariant::select(s.font_weight == FontWeight::Bold, false)
                }
                _ => continue,
            };
            if !used.contains(&variant) {
                used.push(variant);
            }
        }
        used.sort();

        let entries = used
            .into_iter()
            .map(|variant| {
                let obj_id = builder.push(
                    format!(
                        "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                         /Encoding /WinAnsiEncoding >>",
                        variant.pdf_name()
                    )
                    .into_bytes(),
                );
                (variant, obj_id)
            })
            .collect();
        FontTable { entries }
    }

    /// Resolve and embed every image component's payload. A component whose
    /// payload fails to resolve gets no slot and degrades to a placeholder
    /// at draw time — one bad image never aborts the document.
    fn register_images(&self, builder: &mut PdfBuilder, ordered: &[&Component]) -> Vec<ImageSlot> {
        let mut slots = Vec::new();
        for component in ordered {
            if !matches!(component.kind, ComponentKind::Image(_)) || component.content.is_empty() {
                continue;
            }
            match image::resolve(&component.content) {
                Ok(resolved) => {
                    let object_id = write_image_xobject(builder, &resolved);
                    slots.push(ImageSlot {
                        component_id: component.id.clone(),
                        object_id,
                        width_px: resolved.width_px,
                        height_px: resolved.height_px,
                    });
                }
                Err(reason) => {
                    log::warn!(
                        "image component '{}' not embedded: {}",
                        component.id,
                        reason
                    );
                }
            }
        }
        slots
    }

    // ── Drawing ────────────────────────────────────────────────

    /// The page is filled opaque white before any component is drawn, so
    /// transparent component backgrounds render correctly regardless of
    /// the editor's own canvas chrome.
    fn fill_page_background(&self, stream: &mut String) {
        let _ = write!(
            stream,
            "1 1 1 rg\n0 0 {:.2} {:.2} re\nf\n",
            self.options.page_width, self.options.page_height
        );
    }

    fn draw_component(
        &self,
        stream: &mut String,
        component: &Component,
        y_offset: f64,
        fonts: &FontTable,
        images: &[ImageSlot],
    ) {
        let (w, h) = component.size();
        let x = component.x;
        let y = self.options.page_height - (component.y - y_offset) - h;

        if let Some(bg) = hex_rgb(&component.background_color) {
            let _ = write!(
                stream,
                "q\n{:.3} {:.3} {:.3} rg\n{:.2} {:.2} {:.2} {:.2} re\nf\nQ\n",
                bg.0, bg.1, bg.2, x, y, w, h
            );
        }

        match &component.kind {
            ComponentKind::Text(props) => {
                self.draw_text_box(stream, component, props, x, y, w, h, fonts)
            }
            ComponentKind::Image(_) => {
                self.draw_image_box(stream, component, x, y, w, h, fonts, images)
            }
            ComponentKind::Divider(props) => draw_divider(stream, props, x, y, w, h),
            ComponentKind::Signature(props) => {
                self.draw_signature(stream, component, props, x, y, w, h, fonts)
            }
        }
    }

    /// Styled, wrapped text inside the component's box.
    #[allow(clippy::too_many_arguments)]
    fn draw_text_box(
        &self,
        stream: &mut String,
        component: &Component,
        props: &TextProps,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fonts: &FontTable,
    ) {
        let variant = FontVariant::select(
            props.font_weight == FontWeight::Bold,
            props.font_style == FontStyle::Italic,
        );
        let font_index = fonts.index_of(variant);
        let size = props.font_size;
        let max_width = (w - 2.0 * TEXT_PADDING).max(0.0);
        let lines = text::wrap(&component.content, max_width, variant.metrics(), size);
        let line_height = size * LINE_HEIGHT;
        let count = lines.len() as f64;

        // First baseline, measured from the box's bottom edge in PDF space.
        let first_baseline = match props.vertical_align {
            VerticalAlign::Top => y + h - TEXT_PADDING - size,
            VerticalAlign::Middle => y + h / 2.0 + (count * line_height) / 2.0 - size,
            VerticalAlign::Bottom => y + TEXT_PADDING + (count - 1.0) * line_height,
        };

        let color = hex_rgb(&component.text_color).unwrap_or((0.0, 0.0, 0.0));

        for (i, line) in lines.iter().enumerate() {
            if line.text.is_empty() {
                continue;
            }
            let baseline = first_baseline - i as f64 * line_height;
            // Justify renders flush-left: inter-word spacing adjustment is
            // deliberately not implemented.
            let line_x = match props.text_align {
                TextAlign::Left | TextAlign::Justify => x + TEXT_PADDING,
                TextAlign::Center => x + (w - line.width) / 2.0,
                TextAlign::Right => x + w - TEXT_PADDING - line.width,
            };
            show_text(stream, font_index, size, color, line_x, baseline, &line.text);
            match props.text_decoration {
                TextDecoration::Underline => {
                    stroke_segment(stream, color, line_x, baseline - 2.0, line.width)
                }
                TextDecoration::LineThrough => {
                    stroke_segment(stream, color, line_x, baseline + size * 0.28, line.width)
                }
                TextDecoration::None => {}
            }
        }
    }

    /// Aspect-fit image, or a labeled placeholder when the payload is
    /// missing or failed to decode.
    #[allow(clippy::too_many_arguments)]
    fn draw_image_box(
        &self,
        stream: &mut String,
        component: &Component,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fonts: &FontTable,
        images: &[ImageSlot],
    ) {
        let slot = images
            .iter()
            .enumerate()
            .find(|(_, s)| s.component_id == component.id);

        match slot {
            Some((index, slot)) => {
                let (dw, dh, dx, dy) = image::aspect_fit(slot.width_px, slot.height_px, w, h);
                let _ = write!(
                    stream,
                    "q\n{:.4} 0 0 {:.4} {:.2} {:.2} cm\n/Im{} Do\nQ\n",
                    dw,
                    dh,
                    x + dx,
                    y + dy,
                    index
                );
            }
            None => {
                let label = if component.content.is_empty() {
                    "Sem imagem"
                } else {
                    "Imagem não carregada"
                };
                let _ = write!(
                    stream,
                    "q\n0.267 0.267 0.267 rg\n{:.2} {:.2} {:.2} {:.2} re\nf\nQ\n",
                    x, y, w, h
                );
                show_text(
                    stream,
                    fonts.index_of(FontVariant::Regular),
                    12.0,
                    (1.0, 1.0, 1.0),
                    x + TEXT_PADDING,
                    y + h / 2.0 - 7.0,
                    label,
                );
            }
        }
    }

    /// A signature field: the rule, with its caption beneath.
    #[allow(clippy::too_many_arguments)]
    fn draw_signature(
        &self,
        stream: &mut String,
        component: &Component,
        props: &SignatureProps,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fonts: &FontTable,
    ) {
        let available = (w - 2.0 * TEXT_PADDING).max(0.0);
        let rule_length = props.line_width.clamp(0.0, available);
        let rule_y = y + h / 2.0;
        let rule_x = match props.text_align {
            TextAlign::Left | TextAlign::Justify => x + TEXT_PADDING,
            TextAlign::Center => x + (w - rule_length) / 2.0,
            TextAlign::Right => x + w - TEXT_PADDING - rule_length,
        };
        let rule_color = hex_rgb(&props.line_color).unwrap_or((0.0, 0.0, 0.0));
        let _ = write!(
            stream,
            "q\n{:.3} {:.3} {:.3} RG\n1 w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
            rule_color.0,
            rule_color.1,
            rule_color.2,
            rule_x,
            rule_y,
            rule_x + rule_length,
            rule_y
        );

        if props.signature_text.is_empty() {
            return;
        }
        let variant = FontVariant::select(props.font_weight == FontWeight::Bold, false);
        let size = props.font_size;
        let text_width = variant.metrics().measure(&props.signature_text, size);
        let text_x = match props.text_align {
            TextAlign::Left | TextAlign::Justify => x + TEXT_PADDING,
            TextAlign::Center => x + (w - text_width) / 2.0,
            TextAlign::Right => x + w - TEXT_PADDING - text_width,
        };
        let color = hex_rgb(&component.text_color).unwrap_or((0.0, 0.0, 0.0));
        show_text(
            stream,
            fonts.index_of(variant),
            size,
            color,
            text_x,
            rule_y - 4.0 - size,
            &props.signature_text,
        );
    }

    // ── Serialization ──────────────────────────────────────────

    fn serialize(&self, builder: &PdfBuilder, info_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, object) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let _ = write!(output, "{} 0 obj\n", i);
            output.extend_from_slice(&object.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            builder.objects.len(),
            info_id,
            xref_offset
        );

        output
    }
}

/// Horizontal rule of a divider component: a stroked line across the box's
/// vertical center, dashed or dotted via the PDF dash-pattern operator.
fn draw_divider(stream: &mut String, props: &DividerProps, x: f64, y: f64, w: f64, h: f64) {
    let color = hex_rgb(&props.line_color).unwrap_or((0.0, 0.0, 0.0));
    let center = y + h / 2.0;
    let _ = write!(
        stream,
        "q\n{:.3} {:.3} {:.3} RG\n{:.2} w\n",
        color.0, color.1, color.2, props.thickness
    );
    match props.line_style {
        LineStyle::Solid => {}
        LineStyle::Dashed => {
            let _ = write!(stream, "[6 3] 0 d\n");
        }
        LineStyle::Dotted => {
            let _ = write!(stream, "[1 2] 0 d\n1 J\n");
        }
    }
    let _ = write!(
        stream,
        "{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
        x,
        center,
        x + w,
        center
    );
}

/// Emit one positioned text run.
fn show_text(
    stream: &mut String,
    font_index: usize,
    size: f64,
    color: (f64, f64, f64),
    x: f64,
    y: f64,
    content: &str,
) {
    let _ = write!(
        stream,
        "BT\n{:.3} {:.3} {:.3} rg\n/F{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
        color.0,
        color.1,
        color.2,
        font_index,
        size,
        x,
        y,
        encode_winansi(content)
    );
}

/// Stroke a horizontal segment (used for text decorations).
fn stroke_segment(stream: &mut String, color: (f64, f64, f64), x: f64, y: f64, length: f64) {
    let _ = write!(
        stream,
        "q\n{:.3} {:.3} {:.3} RG\n0.8 w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
        color.0,
        color.1,
        color.2,
        x,
        y,
        x + length,
        y
    );
}

/// Encode text as a WinAnsi PDF string literal: delimiters escaped,
/// non-ASCII bytes as octal escapes, unmapped characters as `?`.
fn encode_winansi(content: &str) -> String {
    let mut out = String::new();
    for ch in content.chars() {
        let byte = winansi_byte(ch).unwrap_or(b'?');
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            0x20..=0x7E => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{:03o}", byte);
            }
        }
    }
    out
}

/// Parse `#rgb` / `#rrggbb` (leading `#` optional) into unit-range RGB.
/// `transparent`, empty, and malformed values are `None` — the caller
/// skips the fill or falls back to black, depending on the field.
fn hex_rgb(value: &str) -> Option<(f64, f64, f64)> {
    let hex = value.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let n = u32::from_str_radix(&expanded, 16).ok()?;
    Some((
        ((n >> 16) & 0xFF) as f64 / 255.0,
        ((n >> 8) & 0xFF) as f64 / 255.0,
        (n & 0xFF) as f64 / 255.0,
    ))
}

/// Write an image as one or two XObjects (SMask first when there is an
/// alpha plane). Returns the main XObject's id.
fn write_image_xobject(builder: &mut PdfBuilder, resolved: &image::ResolvedImage) -> usize {
    match &resolved.data {
        ImageData::Jpeg { bytes, gray } => {
            let mut data: Vec<u8> = Vec::new();
            let _ = write!(
                data,
                "<< /Type /XObject /Subtype /Image /Width {} /Height {} \
                 /ColorSpace {} /BitsPerComponent 8 /Filter /DCTDecode \
                 /Length {} >>\nstream\n",
                resolved.width_px,
                resolved.height_px,
                if *gray { "/DeviceGray" } else { "/DeviceRGB" },
                bytes.len()
            );
            data.extend_from_slice(bytes);
            data.extend_from_slice(b"\nendstream");
            builder.push(data)
        }
        ImageData::Rgb { pixels, alpha } => {
            let smask_id = alpha.as_ref().map(|plane| {
                let compressed = compress_to_vec_zlib(plane, 6);
                let mut data: Vec<u8> = Vec::new();
                let _ = write!(
                    data,
                    "<< /Type /XObject /Subtype /Image /Width {} /Height {} \
                     /ColorSpace /DeviceGray /BitsPerComponent 8 \
                     /Filter /FlateDecode /Length {} >>\nstream\n",
                    resolved.width_px,
                    resolved.height_px,
                    compressed.len()
                );
                data.extend_from_slice(&compressed);
                data.extend_from_slice(b"\nendstream");
                builder.push(data)
            });

            let compressed = compress_to_vec_zlib(pixels, 6);
            let smask_ref = smask_id
                .map(|id| format!(" /SMask {} 0 R", id))
                .unwrap_or_default();
            let mut data: Vec<u8> = Vec::new();
            let _ = write!(
                data,
                "<< /Type /XObject /Subtype /Image /Width {} /Height {} \
                 /ColorSpace /DeviceRGB /BitsPerComponent 8 \
                 /Filter /FlateDecode /Length {}{} >>\nstream\n",
                resolved.width_px,
                resolved.height_px,
                compressed.len(),
                smask_ref
            );
            data.extend_from_slice(&compressed);
            data.extend_from_slice(b"\nendstream");
            builder.push(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::factory;

    fn place(tag: &str, n: i32) -> Component {
        factory::create(tag, format!("{}-{}", tag, n), 40.0, 40.0, n).unwrap()
    }

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).to_string()
    }

    #[test]
    fn test_empty_document_is_a_valid_pdf() {
        let bytes = PdfWriter::new().write(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
    }

    #[test]
    fn test_fonts_registered_only_for_used_variants() {
        let mut title = place("title", 1); // bold
        title.content = "Relatório".to_string();
        let bytes = PdfWriter::new().write(&[title]).unwrap();
        let text = as_text(&bytes);
        assert!(text.contains("/Helvetica-Bold"), "bold face used by the title");
        assert!(text.contains("/BaseFont /Helvetica"), "regular is always present");
        assert!(!text.contains("Helvetica-Oblique"), "no italic anywhere");
    }

    #[test]
    fn test_missing_image_payload_draws_placeholder() {
        let comp = place("image", 1);
        let bytes = PdfWriter::new().write(&[comp]).unwrap();
        let text = as_text(&bytes);
        assert!(!text.contains("/XObject"), "nothing embedded for an empty payload");
    }

    #[test]
    fn test_broken_image_payload_does_not_abort() {
        let mut comp = place("image", 1);
        comp.content = "data:image/png;base64,not-really-base64!!!".to_string();
        let bytes = PdfWriter::new().write(&[comp]).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    fn png_data_uri() -> String {
        use base64::Engine;
        let img = ::image::RgbaImage::from_pixel(2, 2, ::image::Rgba([255, 0, 0, 255]));
        let mut buf = Vec::new();
        let encoder = ::image::codecs::png::PngEncoder::new(&mut buf);
        ::image::ImageEncoder::write_image(encoder, img.as_raw(), 2, 2, ::image::ColorType::Rgba8)
            .unwrap();
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&buf)
        )
    }

    #[test]
    fn test_png_image_embeds_as_xobject() {
        let mut comp = place("image", 1);
        comp.content = png_data_uri();
        let bytes = PdfWriter::new().write(&[comp]).unwrap();
        let text = as_text(&bytes);
        assert!(text.contains("/XObject"), "image resource dict present");
        assert!(text.contains("/Im0"), "first image is /Im0");
        assert!(text.contains("/DCTDecode") || text.contains("/FlateDecode"));
    }

    #[test]
    fn test_hex_rgb_parsing() {
        assert_eq!(hex_rgb("#000"), Some((0.0, 0.0, 0.0)));
        assert_eq!(hex_rgb("#ffffff"), Some((1.0, 1.0, 1.0)));
        let (r, g, b) = hex_rgb("2563eb").unwrap();
        assert!((r - 37.0 / 255.0).abs() < 1e-9);
        assert!((g - 99.0 / 255.0).abs() < 1e-9);
        assert!((b - 235.0 / 255.0).abs() < 1e-9);
        assert_eq!(hex_rgb("transparent"), None);
        assert_eq!(hex_rgb(""), None);
    }

    #[test]
    fn test_encode_winansi_escapes_and_octal() {
        assert_eq!(encode_winansi("a(b)c"), "a\\(b\\)c");
        assert_eq!(encode_winansi("back\\slash"), "back\\\\slash");
        assert_eq!(encode_winansi("é"), "\\351");
        assert_eq!(encode_winansi("語"), "?");
    }
}
