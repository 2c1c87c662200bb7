//! # Font Selection and Measurement
//!
//! The editor renders everything in the Helvetica family, so the PDF output
//! uses the four standard Type1 faces — no embedding, no subsetting. A face
//! is selected by testing the bold and italic flags independently, giving
//! four discrete combinations rather than a continuous weight axis.
//!
//! Measurement uses the Adobe AFM advance widths (per-1000-em units). The
//! oblique faces share the upright widths, exactly as the AFM files do.

pub mod metrics;

pub use metrics::FontMetrics;

/// One of the four standard Helvetica faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl FontVariant {
    /// Select a face from the two style axes.
    pub fn select(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontVariant::Regular,
            (true, false) => FontVariant::Bold,
            (false, true) => FontVariant::Oblique,
            (true, true) => FontVariant::BoldOblique,
        }
    }

    /// The PDF BaseFont name for this face.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
            FontVariant::Oblique => "Helvetica-Oblique",
            FontVariant::BoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Advance-width metrics for this face.
    pub fn metrics(&self) -> &'static FontMetrics {
        match self {
            FontVariant::Regular | FontVariant::Oblique => &metrics::HELVETICA,
            FontVariant::Bold | FontVariant::BoldOblique => &metrics::HELVETICA_BOLD,
        }
    }
}

/// Map a Unicode codepoint to a WinAnsiEncoding byte value.
///
/// WinAnsiEncoding is based on Windows-1252. Codepoints in 0x20..=0x7E and
/// 0xA0..=0xFF map directly; the 0x80..=0x9F range holds special mappings
/// for smart quotes, bullets, dashes, and similar punctuation.
pub fn winansi_byte(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
        return Some(cp as u8);
    }
    match cp {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x017D => Some(0x8E), // Latin capital letter Z with caron
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x017E => Some(0x9E), // Latin small letter z with caron
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}
