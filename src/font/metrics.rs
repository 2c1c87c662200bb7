//! Advance-width tables for the standard Helvetica faces.
//!
//! Widths come from the Adobe AFM files, expressed in 1/1000ths of the font
//! size, indexed by WinAnsiEncoding byte value from 0x20 upward. Slots that
//! WinAnsi leaves undefined (0x7F, 0x81, 0x8D, 0x8F, 0x90, 0x9D) hold 0 and
//! are never produced by [`super::winansi_byte`].

/// AFM advance widths for one face, covering WinAnsi codes 0x20..=0xFF.
pub struct FontMetrics {
    widths: [u16; 224],
}

impl FontMetrics {
    /// Advance width for a WinAnsi byte, in 1/1000 em.
    pub fn advance(&self, code: u8) -> u16 {
        if code < 0x20 {
            0
        } else {
            self.widths[(code - 0x20) as usize]
        }
    }

    /// Width of a single character at `font_size` points.
    ///
    /// Characters outside WinAnsi measure as `?`, which is also what the
    /// PDF writer substitutes when encoding them.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        let code = super::winansi_byte(ch).unwrap_or(b'?');
        self.advance(code) as f64 * font_size / 1000.0
    }

    /// Width of a string at `font_size` points.
    pub fn measure(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// Helvetica (shared by Helvetica-Oblique).
pub static HELVETICA: FontMetrics = FontMetrics {
    widths: [
        // 0x20..=0x2F: space ! " # $ % & ' ( ) * + , - . /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0x30..=0x3F: 0-9 : ; < = > ?
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
        // 0x40..=0x4F: @ A-O
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
        // 0x50..=0x5F: P-Z [ \ ] ^ _
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
        // 0x60..=0x6F: ` a-o
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
        // 0x70..=0x7F: p-z { | } ~ (0x7F undefined)
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
        // 0x80..=0x8F: € _ ‚ ƒ „ … † ‡ ˆ ‰ Š ‹ Œ _ Ž _
        556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
        // 0x90..=0x9F: _ ‘ ’ “ ” • – — ˜ ™ š › œ _ ž Ÿ
        0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
        // 0xA0..=0xAF: nbsp ¡ ¢ £ ¤ ¥ ¦ § ¨ © ª « ¬ shy ® ¯
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // 0xB0..=0xBF: ° ± ² ³ ´ µ ¶ · ¸ ¹ º » ¼ ½ ¾ ¿
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // 0xC0..=0xCF: À-Ï
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // 0xD0..=0xDF: Ð-ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // 0xE0..=0xEF: à-ï
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        // 0xF0..=0xFF: ð-ÿ
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
};

/// Helvetica-Bold (shared by Helvetica-BoldOblique).
pub static HELVETICA_BOLD: FontMetrics = FontMetrics {
    widths: [
        // 0x20..=0x2F
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0x30..=0x3F
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
        // 0x40..=0x4F
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
        // 0x50..=0x5F
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
        // 0x60..=0x6F
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
        // 0x70..=0x7F
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
        // 0x80..=0x8F
        556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
        // 0x90..=0x9F
        0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
        // 0xA0..=0xAF
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // 0xB0..=0xBF
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // 0xC0..=0xCF
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // 0xD0..=0xDF
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // 0xE0..=0xEF
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        // 0xF0..=0xFF
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
};
