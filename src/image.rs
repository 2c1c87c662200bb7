//! # Image Resolution and Decoding
//!
//! Turns an image component's `content` field (a data URI, raw base64, or a
//! file path) into pixel data the PDF writer can embed. JPEG bytes pass
//! through untouched — PDF supports DCTDecode natively — while PNG decodes
//! to an RGB plane plus a separate alpha plane for SMask transparency.
//!
//! Decode failures are reported as plain strings; the export pipeline
//! catches them per component and draws a placeholder instead of failing
//! the whole document.

use std::io::Cursor;

/// A resolved image, ready for XObject embedding.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub data: ImageData,
    pub width_px: u32,
    pub height_px: u32,
}

/// Pixel data in the shape the PDF writer consumes.
#[derive(Debug, Clone)]
pub enum ImageData {
    /// Raw JPEG bytes, embedded directly with DCTDecode.
    Jpeg {
        bytes: Vec<u8>,
        gray: bool,
    },
    /// Decoded RGB pixels plus an optional 8-bit alpha plane.
    Rgb {
        /// width × height × 3 bytes.
        pixels: Vec<u8>,
        /// width × height bytes; `None` when fully opaque.
        alpha: Option<Vec<u8>>,
    },
}

/// Resolve an image source to embeddable pixel data.
///
/// Accepted forms, in order of detection: `data:image/...;base64,` URIs,
/// explicit file paths (`/`, `./`, `../` prefixes), and raw base64.
pub fn resolve(src: &str) -> Result<ResolvedImage, String> {
    let bytes = source_bytes(src)?;
    decode(&bytes)
}

fn source_bytes(src: &str) -> Result<Vec<u8>, String> {
    if src.starts_with("data:image/") {
        let comma = src
            .find(',')
            .ok_or_else(|| "invalid data URI: missing comma".to_string())?;
        return decode_base64(&src[comma + 1..]);
    }

    // Only explicit path prefixes count as paths; base64 strings contain '/'
    // and must not be mistaken for them.
    if src.starts_with('/') || src.starts_with("./") || src.starts_with("../") {
        #[cfg(not(target_arch = "wasm32"))]
        {
            return std::fs::read(src).map_err(|e| format!("failed to read '{}': {}", src, e));
        }
        #[cfg(target_arch = "wasm32")]
        {
            return Err(format!(
                "file path images are not available in wasm: '{}'",
                src
            ));
        }
    }

    decode_base64(src)
}

fn decode_base64(input: &str) -> Result<Vec<u8>, String> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(input.trim())
        .map_err(|e| format!("base64 decode error: {}", e))
}

fn decode(bytes: &[u8]) -> Result<ResolvedImage, String> {
    if bytes.len() < 4 {
        return Err("image data too short".to_string());
    }
    if bytes.starts_with(&[0xFF, 0xD8]) {
        decode_jpeg(bytes)
    } else if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        decode_png(bytes)
    } else {
        Err("unsupported image format (expected JPEG or PNG)".to_string())
    }
}

/// JPEG: dimensions and component count only; the bytes pass through.
fn decode_jpeg(bytes: &[u8]) -> Result<ResolvedImage, String> {
    let reader = image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| format!("jpeg detection error: {}", e))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| format!("failed to read jpeg dimensions: {}", e))?;

    Ok(ResolvedImage {
        data: ImageData::Jpeg {
            bytes: bytes.to_vec(),
            gray: jpeg_is_grayscale(bytes),
        },
        width_px: width,
        height_px: height,
    })
}

/// Walk the JPEG marker stream to the SOF segment and read the component
/// count: 1 component means DeviceGray, anything else DeviceRGB.
fn jpeg_is_grayscale(bytes: &[u8]) -> bool {
    let mut i = 2; // past SOI
    while i + 1 < bytes.len() {
        if bytes[i] != 0xFF {
            break;
        }
        let marker = bytes[i + 1];
        let is_sof = matches!(marker, 0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF);
        if is_sof {
            // length(2) precision(1) height(2) width(2) components(1)
            return i + 9 < bytes.len() && bytes[i + 9] == 1;
        }
        if i + 3 < bytes.len() {
            let seg_len = u16::from_be_bytes([bytes[i + 2], bytes[i + 3]]) as usize;
            i += 2 + seg_len;
        } else {
            break;
        }
    }
    false
}

/// PNG: decode to RGBA, split into an RGB plane and an alpha plane.
fn decode_png(bytes: &[u8]) -> Result<ResolvedImage, String> {
    let reader = image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| format!("png detection error: {}", e))?;
    let decoded = reader
        .decode()
        .map_err(|e| format!("failed to decode png: {}", e))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let count = (width * height) as usize;

    let mut pixels = Vec::with_capacity(count * 3);
    let mut alpha = Vec::with_capacity(count);
    let mut translucent = false;
    for px in rgba.pixels() {
        pixels.extend_from_slice(&px.0[..3]);
        alpha.push(px.0[3]);
        if px.0[3] != 255 {
            translucent = true;
        }
    }

    Ok(ResolvedImage {
        data: ImageData::Rgb {
            pixels,
            alpha: translucent.then_some(alpha),
        },
        width_px: width,
        height_px: height,
    })
}

/// Aspect-fit (`object-fit: contain`): the largest size preserving the
/// image's aspect ratio inside `box_w × box_h`, centered. Returns the draw
/// size and the offsets from the box origin.
pub fn aspect_fit(img_w: u32, img_h: u32, box_w: f64, box_h: f64) -> (f64, f64, f64, f64) {
    if img_w == 0 || img_h == 0 || box_w <= 0.0 || box_h <= 0.0 {
        return (box_w.max(0.0), box_h.max(0.0), 0.0, 0.0);
    }
    let image_ratio = img_w as f64 / img_h as f64;
    let box_ratio = box_w / box_h;

    let (w, h) = if image_ratio > box_ratio {
        // Wider than the box: width limits.
        (box_w, box_w / image_ratio)
    } else {
        (box_h * image_ratio, box_h)
    };
    (w, h, (box_w - w) / 2.0, (box_h - h) / 2.0)
}
