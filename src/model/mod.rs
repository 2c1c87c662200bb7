//! # Component Model
//!
//! The canonical representation of items placed on the page. A component is
//! a common record (identity, geometry, stacking, colors, content) plus a
//! closed, tagged kind with the fields that only make sense for that
//! variant. All drawing and mutation logic dispatches by exhaustive match
//! on the kind — there are no "is this a text component" predicates.
//!
//! The serde layer mirrors the editor's interchange format: camelCase
//! fields and an internal `"type"` tag, so a serialized component list is
//! exactly what the JSON export button downloads.

pub mod factory;

use serde::{Deserialize, Serialize};

/// Layout fallback when a component declares no explicit width.
pub const FALLBACK_WIDTH: f64 = 120.0;
/// Layout fallback when a component declares no explicit height.
pub const FALLBACK_HEIGHT: f64 = 32.0;

/// A placed item on the document page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    #[serde(flatten)]
    pub kind: ComponentKind,
    /// Free-form payload: literal text for text variants, a data URL or
    /// reference for image variants.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub selected: bool,
    /// Top-left position in page-space units.
    pub x: f64,
    pub y: f64,
    /// Stacking order; higher paints later. Values need not be contiguous.
    pub z_index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    /// Comma-list property, populated only through the property panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

fn default_background_color() -> String {
    "transparent".to_string()
}

fn default_text_color() -> String {
    "#000".to_string()
}

impl Component {
    /// Declared size, or the 120×32 fallback used for layout and clamping.
    pub fn size(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(FALLBACK_WIDTH),
            self.height.unwrap_or(FALLBACK_HEIGHT),
        )
    }

    /// The stable tag for this component's variant.
    pub fn type_tag(&self) -> &'static str {
        match self.kind {
            ComponentKind::Text(_) => "text",
            ComponentKind::Image(_) => "image",
            ComponentKind::Divider(_) => "divider",
            ComponentKind::Signature(_) => "signature",
        }
    }
}

/// The variant-specific half of a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentKind {
    Text(TextProps),
    Image(ImageProps),
    Divider(DividerProps),
    Signature(SignatureProps),
}

/// Typography fields of a text component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub font_style: FontStyle,
    #[serde(default)]
    pub text_decoration: TextDecoration,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default)]
    pub vertical_align: VerticalAlign,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerProps {
    pub thickness: f64,
    #[serde(default)]
    pub line_style: LineStyle,
    pub line_color: String,
}

/// A signature field: a rule with a caption rendered beneath it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureProps {
    /// Length of the signature rule in page units (not a stroke width).
    pub line_width: f64,
    pub line_color: String,
    pub signature_text: String,
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_falls_back_to_120_by_32() {
        let comp = factory::create("text", "text-1".to_string(), 0.0, 0.0, 1).unwrap();
        assert_eq!(comp.size(), (120.0, 32.0));
    }

    #[test]
    fn test_serializes_with_type_tag_and_camel_case() {
        let comp = factory::create("title", "title-1".to_string(), 10.0, 20.0, 3).unwrap();
        let json = serde_json::to_value(&comp).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["zIndex"], 3);
        assert_eq!(json["fontWeight"], "bold");
        assert_eq!(json["backgroundColor"], "transparent");
    }

    #[test]
    fn test_line_through_uses_css_spelling() {
        let v = serde_json::to_value(TextDecoration::LineThrough).unwrap();
        assert_eq!(v, "line-through");
    }

    #[test]
    fn test_round_trips_through_json() {
        let comp = factory::create("signature", "signature-1".to_string(), 5.0, 6.0, 2).unwrap();
        let json = serde_json::to_string(&comp).unwrap();
        let back: Component = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "signature-1");
        match back.kind {
            ComponentKind::Signature(ref s) => {
                assert_eq!(s.signature_text, "Nome:");
                assert_eq!(s.line_width, 200.0);
            }
            _ => panic!("kind should survive the round trip"),
        }
    }

    #[test]
    fn test_unknown_type_tag_fails_to_parse() {
        let json = r#"{"id":"x-1","type":"carousel","x":0,"y":0,"zIndex":1}"#;
        assert!(serde_json::from_str::<Component>(json).is_err());
    }
}
