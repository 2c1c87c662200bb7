//! Component factory: a sidebar tag plus a placement becomes a fully
//! defaulted component record.
//!
//! The tag set is the sidebar's, which is wider than the kind set — the
//! three heading-ish tags (`title`, `subtitle`, `paragraph`) are text
//! components with different seed styling. Unknown tags yield `None`; the
//! store treats that as a silent no-op since tags originate from a fixed
//! set of drag sources.

use super::{
    Component, ComponentKind, DividerProps, FontStyle, FontWeight, ImageProps, SignatureProps,
    TextAlign, TextDecoration, TextProps, VerticalAlign,
};

/// Build a component of the given type at (`x`, `y`) with stacking `z_index`.
pub fn create(tag: &str, id: String, x: f64, y: f64, z_index: i32) -> Option<Component> {
    let (kind, content, width, height) = match tag {
        "text" => (
            ComponentKind::Text(TextProps {
                font_size: 16.0,
                font_weight: FontWeight::Normal,
                font_style: FontStyle::Normal,
                text_decoration: TextDecoration::None,
                text_align: TextAlign::Left,
                vertical_align: VerticalAlign::Top,
            }),
            String::new(),
            None,
            None,
        ),
        "title" => (
            ComponentKind::Text(TextProps {
                font_size: 24.0,
                font_weight: FontWeight::Bold,
                font_style: FontStyle::Normal,
                text_decoration: TextDecoration::None,
                text_align: TextAlign::Left,
                vertical_align: VerticalAlign::Top,
            }),
            "Título".to_string(),
            Some(200.0),
            Some(32.0),
        ),
        "subtitle" => (
            ComponentKind::Text(TextProps {
                font_size: 18.0,
                font_weight: FontWeight::Bold,
                font_style: FontStyle::Normal,
                text_decoration: TextDecoration::None,
                text_align: TextAlign::Left,
                vertical_align: VerticalAlign::Top,
            }),
            "Subtítulo".to_string(),
            Some(180.0),
            Some(28.0),
        ),
        "paragraph" => (
            ComponentKind::Text(TextProps {
                font_size: 16.0,
                font_weight: FontWeight::Normal,
                font_style: FontStyle::Normal,
                text_decoration: TextDecoration::None,
                text_align: TextAlign::Justify,
                vertical_align: VerticalAlign::Top,
            }),
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
             tempor incididunt ut labore et dolore magna aliqua."
                .to_string(),
            Some(300.0),
            Some(60.0),
        ),
        "image" => (
            ComponentKind::Image(ImageProps { alt: String::new() }),
            String::new(),
            None,
            None,
        ),
        "divider" => (
            ComponentKind::Divider(DividerProps {
                thickness: 2.0,
                line_style: Default::default(),
                line_color: "#000".to_string(),
            }),
            String::new(),
            Some(300.0),
            Some(4.0),
        ),
        "signature" => (
            ComponentKind::Signature(SignatureProps {
                line_width: 200.0,
                line_color: "#000".to_string(),
                signature_text: "Nome:".to_string(),
                font_size: 12.0,
                font_weight: FontWeight::Normal,
                text_align: TextAlign::Center,
            }),
            String::new(),
            Some(250.0),
            Some(40.0),
        ),
        _ => return None,
    };

    Some(Component {
        id,
        kind,
        content,
        selected: false,
        x,
        y,
        z_index,
        width,
        height,
        background_color: "transparent".to_string(),
        text_color: "#000".to_string(),
        options: None,
    })
}

/// The default font size used when a panel edit fails to parse.
pub fn fallback_font_size(kind: &ComponentKind) -> f64 {
    match kind {
        ComponentKind::Signature(_) => 12.0,
        _ => 16.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_returns_none() {
        assert!(create("carousel", "carousel-1".to_string(), 0.0, 0.0, 1).is_none());
    }

    #[test]
    fn test_text_has_no_declared_size() {
        let comp = create("text", "text-1".to_string(), 0.0, 0.0, 1).unwrap();
        assert!(comp.width.is_none());
        assert!(comp.height.is_none());
    }

    #[test]
    fn test_paragraph_defaults() {
        let comp = create("paragraph", "paragraph-1".to_string(), 4.0, 8.0, 2).unwrap();
        assert_eq!(comp.width, Some(300.0));
        assert_eq!(comp.height, Some(60.0));
        assert!(comp.content.starts_with("Lorem ipsum"));
        match comp.kind {
            ComponentKind::Text(ref t) => {
                assert_eq!(t.text_align, TextAlign::Justify);
                assert_eq!(t.font_size, 16.0);
            }
            _ => panic!("paragraph should be a text component"),
        }
    }

    #[test]
    fn test_divider_defaults() {
        let comp = create("divider", "divider-1".to_string(), 0.0, 0.0, 1).unwrap();
        match comp.kind {
            ComponentKind::Divider(ref d) => {
                assert_eq!(d.thickness, 2.0);
                assert_eq!(d.line_color, "#000");
            }
            _ => panic!("expected a divider"),
        }
        assert_eq!(comp.size(), (300.0, 4.0));
    }

    #[test]
    fn test_placement_is_recorded_verbatim() {
        let comp = create("title", "title-9".to_string(), 33.0, 44.0, 7).unwrap();
        assert_eq!((comp.x, comp.y, comp.z_index), (33.0, 44.0, 7));
        assert!(!comp.selected);
    }
}
