//! # Component Store
//!
//! Canonical, consistent mutation of the document model: an ordered list of
//! placed components plus the exclusive selection. Every operation leaves
//! the invariants intact — at most one component selected, declared sizes
//! inside their configured bounds, positions keeping the full box on-page.
//!
//! Property changes are a closed command set ([`PropertyUpdate`]) resolved
//! by exhaustive matching on the component's kind; a command aimed at a
//! variant that doesn't carry the field is a no-op, as is any operation on
//! an id that is no longer in the document. The property panel's raw string
//! path enters through [`CanvasStore::update_field`], which parses and
//! clamps numeric input and falls back to a type default when parsing
//! fails, so a size or font field can never end up non-numeric.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::MaquetteError;
use crate::geom::{clamp, clamp_origin};
use crate::model::factory;
use crate::model::{
    Component, ComponentKind, FontStyle, FontWeight, LineStyle, TextAlign, TextDecoration,
    VerticalAlign, FALLBACK_HEIGHT, FALLBACK_WIDTH,
};
use crate::page::PageBounds;
use crate::zorder;

/// Size bounds enforced on every width/height mutation.
pub const MIN_WIDTH: f64 = 50.0;
pub const MAX_WIDTH: f64 = 800.0;
pub const MIN_HEIGHT: f64 = 20.0;
pub const MAX_HEIGHT: f64 = 600.0;

/// Font size bounds enforced on every font-size mutation.
pub const MIN_FONT_SIZE: f64 = 8.0;
pub const MAX_FONT_SIZE: f64 = 100.0;

/// The document model: placed components in insertion order, plus the
/// currently selected component, if any.
#[derive(Debug, Clone, Default)]
pub struct CanvasStore {
    components: Vec<Component>,
    selected_id: Option<String>,
    page: PageBounds,
}

/// A typed property-change command. One variant per settable field; the
/// store dispatches on (command, component kind) exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyUpdate {
    Content(String),
    BackgroundColor(String),
    TextColor(String),
    Width(f64),
    Height(f64),
    /// Comma-separated list; parsed into trimmed, non-empty entries.
    Options(String),
    FontSize(f64),
    FontWeight(FontWeight),
    FontStyle(FontStyle),
    TextDecoration(TextDecoration),
    TextAlign(TextAlign),
    VerticalAlign(VerticalAlign),
    Thickness(f64),
    LineStyle(LineStyle),
    LineColor(String),
    LineWidth(f64),
    SignatureText(String),
    Alt(String),
}

/// The closed set of fields the property panel can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    Content,
    BackgroundColor,
    TextColor,
    Width,
    Height,
    Options,
    FontSize,
    FontWeight,
    FontStyle,
    TextDecoration,
    TextAlign,
    VerticalAlign,
    Thickness,
    LineStyle,
    LineColor,
    LineWidth,
    SignatureText,
    Alt,
}

/// Split a comma-separated value into trimmed, non-empty entries.
pub fn parse_options(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|option| option.trim().to_string())
        .filter(|option| !option.is_empty())
        .collect()
}

impl CanvasStore {
    /// An empty document on the default A4 landscape page.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty document on a custom fixed page.
    pub fn with_page(page: PageBounds) -> Self {
        Self {
            components: Vec::new(),
            selected_id: None,
            page,
        }
    }

    pub fn page(&self) -> PageBounds {
        self.page
    }

    /// The component list in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The component list in paint order (z-index ascending).
    pub fn render_order(&self) -> Vec<&Component> {
        zorder::render_order(&self.components)
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected(&self) -> Option<&Component> {
        self.selected_id.as_deref().and_then(|id| self.get(id))
    }

    /// Place a new component of `tag` at an already-clamped drop position
    /// (the page renderer clamps before calling). The new component stacks
    /// above everything placed so far. Unknown tags are a silent no-op.
    pub fn place(&mut self, tag: &str, x: f64, y: f64) -> Option<&Component> {
        let max_z = self.components.iter().map(|c| c.z_index).max().unwrap_or(0);
        let id = self.next_id(tag);
        let component = factory::create(tag, id, x, y, max_z + 1)?;
        self.components.push(component);
        self.components.last()
    }

    /// Select one component exclusively, or deselect all with `None`.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected_id = id.map(str::to_string);
        for component in self.components.iter_mut() {
            component.selected = Some(component.id.as_str()) == id;
        }
    }

    /// Move a component, clamping the new position so the box stays fully
    /// inside the page. No-op when `id` is not present.
    pub fn move_to(&mut self, id: &str, x: f64, y: f64) {
        let page = self.page;
        if let Some(component) = self.components.iter_mut().find(|c| c.id == id) {
            let (w, h) = component.size();
            component.x = clamp_origin(x, w, page.width);
            component.y = clamp_origin(y, h, page.height);
        }
    }

    /// Resize a component. The stored size is clamped to the configured
    /// bounds and the position is re-clamped against the new size, so a
    /// component grown near a page edge slides back on-page instead of
    /// hanging over it. No-op when `id` is not present.
    pub fn resize(&mut self, id: &str, width: f64, height: f64) {
        let page = self.page;
        if let Some(component) = self.components.iter_mut().find(|c| c.id == id) {
            let w = clamp(width, MIN_WIDTH, MAX_WIDTH);
            let h = clamp(height, MIN_HEIGHT, MAX_HEIGHT);
            component.width = Some(w);
            component.height = Some(h);
            component.x = clamp_origin(component.x, w, page.width);
            component.y = clamp_origin(component.y, h, page.height);
        }
    }

    /// Apply a typed property command. Numeric fields are clamped to their
    /// bounds; commands for fields the component's variant doesn't carry
    /// are no-ops, as are unknown ids.
    pub fn update(&mut self, id: &str, update: PropertyUpdate) {
        let page = self.page;
        let Some(component) = self.components.iter_mut().find(|c| c.id == id) else {
            return;
        };

        match update {
            PropertyUpdate::Content(value) => component.content = value,
            PropertyUpdate::BackgroundColor(value) => component.background_color = value,
            PropertyUpdate::TextColor(value) => component.text_color = value,
            PropertyUpdate::Options(value) => component.options = Some(parse_options(&value)),
            PropertyUpdate::Width(value) => {
                let w = clamp(value, MIN_WIDTH, MAX_WIDTH);
                component.width = Some(w);
                component.x = clamp_origin(component.x, w, page.width);
            }
            PropertyUpdate::Height(value) => {
                let h = clamp(value, MIN_HEIGHT, MAX_HEIGHT);
                component.height = Some(h);
                component.y = clamp_origin(component.y, h, page.height);
            }
            PropertyUpdate::FontSize(value) => {
                let size = clamp(value, MIN_FONT_SIZE, MAX_FONT_SIZE);
                match component.kind {
                    ComponentKind::Text(ref mut t) => t.font_size = size,
                    ComponentKind::Signature(ref mut s) => s.font_size = size,
                    _ => {}
                }
            }
            PropertyUpdate::FontWeight(value) => match component.kind {
                ComponentKind::Text(ref mut t) => t.font_weight = value,
                ComponentKind::Signature(ref mut s) => s.font_weight = value,
                _ => {}
            },
            PropertyUpdate::FontStyle(value) => {
                if let ComponentKind::Text(ref mut t) = component.kind {
                    t.font_style = value;
                }
            }
            PropertyUpdate::TextDecoration(value) => {
                if let ComponentKind::Text(ref mut t) = component.kind {
                    t.text_decoration = value;
                }
            }
            PropertyUpdate::TextAlign(value) => match component.kind {
                ComponentKind::Text(ref mut t) => t.text_align = value,
                ComponentKind::Signature(ref mut s) => s.text_align = value,
                _ => {}
            },
            PropertyUpdate::VerticalAlign(value) => {
                if let ComponentKind::Text(ref mut t) = component.kind {
                    t.vertical_align = value;
                }
            }
            PropertyUpdate::Thickness(value) => {
                if let ComponentKind::Divider(ref mut d) = component.kind {
                    d.thickness = value.max(0.0);
                }
            }
            PropertyUpdate::LineStyle(value) => {
                if let ComponentKind::Divider(ref mut d) = component.kind {
                    d.line_style = value;
                }
            }
            PropertyUpdate::LineColor(value) => match component.kind {
                ComponentKind::Divider(ref mut d) => d.line_color = value,
                ComponentKind::Signature(ref mut s) => s.line_color = value,
                _ => {}
            },
            PropertyUpdate::LineWidth(value) => {
                if let ComponentKind::Signature(ref mut s) = component.kind {
                    s.line_width = value.max(0.0);
                }
            }
            PropertyUpdate::SignatureText(value) => {
                if let ComponentKind::Signature(ref mut s) = component.kind {
                    s.signature_text = value;
                }
            }
            PropertyUpdate::Alt(value) => {
                if let ComponentKind::Image(ref mut i) = component.kind {
                    i.alt = value;
                }
            }
        }
    }

    /// The property panel's raw-string entry point. Numeric input that
    /// fails to parse falls back to a type default instead of propagating
    /// an error; keyword input that fails to parse leaves the field as-is.
    pub fn update_field(&mut self, id: &str, field: PropertyField, raw: &str) {
        let Some(component) = self.get(id) else { return };

        let update = match field {
            PropertyField::Content => Some(PropertyUpdate::Content(raw.to_string())),
            PropertyField::BackgroundColor => {
                Some(PropertyUpdate::BackgroundColor(raw.to_string()))
            }
            PropertyField::TextColor => Some(PropertyUpdate::TextColor(raw.to_string())),
            PropertyField::Options => Some(PropertyUpdate::Options(raw.to_string())),
            PropertyField::Width => Some(PropertyUpdate::Width(
                parse_number(raw).unwrap_or(FALLBACK_WIDTH),
            )),
            PropertyField::Height => Some(PropertyUpdate::Height(
                parse_number(raw).unwrap_or(FALLBACK_HEIGHT),
            )),
            PropertyField::FontSize => Some(PropertyUpdate::FontSize(
                parse_number(raw).unwrap_or_else(|| factory::fallback_font_size(&component.kind)),
            )),
            PropertyField::Thickness => parse_number(raw).map(PropertyUpdate::Thickness),
            PropertyField::LineWidth => parse_number(raw).map(PropertyUpdate::LineWidth),
            PropertyField::FontWeight => parse_keyword(raw).map(PropertyUpdate::FontWeight),
            PropertyField::FontStyle => parse_keyword(raw).map(PropertyUpdate::FontStyle),
            PropertyField::TextDecoration => {
                parse_keyword(raw).map(PropertyUpdate::TextDecoration)
            }
            PropertyField::TextAlign => parse_keyword(raw).map(PropertyUpdate::TextAlign),
            PropertyField::VerticalAlign => parse_keyword(raw).map(PropertyUpdate::VerticalAlign),
            PropertyField::LineStyle => parse_keyword(raw).map(PropertyUpdate::LineStyle),
            PropertyField::LineColor => Some(PropertyUpdate::LineColor(raw.to_string())),
            PropertyField::SignatureText => Some(PropertyUpdate::SignatureText(raw.to_string())),
            PropertyField::Alt => Some(PropertyUpdate::Alt(raw.to_string())),
        };

        if let Some(update) = update {
            self.update(id, update);
        }
    }

    /// Remove a component; clears the selection when it was the one removed.
    pub fn remove(&mut self, id: &str) {
        self.components.retain(|c| c.id != id);
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
    }

    pub fn bring_forward(&mut self, id: &str) {
        zorder::bring_forward(&mut self.components, id);
    }

    pub fn send_backward(&mut self, id: &str) {
        zorder::send_backward(&mut self.components, id);
    }

    /// Serialize the component list verbatim — the JSON export format.
    pub fn export_json(&self) -> Result<String, MaquetteError> {
        Ok(serde_json::to_string_pretty(&self.components)?)
    }

    /// Ids are `{tag}-{unix_millis}`; a numeric suffix disambiguates when
    /// two placements land on the same millisecond.
    fn next_id(&self, tag: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let base = format!("{}-{}", tag, millis);
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a panel keyword through the same mapping serde uses for JSON, so
/// "bold", "line-through", "justify" and friends have exactly one spelling.
fn parse_keyword<T: serde::de::DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string())).ok()
}
