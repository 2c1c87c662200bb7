//! Integration tests for the Maquette pipeline.
//!
//! These exercise the full path from store mutations through JSON and PDF
//! export. They verify:
//! - store invariants (exclusive selection, clamped geometry, z-order)
//! - the documented editing scenarios
//! - PDF output is structurally valid and carries the expected content

use maquette::model::{ComponentKind, TextAlign, TextDecoration};
use maquette::store::{PropertyField, PropertyUpdate};
use maquette::{CanvasStore, ExportOptions, PageBounds, PdfWriter};

// ─── Helpers ────────────────────────────────────────────────────

fn assert_valid_pdf(bytes: &[u8]) {
    assert!(bytes.len() > 50, "PDF too small to be valid");
    assert!(bytes.starts_with(b"%PDF-1.7"), "missing PDF header");
    assert!(bytes.windows(5).any(|w| w == b"%%EOF"), "missing %%EOF");
    assert!(bytes.windows(4).any(|w| w == b"xref"), "missing xref table");
    assert!(bytes.windows(7).any(|w| w == b"trailer"), "missing trailer");
}

fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Decompress every FlateDecode stream in the file and return the ones
/// that are text (content streams, as opposed to image pixel data).
fn decompressed_streams(bytes: &[u8]) -> Vec<String> {
    let mut streams = Vec::new();
    let mut at = 0;
    while let Some(start) = find_from(bytes, b"stream\n", at) {
        let data_start = start + b"stream\n".len();
        let Some(end) = find_from(bytes, b"\nendstream", data_start) else {
            break;
        };
        if let Ok(raw) = miniz_oxide::inflate::decompress_to_vec_zlib(&bytes[data_start..end]) {
            if let Ok(text) = String::from_utf8(raw) {
                streams.push(text);
            }
        }
        at = end + 1;
    }
    streams
}

fn content_ops(bytes: &[u8]) -> String {
    decompressed_streams(bytes).join("\n")
}

fn demo_store() -> CanvasStore {
    let mut store = CanvasStore::new();
    let title = store.place("title", 60.0, 40.0).unwrap().id.clone();
    store.update(&title, PropertyUpdate::Content("Título do Documento".to_string()));
    let para = store.place("paragraph", 60.0, 110.0).unwrap().id.clone();
    store.update(
        &para,
        PropertyUpdate::Content(
            "Este é um texto muito longo que deveria quebrar linhas automaticamente".to_string(),
        ),
    );
    let _ = store.place("divider", 60.0, 90.0);
    let _ = store.place("signature", 60.0, 480.0);
    store
}

// ─── Store scenarios ────────────────────────────────────────────

#[test]
fn test_place_then_move_clamps_to_page() {
    // Page 794×1123 with the 120×32 fallback box: (-50, 2000) → (0, 1091).
    let mut store = CanvasStore::with_page(PageBounds::new(794.0, 1123.0));
    let id = store.place("text", 0.0, 0.0).unwrap().id.clone();
    store.move_to(&id, -50.0, 2000.0);
    let comp = store.get(&id).unwrap();
    assert_eq!((comp.x, comp.y), (0.0, 1091.0));
}

#[test]
fn test_send_backward_uses_min_minus_one() {
    let mut store = CanvasStore::new();
    let _ = store.place("text", 0.0, 0.0);
    let _ = store.place("text", 10.0, 10.0);
    let top = store.place("text", 20.0, 20.0).unwrap().id.clone();
    store.send_backward(&top);
    let zs: Vec<i32> = store.components().iter().map(|c| c.z_index).collect();
    assert_eq!(zs, vec![1, 2, 0]);
    assert_eq!(store.render_order()[0].id, top, "lowered component renders first");
}

#[test]
fn test_selection_matches_last_select_call() {
    let mut store = demo_store();
    let ids: Vec<String> = store.components().iter().map(|c| c.id.clone()).collect();
    store.select(Some(&ids[0]));
    store.select(Some(&ids[3]));
    store.select(Some(&ids[1]));
    let selected: Vec<&str> = store
        .components()
        .iter()
        .filter(|c| c.selected)
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(selected, vec![ids[1].as_str()]);
    assert_eq!(store.selected_id(), Some(ids[1].as_str()));
}

#[test]
fn test_resize_bounds_hold_on_every_path() {
    let mut store = CanvasStore::new();
    let id = store.place("text", 0.0, 0.0).unwrap().id.clone();

    store.resize(&id, 10.0, 10000.0);
    let comp = store.get(&id).unwrap();
    assert_eq!(comp.width, Some(50.0), "width input 10 stores the minimum 50");
    assert_eq!(comp.height, Some(600.0), "height input 10000 stores the maximum 600");

    store.update_field(&id, PropertyField::Width, "10000");
    store.update_field(&id, PropertyField::Height, "1");
    let comp = store.get(&id).unwrap();
    assert_eq!(comp.width, Some(800.0));
    assert_eq!(comp.height, Some(20.0));
}

#[test]
fn test_removing_selected_clears_selection() {
    let mut store = demo_store();
    let ids: Vec<String> = store.components().iter().map(|c| c.id.clone()).collect();
    store.select(Some(&ids[2]));
    store.remove(&ids[2]);
    assert!(store.selected_id().is_none());

    store.select(Some(&ids[0]));
    store.remove(&ids[1]);
    assert_eq!(store.selected_id(), Some(ids[0].as_str()));
}

// ─── Export pipeline ────────────────────────────────────────────

#[test]
fn test_empty_document_exports_valid_pdf() {
    let bytes = PdfWriter::new().write(&[]).unwrap();
    assert_valid_pdf(&bytes);
}

#[test]
fn test_full_pipeline_json_to_pdf() {
    let store = demo_store();
    let json = store.export_json().unwrap();
    let bytes = maquette::export_pdf_json(&json).unwrap();
    assert_valid_pdf(&bytes);

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Helvetica-Bold"), "title is bold");
    assert!(text.contains("/BaseFont /Helvetica"), "body face present");
}

#[test]
fn test_render_order_follows_z_index_in_content_stream() {
    let mut store = CanvasStore::new();
    let a = store.place("title", 10.0, 10.0).unwrap().id.clone();
    store.update(&a, PropertyUpdate::Content("AAAA".to_string()));
    let b = store.place("title", 20.0, 20.0).unwrap().id.clone();
    store.update(&b, PropertyUpdate::Content("BBBB".to_string()));
    store.send_backward(&b);

    let bytes = maquette::export_pdf(store.components(), &ExportOptions::default()).unwrap();
    let ops = content_ops(&bytes);
    let pos_a = ops.find("AAAA").expect("AAAA drawn");
    let pos_b = ops.find("BBBB").expect("BBBB drawn");
    assert!(pos_b < pos_a, "component sent backward must be drawn first");
}

#[test]
fn test_text_wraps_within_component_width() {
    let mut store = CanvasStore::new();
    let id = store.place("text", 0.0, 0.0).unwrap().id.clone();
    store.resize(&id, 200.0, 120.0);
    store.update(
        &id,
        PropertyUpdate::Content(
            "Este é um texto muito longo que deveria quebrar linhas automaticamente".to_string(),
        ),
    );

    // The writer wraps with the same function at width - 2×8.
    let metrics = maquette::font::FontVariant::Regular.metrics();
    let lines = maquette::text::wrap(
        "Este é um texto muito longo que deveria quebrar linhas automaticamente",
        184.0,
        metrics,
        16.0,
    );
    assert!(lines.len() > 1, "200px box must wrap this text");
    for line in &lines {
        assert!(line.width <= 184.0 + 1e-6, "line '{}' exceeds 184px", line.text);
    }

    let bytes = maquette::export_pdf(store.components(), &ExportOptions::default()).unwrap();
    let ops = content_ops(&bytes);
    let shown = ops.matches(") Tj").count();
    assert_eq!(shown, lines.len(), "every wrapped line is drawn once");
}

#[test]
fn test_accented_text_survives_winansi_encoding() {
    let store = demo_store();
    let bytes = maquette::export_pdf(store.components(), &ExportOptions::default()).unwrap();
    let ops = content_ops(&bytes);
    // "Título" → í is WinAnsi 0xED, written as octal \355.
    assert!(ops.contains("T\\355tulo"), "expected octal-escaped í in: {}", ops);
}

#[test]
fn test_broken_image_renders_placeholder_not_error() {
    let mut store = CanvasStore::new();
    let id = store.place("image", 100.0, 100.0).unwrap().id.clone();
    store.update(
        &id,
        PropertyUpdate::Content("data:image/png;base64,definitely*not*base64".to_string()),
    );
    let bytes = maquette::export_pdf(store.components(), &ExportOptions::default()).unwrap();
    assert_valid_pdf(&bytes);
    let ops = content_ops(&bytes);
    assert!(
        ops.contains("Imagem n\\343o carregada"),
        "placeholder label expected in: {}",
        ops
    );
}

#[test]
fn test_page_background_is_white() {
    let bytes = PdfWriter::new().write(&[]).unwrap();
    let ops = content_ops(&bytes);
    assert!(ops.starts_with("1 1 1 rg"), "page must be filled white first: {}", ops);
}

#[test]
fn test_normalize_top_shifts_content_up() {
    let mut store = CanvasStore::new();
    let id = store.place("title", 60.0, 300.0).unwrap().id.clone();
    store.update(&id, PropertyUpdate::Content("Topo".to_string()));

    let plain = maquette::export_pdf(store.components(), &ExportOptions::default()).unwrap();
    let normalized = maquette::export_pdf(
        store.components(),
        &ExportOptions {
            normalize_top: true,
            ..ExportOptions::default()
        },
    )
    .unwrap();
    assert_valid_pdf(&normalized);
    assert_ne!(
        content_ops(&plain),
        content_ops(&normalized),
        "normalization must change draw positions"
    );
}

#[test]
fn test_update_field_keywords_affect_export() {
    let mut store = CanvasStore::new();
    let id = store.place("text", 10.0, 10.0).unwrap().id.clone();
    store.update(&id, PropertyUpdate::Content("sublinhado".to_string()));
    store.update_field(&id, PropertyField::TextDecoration, "underline");
    store.update_field(&id, PropertyField::TextAlign, "center");

    match store.get(&id).unwrap().kind {
        ComponentKind::Text(ref t) => {
            assert_eq!(t.text_decoration, TextDecoration::Underline);
            assert_eq!(t.text_align, TextAlign::Center);
        }
        _ => unreachable!(),
    }

    let bytes = maquette::export_pdf(store.components(), &ExportOptions::default()).unwrap();
    let ops = content_ops(&bytes);
    // One text run plus one decoration stroke.
    assert!(ops.contains(") Tj"));
    assert!(ops.contains(" S\n") || ops.contains("S\nQ"), "underline stroke expected");
}

#[test]
fn test_json_export_matches_interchange_shape() {
    let store = demo_store();
    let json = store.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[0]["type"], "text");
    assert_eq!(list[2]["type"], "divider");
    assert!(list[0]["zIndex"].is_i64(), "camelCase zIndex field");
    assert!(list[0].get("selected").is_some());
}
