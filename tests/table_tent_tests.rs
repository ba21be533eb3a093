mod common;

use carta::{GenerationError, MenuGenerator, RecordingCanvas, RenderRequest, Template};
use common::fixtures::*;
use common::{GeneratedPdf, TestResult, init_logging};

const A6: (f32, f32) = (105.0, 148.0);

fn tent_request(template: &str) -> RenderRequest {
    let mut request = starters(template);
    request.options.table_number = Some("12".into());
    request
}

fn record_tent(request: &RenderRequest) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new(A6.0, A6.1);
    MenuGenerator::default().render_table_tent_on(request, &mut canvas);
    canvas
}

#[test]
fn test_folding_page_only_for_traditional_and_grid() -> TestResult {
    init_logging();
    let generator = MenuGenerator::default();
    for template in Template::ALL {
        let pdf = GeneratedPdf::load(generator.generate_table_tent_document(&tent_request(template.id()))?)?;
        let expected = match template {
            Template::Traditional | Template::ModernGrid => 2,
            _ => 1,
        };
        assert_pdf_page_count!(pdf, expected);
        assert_eq!(pdf.document.page_count, expected, "{template}");
        assert_eq!(pdf.document.filename, "trattoria-da-luigi-table-tent.pdf");
    }
    Ok(())
}

#[test]
fn test_tent_shows_table_number() -> TestResult {
    let pdf = GeneratedPdf::load(MenuGenerator::default().generate_table_tent_document(&tent_request("traditional"))?)?;
    assert_pdf_contains_text!(pdf, "Table 12");
    assert_pdf_contains_text!(pdf, "Luigi");
    Ok(())
}

#[test]
fn test_missing_qr_code_draws_placeholder() {
    for template in Template::ALL {
        let canvas = record_tent(&tent_request(template.id()));
        assert!(canvas.contains_text("QR code"), "{template} has no placeholder");
        assert_eq!(canvas.images().count(), 0);
    }
}

#[test]
fn test_supplied_qr_code_is_embedded() {
    for template in Template::ALL {
        let mut request = tent_request(template.id());
        request.options.qr_code = Some(sample_png());
        let canvas = record_tent(&request);

        let images: Vec<_> = canvas.images().collect();
        assert_eq!(images.len(), 1, "{template}");
        let (page, area) = images[0];
        assert_eq!(page, 0);
        assert!(area.width >= 20.0 * A6.0 / 105.0 - 0.01, "{template} QR is {}mm", area.width);
        assert!(area.right() <= A6.0 && area.bottom() <= A6.1);
        assert!(!canvas.contains_text("QR code"));
    }
}

#[test]
fn test_qr_switched_off_falls_back_to_placeholder() {
    let mut request = tent_request("modern_grid");
    request.options.qr_code = Some(sample_png());
    request.options.include_qr_code = false;
    let canvas = record_tent(&request);
    assert_eq!(canvas.images().count(), 0);
    assert!(canvas.contains_text("QR code"));
}

#[test]
fn test_a4_landscape_tent() -> TestResult {
    let mut request = tent_request("compact");
    request.options.tent_format = "A4".into();
    request.options.tent_orientation = "landscape".into();
    let pdf = GeneratedPdf::load(MenuGenerator::default().generate_table_tent_document(&request)?)?;

    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "TABLE 12");
    Ok(())
}

#[test]
fn test_unknown_orientation_is_rejected() {
    let mut request = tent_request("traditional");
    request.options.tent_orientation = "diagonal".into();
    let result = MenuGenerator::default().generate_table_tent_document(&request);
    assert!(matches!(result, Err(GenerationError::InvalidPageFormat(_))));

    request.options.tent_orientation = "portrait".into();
    request.options.tent_format = "Letter".into();
    let result = MenuGenerator::default().generate_table_tent_document(&request);
    assert!(matches!(result, Err(GenerationError::InvalidPageFormat(_))));
}

#[test]
fn test_tent_without_table_number() {
    let mut request = tent_request("minimalist");
    request.options.table_number = None;
    let canvas = record_tent(&request);
    assert!(!canvas.contains_text("Table"));
    assert!(canvas.contains_text("Luigi"));
}
