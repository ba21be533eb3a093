mod common;

use carta::{Badges, Canvas, Category, MenuGenerator, MenuItem, RecordingCanvas, RenderRequest, Template};
use carta_layout::text_width;
use common::fixtures::*;
use common::{GeneratedPdf, TestResult, init_logging, placed_texts};
use proptest::prelude::*;

const A4: (f32, f32) = (210.0, 297.0);

fn record_menu(request: &RenderRequest) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new(A4.0, A4.1);
    MenuGenerator::default().render_menu_on(request, &mut canvas);
    canvas
}

#[test]
fn test_starters_in_position_order_with_right_aligned_prices() {
    init_logging();
    let canvas = record_menu(&starters("traditional"));
    let lines = canvas.text_lines();

    assert_eq!(canvas.count_text("Starters"), 1);
    let pos = |s: &str| lines.iter().position(|l| *l == s).unwrap();
    assert!(pos("Starters") < pos("Bruschetta"));
    assert!(pos("Bruschetta") < pos("Garlic Bread"));

    let right = A4.0 - Template::Traditional.menu_margin();
    for price in ["4,50 €", "9,90 €"] {
        let op = canvas.find_text(price).unwrap();
        let end = op.x + text_width(price, &op.style);
        assert!((end - right).abs() < 0.01, "{price} ends at {end}, expected {right}");
    }
}

#[test]
fn test_every_visible_item_printed_once_in_order() {
    init_logging();
    let mut request = large_menu("compact", 3, 20);
    request.items[4].available = false;
    let hidden = request.items[4].name.clone();
    let canvas = record_menu(&request);

    assert_eq!(canvas.count_text(&hidden), 0);
    let printed: Vec<&str> = canvas
        .text_lines()
        .into_iter()
        .filter(|t| t.starts_with("Dish "))
        .collect();
    let expected: Vec<&str> = request
        .items
        .iter()
        .filter(|i| i.available)
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(printed, expected);
}

#[test]
fn test_headers_are_never_stranded() {
    init_logging();
    let request = large_menu("compact", 3, 20);
    let canvas = record_menu(&request);
    assert!(canvas.page_count() > 1);

    let texts = placed_texts(&canvas);
    for c in 1..=3 {
        let header = format!("CATEGORY {c}");
        let at = texts.iter().position(|(_, t)| *t == header).unwrap();
        let (page, _) = texts[at];
        let (next_page, next) = &texts[at + 1];
        assert_eq!(*next_page, page, "'{header}' ended page {page}, next was '{next}'");
    }
}

#[test]
fn test_header_kept_with_item_taller_than_a_page() {
    init_logging();
    let description = "slow braised shoulder with roasted roots and jus ".repeat(600);
    for template in Template::ALL {
        let mut request = large_menu(template.id(), 1, 3);
        request.categories.push(Category::new(2, "Huge", 2));
        request
            .items
            .push(MenuItem::new(99, 2, "Giant Platter", euros(4900)).with_description(description.as_str()));
        let canvas = record_menu(&request);

        let texts = placed_texts(&canvas);
        let header = texts
            .iter()
            .position(|(_, t)| t.eq_ignore_ascii_case("huge"))
            .unwrap();
        let item = texts.iter().position(|(_, t)| t == "Giant Platter").unwrap();
        assert!(header < item, "{template}");
        assert_eq!(texts[header].0, texts[item].0, "{template}: header and item split across pages");
    }
}

#[test]
fn test_text_stays_above_bottom_margin_for_every_template() {
    init_logging();
    for template in Template::ALL {
        let request = large_menu(template.id(), 4, 18);
        let canvas = record_menu(&request);
        let limit = A4.1 - template.menu_margin() + 0.01;

        assert!(canvas.page_count() > 1, "{template} fit 72 items on one page");
        for op in canvas.texts() {
            assert!(
                op.y <= limit,
                "{template}: '{}' on page {} has baseline {} below {}",
                op.text,
                op.page,
                op.y,
                limit
            );
        }
    }
}

#[test]
fn test_unknown_template_matches_default() {
    let mut unknown = starters("foobar");
    unknown.items.push(MenuItem::new(3, 1, "Olives", euros(350)).with_position(3));
    let mut traditional = unknown.clone();
    traditional.options.template = "traditional".into();

    assert_eq!(record_menu(&unknown).ops(), record_menu(&traditional).ops());
}

#[test]
fn test_generation_is_repeatable() -> TestResult {
    init_logging();
    let generator = MenuGenerator::default();
    for template in Template::ALL {
        let request = large_menu(template.id(), 3, 12);
        let first = GeneratedPdf::load(generator.generate_menu_document(&request)?)?;
        let second = GeneratedPdf::load(generator.generate_menu_document(&request)?)?;

        assert_eq!(first.page_count(), second.page_count());
        assert_eq!(first.document.page_count, first.page_count());
        assert_eq!(
            common::pdf_assertions::extract_text(&first.doc),
            common::pdf_assertions::extract_text(&second.doc)
        );
    }
    Ok(())
}

#[test]
fn test_empty_request_still_produces_a_document() -> TestResult {
    init_logging();
    let generator = MenuGenerator::default();
    for template in Template::ALL {
        let mut request = RenderRequest::default();
        request.options.template = template.id().into();
        let pdf = GeneratedPdf::load(generator.generate_menu_document(&request)?)?;

        assert_pdf_page_count!(pdf, 1);
        assert_pdf_contains_text!(pdf, "No items available");
        assert_pdf_contains_text!(pdf, "Restaurant");
        assert_eq!(pdf.document.filename, "restaurant-menu.pdf");
    }
    Ok(())
}

#[test]
fn test_menu_pdf_round_trip() -> TestResult {
    let request = large_menu("traditional", 2, 25);
    let document = MenuGenerator::default().generate_menu_document(&request)?;
    assert_eq!(document.filename, "trattoria-da-luigi-menu.pdf");
    assert_eq!(document.template, Template::Traditional);

    let pdf = GeneratedPdf::load(document)?;
    assert_pdf_min_pages!(pdf, 2);
    assert_pdf_contains_text!(pdf, "Dish 1-1");
    assert_pdf_contains_text!(pdf, "Dish 2-25");
    assert_pdf_contains_text!(pdf, "A Gluten");
    Ok(())
}

#[test]
fn test_allergens_can_be_switched_off() {
    let mut request = large_menu("traditional", 1, 6);
    request.options.include_allergens = false;
    let canvas = record_menu(&request);
    assert!(!canvas.contains_text("Allergens"));
    assert!(!canvas.contains_text("Gluten"));
}

#[test]
fn test_translated_names_are_used_for_matching_language() {
    let mut request = starters("minimalist");
    request.options.language = Some("it".into());
    request.categories[0].localized = Some(carta::Translation {
        language: "it".into(),
        name: Some("Antipasti".into()),
        description: None,
    });
    let canvas = record_menu(&request);
    assert!(canvas.contains_text("ANTIPASTI"));
    assert!(!canvas.contains_text("STARTERS"));
}

fn ordering_request(specs: &[(i32, bool, bool)]) -> RenderRequest {
    let items = specs
        .iter()
        .enumerate()
        .map(|(i, &(position, special, available))| {
            let mut item = MenuItem::new(i as u64 + 1, 1, format!("Item {i}"), euros(100)).with_position(position);
            item.badges = Badges {
                special,
                ..Badges::default()
            };
            item.available = available;
            item
        })
        .collect();
    request_with("minimalist", vec![Category::new(1, "Mains", 1)], items)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_items_ordered_specials_first_then_position(
        specs in prop::collection::vec((0i32..20, any::<bool>(), prop::bool::weighted(0.85)), 1..25)
    ) {
        let request = ordering_request(&specs);
        let canvas = record_menu(&request);

        let mut expected: Vec<(bool, i32, usize)> = specs
            .iter()
            .enumerate()
            .filter(|(_, s)| s.2)
            .map(|(i, s)| (!s.1, s.0, i))
            .collect();
        expected.sort();
        let expected: Vec<String> = expected.iter().map(|(_, _, i)| format!("Item {i}")).collect();
        let printed: Vec<String> = canvas
            .text_lines()
            .into_iter()
            .filter(|t| t.starts_with("Item "))
            .map(String::from)
            .collect();
        prop_assert_eq!(printed, expected);
    }
}
