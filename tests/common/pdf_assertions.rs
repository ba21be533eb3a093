use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Strings shown with `Tj` on one page (1-based), decoded from WinAnsi.
pub fn page_strings(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    let Some(&page_id) = doc.get_pages().get(&page_num) else {
        return Vec::new();
    };
    let Ok(data) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&data) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(|bytes| bytes.iter().map(|&b| decode_win_ansi(b)).collect())
        .collect()
}

/// Number of times `operator` appears on one page (1-based).
pub fn count_operator(doc: &LopdfDocument, page_num: u32, operator: &str) -> usize {
    let Some(&page_id) = doc.get_pages().get(&page_num) else {
        return 0;
    };
    doc.get_page_content(page_id)
        .ok()
        .and_then(|data| Content::decode(&data).ok())
        .map_or(0, |content| content.operations.iter().filter(|op| op.operator == operator).count())
}

/// All shown text of the document, one string per line, pages in order.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let pages = doc.get_pages().len() as u32;
    (1..=pages)
        .flat_map(|p| page_strings(doc, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_win_ansi(byte: u8) -> char {
    match byte {
        0x80 => '€',
        0x95 => '•',
        0x96 => '–',
        0x97 => '—',
        0x85 => '…',
        b => char::from(b),
    }
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}
