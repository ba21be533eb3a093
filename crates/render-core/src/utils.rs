use carta_style::mm_to_pt;

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Converts a top-left millimetre position into bottom-left PDF points.
pub fn to_pdf_point(x: f32, y: f32, page_height_mm: f32) -> (f32, f32) {
    (mm_to_pt(x), mm_to_pt(flip_y(y, page_height_mm)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_top_of_page() {
        let (x, y) = to_pdf_point(0.0, 0.0, 297.0);
        assert_eq!(x, 0.0);
        assert!((y - 841.89).abs() < 0.01);
    }
}
