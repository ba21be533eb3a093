//! Vertical flow over a sequence of same-size pages.

use crate::LayoutError;
use crate::algorithms::pagination::{EPSILON, check_block_fit};
use carta_style::PageSpec;
use carta_types::Rect;

/// Something that can open a fresh page. Implemented by every canvas.
pub trait Paginate {
    fn start_new_page(&mut self);
}

/// Tracks the vertical position on the current page.
///
/// All values are millimetres measured from the top-left corner. Content
/// lives between `margin` and `page_height - margin`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub content_width: f32,
    pub y: f32,
    breaks: usize,
    warn_on_overflow: bool,
}

impl LayoutCursor {
    pub fn new(page_width: f32, page_height: f32, margin: f32) -> Self {
        Self {
            page_width,
            page_height,
            margin,
            content_width: (page_width - 2.0 * margin).max(0.0),
            y: margin,
            breaks: 0,
            warn_on_overflow: true,
        }
    }

    /// Whether oversized blocks are logged at `warn` (default) or `debug`.
    pub fn with_overflow_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_overflow = enabled;
        self
    }

    pub fn for_page(spec: PageSpec, margin: f32) -> Self {
        let (w, h) = spec.dimensions_mm();
        Self::new(w, h, margin)
    }

    pub fn left(&self) -> f32 {
        self.margin
    }

    pub fn right(&self) -> f32 {
        self.page_width - self.margin
    }

    pub fn top(&self) -> f32 {
        self.margin
    }

    pub fn bottom(&self) -> f32 {
        self.page_height - self.margin
    }

    pub fn center_x(&self) -> f32 {
        self.page_width / 2.0
    }

    pub fn content_height(&self) -> f32 {
        (self.bottom() - self.top()).max(0.0)
    }

    pub fn content_area(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin,
            self.content_width,
            self.content_height(),
        )
    }

    /// Space left between the cursor and the bottom margin.
    pub fn remaining(&self) -> f32 {
        (self.bottom() - self.y).max(0.0)
    }

    pub fn fits(&self, needed: f32) -> bool {
        !check_block_fit(self.y - self.top(), needed, self.content_area()).should_break
    }

    pub fn at_page_top(&self) -> bool {
        self.y <= self.top() + EPSILON
    }

    /// Makes room for a block of `needed` mm, opening a new page on `pages`
    /// when the block would cross the bottom margin. Returns whether a page
    /// was started.
    ///
    /// A block taller than the whole content area is logged and placed at
    /// the top of the current page anyway; the cursor never opens more than
    /// one page per call.
    pub fn ensure_space<P: Paginate + ?Sized>(&mut self, pages: &mut P, needed: f32) -> bool {
        if needed > self.content_height() + EPSILON {
            let err = LayoutError::ElementTooLarge(needed, self.content_height());
            if self.warn_on_overflow {
                log::warn!("{err} Placing it anyway.");
            } else {
                log::debug!("{err} Placing it anyway.");
            }
        }
        if self.fits(needed) || self.at_page_top() {
            return false;
        }
        pages.start_new_page();
        self.y = self.top();
        self.breaks += 1;
        log::trace!("Page break before block of {needed:.2}mm");
        true
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Number of page breaks this cursor has triggered.
    pub fn page_breaks(&self) -> usize {
        self.breaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct PageCounter(usize);

    impl Paginate for PageCounter {
        fn start_new_page(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_a4_content_width() {
        let cursor = LayoutCursor::for_page(PageSpec::A4_PORTRAIT, 15.0);
        assert_eq!(cursor.content_width, 180.0);
        assert_eq!(cursor.y, 15.0);
        assert_eq!(cursor.bottom(), 282.0);
    }

    #[test]
    fn test_block_that_fits_stays_on_page() {
        let mut pages = PageCounter::default();
        let mut cursor = LayoutCursor::new(210.0, 297.0, 15.0);
        cursor.y = 200.0;
        assert!(!cursor.ensure_space(&mut pages, 82.0));
        assert_eq!(pages.0, 0);
    }

    #[test]
    fn test_overflowing_block_starts_new_page() {
        let mut pages = PageCounter::default();
        let mut cursor = LayoutCursor::new(210.0, 297.0, 15.0);
        cursor.y = 270.0;
        assert!(cursor.ensure_space(&mut pages, 20.0));
        assert_eq!(pages.0, 1);
        assert_eq!(cursor.y, 15.0);
        assert_eq!(cursor.page_breaks(), 1);
    }

    #[test]
    fn test_oversized_block_at_top_is_placed_without_break() {
        let mut pages = PageCounter::default();
        let mut cursor = LayoutCursor::new(105.0, 148.0, 10.0);
        assert!(!cursor.ensure_space(&mut pages, 500.0));
        assert_eq!(pages.0, 0);

        cursor.advance(10.0);
        assert!(cursor.ensure_space(&mut pages, 500.0));
        assert!(!cursor.ensure_space(&mut pages, 500.0));
        assert_eq!(pages.0, 1);
    }
}
