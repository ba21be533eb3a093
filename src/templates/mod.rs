//! The five layout strategies and the state they share while drawing.
//!
//! A strategy receives a [`Frame`]: the canvas, a cursor sized to the
//! canvas, the resolved palette and the prepared sections. Strategies plan
//! each block (wrapped lines and their height), reserve that height with
//! [`Frame::ensure_space`] and then draw exactly the planned block.

pub(crate) mod compact;
pub(crate) mod fine_dining;
pub(crate) mod minimalist;
pub(crate) mod modern_grid;
pub(crate) mod traditional;

use crate::config::{EngineConfig, Labels};
use crate::content::{self, MenuSection};
use carta_layout::{LayoutCursor, TextBlock, line_height};
use carta_render_core::Canvas;
use carta_render_core::painting::{self, image_placeholder, numbered_circle};
use carta_style::{FontFace, Palette, TextAlign, TextStyle};
use carta_types::{Allergen, Category, Color, Decimal, ImageData, MenuItem, Rect, RenderRequest};

/// Reference size table tents are designed at (A6 portrait).
const TENT_BASE: (f32, f32) = (105.0, 148.0);

/// Scale factor from the A6 portrait design to the actual tent page.
pub(crate) fn tent_scale(page: (f32, f32)) -> f32 {
    (page.0 / TENT_BASE.0).min(page.1 / TENT_BASE.1)
}

pub(crate) fn tent_margin(page: (f32, f32)) -> f32 {
    8.0 * tent_scale(page)
}

pub(crate) struct Frame<'a, C: Canvas + ?Sized> {
    pub canvas: &'a mut C,
    pub cursor: LayoutCursor,
    pub palette: Palette,
    pub request: &'a RenderRequest,
    pub config: &'a EngineConfig,
    pub sections: Vec<MenuSection<'a>>,
    language: Option<&'a str>,
    /// Set by [`Frame::reserve_header`]; the next reservation is already paid for.
    header_reserved: bool,
}

impl<'a, C: Canvas + ?Sized> Frame<'a, C> {
    pub fn new(
        canvas: &'a mut C,
        request: &'a RenderRequest,
        config: &'a EngineConfig,
        margin: f32,
    ) -> Self {
        let (width, height) = canvas.page_size();
        let cursor = LayoutCursor::new(width, height, margin)
            .with_overflow_warnings(config.warn_on_overflow);
        let language = request
            .options
            .language
            .as_deref()
            .or(request.restaurant.language.as_deref());
        Self {
            canvas,
            cursor,
            palette: Palette::resolve(&request.theme),
            request,
            config,
            sections: content::prepare_sections(&request.categories, &request.items),
            language,
            header_reserved: false,
        }
    }

    pub fn labels(&self) -> &'a Labels {
        &self.config.labels
    }

    /// Reserves `needed` mm, breaking the page if necessary.
    pub fn ensure_space(&mut self, needed: f32) -> bool {
        if std::mem::take(&mut self.header_reserved) {
            return false;
        }
        self.cursor.ensure_space(&mut *self.canvas, needed)
    }

    /// Reserves a category header together with the first block below it.
    /// The following [`Frame::ensure_space`] call (for that first block)
    /// never breaks, so a header stays with its first item even when the
    /// item is taller than a page.
    pub fn reserve_header(&mut self, header: f32, first: f32) -> bool {
        let broke = self.ensure_space(header + first);
        self.header_reserved = true;
        broke
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor.advance(dy);
    }

    /// Page scale for table tents.
    pub fn scale(&self) -> f32 {
        tent_scale((self.cursor.page_width, self.cursor.page_height))
    }

    pub fn restaurant_name(&self) -> &'a str {
        let name = self.request.restaurant.name.trim();
        if name.is_empty() {
            &self.config.labels.fallback_restaurant
        } else {
            name
        }
    }

    pub fn address(&self) -> Option<&'a str> {
        self.request
            .restaurant
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    pub fn philosophy(&self) -> Option<&'a str> {
        self.request
            .restaurant
            .philosophy
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn category_name(&self, category: &'a Category) -> &'a str {
        content::display_text(&category.name, category.localized.as_ref(), self.language)
    }

    pub fn item_name(&self, item: &'a MenuItem) -> &'a str {
        content::display_text(&item.name, item.localized.as_ref(), self.language)
    }

    pub fn item_description(&self, item: &'a MenuItem) -> Option<&'a str> {
        content::display_description(
            item.description.as_deref(),
            item.localized.as_ref(),
            self.language,
        )
    }

    pub fn price(&self, amount: Decimal) -> String {
        self.config.currency.format(amount)
    }

    pub fn show_allergens(&self) -> bool {
        self.request.options.include_allergens
    }

    /// Allergen codes for `item`, empty when allergens are switched off.
    pub fn allergen_codes(&self, item: &MenuItem) -> Vec<&'a str> {
        if !self.show_allergens() {
            return Vec::new();
        }
        content::allergen_codes(item, &self.request.allergens)
    }

    pub fn used_allergens(&self) -> Vec<&'a Allergen> {
        if !self.show_allergens() {
            return Vec::new();
        }
        content::used_allergens(&self.sections, &self.request.allergens)
    }

    /// The caller's scannable code, when it should be printed.
    pub fn qr_code(&self) -> Option<&'a ImageData> {
        if self.request.options.include_qr_code {
            self.request.options.qr_code.as_ref()
        } else {
            None
        }
    }

    pub fn table_number(&self) -> Option<&'a str> {
        self.request
            .options
            .table_number
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Stamps an optional image. Failures are logged and reported as
    /// `false`; they never abort the document.
    pub fn try_image(&mut self, data: &ImageData, area: Rect, what: &str) -> bool {
        match self.canvas.image(data, area) {
            Ok(()) => true,
            Err(err) if err.is_recoverable() => {
                log::warn!("Skipping {what}: {err}");
                false
            }
            Err(err) => {
                log::error!("Failed to place {what}: {err}");
                false
            }
        }
    }

    pub fn text(&mut self, text: &str, x: f32, baseline_y: f32, align: TextAlign, style: &TextStyle) -> f32 {
        painting::draw_aligned(self.canvas, text, x, baseline_y, align, style)
    }

    /// Draws `block` at the cursor and advances past it.
    pub fn flow_block(&mut self, block: &TextBlock, x: f32, align: TextAlign) {
        let used = painting::draw_block(self.canvas, block, x, self.cursor.y, align);
        self.advance(used);
    }

    /// The line printed when no category has visible items.
    pub fn empty_notice(&mut self, style: TextStyle, align: TextAlign) {
        let block = TextBlock::single(self.labels().no_items.as_str(), style);
        self.ensure_space(block.height());
        let x = match align {
            TextAlign::Left => self.cursor.left(),
            TextAlign::Center => self.cursor.center_x(),
            TextAlign::Right => self.cursor.right(),
        };
        self.flow_block(&block, x, align);
    }

    /// Draws the scannable code into `area`, or a labelled placeholder when
    /// there is none or it cannot be embedded.
    pub fn qr_or_placeholder(&mut self, area: Rect, label_size: f32) {
        let drawn = match self.qr_code() {
            Some(qr) => self.try_image(qr, area, "QR code"),
            None => {
                log::debug!("No QR code supplied, drawing placeholder");
                false
            }
        };
        if !drawn {
            image_placeholder(self.canvas, area, self.palette.muted);
            let style = TextStyle::new(FontFace::Helvetica, label_size, self.palette.muted);
            let label = self.labels().qr_placeholder.as_str();
            let baseline = area.bottom() - line_height(label_size) * 0.6;
            painting::draw_aligned(self.canvas, label, area.center().x, baseline, TextAlign::Center, &style);
        }
    }

    /// Back page of a folding tent: a title and numbered steps.
    pub fn folding_instructions(&mut self, title_style: TextStyle, step_style: TextStyle, accent: Color) {
        self.canvas.start_new_page();
        self.cursor.y = self.cursor.top();
        let s = self.scale();

        let title = TextBlock::wrap(&self.labels().folding_title, self.cursor.content_width, title_style);
        let center = self.cursor.center_x();
        self.flow_block(&title, center, TextAlign::Center);
        self.advance(6.0 * s);

        let marker_room = 9.0 * s;
        let text_x = self.cursor.left() + marker_room;
        let text_width = self.cursor.content_width - marker_room;
        for (i, step) in self.labels().folding_steps.iter().enumerate() {
            let block = TextBlock::wrap(step, text_width, step_style);
            let height = block.height().max(2.0 * painting::NUMBER_RADIUS) + 4.0 * s;
            self.ensure_space(height);
            let cy = self.cursor.y + block.line_height() / 2.0;
            numbered_circle(
                self.canvas,
                self.cursor.left() + painting::NUMBER_RADIUS,
                cy,
                &(i + 1).to_string(),
                accent,
                Color::WHITE,
            );
            painting::draw_block(self.canvas, &block, text_x, self.cursor.y, TextAlign::Left);
            self.advance(height);
        }
    }
}

/// Joins size variants into a single line such as `Small 4,50 € · Large 6,90 €`.
pub(crate) fn sizes_line<C: Canvas + ?Sized>(frame: &Frame<'_, C>, item: &MenuItem) -> Option<String> {
    if item.extras.sizes.is_empty() {
        return None;
    }
    let parts: Vec<String> = item
        .extras
        .sizes
        .iter()
        .map(|s| format!("{} {}", s.label, frame.price(s.price)))
        .collect();
    Some(parts.join(" · "))
}

pub(crate) fn add_ons_line<C: Canvas + ?Sized>(frame: &Frame<'_, C>, item: &MenuItem) -> Option<String> {
    if item.extras.add_ons.is_empty() {
        return None;
    }
    let parts: Vec<String> = item
        .extras
        .add_ons
        .iter()
        .map(|a| format!("+ {} {}", a.name, frame.price(a.price)))
        .collect();
    Some(parts.join(", "))
}

/// Allergen legend entries such as `A Gluten`.
pub(crate) fn legend_entries(allergens: &[&Allergen]) -> String {
    allergens
        .iter()
        .map(|a| format!("{} {}", a.code, a.name))
        .collect::<Vec<_>>()
        .join("  ·  ")
}

pub(crate) fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}


#[cfg(test)]
mod tests {
    use super::test_support::request;
    use super::*;
    use carta_render_core::RecordingCanvas;

    #[test]
    fn test_header_reservation_covers_one_block() {
        let request = request(Vec::new(), Vec::new());
        let config = EngineConfig::default();
        let mut canvas = RecordingCanvas::new(210.0, 297.0);
        let mut f = Frame::new(&mut canvas, &request, &config, 20.0);
        f.advance(100.0);

        // Header plus a block taller than the page: one break, then the
        // block is placed under the header without a second one.
        assert!(f.reserve_header(10.0, 400.0));
        assert!(!f.ensure_space(400.0));
        f.advance(50.0);
        assert!(f.ensure_space(400.0));
        assert_eq!(f.cursor.page_breaks(), 2);
    }
}
