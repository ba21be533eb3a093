//! Single column under a colored header band.
//!
//! Items carry an optional thumbnail on the left, the full badge set on a
//! row of pills, allergen codes and size/add-on lines. The menu ends with an
//! allergen legend.

use super::{Frame, add_ons_line, legend_entries, sizes_line};
use carta_layout::{BlockEstimate, TextBlock, line_height, text_width, truncate_to_width};
use carta_render_core::painting::{
    FrameStyle, baseline, clock, draw_aligned, draw_block, frame, pill, pill_height, rect, solid_separator,
    spice_row,
};
use carta_render_core::{Canvas, PaintMode};
use carta_style::{FontFace, Palette, TextAlign, TextStyle};
use carta_types::{Color, ImageData, MenuItem, Rect};

pub(crate) const MARGIN: f32 = 15.0;

const HEADER_HEIGHT: f32 = 40.0;
const HEADER_IMAGE: f32 = 28.0;
const NAME_SIZE: f32 = 24.0;
const ADDRESS_SIZE: f32 = 10.0;
const CATEGORY_SIZE: f32 = 16.0;
const ITEM_NAME_SIZE: f32 = 11.0;
const DESCRIPTION_SIZE: f32 = 9.0;
const ALLERGEN_SIZE: f32 = 7.5;
const BADGE_SIZE: f32 = 7.0;
const EXTRAS_SIZE: f32 = 8.0;
const THUMBNAIL: f32 = 18.0;
const THUMBNAIL_GAP: f32 = 4.0;
const PRICE_GAP: f32 = 4.0;
const ICON_ROW: f32 = 4.0;
const ITEM_GAP: f32 = 4.0;
const CATEGORY_RULE_GAP: f32 = 2.0;
const CATEGORY_GAP: f32 = 4.0;

struct Badge {
    label: String,
    fill: Color,
}

/// Everything one item prints, measured for the column it will occupy.
struct ItemPlan<'a> {
    thumbnail: Option<&'a ImageData>,
    text_x: f32,
    name: TextBlock,
    price: String,
    price_style: TextStyle,
    badges: Vec<Badge>,
    badge_style: TextStyle,
    description: TextBlock,
    allergens: TextBlock,
    extras: Vec<TextBlock>,
    spice: u8,
    prep_minutes: Option<u32>,
}

impl<'a> ItemPlan<'a> {
    fn new<C: Canvas + ?Sized>(f: &Frame<'a, C>, item: &'a MenuItem) -> Self {
        let p = &f.palette;
        let thumbnail = item.image.as_ref();
        let indent = if thumbnail.is_some() { THUMBNAIL + THUMBNAIL_GAP } else { 0.0 };
        let text_x = f.cursor.left() + indent;
        let width = f.cursor.content_width - indent;

        let price = f.price(item.price);
        let price_style = TextStyle::new(FontFace::HelveticaBold, ITEM_NAME_SIZE, p.price);
        let name_width = width - text_width(&price, &price_style) - PRICE_GAP;
        let name = TextBlock::wrap(
            f.item_name(item),
            name_width,
            TextStyle::new(FontFace::HelveticaBold, ITEM_NAME_SIZE, p.text),
        );

        let labels = f.labels();
        let mut badges = Vec::new();
        for (on, label, fill) in [
            (item.badges.special, &labels.special, p.accent),
            (item.badges.popular, &labels.popular, Palette::HOT),
            (item.badges.vegetarian, &labels.vegetarian, Palette::VEGETARIAN),
            (item.badges.vegan, &labels.vegan, Palette::VEGAN),
        ] {
            if on {
                badges.push(Badge {
                    label: label.clone(),
                    fill,
                });
            }
        }

        let muted = TextStyle::new(FontFace::Helvetica, DESCRIPTION_SIZE, p.muted);
        let description = match f.item_description(item) {
            Some(text) => TextBlock::wrap(text, width, muted),
            None => TextBlock::empty(muted),
        };

        let allergen_style = TextStyle::new(FontFace::HelveticaOblique, ALLERGEN_SIZE, p.muted);
        let codes = f.allergen_codes(item);
        let allergens = if codes.is_empty() {
            TextBlock::empty(allergen_style)
        } else {
            TextBlock::wrap(
                &format!("{} {}", labels.allergens_prefix, codes.join(", ")),
                width,
                allergen_style,
            )
        };

        let extras_style = TextStyle::new(FontFace::Helvetica, EXTRAS_SIZE, p.text);
        let extras = [sizes_line(f, item), add_ons_line(f, item)]
            .into_iter()
            .flatten()
            .map(|line| TextBlock::wrap(&line, width, extras_style))
            .collect();

        Self {
            thumbnail,
            text_x,
            name,
            price,
            price_style,
            badges,
            badge_style: TextStyle::new(FontFace::HelveticaBold, BADGE_SIZE, Color::WHITE),
            description,
            allergens,
            extras,
            spice: item.extras.spice_level(),
            prep_minutes: item.extras.prep_time_minutes,
        }
    }

    fn has_icons(&self) -> bool {
        self.spice > 0 || self.prep_minutes.is_some()
    }

    fn text_height(&self) -> f32 {
        self.extras
            .iter()
            .fold(
                BlockEstimate::new()
                    .text(&self.name)
                    .gap(0.5)
                    .gap_if(!self.badges.is_empty(), pill_height(&self.badge_style) + 1.5)
                    .text(&self.description)
                    .text(&self.allergens),
                |est, block| est.text(block),
            )
            .gap_if(self.has_icons(), ICON_ROW)
            .height()
    }

    fn height(&self) -> f32 {
        let thumb = if self.thumbnail.is_some() { THUMBNAIL } else { 0.0 };
        BlockEstimate::new()
            .gap(self.text_height())
            .at_least(thumb)
            .gap(ITEM_GAP)
            .height()
    }
}

fn category_header_height() -> f32 {
    line_height(CATEGORY_SIZE) + CATEGORY_RULE_GAP + CATEGORY_GAP
}

pub(crate) fn render_menu<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    draw_header(f);

    if f.sections.is_empty() {
        let style = TextStyle::new(FontFace::HelveticaOblique, 11.0, f.palette.muted);
        f.empty_notice(style, TextAlign::Center);
        return;
    }

    let sections = f.sections.clone();
    for section in &sections {
        let plans: Vec<ItemPlan<'_>> = section.items.iter().map(|&item| ItemPlan::new(f, item)).collect();
        let first = plans.first().map_or(0.0, ItemPlan::height);
        f.reserve_header(category_header_height(), first);
        let name = f.category_name(section.category);
        draw_category_header(f, name);

        for plan in &plans {
            f.ensure_space(plan.height());
            draw_item(f, plan);
        }
        f.advance(CATEGORY_GAP);
    }

    draw_allergen_legend(f);
}

fn draw_header<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let request = f.request;
    let width = f.cursor.page_width;
    f.canvas.set_fill_color(f.palette.primary);
    rect(f.canvas, Rect::new(0.0, 0.0, width, HEADER_HEIGHT), PaintMode::Fill);

    let image_top = (HEADER_HEIGHT - HEADER_IMAGE) / 2.0;
    let mut reserved = 0.0;
    if let Some(logo) = request.restaurant.logo.as_ref() {
        let area = Rect::new(f.cursor.left(), image_top, HEADER_IMAGE, HEADER_IMAGE);
        f.try_image(logo, area, "logo");
        reserved = HEADER_IMAGE + 4.0;
    }
    if let Some(qr) = f.qr_code() {
        let area = Rect::new(f.cursor.right() - HEADER_IMAGE, image_top, HEADER_IMAGE, HEADER_IMAGE);
        f.try_image(qr, area, "QR code");
        reserved = HEADER_IMAGE + 4.0;
    }

    let room = f.cursor.content_width - 2.0 * reserved;
    let name_style = TextStyle::new(FontFace::HelveticaBold, NAME_SIZE, Color::WHITE);
    let name = truncate_to_width(f.restaurant_name(), room, &name_style);
    let center = f.cursor.center_x();
    let name_baseline = if f.address().is_some() { 20.0 } else { 24.0 };
    f.text(&name, center, name_baseline, TextAlign::Center, &name_style);

    if let Some(address) = f.address() {
        let style = TextStyle::new(FontFace::Helvetica, ADDRESS_SIZE, Color::WHITE.darken(0.08));
        let address = truncate_to_width(address, room, &style);
        f.text(&address, center, 30.0, TextAlign::Center, &style);
    }

    f.cursor.y = HEADER_HEIGHT + 10.0;
}

fn draw_category_header<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, name: &str) {
    let style = TextStyle::new(FontFace::HelveticaBold, CATEGORY_SIZE, f.palette.text);
    let block = TextBlock::single(name, style);
    let left = f.cursor.left();
    f.flow_block(&block, left, TextAlign::Left);

    let rule_end = (left + text_width(name, &style) + 10.0).min(f.cursor.right());
    let y = f.cursor.y + CATEGORY_RULE_GAP / 2.0;
    solid_separator(f.canvas, left, rule_end, y, 0.8, f.palette.accent);
    f.advance(CATEGORY_RULE_GAP + CATEGORY_GAP);
}

fn draw_item<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, plan: &ItemPlan<'_>) {
    let top = f.cursor.y;
    if let Some(image) = plan.thumbnail {
        let area = Rect::new(f.cursor.left(), top, THUMBNAIL, THUMBNAIL);
        f.try_image(image, area, "item image");
    }

    let x = plan.text_x;
    let mut y = top;
    let price_baseline = baseline(y, &plan.name.style);
    draw_aligned(f.canvas, &plan.price, f.cursor.right(), price_baseline, TextAlign::Right, &plan.price_style);
    y += draw_block(f.canvas, &plan.name, x, y, TextAlign::Left) + 0.5;

    if !plan.badges.is_empty() {
        let mut bx = x;
        for badge in &plan.badges {
            bx += pill(f.canvas, bx, y, &badge.label, &plan.badge_style, badge.fill);
        }
        y += pill_height(&plan.badge_style) + 1.5;
    }

    y += draw_block(f.canvas, &plan.description, x, y, TextAlign::Left);
    y += draw_block(f.canvas, &plan.allergens, x, y, TextAlign::Left);
    for block in &plan.extras {
        y += draw_block(f.canvas, block, x, y, TextAlign::Left);
    }

    if plan.has_icons() {
        let cy = y + ICON_ROW / 2.0;
        let mut ix = x;
        if plan.spice > 0 {
            ix += spice_row(f.canvas, ix, cy, plan.spice, 2.4, Palette::HOT) + 2.0;
        }
        if let Some(minutes) = plan.prep_minutes {
            clock(f.canvas, ix + 1.3, cy, 1.3, f.palette.muted);
            let style = TextStyle::new(FontFace::Helvetica, ALLERGEN_SIZE, f.palette.muted);
            let label = format!("{minutes} {}", f.labels().minutes);
            f.text(&label, ix + 3.6, cy + 1.0, TextAlign::Left, &style);
        }
    }

    f.cursor.y = top + plan.height();
}

fn draw_allergen_legend<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let used = f.used_allergens();
    if used.is_empty() {
        return;
    }
    let title = TextBlock::single(
        f.labels().allergens_title.as_str(),
        TextStyle::new(FontFace::HelveticaBold, 10.0, f.palette.text),
    );
    let entries = TextBlock::wrap(
        &legend_entries(&used),
        f.cursor.content_width,
        TextStyle::new(FontFace::Helvetica, ALLERGEN_SIZE, f.palette.muted),
    );
    let height = BlockEstimate::new().gap(3.0).text(&title).gap(1.0).text(&entries).height();
    f.ensure_space(height);

    let (left, right) = (f.cursor.left(), f.cursor.right());
    solid_separator(f.canvas, left, right, f.cursor.y + 1.0, 0.3, Palette::RULE);
    f.advance(3.0);
    f.flow_block(&title, left, TextAlign::Left);
    f.advance(1.0);
    f.flow_block(&entries, left, TextAlign::Left);
}

pub(crate) fn render_table_tent<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let s = f.scale();
    let page = Rect::new(0.0, 0.0, f.cursor.page_width, f.cursor.page_height);
    frame(f.canvas, page.inset(4.0 * s), FrameStyle::Plain, f.palette.primary);

    let width = f.cursor.content_width;
    let center = f.cursor.center_x();
    let name = TextBlock::wrap(
        f.restaurant_name(),
        width,
        TextStyle::new(FontFace::HelveticaBold, 18.0 * s, f.palette.primary),
    );
    f.advance(2.0 * s);
    f.flow_block(&name, center, TextAlign::Center);
    f.advance(4.0 * s);

    let cta = TextBlock::wrap(
        &f.labels().call_to_action,
        width,
        TextStyle::new(FontFace::Helvetica, 11.0 * s, f.palette.text),
    );
    let table = f.table_number().map(|n| {
        TextBlock::single(
            format!("{} {n}", f.labels().table),
            TextStyle::new(FontFace::HelveticaBold, 14.0 * s, f.palette.accent),
        )
    });
    let below = cta.height() + 4.0 * s + table.as_ref().map_or(0.0, |t| t.height() + 3.0 * s);
    let qr_size = (60.0 * s).min(f.cursor.remaining() - below).max(20.0 * s);
    f.ensure_space(qr_size);
    let area = Rect::new(center - qr_size / 2.0, f.cursor.y, qr_size, qr_size);
    f.qr_or_placeholder(area, 7.0 * s);
    f.advance(qr_size + 4.0 * s);

    f.ensure_space(below);
    f.flow_block(&cta, center, TextAlign::Center);
    if let Some(table) = table {
        f.advance(3.0 * s);
        f.flow_block(&table, center, TextAlign::Center);
    }

    f.folding_instructions(
        TextStyle::new(FontFace::HelveticaBold, 13.0 * s, f.palette.primary),
        TextStyle::new(FontFace::Helvetica, 9.0 * s, f.palette.text),
        f.palette.primary,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::templates::test_support::{euros, request};
    use carta_layout::wrap_text;
    use carta_render_core::RecordingCanvas;
    use carta_types::Category;

    const WORDS: &str = "slow roasted heirloom carrots with whipped goat cheese toasted hazelnuts \
        wild honey thyme crumbs pickled shallots brown butter and a little lemon zest served warm \
        alongside grilled sourdough and a small green salad dressed with cider vinaigrette";

    /// A description that wraps to exactly `lines` lines in this layout.
    fn description_with_lines(lines: usize) -> String {
        let style = TextStyle::new(FontFace::Helvetica, DESCRIPTION_SIZE, Color::BLACK);
        let width = 210.0 - 2.0 * MARGIN;
        let mut text = String::new();
        for word in WORDS.split_whitespace().cycle() {
            let candidate = if text.is_empty() { word.to_string() } else { format!("{text} {word}") };
            if wrap_text(&candidate, width, &style).len() > lines {
                break;
            }
            text = candidate;
        }
        assert_eq!(wrap_text(&text, width, &style).len(), lines);
        text
    }

    #[test]
    fn test_wrapped_description_is_fully_reserved() {
        let description = description_with_lines(4);
        let req = request(
            vec![Category::new(1, "Starters", 1)],
            vec![MenuItem::new(1, 1, "Carrots", euros(850)).with_description(description)],
        );
        let config = EngineConfig::default();
        let mut canvas = RecordingCanvas::new(210.0, 297.0);
        let mut f = Frame::new(&mut canvas, &req, &config, MARGIN);

        let plan = ItemPlan::new(&f, f.sections[0].items[0]);
        assert_eq!(plan.description.lines.len(), 4);
        let one_line = line_height(ITEM_NAME_SIZE) + 0.5 + line_height(DESCRIPTION_SIZE) + ITEM_GAP;
        let expected = line_height(ITEM_NAME_SIZE) + 0.5 + 4.0 * line_height(DESCRIPTION_SIZE) + ITEM_GAP;
        assert!((plan.height() - expected).abs() < 1e-3);

        // Leave more room than a one-line block needs but less than the real one.
        f.cursor.y = f.cursor.bottom() - (one_line + expected) / 2.0;
        assert!(f.ensure_space(plan.height()));
        draw_item(&mut f, &plan);
        drop(f);

        assert_eq!(canvas.page_count(), 2);
        assert!(canvas.texts().all(|t| t.page == 1));
    }

    #[test]
    fn test_badges_become_pills_in_order() {
        let item = MenuItem::new(1, 1, "Chili", euros(1200)).with_badges(carta_types::Badges {
            special: true,
            popular: false,
            vegetarian: true,
            vegan: true,
        });
        let req = request(vec![Category::new(1, "Mains", 1)], vec![item]);
        let config = EngineConfig::default();
        let mut canvas = RecordingCanvas::new(210.0, 297.0);
        let f = Frame::new(&mut canvas, &req, &config, MARGIN);

        let plan = ItemPlan::new(&f, f.sections[0].items[0]);
        let labels: Vec<&str> = plan.badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Special", "Vegetarian", "Vegan"]);
    }

    #[test]
    fn test_thumbnail_sets_minimum_height() {
        let item = MenuItem {
            image: Some(ImageData::new(vec![1u8, 2, 3])),
            ..MenuItem::new(1, 1, "Soup", euros(450))
        };
        let req = request(vec![Category::new(1, "Starters", 1)], vec![item]);
        let config = EngineConfig::default();
        let mut canvas = RecordingCanvas::new(210.0, 297.0);
        let f = Frame::new(&mut canvas, &req, &config, MARGIN);

        let plan = ItemPlan::new(&f, f.sections[0].items[0]);
        assert!((plan.height() - (THUMBNAIL + ITEM_GAP)).abs() < 1e-4);
        assert!((plan.text_x - (MARGIN + THUMBNAIL + THUMBNAIL_GAP)).abs() < 1e-4);
    }
}
