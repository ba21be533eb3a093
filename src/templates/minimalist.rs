//! Airy single column. Hairline dotted separators between items, disclosure
//! arrows on category headers and one-letter diet marks.

use super::{Frame, legend_entries};
use carta_layout::{BlockEstimate, TextBlock, line_height, text_width};
use carta_render_core::Canvas;
use carta_render_core::painting::{
    accent_bar, accordion_arrow, baseline, clock, dotted_separator, draw_aligned, draw_block, pill, pill_height,
    pill_width,
};
use carta_style::{FontFace, Palette, TextAlign, TextStyle};
use carta_types::{Color, MenuItem, Rect};

pub(crate) const MARGIN: f32 = 22.0;

const NAME_SIZE: f32 = 22.0;
const QUOTE_SIZE: f32 = 10.0;
const CATEGORY_SIZE: f32 = 11.0;
const ITEM_NAME_SIZE: f32 = 10.5;
const DESCRIPTION_SIZE: f32 = 8.5;
const DETAIL_SIZE: f32 = 7.5;
const DIET_SIZE: f32 = 6.0;
const ARROW: f32 = 2.8;
const QUOTE_INDENT: f32 = 5.0;
const SEPARATOR_GAP: f32 = 4.0;
const CATEGORY_GAP: f32 = 10.0;

struct ItemPlan {
    name: TextBlock,
    price: String,
    diet: Vec<(String, Color)>,
    description: TextBlock,
    prep: Option<String>,
    allergens: TextBlock,
}

impl ItemPlan {
    fn new<C: Canvas + ?Sized>(f: &Frame<'_, C>, item: &MenuItem) -> Self {
        let p = &f.palette;
        let labels = f.labels();
        let width = f.cursor.content_width;
        let name_style = TextStyle::new(FontFace::Helvetica, ITEM_NAME_SIZE, p.text);
        let price = f.price(item.price);

        let diet: Vec<(String, Color)> = [
            (item.badges.vegetarian, &labels.vegetarian_short, Palette::VEGETARIAN),
            (item.badges.vegan, &labels.vegan_short, Palette::VEGAN),
        ]
        .into_iter()
        .filter(|(on, _, _)| *on)
        .map(|(_, label, color)| (label.clone(), color))
        .collect();
        let diet_width: f32 = diet
            .iter()
            .map(|(label, color)| pill_width(label, &diet_style(*color)) + 1.0)
            .sum();

        let name_room = width - text_width(&price, &name_style) - diet_width - 6.0;
        let detail_style = TextStyle::new(FontFace::Helvetica, DETAIL_SIZE, p.muted);
        let description_style = TextStyle::new(FontFace::Helvetica, DESCRIPTION_SIZE, p.muted);
        let codes = f.allergen_codes(item);

        Self {
            name: TextBlock::wrap(f.item_name(item), name_room, name_style),
            price,
            diet,
            description: match f.item_description(item) {
                Some(text) => TextBlock::wrap(text, width, description_style),
                None => TextBlock::empty(description_style),
            },
            prep: item
                .extras
                .prep_time_minutes
                .map(|m| format!("{m} {}", labels.minutes)),
            allergens: if codes.is_empty() {
                TextBlock::empty(detail_style)
            } else {
                TextBlock::single(codes.join(" "), detail_style)
            },
        }
    }

    fn details_height(&self) -> f32 {
        if self.prep.is_some() || !self.allergens.is_empty() {
            line_height(DETAIL_SIZE)
        } else {
            0.0
        }
    }

    fn height(&self) -> f32 {
        BlockEstimate::new()
            .text(&self.name)
            .gap(1.0)
            .text(&self.description)
            .gap(self.details_height())
            .gap(2.0 * SEPARATOR_GAP)
            .height()
    }
}

fn diet_style(color: Color) -> TextStyle {
    TextStyle::new(FontFace::HelveticaBold, DIET_SIZE, color)
}

fn category_header_height() -> f32 {
    line_height(CATEGORY_SIZE) + 5.0
}

pub(crate) fn render_menu<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    draw_header(f);

    if f.sections.is_empty() {
        let style = TextStyle::new(FontFace::Helvetica, 10.0, f.palette.muted);
        f.empty_notice(style, TextAlign::Left);
        return;
    }

    let sections = f.sections.clone();
    for section in &sections {
        let plans: Vec<ItemPlan> = section.items.iter().map(|&item| ItemPlan::new(f, item)).collect();
        let first = plans.first().map_or(0.0, ItemPlan::height);
        f.reserve_header(category_header_height(), first);
        let name = f.category_name(section.category).to_uppercase();
        draw_category_header(f, &name);

        for plan in &plans {
            f.ensure_space(plan.height());
            draw_item(f, plan);
        }
        f.advance(CATEGORY_GAP);
    }

    draw_allergen_legend(f);
}

fn draw_header<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let left = f.cursor.left();
    let width = f.cursor.content_width;
    let name = TextBlock::wrap(
        f.restaurant_name(),
        width,
        TextStyle::new(FontFace::Helvetica, NAME_SIZE, f.palette.text),
    );
    f.flow_block(&name, left, TextAlign::Left);

    if let Some(address) = f.address() {
        let block = TextBlock::wrap(address, width, TextStyle::new(FontFace::Helvetica, 9.0, f.palette.muted));
        f.advance(1.0);
        f.flow_block(&block, left, TextAlign::Left);
    }

    if let Some(quote) = f.philosophy() {
        let block = TextBlock::wrap(
            quote,
            width - QUOTE_INDENT,
            TextStyle::new(FontFace::HelveticaOblique, QUOTE_SIZE, f.palette.muted),
        );
        f.advance(6.0);
        f.ensure_space(block.height());
        accent_bar(f.canvas, left, f.cursor.y, block.height(), f.palette.accent);
        f.flow_block(&block, left + QUOTE_INDENT, TextAlign::Left);
    }
    f.advance(14.0);
}

fn draw_category_header<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, name: &str) {
    let style = TextStyle::new(FontFace::HelveticaBold, CATEGORY_SIZE, f.palette.text);
    let block = TextBlock::single(name, style);
    let left = f.cursor.left();
    let cy = f.cursor.y + block.line_height() / 2.0;
    accordion_arrow(f.canvas, left, cy, ARROW, true, f.palette.primary);
    f.flow_block(&block, left + ARROW + 2.5, TextAlign::Left);
    f.advance(5.0);
}

fn draw_item<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, plan: &ItemPlan) {
    let top = f.cursor.y;
    let (left, right) = (f.cursor.left(), f.cursor.right());
    let p = f.palette;

    let name_height = draw_block(f.canvas, &plan.name, left, top, TextAlign::Left);
    let first_baseline = baseline(top, &plan.name.style);
    draw_aligned(f.canvas, &plan.price, right, first_baseline, TextAlign::Right, &plan.name.style);

    let first_line = plan.name.lines.first().map(String::as_str).unwrap_or_default();
    let mut x = left + text_width(first_line, &plan.name.style) + 2.0;
    for (label, color) in &plan.diet {
        let style = diet_style(*color);
        let pill_top = top + (plan.name.line_height() - pill_height(&style)) / 2.0;
        x += pill(f.canvas, x, pill_top, label, &style, color.lighten(0.8));
    }

    let mut y = top + name_height + 1.0;
    y += draw_block(f.canvas, &plan.description, left, y, TextAlign::Left);

    if plan.details_height() > 0.0 {
        let style = TextStyle::new(FontFace::Helvetica, DETAIL_SIZE, p.muted);
        let detail_baseline = baseline(y, &style);
        let mut x = left;
        if let Some(prep) = &plan.prep {
            let r = 1.2;
            clock(f.canvas, x + r, y + line_height(DETAIL_SIZE) / 2.0, r, p.muted);
            x += 2.0 * r + 1.2;
            x += f.text(prep, x, detail_baseline, TextAlign::Left, &style) + 4.0;
        }
        if let Some(codes) = plan.allergens.lines.first() {
            f.text(codes, x, detail_baseline, TextAlign::Left, &style);
        }
    }

    let separator_y = top + plan.height() - SEPARATOR_GAP;
    dotted_separator(f.canvas, left, right, separator_y, Palette::RULE);
    f.cursor.y = top + plan.height();
}

fn draw_allergen_legend<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let used = f.used_allergens();
    if used.is_empty() {
        return;
    }
    let entries = TextBlock::wrap(
        &legend_entries(&used),
        f.cursor.content_width,
        TextStyle::new(FontFace::Helvetica, DETAIL_SIZE, f.palette.muted),
    );
    f.ensure_space(entries.height());
    let left = f.cursor.left();
    f.flow_block(&entries, left, TextAlign::Left);
}

pub(crate) fn render_table_tent<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let s = f.scale();
    let center = f.cursor.center_x();
    let width = f.cursor.content_width;
    let (left, right) = (f.cursor.left(), f.cursor.right());

    f.advance(6.0 * s);
    let name = TextBlock::wrap(
        f.restaurant_name(),
        width,
        TextStyle::new(FontFace::Helvetica, 17.0 * s, f.palette.text),
    );
    f.flow_block(&name, center, TextAlign::Center);
    f.advance(4.0 * s);
    dotted_separator(f.canvas, left + width / 4.0, right - width / 4.0, f.cursor.y, Palette::RULE);
    f.advance(8.0 * s);

    let cta_style = TextStyle::new(FontFace::Helvetica, 9.5 * s, f.palette.muted);
    let cta = TextBlock::wrap(&f.labels().call_to_action, width - 6.0 * s, cta_style);
    let table = f.table_number().map(|n| {
        TextBlock::single(
            format!("{} {n}", f.labels().table),
            TextStyle::new(FontFace::HelveticaBold, 11.0 * s, f.palette.text),
        )
    });
    let below = cta.height() + 6.0 * s + table.as_ref().map_or(0.0, |t| t.height() + 4.0 * s);
    let qr_size = (50.0 * s).min(f.cursor.remaining() - below).max(20.0 * s);
    f.ensure_space(qr_size);
    f.qr_or_placeholder(Rect::new(center - qr_size / 2.0, f.cursor.y, qr_size, qr_size), 7.0 * s);
    f.advance(qr_size + 6.0 * s);

    f.ensure_space(below);
    let arrow = ARROW * s;
    let first_width = cta.lines.first().map_or(0.0, |l| text_width(l, &cta_style));
    let arrow_x = center - first_width / 2.0 - arrow - 2.0 * s;
    accordion_arrow(f.canvas, arrow_x, f.cursor.y + cta.line_height() / 2.0, arrow, false, f.palette.primary);
    f.flow_block(&cta, center, TextAlign::Center);
    if let Some(table) = table {
        f.advance(4.0 * s);
        f.flow_block(&table, center, TextAlign::Center);
    }
}
