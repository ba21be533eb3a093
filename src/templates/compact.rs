//! Dense numbered list. Every price sits at the right margin behind a run
//! of leader dots; size variants and add-ons get their own dotted rows.

use super::{Frame, legend_entries};
use carta_layout::{BlockEstimate, TextBlock, line_height, text_width};
use carta_render_core::Canvas;
use carta_render_core::painting::{
    MIN_LEADER_GAP, NUMBER_RADIUS, baseline, draw_block, leader_dots, numbered_circle, solid_separator,
    spice_row,
};
use carta_style::{FontFace, Palette, TextAlign, TextStyle};
use carta_types::{Color, MenuItem, Rect};

pub(crate) const MARGIN: f32 = 10.0;

const NAME_SIZE: f32 = 8.5;
const DESCRIPTION_SIZE: f32 = 7.0;
const SUB_SIZE: f32 = 7.5;
const TAG_SIZE: f32 = 6.5;
const CATEGORY_SIZE: f32 = 10.5;
const SPICE_SIZE: f32 = 1.8;
const NUMBER_COLUMN: f32 = 2.0 * NUMBER_RADIUS + 2.5;
const SUB_INDENT: f32 = 3.0;
const ITEM_GAP: f32 = 2.0;
const CATEGORY_GAP: f32 = 3.0;

/// Hands out item numbers. Explicit numbers are printed as given and leave
/// the running count untouched.
#[derive(Debug, Default)]
pub(crate) struct ItemNumbers {
    next: u32,
}

impl ItemNumbers {
    pub(crate) fn label_for(&mut self, item: &MenuItem) -> String {
        match item.extras.item_number.as_deref().map(str::trim) {
            Some(explicit) if !explicit.is_empty() => explicit.to_string(),
            _ => {
                self.next += 1;
                self.next.to_string()
            }
        }
    }
}

/// A dotted row: label on the left, price on the right.
struct PricedRow {
    label: String,
    price: String,
}

struct ItemPlan {
    number: String,
    name: TextBlock,
    price: String,
    tags: Vec<(String, Color)>,
    spice: u8,
    description: TextBlock,
    rows: Vec<PricedRow>,
    allergens: TextBlock,
}

impl ItemPlan {
    fn new<C: Canvas + ?Sized>(f: &Frame<'_, C>, item: &MenuItem, number: String) -> Self {
        let p = &f.palette;
        let labels = f.labels();
        let width = f.cursor.content_width - NUMBER_COLUMN;
        let name_style = TextStyle::new(FontFace::HelveticaBold, NAME_SIZE, p.text);
        let price = f.price(item.price);

        let mut tags = Vec::new();
        for (on, label, color) in [
            (item.badges.special, &labels.special, p.accent),
            (item.badges.vegetarian, &labels.vegetarian_short, Palette::VEGETARIAN),
            (item.badges.vegan, &labels.vegan_short, Palette::VEGAN),
        ] {
            if on {
                tags.push((label.clone(), color));
            }
        }
        let spice = item.extras.spice_level();

        let name_room = width - text_width(&price, &name_style) - suffix_width(&tags, spice);
        let name = TextBlock::wrap(f.item_name(item), name_room, name_style);

        let description_style = TextStyle::new(FontFace::Helvetica, DESCRIPTION_SIZE, p.muted);
        let description = match f.item_description(item) {
            Some(text) => TextBlock::wrap(text, width, description_style),
            None => TextBlock::empty(description_style),
        };

        let rows = item
            .extras
            .sizes
            .iter()
            .map(|s| PricedRow {
                label: s.label.clone(),
                price: f.price(s.price),
            })
            .chain(item.extras.add_ons.iter().map(|a| PricedRow {
                label: format!("+ {}", a.name),
                price: f.price(a.price),
            }))
            .collect();

        let codes = f.allergen_codes(item);
        let allergen_style = TextStyle::new(FontFace::HelveticaOblique, TAG_SIZE, p.muted);
        let allergens = if codes.is_empty() {
            TextBlock::empty(allergen_style)
        } else {
            TextBlock::wrap(&format!("({})", codes.join(", ")), width, allergen_style)
        };

        Self {
            number,
            name,
            price,
            tags,
            spice,
            description,
            rows,
            allergens,
        }
    }

    fn height(&self) -> f32 {
        BlockEstimate::new()
            .text(&self.name)
            .text(&self.description)
            .gap(self.rows.len() as f32 * line_height(SUB_SIZE))
            .text(&self.allergens)
            .at_least(2.0 * NUMBER_RADIUS)
            .gap(ITEM_GAP)
            .height()
    }
}

fn tag_style(color: Color) -> TextStyle {
    TextStyle::new(FontFace::HelveticaBold, TAG_SIZE, color)
}

/// Width of the tags and chilis printed after the name, plus the minimum
/// leader gap.
fn suffix_width(tags: &[(String, Color)], spice: u8) -> f32 {
    let tags: f32 = tags
        .iter()
        .map(|(label, color)| text_width(label, &tag_style(*color)) + 1.2)
        .sum();
    let chilis = f32::from(spice) * (SPICE_SIZE + 0.6);
    tags + chilis + 1.0 + MIN_LEADER_GAP
}

fn category_header_height() -> f32 {
    line_height(CATEGORY_SIZE) + 1.5 + CATEGORY_GAP
}

pub(crate) fn render_menu<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    draw_header(f);

    if f.sections.is_empty() {
        let style = TextStyle::new(FontFace::HelveticaOblique, 9.0, f.palette.muted);
        f.empty_notice(style, TextAlign::Left);
        return;
    }

    let mut numbers = ItemNumbers::default();
    let sections = f.sections.clone();
    for section in &sections {
        let plans: Vec<ItemPlan> = section
            .items
            .iter()
            .map(|&item| ItemPlan::new(f, item, numbers.label_for(item)))
            .collect();
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
    let (left, right) = (f.cursor.left(), f.cursor.right());
    let name_style = TextStyle::new(FontFace::HelveticaBold, 16.0, f.palette.text);
    let address_style = TextStyle::new(FontFace::Helvetica, 8.0, f.palette.muted);
    let address_room = f.address().map_or(0.0, |a| text_width(a, &address_style) + 6.0);
    let name = TextBlock::wrap(f.restaurant_name(), f.cursor.content_width - address_room, name_style);

    let top = f.cursor.y;
    if let Some(address) = f.address() {
        let y = baseline(top, &name_style);
        f.text(address, right, y, TextAlign::Right, &address_style);
    }
    f.flow_block(&name, left, TextAlign::Left);
    f.advance(1.5);
    solid_separator(f.canvas, left, right, f.cursor.y, 1.0, f.palette.primary);
    f.advance(5.0);
}

fn draw_category_header<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, name: &str) {
    let block = TextBlock::single(
        name,
        TextStyle::new(FontFace::HelveticaBold, CATEGORY_SIZE, f.palette.primary),
    );
    let (left, right) = (f.cursor.left(), f.cursor.right());
    f.flow_block(&block, left, TextAlign::Left);
    f.advance(0.5);
    solid_separator(f.canvas, left, right, f.cursor.y, 0.4, f.palette.primary);
    f.advance(1.0 + CATEGORY_GAP);
}

fn draw_item<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, plan: &ItemPlan) {
    let top = f.cursor.y;
    let left = f.cursor.left();
    let right = f.cursor.right();
    let text_x = left + NUMBER_COLUMN;
    let p = f.palette;

    numbered_circle(
        f.canvas,
        left + NUMBER_RADIUS,
        top + plan.name.line_height() / 2.0,
        &plan.number,
        p.primary,
        Color::WHITE,
    );

    let name_height = draw_block(f.canvas, &plan.name, text_x, top, TextAlign::Left);
    let last_line = plan.name.lines.last().map(String::as_str).unwrap_or_default();
    let last_top = top + name_height - plan.name.line_height();
    let y = baseline(last_top, &plan.name.style);

    let mut x = text_x + text_width(last_line, &plan.name.style) + 1.0;
    for (label, color) in &plan.tags {
        x += f.text(label, x, y, TextAlign::Left, &tag_style(*color)) + 1.2;
    }
    if plan.spice > 0 {
        let cy = last_top + plan.name.line_height() / 2.0;
        x += spice_row(f.canvas, x, cy, plan.spice, SPICE_SIZE, Palette::HOT);
    }

    let price_style = TextStyle::new(FontFace::HelveticaBold, NAME_SIZE, p.price);
    let price_width = f.text(&plan.price, right, y, TextAlign::Right, &price_style);
    leader_dots(f.canvas, x, right - price_width - 1.0, y, Palette::RULE.darken(0.2));

    f.cursor.y = top + name_height;
    f.flow_block(&plan.description, text_x, TextAlign::Left);

    let sub = TextStyle::new(FontFace::Helvetica, SUB_SIZE, p.text);
    for row in &plan.rows {
        let y = baseline(f.cursor.y, &sub);
        let label_width = f.text(&row.label, text_x + SUB_INDENT, y, TextAlign::Left, &sub);
        let price_width = f.text(&row.price, right, y, TextAlign::Right, &sub);
        leader_dots(
            f.canvas,
            text_x + SUB_INDENT + label_width + 1.0,
            right - price_width - 1.0,
            y,
            Palette::RULE,
        );
        f.advance(line_height(SUB_SIZE));
    }

    f.flow_block(&plan.allergens, text_x, TextAlign::Left);
    f.cursor.y = top + plan.height();
}

fn draw_allergen_legend<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let used = f.used_allergens();
    if used.is_empty() {
        return;
    }
    let entries = TextBlock::wrap(
        &format!("{}: {}", f.labels().allergens_title, legend_entries(&used)),
        f.cursor.content_width,
        TextStyle::new(FontFace::Helvetica, TAG_SIZE, f.palette.muted),
    );
    f.ensure_space(entries.height() + 3.0);
    let (left, right) = (f.cursor.left(), f.cursor.right());
    solid_separator(f.canvas, left, right, f.cursor.y + 1.0, 0.3, Palette::RULE);
    f.advance(3.0);
    f.flow_block(&entries, left, TextAlign::Left);
}

pub(crate) fn render_table_tent<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let s = f.scale();
    let (left, right) = (f.cursor.left(), f.cursor.right());
    let center = f.cursor.center_x();
    let width = f.cursor.content_width;

    let name = TextBlock::wrap(
        &f.restaurant_name().to_uppercase(),
        width,
        TextStyle::new(FontFace::HelveticaBold, 15.0 * s, f.palette.text),
    );
    f.flow_block(&name, center, TextAlign::Center);
    f.advance(2.0 * s);
    solid_separator(f.canvas, left, right, f.cursor.y, 0.8 * s, f.palette.primary);
    f.advance(5.0 * s);

    let table = f.table_number().map(|n| {
        TextBlock::single(
            format!("{} {n}", f.labels().table).to_uppercase(),
            TextStyle::new(FontFace::HelveticaBold, 12.0 * s, f.palette.primary),
        )
    });
    let cta = TextBlock::wrap(
        &f.labels().call_to_action,
        width,
        TextStyle::new(FontFace::Helvetica, 9.5 * s, f.palette.text),
    );
    let below = cta.height() + 4.0 * s + table.as_ref().map_or(0.0, |t| t.height() + 3.0 * s);
    let qr_size = (58.0 * s).min(f.cursor.remaining() - below).max(20.0 * s);
    f.ensure_space(qr_size);
    f.qr_or_placeholder(Rect::new(center - qr_size / 2.0, f.cursor.y, qr_size, qr_size), 7.0 * s);
    f.advance(qr_size + 4.0 * s);

    f.ensure_space(below);
    f.flow_block(&cta, center, TextAlign::Center);
    if let Some(table) = table {
        f.advance(3.0 * s);
        f.flow_block(&table, center, TextAlign::Center);
    }
}
