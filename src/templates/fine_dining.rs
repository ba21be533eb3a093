//! Centered serif layout. Categories are regrouped into courses, each
//! header bracketed by a course motif and an ornament line.

use super::{Frame, legend_entries, trimmed};
use crate::content::MenuSection;
use carta_layout::{BlockEstimate, TextBlock};
use carta_render_core::Canvas;
use carta_render_core::painting::{FrameStyle, Motif, frame, motif, ornament_line};
use carta_style::{TextAlign, TextStyle, Typeface};
use carta_types::{MenuItem, Rect};

pub(crate) const MARGIN: f32 = 25.0;

const SERIF: Typeface = Typeface::SERIF;
const TEXT_WIDTH: f32 = 120.0;
const LOGO: f32 = 24.0;
const NAME_SIZE: f32 = 26.0;
const CATEGORY_SIZE: f32 = 16.0;
const ITEM_NAME_SIZE: f32 = 12.0;
const DESCRIPTION_SIZE: f32 = 10.0;
const PRICE_SIZE: f32 = 11.0;
const NOTE_SIZE: f32 = 9.0;
const MOTIF_SIZE: f32 = 8.0;
const MOTIF_GAP: f32 = 3.0;
const ORNAMENT_GAP: f32 = 4.0;
const ITEM_GAP: f32 = 6.0;
const COURSE_GAP: f32 = 8.0;

/// Semantic grouping of categories, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Course {
    Appetizer,
    Main,
    Dessert,
    Drinks,
    Other,
}

/// Evaluated top to bottom; the first rule with a keyword that starts a word
/// of the lowercased category name wins.
const COURSE_RULES: &[(&[&str], Course)] = &[
    (
        &["starter", "appetizer", "antipast", "soup", "salad", "small plate", "tapas", "vorspeise"],
        Course::Appetizer,
    ),
    (
        &["main", "meat", "steak", "fish", "seafood", "pasta", "grill", "pizza", "hauptgericht"],
        Course::Main,
    ),
    (&["dessert", "sweet", "cake", "ice cream", "nachspeise"], Course::Dessert),
    (
        &["drink", "wine", "beer", "beverage", "cocktail", "coffee", "tea", "getränk"],
        Course::Drinks,
    ),
];

impl Course {
    pub(crate) fn classify(category_name: &str) -> Course {
        let name = category_name.to_lowercase();
        COURSE_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| starts_word(&name, k)))
            .map_or(Course::Other, |&(_, course)| course)
    }

    fn motif(self) -> Option<Motif> {
        match self {
            Course::Appetizer => Some(Motif::Appetizer),
            Course::Main => Some(Motif::Main),
            Course::Dessert => Some(Motif::Dessert),
            Course::Drinks => Some(Motif::Drink),
            Course::Other => None,
        }
    }
}

/// True when `keyword` occurs in `name` right after a non-alphanumeric
/// character or at the start, so "tea" matches "Teas" but not "Steaks".
fn starts_word(name: &str, keyword: &str) -> bool {
    name.match_indices(keyword)
        .any(|(i, _)| name[..i].chars().next_back().is_none_or(|c| !c.is_alphanumeric()))
}

/// Sections reordered by course. Sections within a course keep their
/// relative order.
pub(crate) fn group_by_course<'a>(sections: &[MenuSection<'a>]) -> Vec<(Course, MenuSection<'a>)> {
    let mut grouped: Vec<(Course, MenuSection<'a>)> = sections
        .iter()
        .map(|s| (Course::classify(&s.category.name), s.clone()))
        .collect();
    grouped.sort_by_key(|(course, _)| *course);
    grouped
}

struct ItemPlan {
    name: TextBlock,
    description: TextBlock,
    price: TextBlock,
    notes: Vec<TextBlock>,
    allergens: TextBlock,
}

impl ItemPlan {
    fn new<C: Canvas + ?Sized>(f: &Frame<'_, C>, item: &MenuItem, width: f32) -> Self {
        let p = &f.palette;
        let labels = f.labels();
        let note_style = TextStyle::new(SERIF.italic, NOTE_SIZE, p.muted);

        let description_style = TextStyle::new(SERIF.italic, DESCRIPTION_SIZE, p.muted);
        let description = match f.item_description(item) {
            Some(text) => TextBlock::wrap(text, width, description_style),
            None => TextBlock::empty(description_style),
        };

        let notes = [
            trimmed(item.extras.wine_pairing.as_deref()).map(|w| format!("{} {w}", labels.wine_pairing)),
            trimmed(item.extras.origin.as_deref()).map(|o| format!("{}: {o}", labels.origin)),
        ]
        .into_iter()
        .flatten()
        .map(|line| TextBlock::wrap(&line, width, note_style))
        .collect();

        let codes = f.allergen_codes(item);
        let allergens = if codes.is_empty() {
            TextBlock::empty(note_style)
        } else {
            TextBlock::wrap(&codes.join(" · "), width, note_style.with_face(SERIF.regular))
        };

        Self {
            name: TextBlock::wrap(
                f.item_name(item),
                width,
                TextStyle::new(SERIF.bold, ITEM_NAME_SIZE, p.text),
            ),
            description,
            price: TextBlock::single(
                f.price(item.price),
                TextStyle::new(SERIF.regular, PRICE_SIZE, p.price),
            ),
            notes,
            allergens,
        }
    }

    fn height(&self) -> f32 {
        self.notes
            .iter()
            .fold(
                BlockEstimate::new()
                    .text(&self.name)
                    .gap(0.5)
                    .text(&self.description)
                    .gap(0.8)
                    .text(&self.price),
                |est, note| est.text(note),
            )
            .text(&self.allergens)
            .gap(ITEM_GAP)
            .height()
    }
}

fn header_height(course: Course, name: &TextBlock) -> f32 {
    BlockEstimate::new()
        .gap_if(course.motif().is_some(), MOTIF_SIZE + MOTIF_GAP)
        .text(name)
        .gap(ORNAMENT_GAP * 2.0)
        .height()
}

pub(crate) fn render_menu<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    draw_title(f);

    if f.sections.is_empty() {
        let style = TextStyle::new(SERIF.italic, 12.0, f.palette.muted);
        f.empty_notice(style, TextAlign::Center);
        return;
    }

    let width = TEXT_WIDTH.min(f.cursor.content_width);
    let header_style = TextStyle::new(SERIF.bold, CATEGORY_SIZE, f.palette.primary);
    let mut previous = None;
    for (course, section) in group_by_course(&f.sections) {
        if previous.is_some_and(|p| p != course) {
            f.advance(COURSE_GAP);
        }
        previous = Some(course);

        let header = TextBlock::wrap(f.category_name(section.category), width, header_style);
        let plans: Vec<ItemPlan> = section
            .items
            .iter()
            .map(|&item| ItemPlan::new(f, item, width))
            .collect();
        let first = plans.first().map_or(0.0, ItemPlan::height);
        f.reserve_header(header_height(course, &header), first);
        draw_category_header(f, course, &header);

        for plan in &plans {
            f.ensure_space(plan.height());
            draw_item(f, plan);
        }
    }

    draw_allergen_legend(f, width);
}

fn draw_title<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let request = f.request;
    let center = f.cursor.center_x();
    let width = f.cursor.content_width;

    if let Some(logo) = request.restaurant.logo.as_ref() {
        let area = Rect::new(center - LOGO / 2.0, f.cursor.y, LOGO, LOGO);
        if f.try_image(logo, area, "logo") {
            f.advance(LOGO + 4.0);
        }
    }

    let name = TextBlock::wrap(
        f.restaurant_name(),
        width,
        TextStyle::new(SERIF.bold, NAME_SIZE, f.palette.primary),
    );
    f.flow_block(&name, center, TextAlign::Center);
    f.advance(3.0);
    ornament_line(f.canvas, center, f.cursor.y, 60.0, f.palette.accent);
    f.advance(5.0);

    if let Some(address) = f.address() {
        let block = TextBlock::wrap(address, width, TextStyle::new(SERIF.regular, 10.0, f.palette.muted));
        f.flow_block(&block, center, TextAlign::Center);
        f.advance(2.0);
    }
    if let Some(philosophy) = f.philosophy() {
        let block = TextBlock::wrap(
            &format!("\u{201c}{philosophy}\u{201d}"),
            TEXT_WIDTH.min(width),
            TextStyle::new(SERIF.italic, 11.0, f.palette.text),
        );
        f.ensure_space(block.height());
        f.flow_block(&block, center, TextAlign::Center);
    }
    f.advance(10.0);
}

fn draw_category_header<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, course: Course, header: &TextBlock) {
    let center = f.cursor.center_x();
    if let Some(kind) = course.motif() {
        let cy = f.cursor.y + MOTIF_SIZE / 2.0;
        motif(f.canvas, kind, center, cy, MOTIF_SIZE, f.palette.accent);
        f.advance(MOTIF_SIZE + MOTIF_GAP);
    }
    f.flow_block(header, center, TextAlign::Center);
    f.advance(ORNAMENT_GAP);
    ornament_line(f.canvas, center, f.cursor.y, 40.0, f.palette.accent);
    f.advance(ORNAMENT_GAP);
}

fn draw_item<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, plan: &ItemPlan) {
    let center = f.cursor.center_x();
    let top = f.cursor.y;
    f.flow_block(&plan.name, center, TextAlign::Center);
    f.advance(0.5);
    f.flow_block(&plan.description, center, TextAlign::Center);
    f.advance(0.8);
    f.flow_block(&plan.price, center, TextAlign::Center);
    for note in &plan.notes {
        f.flow_block(note, center, TextAlign::Center);
    }
    f.flow_block(&plan.allergens, center, TextAlign::Center);
    f.cursor.y = top + plan.height();
}

fn draw_allergen_legend<C: Canvas + ?Sized>(f: &mut Frame<'_, C>, width: f32) {
    let used = f.used_allergens();
    if used.is_empty() {
        return;
    }
    let title = TextBlock::single(
        f.labels().allergens_title.as_str(),
        TextStyle::new(SERIF.bold, 10.0, f.palette.text),
    );
    let entries = TextBlock::wrap(
        &legend_entries(&used),
        width,
        TextStyle::new(SERIF.italic, 8.0, f.palette.muted),
    );
    f.ensure_space(BlockEstimate::new().gap(6.0).text(&title).gap(1.0).text(&entries).height());

    let center = f.cursor.center_x();
    ornament_line(f.canvas, center, f.cursor.y + 2.0, 30.0, f.palette.muted);
    f.advance(6.0);
    f.flow_block(&title, center, TextAlign::Center);
    f.advance(1.0);
    f.flow_block(&entries, center, TextAlign::Center);
}

pub(crate) fn render_table_tent<C: Canvas + ?Sized>(f: &mut Frame<'_, C>) {
    let s = f.scale();
    let page = Rect::new(0.0, 0.0, f.cursor.page_width, f.cursor.page_height);
    frame(f.canvas, page.inset(4.0 * s), FrameStyle::Ornate, f.palette.primary);

    let center = f.cursor.center_x();
    let width = f.cursor.content_width - 4.0 * s;
    f.advance(4.0 * s);
    let name = TextBlock::wrap(
        f.restaurant_name(),
        width,
        TextStyle::new(SERIF.bold, 18.0 * s, f.palette.primary),
    );
    f.flow_block(&name, center, TextAlign::Center);
    f.advance(3.0 * s);
    ornament_line(f.canvas, center, f.cursor.y, 40.0 * s, f.palette.accent);
    f.advance(6.0 * s);

    let cta = TextBlock::wrap(
        &f.labels().call_to_action,
        width,
        TextStyle::new(SERIF.italic, 11.0 * s, f.palette.text),
    );
    let table = f.table_number().map(|n| {
        TextBlock::single(
            format!("{} {n}", f.labels().table),
            TextStyle::new(SERIF.bold, 13.0 * s, f.palette.accent),
        )
    });
    let below = cta.height() + 4.0 * s + table.as_ref().map_or(0.0, |t| t.height() + 4.0 * s);
    let qr_size = (55.0 * s).min(f.cursor.remaining() - below).max(20.0 * s);
    f.ensure_space(qr_size);
    f.qr_or_placeholder(Rect::new(center - qr_size / 2.0, f.cursor.y, qr_size, qr_size), 7.0 * s);
    f.advance(qr_size + 4.0 * s);

    f.ensure_space(below);
    f.flow_block(&cta, center, TextAlign::Center);
    if let Some(table) = table {
        f.advance(2.0 * s);
        ornament_line(f.canvas, center, f.cursor.y, 24.0 * s, f.palette.accent);
        f.advance(2.0 * s);
        f.flow_block(&table, center, TextAlign::Center);
    }
}
