//! Ordering, filtering and text selection for menu content.

use carta_types::{Allergen, Category, MenuItem, Translation};
use itertools::Itertools;

/// A category together with the items it will print, in print order.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection<'a> {
    pub category: &'a Category,
    pub items: Vec<&'a MenuItem>,
}

/// Groups `items` under their categories.
///
/// Categories come out by ascending position. Within a category only
/// available items are kept, specials first and then by ascending position.
/// Categories left without items are dropped, as are items whose category
/// is not in `categories`. Both sorts are stable, so ties keep input order.
pub fn prepare_sections<'a>(categories: &'a [Category], items: &'a [MenuItem]) -> Vec<MenuSection<'a>> {
    let sections: Vec<MenuSection<'a>> = categories
        .iter()
        .sorted_by_key(|c| c.position)
        .filter_map(|category| {
            let visible: Vec<&MenuItem> = items
                .iter()
                .filter(|i| i.available && i.category_id == category.id)
                .sorted_by_key(|i| (!i.badges.special, i.position))
                .collect();
            if visible.is_empty() {
                log::debug!("Skipping empty category '{}'", category.name);
                None
            } else {
                Some(MenuSection {
                    category,
                    items: visible,
                })
            }
        })
        .collect();

    let orphans = items
        .iter()
        .filter(|i| !categories.iter().any(|c| c.id == i.category_id))
        .count();
    if orphans > 0 {
        log::debug!("{orphans} item(s) reference unknown categories and are not printed");
    }
    sections
}

fn matching<'a>(localized: Option<&'a Translation>, language: Option<&str>) -> Option<&'a Translation> {
    let language = language?.trim();
    localized.filter(|t| t.language.trim().eq_ignore_ascii_case(language))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// The name to print: the localized one when the translation is in the
/// requested language and not blank, else `primary`.
pub fn display_text<'a>(
    primary: &'a str,
    localized: Option<&'a Translation>,
    language: Option<&str>,
) -> &'a str {
    matching(localized, language)
        .and_then(|t| non_blank(t.name.as_deref()))
        .unwrap_or(primary)
}

/// Description counterpart of [`display_text`]. Blank descriptions count as
/// absent.
pub fn display_description<'a>(
    primary: Option<&'a str>,
    localized: Option<&'a Translation>,
    language: Option<&str>,
) -> Option<&'a str> {
    matching(localized, language)
        .and_then(|t| non_blank(t.description.as_deref()))
        .or_else(|| non_blank(primary))
        .map(str::trim)
}

/// Allergen codes of `item` in the order the item lists them. Ids missing
/// from the catalog are skipped.
pub fn allergen_codes<'a>(item: &MenuItem, catalog: &'a [Allergen]) -> Vec<&'a str> {
    item.allergens
        .iter()
        .filter_map(|id| catalog.iter().find(|a| &a.id == id))
        .map(|a| a.code.as_str())
        .collect()
}

/// Catalog entries used by at least one printed item, in catalog order.
pub fn used_allergens<'a>(sections: &[MenuSection<'_>], catalog: &'a [Allergen]) -> Vec<&'a Allergen> {
    catalog
        .iter()
        .filter(|a| {
            sections
                .iter()
                .flat_map(|s| s.items.iter())
                .any(|i| i.allergens.contains(&a.id))
        })
        .collect()
}
