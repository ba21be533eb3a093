//! The menu data model consumed by the layout engine.
//!
//! All records are produced by the editing/persistence side and are read-only
//! here: the engine borrows them for the duration of one generation call and
//! never mutates them.

use crate::ids::{AllergenId, CategoryId, ItemId};
use crate::image::ImageData;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Secondary-language texts for a category or item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Two-letter language code, e.g. "en".
    pub language: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Boolean markers shown next to an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Badges {
    /// Featured ("special") items are listed before all others in their category.
    pub special: bool,
    pub popular: bool,
    pub vegetarian: bool,
    pub vegan: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeVariant {
    pub label: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub name: String,
    pub price: Decimal,
}

/// Optional structured details; every template decides which of them it shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemExtras {
    pub sizes: Vec<SizeVariant>,
    pub add_ons: Vec<AddOn>,
    pub spice_level: Option<u8>,
    pub prep_time_minutes: Option<u32>,
    pub wine_pairing: Option<String>,
    pub origin: Option<String>,
    /// Explicit printed number; overrides automatic numbering where a
    /// template numbers its items.
    pub item_number: Option<String>,
}

impl ItemExtras {
    pub const MAX_SPICE_LEVEL: u8 = 5;

    /// Spice level clamped to `0..=5`.
    pub fn spice_level(&self) -> u8 {
        self.spice_level
            .unwrap_or(0)
            .min(Self::MAX_SPICE_LEVEL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ItemId,
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub localized: Option<Translation>,
    pub price: Decimal,
    /// Stable sort key within the category.
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub badges: Badges,
    #[serde(default)]
    pub allergens: Vec<AllergenId>,
    #[serde(default)]
    pub extras: ItemExtras,
    #[serde(default)]
    pub image: Option<ImageData>,
}

impl MenuItem {
    pub fn new(
        id: impl Into<ItemId>,
        category_id: impl Into<CategoryId>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            description: None,
            localized: None,
            price,
            position: 0,
            available: true,
            badges: Badges::default(),
            allergens: Vec::new(),
            extras: ItemExtras::default(),
            image: None,
        }
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_badges(mut self, badges: Badges) -> Self {
        self.badges = badges;
        self
    }

    pub fn with_allergens<I, A>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AllergenId>,
    {
        self.allergens = allergens.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extras(mut self, extras: ItemExtras) -> Self {
        self.extras = extras;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub localized: Option<Translation>,
    #[serde(default)]
    pub position: i32,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, position: i32) -> Self {
        Self {
            id: id.into(),
            restaurant_id: None,
            name: name.into(),
            localized: None,
            position,
        }
    }
}

/// An entry of the restaurant's allergen catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allergen {
    pub id: AllergenId,
    /// Short printed code, e.g. "A" or "G".
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestaurantProfile {
    pub name: String,
    pub address: Option<String>,
    pub logo: Option<ImageData>,
    /// Preferred display language of the restaurant's own texts.
    pub language: Option<String>,
    /// Philosophy or quote text, shown by the elegant templates only.
    pub philosophy: Option<String>,
}

/// Loosely typed theme color values as stored by the theme editor.
///
/// Each role holds a hex string, a CSS gradient containing a hex color, or an
/// `rgb()`/`rgba()` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary: String,
    pub text: String,
    pub muted_text: String,
    pub background: String,
    pub accent: String,
    pub price: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#10b981".into(),
            text: "#1f2937".into(),
            muted_text: "#6b7280".into(),
            background: "#ffffff".into(),
            accent: "#f59e0b".into(),
            price: "#10b981".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub include_allergens: bool,
    pub include_qr_code: bool,
    /// Pre-rendered scannable code supplied by the caller.
    pub qr_code: Option<ImageData>,
    pub table_number: Option<String>,
    /// Template identifier; unknown ids fall back to the configured default.
    pub template: String,
    /// Requested display language; `None` uses the primary texts.
    pub language: Option<String>,
    /// Physical format of the table tent ("A4" or "A6").
    pub tent_format: String,
    /// "portrait" or "landscape".
    pub tent_orientation: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_allergens: true,
            include_qr_code: true,
            qr_code: None,
            table_number: None,
            template: "traditional".into(),
            language: None,
            tent_format: "A6".into(),
            tent_orientation: "portrait".into(),
        }
    }
}

/// Everything one generation call needs. Lives only for that call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderRequest {
    pub restaurant: RestaurantProfile,
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    pub allergens: Vec<Allergen>,
    pub theme: ThemeColors,
    pub options: RenderOptions,
}
