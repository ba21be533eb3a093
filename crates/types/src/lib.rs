pub mod color;
pub mod geometry;
pub mod ids;
pub mod image;
pub mod menu;

pub use color::Color;
pub use geometry::{Point, Rect};
pub use ids::{AllergenId, CategoryId, ItemId};
pub use image::ImageData;
pub use menu::{
    AddOn, Allergen, Badges, Category, ItemExtras, MenuItem, RenderOptions, RenderRequest,
    RestaurantProfile, SizeVariant, ThemeColors, Translation,
};
pub use rust_decimal::Decimal;
