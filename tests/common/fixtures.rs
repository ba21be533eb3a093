use carta::{Allergen, Badges, Category, Decimal, ImageData, ItemExtras, MenuItem, RenderRequest, RestaurantProfile};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub fn euros(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn restaurant(name: &str) -> RestaurantProfile {
    RestaurantProfile {
        name: name.into(),
        address: Some("Hauptstraße 1, 10115 Berlin".into()),
        ..RestaurantProfile::default()
    }
}

pub fn request_with(template: &str, categories: Vec<Category>, items: Vec<MenuItem>) -> RenderRequest {
    let mut request = RenderRequest {
        restaurant: restaurant("Trattoria Da Luigi"),
        categories,
        items,
        ..RenderRequest::default()
    };
    request.options.template = template.into();
    request
}

/// One "Starters" category with two items, the second listed first.
pub fn starters(template: &str) -> RenderRequest {
    request_with(
        template,
        vec![Category::new(1, "Starters", 1)],
        vec![
            MenuItem::new(2, 1, "Garlic Bread", euros(990)).with_position(2),
            MenuItem::new(1, 1, "Bruschetta", euros(450)).with_position(1),
        ],
    )
}

/// `per_category` items in each of `categories` categories, with a mix of
/// descriptions, badges, allergens and extras.
pub fn large_menu(template: &str, categories: u64, per_category: u64) -> RenderRequest {
    let cats: Vec<Category> = (1..=categories)
        .map(|c| Category::new(c, format!("Category {c}"), c as i32))
        .collect();
    let mut items = Vec::new();
    for c in 1..=categories {
        for i in 1..=per_category {
            let id = c * 1000 + i;
            let mut item = MenuItem::new(id, c, format!("Dish {c}-{i}"), euros(500 + (i as i64) * 75))
                .with_position(i as i32);
            if i % 2 == 0 {
                item = item.with_description(
                    "Hand made with seasonal produce from local farms, slow cooked and finished \
                     with herbs from our garden",
                );
            }
            if i % 5 == 0 {
                item = item.with_badges(Badges {
                    vegetarian: true,
                    popular: true,
                    ..Badges::default()
                });
            }
            if i % 3 == 0 {
                item = item.with_allergens(["gluten", "milk"]);
            }
            if i % 7 == 0 {
                item = item.with_extras(ItemExtras {
                    spice_level: Some(2),
                    prep_time_minutes: Some(20),
                    ..ItemExtras::default()
                });
            }
            items.push(item);
        }
    }
    let mut request = request_with(template, cats, items);
    request.allergens = allergen_catalog();
    request
}

pub fn allergen_catalog() -> Vec<Allergen> {
    vec![
        Allergen {
            id: "gluten".into(),
            code: "A".into(),
            name: "Gluten".into(),
        },
        Allergen {
            id: "milk".into(),
            code: "G".into(),
            name: "Milk".into(),
        },
        Allergen {
            id: "nuts".into(),
            code: "H".into(),
            name: "Nuts".into(),
        },
    ]
}

/// A small valid PNG standing in for a QR code.
pub fn sample_png() -> ImageData {
    let img = RgbaImage::from_fn(21, 21, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode PNG");
    ImageData::new(bytes)
}

/// Bytes no image decoder accepts.
pub fn corrupt_image() -> ImageData {
    ImageData::new(b"\x89PNG\r\n\x1a\nthis is not really a png".to_vec())
}
