use rust_decimal::Decimal;

use crate::domain::{
    LivestockDetails, Measure, Product, ProductCategory, ProductCreate, ProductId, SellerRef,
    UnitPrice,
};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";

/// Seller who owns every seeded listing.
pub fn demo_seller() -> SellerRef {
    SellerRef {
        id: "user1".to_string(),
        display_name: "Juan Dela Cruz (Seller)".to_string(),
    }
}

fn listing(
    category: ProductCategory,
    name: &str,
    amount: i64,
    price: i64,
    unit: &str,
) -> ProductCreate {
    ProductCreate::new(
        category,
        name,
        Measure::new(Decimal::from(amount), unit),
        UnitPrice::new(Decimal::from(price), unit),
    )
    .with_image(PLACEHOLDER_IMAGE)
    .with_seller(demo_seller())
}

fn livestock(breed: &str, age: &str, gender: &str) -> LivestockDetails {
    LivestockDetails {
        breed: breed.to_string(),
        age: age.to_string(),
        gender: gender.to_string(),
    }
}

/// Listings present when the market starts, with fixed ids 1 through 6.
pub fn seed_catalog() -> Vec<Product> {
    let listings = vec![
        listing(ProductCategory::Crop, "Tomatoes", 2, 150, "kg"),
        listing(ProductCategory::Crop, "Corn", 5, 320, "kg"),
        listing(ProductCategory::Meat, "Chicken Drumsticks", 1, 200, "kg"),
        listing(ProductCategory::Meat, "Beef Sirloin", 1, 450, "kg"),
        listing(ProductCategory::Livestock, "Goat", 2, 3500, "head")
            .with_livestock(livestock("Boer", "1 year", "Female")),
        listing(ProductCategory::Livestock, "Chicken", 10, 250, "head")
            .with_livestock(livestock("Native", "6 months", "Mixed")),
    ];
    listings
        .into_iter()
        .zip(1u64..)
        .map(|(create, id)| create.into_product(ProductId::new(id)))
        .collect()
}

/// Highest id used by [`seed_catalog`]; generated ids start above it.
pub fn seed_catalog_floor() -> u64 {
    seed_catalog()
        .iter()
        .map(|product| product.id.as_u64())
        .max()
        .unwrap_or(0)
}
