use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProductId;

/// The closed set of things a farmer can post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Crop,
    Meat,
    Livestock,
}

impl ProductCategory {
    pub fn all() -> &'static [ProductCategory] {
        &[
            ProductCategory::Crop,
            ProductCategory::Meat,
            ProductCategory::Livestock,
        ]
    }

    /// Units a seller may post this category in. The first one is the default.
    pub fn units(self) -> &'static [&'static str] {
        match self {
            ProductCategory::Crop => &["kg", "sack", "bundle", "crate"],
            ProductCategory::Meat => &["kg", "piece", "pack"],
            ProductCategory::Livestock => &["head", "pair"],
        }
    }

    pub fn default_unit(self) -> &'static str {
        match self {
            ProductCategory::Crop | ProductCategory::Meat => "kg",
            ProductCategory::Livestock => "head",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Crop => "Crops",
            ProductCategory::Meat => "Meat",
            ProductCategory::Livestock => "Livestock",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::Crop => write!(f, "Crop"),
            ProductCategory::Meat => write!(f, "Meat"),
            ProductCategory::Livestock => write!(f, "Livestock"),
        }
    }
}

/// An amount with its unit, e.g. `2 kg` or `10 head`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub amount: Decimal,
    pub unit: String,
}

impl Measure {
    pub fn new(amount: Decimal, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

/// Price in pesos for one `per` unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPrice {
    pub amount: Decimal,
    pub per: String,
}

impl UnitPrice {
    pub fn new(amount: Decimal, per: impl Into<String>) -> Self {
        Self {
            amount,
            per: per.into(),
        }
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₱{} / {}", self.amount, self.per)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivestockDetails {
    pub breed: String,
    pub age: String,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRef {
    pub id: String,
    pub display_name: String,
}

/// A listing in the catalog. Listings are never edited; a seller removes
/// one and posts again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category: ProductCategory,
    pub name: String,
    pub quantity: Measure,
    pub price: UnitPrice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub livestock: Option<LivestockDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerRef>,
}

/// Payload for posting a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCreate {
    pub category: ProductCategory,
    pub name: String,
    pub quantity: Measure,
    pub price: UnitPrice,
    pub description: Option<String>,
    pub image: Option<String>,
    pub livestock: Option<LivestockDetails>,
    pub seller: Option<SellerRef>,
}

impl ProductCreate {
    pub fn new(
        category: ProductCategory,
        name: impl Into<String>,
        quantity: Measure,
        price: UnitPrice,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            quantity,
            price,
            description: None,
            image: None,
            livestock: None,
            seller: None,
        }
    }

    pub fn with_livestock(mut self, details: LivestockDetails) -> Self {
        self.livestock = Some(details);
        self
    }

    pub fn with_seller(mut self, seller: SellerRef) -> Self {
        self.seller = Some(seller);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            category: self.category,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            description: self.description,
            image: self.image,
            livestock: self.livestock,
            seller: self.seller,
        }
    }
}
