use super::validation::{parse_positive, require, ValidationError};
use super::{LivestockDetails, Measure, ProductCategory, ProductCreate, SellerRef, UnitPrice};

/// Raw text from the "post product" form, before anything is checked.
#[derive(Debug, Clone, Default)]
pub struct ProductListing {
    pub category: Option<ProductCategory>,
    pub name: String,
    pub quantity: String,
    pub quantity_unit: String,
    pub price: String,
    pub price_unit: String,
    pub description: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
}

impl ProductListing {
    /// Starts a blank form for `category` with its default units selected.
    pub fn for_category(category: ProductCategory) -> Self {
        Self {
            category: Some(category),
            quantity_unit: category.default_unit().to_string(),
            price_unit: category.default_unit().to_string(),
            ..Self::default()
        }
    }

    /// Turns the form into a catalog payload, or says which field is wrong.
    pub fn validate(&self, seller: Option<SellerRef>) -> Result<ProductCreate, ValidationError> {
        let category = self.category.ok_or(ValidationError::Required("Category"))?;
        require("Name", &self.name)?;
        require("Quantity", &self.quantity)?;
        require("Price", &self.price)?;

        let quantity = parse_positive(&self.quantity)
            .ok_or_else(|| ValidationError::InvalidQuantity(self.quantity.clone()))?;
        let price = parse_positive(&self.price)
            .ok_or_else(|| ValidationError::InvalidPrice(self.price.clone()))?;

        for unit in [&self.quantity_unit, &self.price_unit] {
            if !category.units().contains(&unit.as_str()) {
                return Err(ValidationError::UnsupportedUnit {
                    category,
                    unit: unit.clone(),
                });
            }
        }

        let livestock = if category == ProductCategory::Livestock {
            require("Breed", &self.breed)?;
            require("Age", &self.age)?;
            require("Gender", &self.gender)?;
            Some(LivestockDetails {
                breed: self.breed.trim().to_string(),
                age: self.age.trim().to_string(),
                gender: self.gender.trim().to_string(),
            })
        } else {
            None
        };

        let description = Some(self.description.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Ok(ProductCreate {
            category,
            name: self.name.trim().to_string(),
            quantity: Measure::new(quantity, self.quantity_unit.clone()),
            price: UnitPrice::new(price, self.price_unit.clone()),
            description,
            image: None,
            livestock,
            seller,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn crop_form() -> ProductListing {
        ProductListing {
            name: "Okra".into(),
            quantity: "3".into(),
            price: "80".into(),
            ..ProductListing::for_category(ProductCategory::Crop)
        }
    }

    #[test]
    fn crop_listing_becomes_product_create() {
        let create = crop_form().validate(None).unwrap();
        assert_eq!(create.name, "Okra");
        assert_eq!(create.quantity, Measure::new(Decimal::from(3), "kg"));
        assert_eq!(create.price, UnitPrice::new(Decimal::from(80), "kg"));
        assert!(create.livestock.is_none());
        assert!(create.description.is_none());
    }

    #[test]
    fn missing_category_is_refused() {
        let form = ProductListing {
            category: None,
            ..crop_form()
        };
        assert_eq!(form.validate(None), Err(ValidationError::Required("Category")));
        assert_eq!(
            ProductListing::default().validate(None),
            Err(ValidationError::Required("Category"))
        );
    }

    #[test]
    fn missing_price_is_refused() {
        let form = ProductListing { price: " ".into(), ..crop_form() };
        assert_eq!(form.validate(None), Err(ValidationError::Required("Price")));
    }

    #[test]
    fn non_numeric_quantity_is_refused() {
        let form = ProductListing { quantity: "lots".into(), ..crop_form() };
        assert_eq!(
            form.validate(None),
            Err(ValidationError::InvalidQuantity("lots".into()))
        );
    }

    #[test]
    fn unit_must_belong_to_category() {
        let form = ProductListing { quantity_unit: "head".into(), ..crop_form() };
        assert!(matches!(
            form.validate(None),
            Err(ValidationError::UnsupportedUnit { category: ProductCategory::Crop, .. })
        ));
    }

    #[test]
    fn livestock_requires_breed_age_and_gender() {
        let mut form = ProductListing {
            name: "Carabao".into(),
            quantity: "1".into(),
            price: "45000".into(),
            breed: "Murrah".into(),
            age: "3 years".into(),
            ..ProductListing::for_category(ProductCategory::Livestock)
        };
        assert_eq!(form.validate(None), Err(ValidationError::Required("Gender")));

        form.gender = "Male".into();
        let create = form.validate(None).unwrap();
        assert_eq!(create.quantity.unit, "head");
        assert_eq!(create.livestock.unwrap().breed, "Murrah");
    }
}
