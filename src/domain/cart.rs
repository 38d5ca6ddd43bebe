use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::{parse_positive, require, ValidationError};
use super::{CartEntryId, Product};

/// A quantity and unit that passed the add-to-cart checks. The cart only
/// accepts this type, so an entry with a zero quantity or blank unit cannot
/// be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSelection {
    quantity: Decimal,
    unit: String,
}

impl CartSelection {
    /// Parses the quantity text typed into the add-to-cart dialog.
    pub fn parse(quantity: &str, unit: &str) -> Result<Self, ValidationError> {
        require("Quantity", quantity)?;
        let quantity = parse_positive(quantity)
            .ok_or_else(|| ValidationError::InvalidQuantity(quantity.to_string()))?;
        Self::new(quantity, unit)
    }

    pub fn new(quantity: Decimal, unit: &str) -> Result<Self, ValidationError> {
        if quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidQuantity(quantity.to_string()));
        }
        require("Unit", unit)?;
        Ok(Self {
            quantity,
            unit: unit.trim().to_string(),
        })
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// One line in the buyer's cart. `product` is a copy taken when the line was
/// added; later catalog changes do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: CartEntryId,
    pub product: Product,
    pub quantity: Decimal,
    pub unit: String,
}

impl CartEntry {
    /// Unit price × quantity. A product too large for a decimal is an
    /// invalid quantity.
    pub fn line_total(&self) -> Result<Decimal, ValidationError> {
        self.product
            .price
            .amount
            .checked_mul(self.quantity)
            .ok_or_else(|| ValidationError::InvalidQuantity(self.quantity.to_string()))
    }
}

/// Payload for adding a line to the cart.
#[derive(Debug, Clone)]
pub struct CartEntryCreate {
    pub product: Product,
    pub selection: CartSelection,
}

/// Replacement quantity for an existing line.
#[derive(Debug, Clone, Copy)]
pub struct CartEntryPatch {
    pub quantity: Decimal,
}

/// Sum of unit price × quantity over `entries`.
pub fn cart_total(entries: &[CartEntry]) -> Result<Decimal, ValidationError> {
    entries.iter().try_fold(Decimal::ZERO, |total, entry| {
        total
            .checked_add(entry.line_total()?)
            .ok_or_else(|| ValidationError::InvalidQuantity(entry.quantity.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::seed_catalog;

    #[test]
    fn selection_rejects_zero_negative_and_blank() {
        assert_eq!(
            CartSelection::parse("0", "kg"),
            Err(ValidationError::InvalidQuantity("0".into()))
        );
        assert_eq!(
            CartSelection::parse("-2", "kg"),
            Err(ValidationError::InvalidQuantity("-2".into()))
        );
        assert_eq!(CartSelection::parse("", "kg"), Err(ValidationError::Required("Quantity")));
        assert_eq!(CartSelection::parse("2", " "), Err(ValidationError::Required("Unit")));
        assert_eq!(
            CartSelection::new(Decimal::ZERO, "kg"),
            Err(ValidationError::InvalidQuantity("0".into()))
        );
    }

    #[test]
    fn selection_accepts_fractional_quantity() {
        let selection = CartSelection::parse("1.5", "kg").unwrap();
        assert_eq!(selection.quantity(), Decimal::new(15, 1));
        assert_eq!(selection.unit(), "kg");
    }

    #[test]
    fn total_is_price_times_quantity() {
        let catalog = seed_catalog();
        let entries = vec![
            CartEntry {
                id: CartEntryId::new(1),
                product: catalog[0].clone(),
                quantity: Decimal::from(2),
                unit: "kg".into(),
            },
            CartEntry {
                id: CartEntryId::new(2),
                product: catalog[4].clone(),
                quantity: Decimal::from(1),
                unit: "head".into(),
            },
        ];
        assert_eq!(cart_total(&entries), Ok(Decimal::from(150 * 2 + 3500)));
        assert_eq!(cart_total(&[]), Ok(Decimal::ZERO));
    }

    #[test]
    fn overflowing_total_is_an_invalid_quantity() {
        let selection = CartSelection::parse("79228162514264337593543950335", "kg").unwrap();
        let entry = CartEntry {
            id: CartEntryId::new(1),
            product: seed_catalog()[0].clone(),
            quantity: selection.quantity(),
            unit: selection.unit().to_string(),
        };
        let expected = ValidationError::InvalidQuantity(selection.quantity().to_string());
        assert_eq!(entry.line_total(), Err(expected.clone()));
        assert_eq!(cart_total(&[entry]), Err(expected));
    }

    #[test]
    fn overflowing_sum_is_an_invalid_quantity() {
        let mut big = seed_catalog()[0].clone();
        big.price.amount = Decimal::ONE;
        let line = |id| CartEntry {
            id: CartEntryId::new(id),
            product: big.clone(),
            quantity: Decimal::MAX,
            unit: "kg".into(),
        };
        assert!(line(1).line_total().is_ok());
        assert!(matches!(
            cart_total(&[line(1), line(2)]),
            Err(ValidationError::InvalidQuantity(_))
        ));
    }
}
