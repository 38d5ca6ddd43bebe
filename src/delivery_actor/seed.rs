use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    DeliveryId, DeliveryRecord, OrderDetails, OrderLine, PaymentMethod, PaymentStatus,
};

fn shipment(id: u64, product_name: &str, label: &str, price: i64, unit: &str) -> DeliveryRecord {
    DeliveryRecord {
        id: DeliveryId::new(id),
        product: label.to_string(),
        status: "In Transit".to_string(),
        location: "Warehouse A".to_string(),
        eta: "Dec. 9-12, 2025".to_string(),
        order_details: OrderDetails {
            customer_name: "Lorenz Almonia".to_string(),
            lines: vec![OrderLine {
                product_name: product_name.to_string(),
                price: Decimal::from(price),
                quantity: Decimal::ONE,
                unit: unit.to_string(),
            }],
            order_date: NaiveDate::from_ymd_opt(2024, 12, 6).unwrap_or(NaiveDate::MIN),
            delivery_address: "Lapasan, Cagayan de Oro City".to_string(),
            payment_method: PaymentMethod::Cod,
            payment_status: PaymentStatus::Pending,
        },
    }
}

/// Shipments already on the road when the market starts.
pub fn seed_deliveries() -> Vec<DeliveryRecord> {
    vec![
        shipment(1, "Fresh Tomatoes", "Tomatoes (1kg)", 150, "kg"),
        shipment(2, "Drum Stick", "Drum Stick (1kg)", 200, "kg"),
        shipment(3, "Goat", "Goat (1qty)", 3500, "qty"),
    ]
}
