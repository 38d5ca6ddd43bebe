mod actor_framework;
mod app_system;
mod checkout;
mod clients;
mod config;
mod domain;
mod notice;

mod cart_actor;
mod catalog_actor;
mod chat_actor;
mod delivery_actor;
mod payment_actor;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, MarketSystem};
use crate::clients::CheckoutOutcome;
use crate::config::MarketConfig;
use crate::domain::{
    CartSelection, CatalogQuery, EwalletAccount, PaymentMethod, ProductCategory, ProductListing,
};

/// What the simulated QR scanner reads off the merchant code.
const DEMO_MERCHANT_CODE: &str = "MERCHANT123456";

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = MarketConfig::from_env().map_err(|e| e.to_string())?;
    info!(address = %config.default_address, "Starting farm market");

    let system = MarketSystem::new(config);

    // Browse the seeded catalog
    let span = tracing::info_span!("browse");
    async {
        let products = system
            .catalog_client
            .list_products()
            .await
            .map_err(|e| e.to_string())?;
        for product in &products {
            info!(id = %product.id, name = %product.name, price = %product.price, "Listed");
        }
        let livestock = system
            .catalog_client
            .browse(&CatalogQuery::category(ProductCategory::Livestock))
            .await
            .map_err(|e| e.to_string())?;
        info!(count = livestock.len(), "Livestock on offer");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // A seller posts a new listing
    let span = tracing::info_span!("post_listing");
    let pig = async {
        let mut listing = ProductListing::for_category(ProductCategory::Livestock);
        listing.name = "Pig".into();
        listing.quantity = "3".into();
        listing.price = "8000".into();
        listing.breed = "Large White".into();
        listing.age = "5 months".into();
        listing.gender = "Male".into();
        system
            .catalog_client
            .post_listing(&listing, Some(catalog_actor::demo_seller()))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(product_id = %pig.id, "Listing posted");

    // Cash on delivery
    let span = tracing::info_span!("cash_checkout");
    async {
        let products = system
            .catalog_client
            .browse(&CatalogQuery::default().with_search("tomatoes"))
            .await
            .map_err(|e| e.to_string())?;
        let tomatoes = products.first().ok_or("Tomatoes are not listed")?;
        let selection = CartSelection::parse("1", "kg").map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_to_cart(tomatoes, selection)
            .await
            .map_err(|e| e.to_string())?;
        let _notice = system
            .notice
            .show("Added to cart!", system.config().notice_duration);

        let checkout = &system.checkout_client;
        let mut session = checkout.start_session();
        checkout
            .open_checkout(&mut session)
            .await
            .map_err(|e| e.to_string())?;
        session
            .set_address("Lapasan, CDOC")
            .map_err(|e| e.to_string())?;
        match checkout.confirm(&mut session).await {
            Ok(CheckoutOutcome::OrderPlaced { draft, delivery, .. }) => {
                let total = draft.total().map_err(|e| e.to_string())?;
                info!(delivery_id = %delivery.id, total = %total, "Order confirmed")
            }
            Ok(other) => error!(?other, "Unexpected checkout outcome"),
            Err(e) => error!(error = %e, "Checkout failed"),
        }
        session.finish().map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // E-wallet with QR scan
    let span = tracing::info_span!("ewallet_checkout");
    async {
        let products = system
            .catalog_client
            .browse(&CatalogQuery::default().with_search("corn"))
            .await
            .map_err(|e| e.to_string())?;
        let corn = products.first().ok_or("Corn is not listed")?;
        let selection = CartSelection::parse("2", "kg").map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_to_cart(corn, selection)
            .await
            .map_err(|e| e.to_string())?;

        let checkout = &system.checkout_client;
        let mut session = checkout.start_session();
        checkout
            .open_checkout(&mut session)
            .await
            .map_err(|e| e.to_string())?;
        session
            .select_payment_method(PaymentMethod::GCash)
            .map_err(|e| e.to_string())?;
        session
            .set_account(EwalletAccount::new("Juan", "09171234567"))
            .map_err(|e| e.to_string())?;
        checkout
            .confirm(&mut session)
            .await
            .map_err(|e| e.to_string())?;

        // Paying before the scan is refused
        if let Err(e) = checkout.pay(&mut session).await {
            info!(error = %e, "Pay refused");
        }

        session.scan().map_err(|e| e.to_string())?;
        session
            .complete_scan(DEMO_MERCHANT_CODE)
            .map_err(|e| e.to_string())?;
        let settlement = checkout
            .pay(&mut session)
            .await
            .map_err(|e| e.to_string())?;
        info!(
            payment_id = %settlement.payment.id,
            amount = %settlement.payment.amount,
            "Payment complete"
        );

        let again = checkout
            .pay(&mut session)
            .await
            .map_err(|e| e.to_string())?;
        info!(payment_id = %again.payment.id, "Repeated pay returned the same payment");
        session.finish().map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Deliveries and seller chat
    let deliveries = system
        .delivery_client
        .list_deliveries()
        .await
        .map_err(|e| e.to_string())?;
    for delivery in &deliveries {
        info!(
            id = %delivery.id,
            product = %delivery.product,
            status = %delivery.status,
            payment = %delivery.order_details.payment_status,
            "Delivery"
        );
    }
    system
        .chat_client
        .send_message("Is the goat still available?")
        .await
        .map_err(|e| e.to_string())?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Farm market demo completed");
    Ok(())
}
