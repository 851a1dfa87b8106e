//! Demo: browse the catalog, fill a cart, check out.

use storefront_cart::checkout::{submit_order, CheckoutForm};
use storefront_cart::config::StorefrontConfig;
use storefront_cart::lifecycle::{setup_tracing, Storefront};
use storefront_cart::model::Customer;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting storefront");

    let storefront = Storefront::start(&config);

    // Badge in the navbar
    storefront
        .cart
        .subscribe_count(|count| info!(count = *count, "Cart badge"))
        .await
        .map_err(|e| e.to_string())?;

    let catalog = storefront.catalog.catalog().await;
    for product in catalog.low_stock() {
        warn!(product_id = %product.id, available = product.available_pieces, "Low stock");
    }

    let span = tracing::info_span!("shopping");
    async {
        let mut picks = catalog.products().iter().take(2);
        if let Some(first) = picks.next() {
            storefront.cart.add_to_cart(first.clone()).await?;
            storefront.cart.add_to_cart(first.clone()).await?;
            storefront.cart.decrease_quantity(first.id).await?;
        }
        if let Some(second) = picks.next() {
            storefront.cart.add_to_cart(second.clone()).await?;
        }
        let items = storefront.cart.cart_items().await?;
        info!(lines = items.len(), total = items.total_price(), "Cart ready");
        Ok::<_, storefront_cart::cart_actor::CartError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    for summary in storefront.catalog.order_summaries().await {
        info!(order_id = %summary.id, customer = %summary.customer_name, total = summary.total, "Past order");
    }

    let form = CheckoutForm {
        customer: Customer {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            address: "12 Market Street".to_string(),
            phone: "555-0142".to_string(),
            ..Customer::default()
        },
        payment_method: "Cash on delivery".to_string(),
    };

    match submit_order(&form, &storefront.cart).await {
        Ok(receipt) => info!(redirect = %receipt.redirect, "{}", receipt.message),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    storefront.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
