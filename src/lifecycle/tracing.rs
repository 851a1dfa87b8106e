//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. Output is the compact `fmt` format
//! without module paths, filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Cart closed`, `Shutdown`
//! - **Cart operations**: one `#[instrument]` span per `CartClient` call, `Action` / `Action ok`
//!   events from the actor loop
//! - **Absorbed failures**: storage writes and catalog fetches that failed, at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and warnings only
//! RUST_LOG=info cargo run
//!
//! # Every action payload and snapshot
//! RUST_LOG=debug cargo run
//!
//! # Only the cart
//! RUST_LOG=storefront_cart::cart_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` an add looks like:
//!
//! ```text
//! DEBUG add_to_cart{product_id=product_1}: Sending request
//! DEBUG Action state_type="CartStore" action=Add(Product { id: ProductId(1), .. })
//! DEBUG Cart updated items=1 count=1
//! DEBUG Action ok state_type="CartStore"
//! ```

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // state_type and span names already say where an event came from
        .compact()
        .init();
}
