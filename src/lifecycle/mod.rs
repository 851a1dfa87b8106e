//! Application composition: wiring the cart actor, storage and catalog together.

pub mod storefront;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use storefront::Storefront;
