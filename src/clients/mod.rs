//! Type-safe handles the rest of the application uses to reach the cart and the catalog.

pub mod cart_client;
pub mod catalog_client;

pub use cart_client::*;
pub use catalog_client::*;
