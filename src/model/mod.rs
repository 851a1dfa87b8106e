//! Pure data structures shared by the cart, the catalog and the order views.

pub mod cart;
pub mod customer;
pub mod order;
pub mod product;

pub use cart::*;
pub use customer::*;
pub use order::*;
pub use product::*;
