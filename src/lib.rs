//! # Storefront Cart
//!
//! The shopping cart of a small storefront, plus the read-only catalog, order views and
//! checkout flow around it.
//!
//! ## Core Concepts
//!
//! ### One cart, one owner
//! The cart state lives in a [`CartStore`](cart_actor::CartStore) owned by a single Tokio task
//! (a [`StateActor`](framework::StateActor)). Everything else holds a cloneable
//! [`CartClient`](clients::CartClient) and sends it requests. Requests are applied one at a time,
//! and each one is complete (persisted and announced to observers) before the next starts.
//!
//! ### Persist, then notify
//! After every operation the cart writes its line items to a
//! [`StorageAdapter`](storage::StorageAdapter), then publishes the new snapshot and item count.
//! Observers are replay-latest: a new subscriber immediately receives the current value.
//! A failing storage backend is logged and otherwise ignored.
//!
//! ### Catalog failures are not fatal
//! Product, order and customer lists come from a [`CatalogSource`](catalog::CatalogSource).
//! The [`CatalogClient`](clients::CatalogClient) turns fetch errors into empty lists.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic single-state actor, its client, observables and test mocks
//! - [`cart_actor`]: the cart state machine and its actions
//! - [`clients`]: [`CartClient`](clients::CartClient) and [`CatalogClient`](clients::CatalogClient)
//! - [`model`]: products, line items, orders, customers
//! - [`storage`]: in-memory and file-backed key/value storage
//! - [`catalog`]: HTTP and file catalog sources, the editable product listing
//! - [`orders`], [`checkout`], [`routes`]: the pages built on top
//! - [`config`], [`lifecycle`]: configuration and startup/shutdown
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod orders;
pub mod routes;
pub mod storage;
