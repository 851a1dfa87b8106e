use crate::cart_actor::CartStore;
use crate::catalog::{FileCatalog, HttpCatalog};
use crate::clients::{CartClient, CatalogClient};
use crate::config::{CatalogLocation, StorefrontConfig};
use crate::model::CartSnapshot;
use crate::storage::{FileStorage, MemoryStorage, StorageAdapter};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// The running storefront.
///
/// `Storefront` is the root scope of the application. It is responsible for:
/// - **Wiring**: choosing the storage backend and catalog source from configuration
/// - **Lifecycle**: spawning the cart actor and stopping it again
///
/// There is exactly one cart per `Storefront`; every page gets a clone of [`Storefront::cart`]
/// rather than constructing its own.
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::start(&StorefrontConfig::from_env()?);
///
/// let products = storefront.catalog.products().await;
/// storefront.cart.add_to_cart(products[0].clone()).await?;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Handle to the cart actor
    pub cart: CartClient,

    /// Read-only catalog access
    pub catalog: CatalogClient,

    handle: JoinHandle<CartStore>,
}

impl Storefront {
    /// Builds every component described by `config` and starts the cart actor.
    ///
    /// A cart directory that cannot be opened is logged and replaced by in-memory storage, so
    /// the storefront always starts. Must be called inside a Tokio runtime.
    pub fn start(config: &StorefrontConfig) -> Self {
        let storage: Box<dyn StorageAdapter> = match &config.cart_dir {
            Some(dir) => match FileStorage::open(dir) {
                Ok(storage) => {
                    info!(dir = %dir.display(), "Using file cart storage");
                    Box::new(storage)
                }
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "Cart storage unavailable, keeping cart in memory");
                    Box::new(MemoryStorage::new())
                }
            },
            None => Box::new(MemoryStorage::new()),
        };

        let catalog = match &config.catalog {
            CatalogLocation::Http(url) => {
                info!(%url, "Using HTTP catalog");
                CatalogClient::new(HttpCatalog::new(url.clone()))
            }
            CatalogLocation::Dir(dir) => {
                info!(dir = %dir.display(), "Using file catalog");
                CatalogClient::new(FileCatalog::new(dir.clone()))
            }
        };

        Self::with_parts(storage, catalog, &config.cart_key, config.channel_size)
    }

    /// Starts a storefront from already-built components.
    pub fn with_parts(
        storage: Box<dyn StorageAdapter>,
        catalog: CatalogClient,
        cart_key: &str,
        channel_size: usize,
    ) -> Self {
        let (cart_actor, cart) = crate::cart_actor::new(storage, cart_key, channel_size);
        let handle = tokio::spawn(cart_actor.run(()));
        info!(cart_key, "Storefront started");

        Self {
            cart,
            catalog,
            handle,
        }
    }

    /// Stops the cart actor and returns the cart as it was left.
    ///
    /// The actor only stops once every clone of [`Storefront::cart`] handed out has been
    /// dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(snapshot)` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<CartSnapshot, String> {
        info!("Shutting down storefront...");

        // Dropping the last sender closes the mailbox and ends the actor loop.
        drop(self.cart);
        drop(self.catalog);

        match self.handle.await {
            Ok(store) => {
                info!("Storefront shutdown complete.");
                Ok(store.snapshot())
            }
            Err(e) => {
                error!("Cart task failed: {:?}", e);
                Err(format!("Cart task failed: {:?}", e))
            }
        }
    }
}
