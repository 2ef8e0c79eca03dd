//! Cart store: cart lines persisted under the `cart` key, with typed change
//! notifications on the store's own watch channel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use tiendita::{
    cart::{Cart, CartLine},
    orders::ConfirmOrderRequest,
    products::Product,
};
use tokio::sync::watch;

use crate::{
    domain::{cart::errors::CartStoreError, orders::OrdersService},
    storage::{CART_KEY, Storage, StorageError},
};

/// Snapshot published on every cart change.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

impl CartSnapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Typed observable store over the shopping cart.
///
/// Every mutation persists the full cart (best-effort, last write wins) and
/// publishes a fresh snapshot so other views stay in sync; the nav badge is
/// the canonical subscriber.
#[derive(Debug)]
pub struct CartStore {
    storage: Arc<dyn Storage>,
    cart: Mutex<Cart>,
    tx: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Load the persisted cart; a missing or undecodable entry starts empty.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let cart: Cart = storage
            .get(CART_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let (tx, _rx) = watch::channel(snapshot_of(&cart));

        Self {
            storage,
            cart: Mutex::new(cart),
            tx,
        }
    }

    /// Add one unit of `product`, merging into an existing line.
    ///
    /// # Errors
    ///
    /// Returns an error when the cart cannot be persisted.
    pub fn add(&self, product: &Product) -> Result<(), CartStoreError> {
        let mut cart = self.lock();

        cart.add(product);

        self.commit(&cart)
    }

    /// Remove and return the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error when `index` is out of range or the cart cannot be
    /// persisted.
    pub fn remove(&self, index: usize) -> Result<CartLine, CartStoreError> {
        let mut cart = self.lock();

        let removed = cart.remove(index)?;

        self.commit(&cart)?;

        Ok(removed)
    }

    /// Apply `delta` to the quantity at `index`, clamping at 1.
    ///
    /// # Errors
    ///
    /// Returns an error when `index` is out of range or the cart cannot be
    /// persisted.
    pub fn change_quantity(&self, index: usize, delta: i32) -> Result<u32, CartStoreError> {
        let mut cart = self.lock();

        let quantity = cart.change_quantity(index, delta)?;

        self.commit(&cart)?;

        Ok(quantity)
    }

    /// Empty the cart, drop its persisted entry, and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error when the persisted entry cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut cart = self.lock();

        cart.clear();

        self.storage.remove(CART_KEY)?;

        self.tx.send_replace(snapshot_of(&cart));

        Ok(())
    }

    /// Compute line subtotals and the order total, submit the confirmation,
    /// and clear the cart only on success. On failure the cart and its
    /// persisted copy are left exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Empty`] on an empty cart, or the
    /// confirmation/persistence failure.
    pub async fn confirm_purchase(
        &self,
        orders: &dyn OrdersService,
        usuario_id: i64,
    ) -> Result<Decimal, CartStoreError> {
        let (total, detalles) = {
            let cart = self.lock();

            if cart.is_empty() {
                return Err(CartStoreError::Empty);
            }

            cart.purchase_details()
        };

        orders
            .confirm(ConfirmOrderRequest {
                usuario_id,
                total,
                detalles,
            })
            .await?;

        self.clear()?;

        Ok(total)
    }

    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        snapshot_of(&self.lock())
    }

    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock().lines().to_vec()
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lock().total()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Subscribe to cart changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.tx.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn commit(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let encoded = serde_json::to_string(cart).map_err(CartStoreError::Encode)?;

        self.storage.set(CART_KEY, &encoded)?;

        self.tx.send_replace(snapshot_of(cart));

        Ok(())
    }
}

fn snapshot_of(cart: &Cart) -> CartSnapshot {
    CartSnapshot {
        lines: cart.lines().to_vec(),
        total: cart.total(),
    }
}
