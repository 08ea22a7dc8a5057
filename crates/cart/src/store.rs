//! Cart state mirrored to durable storage.
//!
//! The store loads once at construction and writes back after each mutation.
//! Storage failures never reach the caller: a corrupt entry is logged,
//! deleted, and replaced by its default, and a failed write is logged and
//! skipped so the in-memory cart keeps working.

use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use storecart_core::{PaymentMethod, ProductId, ShippingAddress};

use crate::action::{CartAction, Persist};
use crate::item::CartItem;
use crate::pricing::ShippingPolicy;
use crate::state::CartState;
use crate::storage::{KeyValueStore, keys};

/// A cart backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct CartStore<S> {
    state: CartState,
    storage: S,
    policy: ShippingPolicy,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart from `storage` with the default shipping policy.
    pub fn load(storage: S) -> Self {
        Self::load_with_policy(storage, ShippingPolicy::default())
    }

    /// Load the cart from `storage`.
    ///
    /// Missing entries default to empty. Entries that fail to decode are
    /// removed from storage and default to empty. Totals start at zero until
    /// [`Self::calculate_prices`] runs.
    #[instrument(skip(storage))]
    pub fn load_with_policy(mut storage: S, policy: ShippingPolicy) -> Self {
        let stored_items: Vec<CartItem> =
            read_json(&mut storage, keys::CART_ITEMS).unwrap_or_default();

        let mut state = CartState::default();
        let stored_len = stored_items.len();
        for item in stored_items {
            state.apply(CartAction::AddToCart(item), &policy);
        }
        if state.items.len() != stored_len {
            warn!(
                stored = stored_len,
                kept = state.items.len(),
                "Merged duplicate cart items from storage"
            );
        }

        state.shipping_address =
            read_json::<ShippingAddress, _>(&mut storage, keys::SHIPPING_ADDRESS)
                .filter(|address| !address.is_empty());
        state.payment_method = read_payment_method(&mut storage);

        debug!(
            items = state.items.len(),
            has_address = state.shipping_address.is_some(),
            has_payment_method = state.payment_method.is_some(),
            "Loaded cart"
        );

        Self {
            state,
            storage,
            policy,
        }
    }

    /// Current cart state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Consume the store, returning its state.
    #[must_use]
    pub fn into_state(self) -> CartState {
        self.state
    }

    /// The backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning its storage.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Active shipping policy.
    #[must_use]
    pub const fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }

    /// Apply `action` and persist whatever it touched.
    #[instrument(skip_all, fields(action = action.name()))]
    pub fn dispatch(&mut self, action: CartAction) {
        let persist = action.persist();
        self.state.apply(action, &self.policy);
        debug!(items = self.state.items.len(), "Applied cart action");
        self.persist(persist);
    }

    /// Add `item`, replacing an existing line with the same id in place.
    pub fn add_to_cart(&mut self, item: CartItem) {
        self.dispatch(CartAction::AddToCart(item));
    }

    /// Remove the line with `id`. Missing ids are ignored.
    pub fn remove_from_cart(&mut self, id: impl Into<ProductId>) {
        self.dispatch(CartAction::RemoveFromCart(id.into()));
    }

    /// Set the quantity of the line with `id`. Missing ids are ignored.
    pub fn update_cart_quantity(&mut self, id: impl Into<ProductId>, quantity: u32) {
        self.dispatch(CartAction::UpdateCartQuantity {
            id: id.into(),
            quantity,
        });
    }

    /// Overwrite the shipping address.
    pub fn save_shipping_address(&mut self, address: ShippingAddress) {
        self.dispatch(CartAction::SaveShippingAddress(address));
    }

    /// Overwrite the payment method.
    pub fn save_payment_method(&mut self, method: PaymentMethod) {
        self.dispatch(CartAction::SavePaymentMethod(method));
    }

    /// Recompute totals. Nothing is written to storage.
    pub fn calculate_prices(&mut self) {
        self.dispatch(CartAction::CalculatePrices);
    }

    /// Empty the cart and delete the stored item list.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    fn persist(&mut self, persist: Persist) {
        let result = match persist {
            Persist::Items => match serde_json::to_string(&self.state.items) {
                Ok(json) => self.storage.set(keys::CART_ITEMS, &json),
                Err(e) => Err(e.into()),
            },
            Persist::ClearItems => self.storage.remove(keys::CART_ITEMS),
            Persist::ShippingAddress => {
                let address = self.state.shipping_address.clone().unwrap_or_default();
                match serde_json::to_string(&address) {
                    Ok(json) => self.storage.set(keys::SHIPPING_ADDRESS, &json),
                    Err(e) => Err(e.into()),
                }
            }
            Persist::PaymentMethod => match &self.state.payment_method {
                Some(method) => self.storage.set(keys::PAYMENT_METHOD, method.as_str()),
                None => self.storage.remove(keys::PAYMENT_METHOD),
            },
            Persist::Nothing => return,
        };

        if let Err(e) = result {
            warn!(?persist, "Failed to persist cart: {e}");
        }
    }
}

/// Decode a JSON entry, deleting it if it is corrupt.
fn read_json<T: DeserializeOwned, S: KeyValueStore>(storage: &mut S, key: &str) -> Option<T> {
    let raw = read_raw(&*storage, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            error!(key, "Discarding corrupt cart entry: {e}");
            discard(storage, key);
            None
        }
    }
}

/// The payment method is stored as a plain string, not JSON.
fn read_payment_method<S: KeyValueStore>(storage: &mut S) -> Option<PaymentMethod> {
    let raw = read_raw(&*storage, keys::PAYMENT_METHOD)?;
    let method = PaymentMethod::from_stored(&raw);
    if method.is_none() {
        error!(key = keys::PAYMENT_METHOD, "Discarding blank cart entry");
        discard(storage, keys::PAYMENT_METHOD);
    }
    method
}

fn read_raw<S: KeyValueStore>(storage: &S, key: &str) -> Option<String> {
    storage.get(key).unwrap_or_else(|e| {
        warn!(key, "Failed to read cart entry: {e}");
        None
    })
}

fn discard<S: KeyValueStore>(storage: &mut S, key: &str) {
    if let Err(e) = storage.remove(key) {
        warn!(key, "Failed to remove corrupt cart entry: {e}");
    }
}
