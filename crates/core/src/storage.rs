//! Durable client-side cart storage.
//!
//! The cart survives a full reload of the storefront: it is hydrated from
//! storage once at startup and written back after every mutation. It is not
//! synchronized to any server-side record.

use std::{
    cell::{Cell, RefCell},
    fs, io,
    path::PathBuf,
};

use thiserror::Error;

use crate::cart::{Cart, CartLine, CartProduct};

/// Errors raised by the storage collaborator.
#[derive(Debug, Error)]
pub enum CartStorageError {
    #[error("failed to read cart storage")]
    Read(#[source] io::Error),

    #[error("failed to write cart storage")]
    Write(#[source] io::Error),

    #[error("cart storage is corrupt")]
    Corrupt(#[from] serde_json::Error),
}

/// Where the serialized cart lives between sessions.
///
/// The stored format is an ordered JSON array of [`CartLine`] records.
pub trait CartStorage {
    /// Load the stored lines. An absent store hydrates as an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] when the store cannot be read or parsed.
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError>;

    /// Replace the stored lines.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] when the store cannot be written.
    fn save(&self, lines: &[CartLine]) -> Result<(), CartStorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError> {
        (**self).load()
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), CartStorageError> {
        (**self).save(lines)
    }
}

/// Cart storage backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonCartStorage {
    path: PathBuf,
}

impl JsonCartStorage {
    /// Storage rooted at the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonCartStorage {
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(CartStorageError::Read(error)),
        }
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), CartStorageError> {
        let bytes = serde_json::to_vec(lines)?;

        fs::write(&self.path, bytes).map_err(CartStorageError::Write)
    }
}

/// In-memory cart storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    lines: RefCell<Vec<CartLine>>,
    fail_next_save: Cell<bool>,
}

impl MemoryCartStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with lines, as if left over from a prior session.
    #[must_use]
    pub fn with_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines: RefCell::new(lines),
            fail_next_save: Cell::new(false),
        }
    }

    /// Make the next `save` fail, to exercise write-through error paths.
    pub fn fail_next_save(&self) {
        self.fail_next_save.set(true);
    }

    /// Snapshot of the stored lines.
    #[must_use]
    pub fn stored(&self) -> Vec<CartLine> {
        self.lines.borrow().clone()
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError> {
        Ok(self.lines.borrow().clone())
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), CartStorageError> {
        if self.fail_next_save.take() {
            return Err(CartStorageError::Write(io::Error::other(
                "simulated storage failure",
            )));
        }

        *self.lines.borrow_mut() = lines.to_vec();

        Ok(())
    }
}

/// Write-through cart: the single source of truth for the current session.
///
/// Every mutation is persisted before it returns; the in-memory cart and the
/// store only diverge when a save fails, in which case the mutation has still
/// been applied in memory so the user does not lose it.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Hydrate the cart from storage, once at startup.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] when the store cannot be read or parsed.
    pub fn load(storage: S) -> Result<Self, CartStorageError> {
        let cart = Cart::from_lines(storage.load()?);

        Ok(Self { cart, storage })
    }

    /// Add `quantity` of a product; see [`Cart::add_item`].
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] when persisting the cart fails.
    pub fn add_item(
        &mut self,
        product: &CartProduct,
        quantity: u32,
    ) -> Result<(), CartStorageError> {
        self.cart.add_item(product, quantity);
        self.persist()
    }

    /// Remove a line entirely; see [`Cart::remove_item`].
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] when persisting the cart fails.
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), CartStorageError> {
        self.cart.remove_item(product_id);
        self.persist()
    }

    /// Set a line's quantity; see [`Cart::update_quantity`].
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] when persisting the cart fails.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: u32,
    ) -> Result<(), CartStorageError> {
        self.cart.update_quantity(product_id, quantity);
        self.persist()
    }

    /// Empty the cart; see [`Cart::clear`].
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] when persisting the cart fails.
    pub fn clear(&mut self) -> Result<(), CartStorageError> {
        self.cart.clear();
        self.persist()
    }

    /// The current cart state.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.cart.total_price()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn persist(&self) -> Result<(), CartStorageError> {
        self.storage.save(self.cart.lines())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn tulsi_tea() -> CartProduct {
        CartProduct {
            id: "moringa-tulsi-tea".to_string(),
            name: "Moringa Tulsi Tea".to_string(),
            price: 249,
            image: "/products/tulsi-tea.jpg".to_string(),
            net_qty: "100g".to_string(),
        }
    }

    #[test]
    fn missing_file_hydrates_as_empty_cart() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = JsonCartStorage::new(dir.path().join("cart.json"));

        let store = CartStore::load(storage)?;

        assert!(store.is_empty());

        Ok(())
    }

    #[test]
    fn cart_survives_a_reload() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart.json");

        let mut store = CartStore::load(JsonCartStorage::new(&path))?;
        store.add_item(&tulsi_tea(), 2)?;

        let reloaded = CartStore::load(JsonCartStorage::new(&path))?;

        assert_eq!(reloaded.cart(), store.cart());
        assert_eq!(reloaded.total_items(), 2);
        assert_eq!(reloaded.total_price(), 498);

        Ok(())
    }

    #[test]
    fn corrupt_file_is_reported_not_swallowed() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart.json");
        fs::write(&path, b"not json")?;

        let result = CartStore::load(JsonCartStorage::new(&path));

        assert!(matches!(result, Err(CartStorageError::Corrupt(_))));

        Ok(())
    }

    #[test]
    fn every_mutation_is_written_through() -> TestResult {
        let storage = MemoryCartStorage::new();
        let mut store = CartStore::load(&storage)?;
        let product = tulsi_tea();

        store.add_item(&product, 1)?;
        assert_eq!(storage.stored().len(), 1);

        store.update_quantity(&product.id, 3)?;
        assert_eq!(storage.stored()[0].quantity, 3);

        store.remove_item(&product.id)?;
        assert!(storage.stored().is_empty());

        Ok(())
    }

    #[test]
    fn failed_save_keeps_the_in_memory_mutation() -> TestResult {
        let storage = MemoryCartStorage::new();
        storage.fail_next_save();

        let mut store = CartStore::load(storage)?;

        let result = store.add_item(&tulsi_tea(), 1);

        assert!(matches!(result, Err(CartStorageError::Write(_))));
        assert_eq!(store.total_items(), 1);

        Ok(())
    }

    #[test]
    fn preseeded_memory_storage_hydrates_the_cart() -> TestResult {
        let mut cart = Cart::new();
        cart.add_item(&tulsi_tea(), 2);

        let storage = MemoryCartStorage::with_lines(cart.lines().to_vec());
        let store = CartStore::load(storage)?;

        assert_eq!(store.cart(), &cart);

        Ok(())
    }
}
