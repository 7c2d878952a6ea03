use crate::CatalogError;
use cenik_types::{NewProduct, ProductRecord};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Maximum accepted product name length, in characters.
const NAME_LIMIT: usize = 100;

/// Storage seam for product records.
///
/// `list` returns the entire catalog in natural storage order. The report
/// pipeline relies on that ordering and performs no filtering of its own.
pub trait ProductStore: Send + Sync {
    fn list(&self) -> Result<Vec<ProductRecord>, CatalogError>;

    fn get(&self, id: i64) -> Result<ProductRecord, CatalogError>;

    /// Assigns the next id. Ids are unique and never reused.
    fn insert(&self, product: NewProduct) -> Result<ProductRecord, CatalogError>;

    /// Replaces every field except the id.
    fn update(&self, id: i64, product: NewProduct) -> Result<ProductRecord, CatalogError>;

    fn delete(&self, id: i64) -> Result<(), CatalogError>;
}

/// Rejects writes the catalog considers invalid: empty or over-long names
/// and prices that are not usable non-negative numbers.
fn validate(product: &NewProduct) -> Result<(), CatalogError> {
    if product.name.is_empty() {
        return Err(CatalogError::InvalidInput("name must not be empty".into()));
    }
    if product.name.chars().count() > NAME_LIMIT {
        return Err(CatalogError::InvalidInput(format!(
            "name exceeds {NAME_LIMIT} characters"
        )));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(CatalogError::InvalidInput(
            "price must be a non-negative number".into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<ProductRecord>,
    next_id: i64,
}

/// An in-memory [`ProductStore`].
///
/// Insertion order is the natural storage order. Ids come from a monotonic
/// counter and survive deletions, matching an autoincrement column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.products.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, CatalogError> {
        self.inner
            .read()
            .map_err(|_| CatalogError::Store("catalog lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, CatalogError> {
        self.inner
            .write()
            .map_err(|_| CatalogError::Store("catalog lock poisoned".into()))
    }
}

impl ProductStore for MemoryStore {
    fn list(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        Ok(self.read()?.products.clone())
    }

    fn get(&self, id: i64) -> Result<ProductRecord, CatalogError> {
        self.read()?
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    fn insert(&self, product: NewProduct) -> Result<ProductRecord, CatalogError> {
        validate(&product)?;
        let mut inner = self.write()?;
        inner.next_id += 1;
        let record = ProductRecord {
            id: inner.next_id,
            name: product.name,
            price: product.price,
            regular_price: product.regular_price,
            discount_price: product.discount_price,
            description: product.description,
        };
        inner.products.push(record.clone());
        log::debug!("inserted product {} ({})", record.id, record.name);
        Ok(record)
    }

    fn update(&self, id: i64, product: NewProduct) -> Result<ProductRecord, CatalogError> {
        validate(&product)?;
        let mut inner = self.write()?;
        let slot = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        slot.name = product.name;
        slot.price = product.price;
        slot.regular_price = product.regular_price;
        slot.discount_price = product.discount_price;
        slot.description = product.description;
        Ok(slot.clone())
    }

    fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let mut inner = self.write()?;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            return Err(CatalogError::NotFound(id));
        }
        log::debug!("deleted product {id}");
        Ok(())
    }
}
