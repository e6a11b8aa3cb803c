//! Catalogue plus per-product FIFO queues of physical units.

use super::error::StockError;
use super::product::{Product, ProductId, ProductInfo};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Product metadata keyed by id.
pub type Catalogue = BTreeMap<ProductId, ProductInfo>;

/// Products the machine knows about and the units it physically holds.
///
/// Units may be stocked before their catalogue entry exists; such units stay
/// unsellable until the catalogue is updated.
///
/// # Example
///
/// ```rust
/// use dispenser::products::{Catalogue, Product, ProductInfo, Stock};
///
/// let catalogue: Catalogue = [(1, ProductInfo::new("Water", 100))].into_iter().collect();
/// let mut stock = Stock::new(catalogue);
/// stock.add_units([Product::new(1)]);
///
/// assert_eq!(stock.price_of(1).unwrap(), 100);
/// assert_eq!(stock.current_offer().len(), 1);
/// assert_eq!(stock.get_unit(1).unwrap(), Product::new(1));
/// assert!(stock.get_unit(1).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Stock {
    catalogue: Catalogue,
    units: HashMap<ProductId, VecDeque<Product>>,
}

impl Stock {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            units: HashMap::new(),
        }
    }

    /// Create a stock with `units` already queued.
    pub fn with_units<I>(catalogue: Catalogue, units: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        let mut stock = Self::new(catalogue);
        stock.add_units(units);
        stock
    }

    /// Enqueue physical units.
    pub fn add_units<I>(&mut self, products: I)
    where
        I: IntoIterator<Item = Product>,
    {
        for product in products {
            if !self.catalogue.contains_key(&product.id) {
                tracing::warn!(
                    product_id = product.id,
                    "unit stocked without a catalogue entry; not sellable yet"
                );
            }
            self.units.entry(product.id).or_default().push_back(product);
        }
    }

    /// Dequeue the oldest unit of `product_id`.
    pub fn get_unit(&mut self, product_id: ProductId) -> Result<Product, StockError> {
        self.units
            .get_mut(&product_id)
            .and_then(VecDeque::pop_front)
            .ok_or(StockError::Underflow { product_id })
    }

    pub fn price_of(&self, product_id: ProductId) -> Result<u64, StockError> {
        self.info_of(product_id)
            .map(|info| info.price)
            .ok_or(StockError::MissingCatalogueEntry { product_id })
    }

    pub fn info_of(&self, product_id: ProductId) -> Option<&ProductInfo> {
        self.catalogue.get(&product_id)
    }

    /// Number of queued units of `product_id`.
    pub fn units_of(&self, product_id: ProductId) -> usize {
        self.units.get(&product_id).map_or(0, VecDeque::len)
    }

    /// Catalogue entries with at least one unit in stock.
    pub fn current_offer(&self) -> Catalogue {
        self.catalogue
            .iter()
            .filter(|(id, _)| self.units_of(**id) > 0)
            .map(|(id, info)| (*id, info.clone()))
            .collect()
    }

    /// Replace the catalogue, keeping old entries for products still in
    /// stock that the new catalogue does not mention.
    pub fn replace_catalogue(&mut self, new_catalogue: Catalogue) {
        let mut merged = self.current_offer();
        merged.extend(new_catalogue);
        self.catalogue = merged;
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}
