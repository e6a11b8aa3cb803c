//! Product identity and catalogue metadata.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Integer identifier shared by all physical units of one product.
pub type ProductId = u32;

/// A physical unit of a product.
///
/// Identity is the product id alone: two units with the same id are equal
/// whatever lot they came from. The lot number only records provenance.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub lot: u32,
}

impl Product {
    pub fn new(id: ProductId) -> Self {
        Self { id, lot: 0 }
    }

    pub fn with_lot(id: ProductId, lot: u32) -> Self {
        Self { id, lot }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Display name and price (minor units) for a product id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub price: u64,
}

impl ProductInfo {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_compare_by_id() {
        assert_eq!(Product::new(1), Product::new(1));
        assert_ne!(Product::new(1), Product::new(2));
    }

    #[test]
    fn lot_does_not_affect_identity() {
        assert_eq!(Product::with_lot(3, 1), Product::with_lot(3, 2));
    }
}
