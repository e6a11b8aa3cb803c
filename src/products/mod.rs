//! Sellable products: catalogue metadata and the physical units in stock.

mod error;
mod product;
mod stock;

pub use error::StockError;
pub use product::{Product, ProductId, ProductInfo};
pub use stock::{Catalogue, Stock};
