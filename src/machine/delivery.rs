//! Physical dispatch of products and cash.

use crate::payments::ChangeConfiguration;
use crate::products::Product;

/// Hardware side of the machine: ejects products and change.
///
/// Both calls are fire-and-forget; the controller neither inspects a result
/// nor retries.
pub trait Delivery {
    /// A product unit has been taken out of stock and must be ejected.
    fn dispatch(&mut self, product: &Product);

    /// A change configuration has been taken out of the inventory and must
    /// be ejected.
    fn send_cash(&mut self, change: &ChangeConfiguration);
}

/// Delivery that only logs what would be ejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingDelivery;

impl Delivery for LoggingDelivery {
    fn dispatch(&mut self, product: &Product) {
        tracing::info!(
            product_id = product.id,
            lot = product.lot,
            "product dispatched"
        );
    }

    fn send_cash(&mut self, change: &ChangeConfiguration) {
        tracing::info!(
            change = %change,
            value = change.total_value(),
            "sending change to the customer"
        );
    }
}

/// Delivery that remembers everything it was asked to eject.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingDelivery {
    pub dispatched: Vec<Product>,
    pub cash: Vec<ChangeConfiguration>,
}

impl Delivery for RecordingDelivery {
    fn dispatch(&mut self, product: &Product) {
        self.dispatched.push(*product);
    }

    fn send_cash(&mut self, change: &ChangeConfiguration) {
        self.cash.push(change.clone());
    }
}
