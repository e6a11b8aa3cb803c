//! Counted stock of coins and notes held by the machine.

use super::denomination::Denomination;
use super::error::PaymentError;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Values accepted when no explicit set is configured.
pub const DEFAULT_DENOMINATIONS: [u64; 8] = [200, 100, 50, 20, 10, 5, 2, 1];

/// Counted inventory of denominations.
///
/// The supported set is fixed at construction. Only supported denominations
/// ever receive a count, and counts never go below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonetaryInventory {
    supported: BTreeSet<Denomination>,
    counts: BTreeMap<Denomination, u32>,
}

impl MonetaryInventory {
    /// Create an inventory with an explicit supported set and initial counts.
    ///
    /// Fails if the initial counts mention a denomination outside `supported`.
    pub fn new<S, I>(supported: S, initial: I) -> Result<Self, PaymentError>
    where
        S: IntoIterator<Item = Denomination>,
        I: IntoIterator<Item = (Denomination, u32)>,
    {
        let mut inventory = Self {
            supported: supported.into_iter().collect(),
            counts: BTreeMap::new(),
        };
        inventory.add_bulk(initial)?;
        Ok(inventory)
    }

    /// Create an inventory accepting [`DEFAULT_DENOMINATIONS`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use dispenser::payments::{Denomination, MonetaryInventory};
    ///
    /// let pound = Denomination::new(100).unwrap();
    /// let inventory = MonetaryInventory::with_default_denominations([(pound, 5)]).unwrap();
    ///
    /// assert_eq!(inventory.count(pound), 5);
    /// assert_eq!(inventory.total_value(), 500);
    /// ```
    pub fn with_default_denominations<I>(initial: I) -> Result<Self, PaymentError>
    where
        I: IntoIterator<Item = (Denomination, u32)>,
    {
        Self::new(default_denominations(), initial)
    }

    /// Add a single unit, e.g. a coin inserted by a customer.
    pub fn add_unit(&mut self, denomination: Denomination) -> Result<(), PaymentError> {
        self.add_bulk([(denomination, 1)])
    }

    /// Add a bulk supply. Nothing is added unless every key is supported and
    /// no count would overflow.
    pub fn add_bulk<I>(&mut self, supply: I) -> Result<(), PaymentError>
    where
        I: IntoIterator<Item = (Denomination, u32)>,
    {
        let mut updated: BTreeMap<Denomination, u32> = BTreeMap::new();
        for (denomination, quantity) in supply {
            self.ensure_supported(denomination)?;
            let count = updated
                .entry(denomination)
                .or_insert_with(|| self.count(denomination));
            *count = count
                .checked_add(quantity)
                .ok_or(PaymentError::CountOverflow { denomination })?;
        }
        self.counts.extend(updated);
        Ok(())
    }

    /// Remove dispensed change. Nothing is removed unless every requested
    /// quantity is available. Repeated keys are summed before checking.
    pub fn remove<'a, I>(&mut self, change: I) -> Result<(), PaymentError>
    where
        I: IntoIterator<Item = (&'a Denomination, &'a u32)>,
    {
        let mut totals: BTreeMap<Denomination, u32> = BTreeMap::new();
        for (denomination, quantity) in change {
            if *quantity == 0 {
                continue;
            }
            let total = totals.entry(*denomination).or_insert(0);
            *total = total.saturating_add(*quantity);
        }

        let mut updated = Vec::with_capacity(totals.len());
        for (denomination, requested) in totals {
            let available = self.count(denomination);
            let remaining = available
                .checked_sub(requested)
                .ok_or(PaymentError::InventoryUnderflow {
                    denomination,
                    requested,
                    available,
                })?;
            updated.push((denomination, remaining));
        }
        self.counts.extend(updated);
        Ok(())
    }

    /// Denominations with a strictly positive count.
    pub fn available_change(&self) -> BTreeMap<Denomination, u32> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(d, count)| (*d, *count))
            .collect()
    }

    /// Units held of one denomination (zero when absent).
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Sum of all held units, in minor units.
    pub fn total_value(&self) -> u64 {
        self.counts
            .iter()
            .map(|(d, count)| d.value() * u64::from(*count))
            .sum()
    }

    pub fn supported(&self) -> &BTreeSet<Denomination> {
        &self.supported
    }

    pub fn is_supported(&self, denomination: Denomination) -> bool {
        self.supported.contains(&denomination)
    }

    fn ensure_supported(&self, denomination: Denomination) -> Result<(), PaymentError> {
        if self.is_supported(denomination) {
            Ok(())
        } else {
            Err(PaymentError::UnsupportedDenomination(denomination))
        }
    }
}

fn default_denominations() -> impl Iterator<Item = Denomination> {
    DEFAULT_DENOMINATIONS
        .into_iter()
        .filter_map(|value| Denomination::new(value).ok())
}
