//! Optimal change search.
//!
//! Change is found with a depth-first search over the available
//! denominations, largest first and largest quantity first. Once a quantity
//! of a denomination is chosen, that denomination is unavailable to the rest
//! of the branch, so the same multiset is never explored twice along a path.
//! The first exact match ends the search; otherwise the branch with the
//! smallest remainder (first found on ties) wins.

use super::denomination::Denomination;
use super::inventory::MonetaryInventory;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Plan of units to hand back plus the amount that could not be covered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeConfiguration {
    /// Remainder, in minor units, that the plan does not cover.
    pub owed: u64,
    /// Quantity to dispense per denomination.
    pub configuration: BTreeMap<Denomination, u32>,
}

impl ChangeConfiguration {
    pub fn new(owed: u64, configuration: BTreeMap<Denomination, u32>) -> Self {
        Self { owed, configuration }
    }

    /// Exact change covers the whole amount.
    pub fn is_exact(&self) -> bool {
        self.owed == 0
    }

    /// Nothing would be dispensed.
    pub fn is_empty(&self) -> bool {
        self.configuration.values().all(|quantity| *quantity == 0)
    }

    /// Value of the units in the plan, in minor units.
    pub fn total_value(&self) -> u64 {
        self.configuration
            .iter()
            .map(|(d, quantity)| d.value() * u64::from(*quantity))
            .sum()
    }
}

impl fmt::Display for ChangeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .configuration
            .iter()
            .rev()
            .map(|(d, quantity)| format!("{quantity} x {d}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Best plan seen so far during the search.
struct Best {
    owed: u64,
    units: Vec<(Denomination, u32)>,
}

/// Compute the best achievable change for `owed_amount` from `inventory`.
///
/// Always returns a configuration. When exact change is impossible the
/// result carries the smallest achievable remainder in `owed`; when nothing
/// fits at all the configuration is empty and `owed == owed_amount`.
///
/// # Example
///
/// ```rust
/// use dispenser::payments::{find_optimal_change, Denomination, MonetaryInventory};
///
/// let d = |v| Denomination::new(v).unwrap();
/// let inventory =
///     MonetaryInventory::with_default_denominations([(d(50), 3), (d(20), 4)]).unwrap();
///
/// let change = find_optimal_change(80, &inventory);
///
/// assert!(change.is_exact());
/// assert_eq!(change.configuration.get(&d(20)), Some(&4));
/// assert_eq!(change.configuration.get(&d(50)), None);
/// ```
pub fn find_optimal_change(
    owed_amount: u64,
    inventory: &MonetaryInventory,
) -> ChangeConfiguration {
    let available: Vec<(Denomination, u32)> = inventory
        .available_change()
        .into_iter()
        .rev()
        .filter(|(d, _)| d.value() > 0)
        .collect();

    let mut best = Best {
        owed: u64::MAX,
        units: Vec::new(),
    };
    let mut current = Vec::new();
    search(owed_amount, &available, &mut current, &mut best);

    let result = ChangeConfiguration::new(best.owed, best.units.into_iter().collect());
    tracing::debug!(
        owed_amount,
        remainder = result.owed,
        change = %result,
        "change search finished"
    );
    result
}

/// Explore every plan reachable from `current`. Returns `true` once an exact
/// plan has been stored in `best`.
///
/// `available` is sorted by descending value; entries with a zero count are
/// skipped.
fn search(
    owed: u64,
    available: &[(Denomination, u32)],
    current: &mut Vec<(Denomination, u32)>,
    best: &mut Best,
) -> bool {
    if owed < best.owed {
        best.owed = owed;
        best.units.clone_from(current);
    }
    if owed == 0 {
        return true;
    }

    for (index, &(denomination, count)) in available.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let value = denomination.value();
        // Bounded by `count`, so the cast back to u32 is lossless.
        let max_quantity = (owed / value).min(u64::from(count)) as u32;
        if max_quantity == 0 {
            continue;
        }

        let mut remaining = available.to_vec();
        remaining[index].1 = 0;

        for quantity in (1..=max_quantity).rev() {
            current.push((denomination, quantity));
            let rest = owed - value * u64::from(quantity);
            let found = search(rest, &remaining, current, best);
            current.pop();
            if found {
                return true;
            }
        }
    }

    false
}
