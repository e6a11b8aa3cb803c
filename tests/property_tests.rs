//! Property-based tests for denominations, the cash inventory and the change
//! search.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use dispenser::core::{Trigger, VendingState};
use dispenser::machine::candidates;
use dispenser::payments::{find_optimal_change, Denomination, MonetaryInventory};
use proptest::prelude::*;
use std::collections::BTreeMap;

const VALUES: [u64; 8] = [200, 100, 50, 20, 10, 5, 2, 1];

prop_compose! {
    fn arbitrary_inventory()(
        values in prop::sample::subsequence(VALUES.to_vec(), 1..=4),
        counts in prop::collection::vec(0..=3u32, 4),
    ) -> MonetaryInventory {
        let initial: Vec<(Denomination, u32)> = values
            .into_iter()
            .zip(counts)
            .map(|(value, count)| (Denomination::new(value).unwrap(), count))
            .collect();
        MonetaryInventory::with_default_denominations(initial).unwrap()
    }
}

/// Largest amount not above `owed` that the inventory can pay exactly.
fn best_reachable(owed: u64, inventory: &MonetaryInventory) -> u64 {
    let owed = owed as usize;
    let mut reachable = vec![false; owed + 1];
    reachable[0] = true;
    for (denomination, count) in inventory.available_change() {
        let value = denomination.value() as usize;
        for _ in 0..count {
            for amount in (value..=owed).rev() {
                if reachable[amount - value] {
                    reachable[amount] = true;
                }
            }
        }
    }
    reachable.iter().rposition(|r| *r).unwrap_or(0) as u64
}

proptest! {
    #[test]
    fn denomination_validity(value in 0..10_000u64) {
        let expected = value <= 100 || value % 100 == 0;
        prop_assert_eq!(Denomination::new(value).is_ok(), expected);
    }

    #[test]
    fn zero_owed_is_always_exact_and_empty(inventory in arbitrary_inventory()) {
        let change = find_optimal_change(0, &inventory);
        prop_assert!(change.is_exact());
        prop_assert!(change.is_empty());
    }

    #[test]
    fn change_accounts_for_whole_amount(owed in 0..600u64, inventory in arbitrary_inventory()) {
        let change = find_optimal_change(owed, &inventory);
        prop_assert_eq!(change.total_value() + change.owed, owed);
    }

    #[test]
    fn change_never_overdraws_inventory(owed in 0..600u64, inventory in arbitrary_inventory()) {
        let change = find_optimal_change(owed, &inventory);
        for (denomination, quantity) in &change.configuration {
            prop_assert!(*quantity > 0);
            prop_assert!(*quantity <= inventory.count(*denomination));
        }

        let mut after = inventory.clone();
        prop_assert!(after.remove(&change.configuration).is_ok());
    }

    #[test]
    fn remainder_is_smallest_achievable(owed in 0..600u64, inventory in arbitrary_inventory()) {
        let change = find_optimal_change(owed, &inventory);
        prop_assert_eq!(change.owed, owed - best_reachable(owed, &inventory));
    }

    #[test]
    fn remove_is_all_or_nothing(
        inventory in arbitrary_inventory(),
        requests in prop::collection::vec(
            (prop::sample::select(VALUES.to_vec()), 0..=3u32),
            0..6,
        ),
    ) {
        let pairs: Vec<(Denomination, u32)> = requests
            .into_iter()
            .map(|(value, quantity)| (Denomination::new(value).unwrap(), quantity))
            .collect();

        let mut after = inventory.clone();
        let result = after.remove(pairs.iter().map(|(d, q)| (d, q)));

        if result.is_ok() {
            for denomination in inventory.supported() {
                let requested: u32 = pairs
                    .iter()
                    .filter(|(d, _)| d == denomination)
                    .map(|(_, q)| q)
                    .sum();
                prop_assert_eq!(
                    after.count(*denomination),
                    inventory.count(*denomination) - requested
                );
            }
        } else {
            prop_assert_eq!(after, inventory);
        }
    }

    #[test]
    fn search_is_deterministic(owed in 0..600u64, inventory in arbitrary_inventory()) {
        prop_assert_eq!(
            find_optimal_change(owed, &inventory),
            find_optimal_change(owed, &inventory)
        );
    }

    #[test]
    fn sole_denomination_uses_as_many_units_as_fit(
        value in prop::sample::select(VALUES.to_vec()),
        count in 0..10u32,
        owed in 0..2_000u64,
    ) {
        let denomination = Denomination::new(value).unwrap();
        let inventory =
            MonetaryInventory::with_default_denominations([(denomination, count)]).unwrap();

        let change = find_optimal_change(owed, &inventory);
        let expected = (owed / value).min(u64::from(count)) as u32;

        let expected_config: BTreeMap<Denomination, u32> = if expected > 0 {
            [(denomination, expected)].into_iter().collect()
        } else {
            BTreeMap::new()
        };
        prop_assert_eq!(change.configuration, expected_config);
    }

    #[test]
    fn maintenance_and_transactions_are_exclusive(
        state in prop::sample::select(VendingState::ALL.to_vec()),
    ) {
        let can_maintain = !candidates(state, Trigger::StartMaintenance).is_empty();
        let can_start = !candidates(state, Trigger::Start).is_empty();

        prop_assert_eq!(can_maintain, state == VendingState::Idle);
        prop_assert_eq!(can_start, state == VendingState::Idle);
    }
}
