//! Machine configuration: supported denominations, starting cash, the
//! catalogue and the units loaded at start-up.
//!
//! Validation accumulates every violation instead of stopping at the first,
//! so an operator can fix a configuration file in one pass.
//!
//! # Example
//!
//! ```rust
//! use dispenser::config::MachineConfig;
//!
//! let config = MachineConfig::from_json(r#"{
//!     "denominations": [200, 100, 50, 10],
//!     "inventory": { "100": 5, "10": 3 },
//!     "catalogue": { "1": { "name": "Soda", "price": 210 } },
//!     "products": [1, 1]
//! }"#).unwrap();
//!
//! let machine = config.into_builder().unwrap().build().unwrap();
//! assert_eq!(machine.stock().units_of(1), 2);
//! assert_eq!(machine.inventory().total_value(), 530);
//! ```

mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::builder::VendingMachineBuilder;
use crate::payments::{Denomination, MonetaryInventory, DEFAULT_DENOMINATIONS};
use crate::products::{Catalogue, Product, ProductId, Stock};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Everything supplied to a machine at construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Accepted denomination values. Empty means the default set.
    pub denominations: Vec<u64>,
    /// Initial cash: denomination value to count.
    pub inventory: BTreeMap<u64, u32>,
    pub catalogue: Catalogue,
    /// Ids of the units stocked at start-up, in loading order.
    pub products: Vec<ProductId>,
}

impl MachineConfig {
    /// Parse a configuration from JSON. The result is not yet validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Denomination values in effect.
    pub fn supported_values(&self) -> Vec<u64> {
        if self.denominations.is_empty() {
            DEFAULT_DENOMINATIONS.to_vec()
        } else {
            self.denominations.clone()
        }
    }

    /// Validate all rules, accumulating ALL violations.
    pub fn validate(&self) -> Check {
        let supported = self.supported_values();
        let mut checks: Vec<Check> = Vec::new();

        let mut seen = BTreeSet::new();
        let mut invalid = BTreeSet::new();
        for &value in &supported {
            checks.push(if !Denomination::is_valid(value) {
                if invalid.insert(value) {
                    Validation::fail(ConfigViolation::InvalidDenomination { value })
                } else {
                    Validation::success(())
                }
            } else if !seen.insert(value) {
                Validation::fail(ConfigViolation::DuplicateDenomination { value })
            } else {
                Validation::success(())
            });
        }

        // Each invalid value is reported once, wherever it appears.
        for &value in self.inventory.keys() {
            checks.push(if invalid.contains(&value) {
                Validation::success(())
            } else if !Denomination::is_valid(value) {
                Validation::fail(ConfigViolation::InvalidDenomination { value })
            } else if !seen.contains(&value) {
                Validation::fail(ConfigViolation::UnsupportedInventory { value })
            } else {
                Validation::success(())
            });
        }

        for (&product_id, info) in &self.catalogue {
            checks.push(if info.price == 0 {
                Validation::fail(ConfigViolation::ZeroPrice { product_id })
            } else {
                Validation::success(())
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, then turn the configuration into a builder with stock and
    /// inventory set.
    pub fn into_builder(self) -> Result<VendingMachineBuilder, ConfigError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(ConfigError::Invalid(errors.iter().cloned().collect()));
        }

        let supported = self
            .supported_values()
            .into_iter()
            .map(Denomination::new)
            .collect::<Result<Vec<_>, _>>()?;
        let initial = self
            .inventory
            .iter()
            .map(|(&value, &count)| Denomination::new(value).map(|d| (d, count)))
            .collect::<Result<Vec<_>, _>>()?;
        let inventory = MonetaryInventory::new(supported, initial)?;

        let stock = Stock::with_units(self.catalogue, self.products.into_iter().map(Product::new));

        let builder = VendingMachineBuilder::new().stock(stock);
        Ok(builder.inventory(inventory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::ProductInfo;

    fn violations(config: &MachineConfig) -> Vec<ConfigViolation> {
        match config.validate() {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn empty_config_uses_default_denominations() {
        let config = MachineConfig::default();

        assert!(config.validate().is_success());
        assert_eq!(config.supported_values(), DEFAULT_DENOMINATIONS.to_vec());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = MachineConfig {
            denominations: vec![100, 150, 100],
            inventory: [(20, 1), (250, 1)].into_iter().collect(),
            catalogue: [(7, ProductInfo::new("Freebie", 0))].into_iter().collect(),
            products: vec![],
        };

        let found = violations(&config);

        assert_eq!(found.len(), 5);
        for expected in [
            ConfigViolation::InvalidDenomination { value: 150 },
            ConfigViolation::DuplicateDenomination { value: 100 },
            ConfigViolation::UnsupportedInventory { value: 20 },
            ConfigViolation::InvalidDenomination { value: 250 },
            ConfigViolation::ZeroPrice { product_id: 7 },
        ] {
            assert!(found.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn invalid_value_is_reported_once() {
        let config = MachineConfig {
            denominations: vec![100, 150, 150],
            inventory: [(100, 2), (150, 1)].into_iter().collect(),
            ..MachineConfig::default()
        };

        assert_eq!(
            violations(&config),
            vec![ConfigViolation::InvalidDenomination { value: 150 }]
        );
    }

    #[test]
    fn into_builder_rejects_invalid_config() {
        let config = MachineConfig {
            denominations: vec![30, 101],
            ..MachineConfig::default()
        };

        match config.into_builder() {
            Err(ConfigError::Invalid(found)) => {
                assert_eq!(
                    found,
                    vec![ConfigViolation::InvalidDenomination { value: 101 }]
                );
            }
            Err(other) => panic!("Expected invalid config, got {other:?}"),
            Ok(_) => panic!("Expected invalid config, got a builder"),
        }
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let result = MachineConfig::from_json("{ \"denominations\": \"lots\" }");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn json_round_trip_preserves_catalogue() {
        let config = MachineConfig {
            catalogue: [(1, ProductInfo::new("Water", 100))].into_iter().collect(),
            products: vec![1],
            ..MachineConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed = MachineConfig::from_json(&json).unwrap();

        assert_eq!(parsed, config);
    }
}
