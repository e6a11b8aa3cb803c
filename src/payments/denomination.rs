//! Coin and note values.

use super::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest value that may be represented by a coin of arbitrary value.
/// Anything above must be a whole number of currency units.
const MAX_FRACTIONAL_VALUE: u64 = 100;

/// A single coin or note value, in integer minor currency units.
///
/// Values up to 100 are accepted as-is. Above 100 a denomination must be an
/// exact multiple of 100, so notes always carry whole currency units.
///
/// # Example
///
/// ```rust
/// use dispenser::payments::Denomination;
///
/// let fifty = Denomination::new(50).unwrap();
/// let two_pounds = Denomination::new(200).unwrap();
///
/// assert!(fifty < two_pounds);
/// assert_eq!(two_pounds.to_string(), "£2");
/// assert!(Denomination::new(150).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Denomination(u64);

impl Denomination {
    /// Create a denomination, rejecting values that are not whole currency
    /// units above 100.
    pub fn new(value: u64) -> Result<Self, PaymentError> {
        if Self::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(PaymentError::InvalidDenomination { value })
        }
    }

    /// Check whether `value` could be turned into a denomination (pure).
    pub fn is_valid(value: u64) -> bool {
        value <= MAX_FRACTIONAL_VALUE || value % 100 == 0
    }

    /// Value in minor units.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Denomination {
    type Error = PaymentError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Denomination> for u64 {
    fn from(denomination: Denomination) -> Self {
        denomination.0
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 100 {
            write!(f, "{}p", self.0)
        } else {
            write!(f, "£{}", self.0 / 100)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_fractional_values_up_to_one_hundred() {
        for value in 0..=100 {
            assert!(Denomination::new(value).is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn rejects_values_that_are_not_whole_units() {
        assert!(matches!(
            Denomination::new(150),
            Err(PaymentError::InvalidDenomination { value: 150 })
        ));
        assert!(Denomination::new(101).is_err());
        assert!(Denomination::new(1999).is_err());
    }

    #[test]
    fn accepts_whole_unit_notes() {
        assert!(Denomination::new(200).is_ok());
        assert!(Denomination::new(500).is_ok());
        assert!(Denomination::new(2000).is_ok());
    }

    #[test]
    fn orders_by_value() {
        let mut values: Vec<Denomination> = [20, 200, 1, 50]
            .into_iter()
            .map(|v| Denomination::new(v).unwrap())
            .collect();
        values.sort();

        let sorted: Vec<u64> = values.into_iter().map(Denomination::value).collect();
        assert_eq!(sorted, vec![1, 20, 50, 200]);
    }

    #[test]
    fn displays_pence_and_pounds() {
        assert_eq!(Denomination::new(5).unwrap().to_string(), "5p");
        assert_eq!(Denomination::new(100).unwrap().to_string(), "£1");
        assert_eq!(Denomination::new(2000).unwrap().to_string(), "£20");
    }

    #[test]
    fn deserialization_validates_value() {
        let ok: Denomination = serde_json::from_str("50").unwrap();
        assert_eq!(ok.value(), 50);

        let bad: Result<Denomination, _> = serde_json::from_str("250");
        assert!(bad.is_err());
    }
}
