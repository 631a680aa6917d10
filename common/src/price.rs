//! [`Price`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{From, Into};

use crate::define_kind;

/// Nightly price of an offer.
///
/// Kept as a plain non-negative integer: prices on the wire carry no
/// currency minor units.
#[derive(
    Clone, Copy, Debug, Default, Eq, From, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Price(u32);

impl Price {
    /// Creates a new [`Price`] of the provided amount.
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Price`].
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }

    /// Returns the [`Bucket`] this [`Price`] falls into.
    ///
    /// [`Bucket`] bounds are half-open: `9999` is still [`Bucket::Low`],
    /// `10000` is already [`Bucket::Middle`], and so on.
    #[must_use]
    pub const fn bucket(self) -> Bucket {
        match self.0 {
            0..=9_999 => Bucket::Low,
            10_000..=49_999 => Bucket::Middle,
            50_000.. => Bucket::High,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self).map_err(|_| "invalid `Price`")
    }
}

define_kind! {
    #[doc = "Coarse price range of a [`Price`]."]
    enum Bucket {
        #[doc = "Below 10000 per night."]
        Low = 1,

        #[doc = "From 10000 up to, not including, 50000 per night."]
        Middle = 2,

        #[doc = "50000 per night and above."]
        High = 3,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Bucket, Price};

    #[test]
    fn bucket_bounds_are_half_open() {
        assert_eq!(Price::new(0).bucket(), Bucket::Low);
        assert_eq!(Price::new(9_999).bucket(), Bucket::Low);
        assert_eq!(Price::new(10_000).bucket(), Bucket::Middle);
        assert_eq!(Price::new(49_999).bucket(), Bucket::Middle);
        assert_eq!(Price::new(50_000).bucket(), Bucket::High);
        assert_eq!(Price::new(u32::MAX).bucket(), Bucket::High);
    }

    #[test]
    fn from_str() {
        assert_eq!(Price::from_str("5000").unwrap(), Price::new(5_000));
        assert_eq!(Price::from_str(" 5000 ").unwrap(), Price::new(5_000));

        assert!(Price::from_str("").is_err());
        assert!(Price::from_str("-1").is_err());
        assert!(Price::from_str("5000.5").is_err());
        assert!(Price::from_str("money").is_err());
    }

    #[test]
    fn bucket_strings() {
        assert_eq!(Bucket::Low.to_string(), "low");
        assert_eq!("middle".parse::<Bucket>().unwrap(), Bucket::Middle);
        assert_eq!("high".parse::<Bucket>().unwrap(), Bucket::High);
        assert!("any".parse::<Bucket>().is_err());
    }
}
