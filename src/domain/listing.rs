//! Best-listing entity returned by the marketplace.

use std::fmt;

use alloy_primitives::{Address, B256};
use rust_decimal::Decimal;

/// Price of a listing as reported by the marketplace.
///
/// `value` is the raw integer amount in the currency's smallest unit and is
/// what flows downstream. The normalized form is for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPrice {
    pub value: String,
    pub decimals: u32,
    pub currency: String,
}

impl ListingPrice {
    /// Raw amount divided by `10^decimals`.
    ///
    /// Returns `None` when the amount does not fit an exact decimal.
    #[must_use]
    pub fn normalized(&self) -> Option<Decimal> {
        let raw: i128 = self.value.trim().parse().ok()?;
        Decimal::try_from_i128_with_scale(raw, self.decimals)
            .ok()
            .map(|d| d.normalize())
    }
}

impl fmt::Display for ListingPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normalized() {
            Some(amount) => write!(f, "{amount} {}", self.currency),
            None => write!(
                f,
                "{} (10^-{}) {}",
                self.value, self.decimals, self.currency
            ),
        }
    }
}

/// The best current sale offer for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub collection: String,
    pub token_id: String,
    pub price: ListingPrice,
    pub protocol_address: Address,
    pub order_hash: B256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn price(value: &str, decimals: u32) -> ListingPrice {
        ListingPrice {
            value: value.into(),
            decimals,
            currency: "ETH".into(),
        }
    }

    #[test]
    fn normalizes_one_ether() {
        assert_eq!(price("1000000000000000000", 18).normalized(), Some(dec!(1)));
    }

    #[test]
    fn normalizes_fractional_amounts() {
        assert_eq!(
            price("12345000000000000000", 18).normalized(),
            Some(dec!(12.345))
        );
        assert_eq!(price("1500000", 6).normalized(), Some(dec!(1.5)));
    }

    #[test]
    fn unparseable_amount_has_no_normalized_form() {
        assert_eq!(price("abc", 18).normalized(), None);
    }

    #[test]
    fn scale_beyond_decimal_range_has_no_normalized_form() {
        assert_eq!(price("1", 40).normalized(), None);
    }

    #[test]
    fn display_uses_human_units() {
        assert_eq!(price("69000000000000000000", 18).to_string(), "69 ETH");
    }

    #[test]
    fn display_falls_back_to_raw_value() {
        assert_eq!(price("1", 40).to_string(), "1 (10^-40) ETH");
    }
}
