//! Serde helpers for prices.
//!
//! The backend sends prices as JSON numbers (sometimes as strings). Numbers
//! are converted through their shortest decimal rendering so that `12.99`
//! stays `12.99` instead of its binary floating-point expansion.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Writes a JSON number when `f64` carries the exact value, otherwise the
/// decimal string (which [`deserialize`] accepts back).
pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    let exact = value.to_f64().filter(|f| {
        f.is_finite() && BigDecimal::from_str(&f.to_string()).is_ok_and(|back| back == *value)
    });
    match exact {
        Some(f) => serializer.serialize_f64(f),
        None => serializer.serialize_str(&value.to_string()),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
    let raw = match RawPrice::deserialize(deserializer)? {
        RawPrice::Int(i) => return Ok(BigDecimal::from(i)),
        RawPrice::Float(f) => f.to_string(),
        RawPrice::Text(s) => s,
    };
    BigDecimal::from_str(raw.trim()).map_err(de::Error::custom)
}

/// Same wire format, but rejects negative amounts. Used for catalog prices.
pub mod non_negative {
    use bigdecimal::{BigDecimal, Zero};
    use serde::{de, Deserializer};

    pub use super::serialize;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let price = super::deserialize(deserializer)?;
        if price < BigDecimal::zero() {
            return Err(de::Error::custom(format!("negative price {price}")));
        }
        Ok(price)
    }
}

/// Parses a non-negative price such as `"9.99"`.
pub fn parse_price(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw.trim())
        .ok()
        .filter(|p| *p >= BigDecimal::zero())
}

/// Renders a price with two decimals, the way totals are shown to shoppers.
pub fn format_price(value: &BigDecimal) -> String {
    value.with_scale_round(2, bigdecimal::RoundingMode::HalfUp).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "super")]
        price: BigDecimal,
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn float_prices_keep_their_decimal_form() {
        let p: Priced = serde_json::from_str(r#"{"price": 12.99}"#).unwrap();
        assert_eq!(p.price, dec("12.99"));
    }

    #[test]
    fn integer_and_string_prices_are_accepted() {
        let p: Priced = serde_json::from_str(r#"{"price": 480}"#).unwrap();
        assert_eq!(p.price, dec("480"));
        let p: Priced = serde_json::from_str(r#"{"price": "5.50"}"#).unwrap();
        assert_eq!(p.price, dec("5.5"));
    }

    #[test]
    fn garbage_price_is_an_error() {
        assert!(serde_json::from_str::<Priced>(r#"{"price": "cheap"}"#).is_err());
    }

    #[test]
    fn serializes_as_json_number() {
        let json = serde_json::to_value(Priced { price: dec("25.50") }).unwrap();
        assert_eq!(json["price"], serde_json::json!(25.5));
    }

    #[derive(Deserialize)]
    struct CatalogPriced {
        #[serde(with = "super::non_negative")]
        price: BigDecimal,
    }

    #[test]
    fn precise_amounts_fall_back_to_strings() {
        let amount = dec("12345678901234567890.123456789");
        let json = serde_json::to_value(Priced { price: amount.clone() }).unwrap();
        assert_eq!(json["price"], serde_json::json!("12345678901234567890.123456789"));
        let back: Priced = serde_json::from_value(json).unwrap();
        assert_eq!(back.price, amount);
    }

    #[test]
    fn catalog_prices_must_not_be_negative() {
        assert!(serde_json::from_str::<CatalogPriced>(r#"{"price": -5.00}"#).is_err());
        assert!(serde_json::from_str::<CatalogPriced>(r#"{"price": "-0.01"}"#).is_err());
        let free: CatalogPriced = serde_json::from_str(r#"{"price": 0}"#).unwrap();
        assert_eq!(free.price, dec("0"));
    }

    #[test]
    fn parse_price_rejects_negative_and_garbage() {
        assert_eq!(parse_price(" 480 "), Some(dec("480")));
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("abc"), None);
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_price(&dec("505.5")), "505.50");
        assert_eq!(format_price(&dec("480")), "480.00");
    }
}
