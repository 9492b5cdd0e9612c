//! Scalar business-rule checks, independent of structural validation.
//!
//! Each check takes one scalar and returns it unchanged, or fails fast
//! with a descriptive [`ConstraintError`]. The structural validators
//! never invoke these; callers apply them deliberately to individual
//! fields before encoding or after decoding.

use uuid::{Uuid, Variant};

use crate::error::{ConstraintError, Result};

pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const MAX_DISPLAY_NAME_LENGTH: usize = 255;
pub const MAX_SKU_LENGTH: usize = 128;
pub const MAX_TAX_CODE_LENGTH: usize = 50;

/// Maximum price in milliunits, matching the API's safe-integer ceiling.
pub const MAX_PRICE: i64 = 9_007_199_254_740_991;

/// A SKU description: non-empty, at most 1000 characters.
pub fn check_description(description: &str) -> Result<&str> {
    bounded("description", description, MAX_DESCRIPTION_LENGTH)
}

/// A customer-facing display name: non-empty, at most 255 characters.
pub fn check_display_name(display_name: &str) -> Result<&str> {
    bounded("display name", display_name, MAX_DISPLAY_NAME_LENGTH)
}

/// A product identifier: non-empty, at most 128 characters.
pub fn check_sku(sku: &str) -> Result<&str> {
    bounded("SKU", sku, MAX_SKU_LENGTH)
}

/// A tax code: non-empty, at most 50 characters.
pub fn check_tax_code(tax_code: &str) -> Result<&str> {
    bounded("tax code", tax_code, MAX_TAX_CODE_LENGTH)
}

/// An ISO 4217 currency code: exactly three ASCII uppercase letters.
pub fn check_currency(currency: &str) -> Result<&str> {
    if currency.is_empty() {
        return Err(ConstraintError::Empty { field: "currency" });
    }
    let well_formed = currency.len() == 3 && currency.bytes().all(|b| b.is_ascii_uppercase());
    if !well_formed {
        return Err(ConstraintError::InvalidCurrency(currency.to_string()));
    }
    Ok(currency)
}

/// A price in milliunits: non-negative, at most [`MAX_PRICE`].
pub fn check_price(price: i64) -> Result<i64> {
    if price < 0 {
        return Err(ConstraintError::NegativePrice(price));
    }
    if price > MAX_PRICE {
        return Err(ConstraintError::PriceTooLarge(price));
    }
    Ok(price)
}

/// An app account token: canonical hyphenated RFC 4122 version-4 UUID.
pub fn check_uuid(value: &str) -> Result<&str> {
    if value.is_empty() {
        return Err(ConstraintError::Empty { field: "UUID" });
    }
    // try_parse also accepts simple and URN forms; the API requires the
    // 36-character hyphenated rendering.
    let canonical = value.len() == 36;
    let parsed =
        Uuid::try_parse(value).map_err(|_| ConstraintError::InvalidUuid(value.to_string()))?;
    if !canonical || parsed.get_version_num() != 4 || parsed.get_variant() != Variant::RFC4122 {
        return Err(ConstraintError::InvalidUuid(value.to_string()));
    }
    Ok(value)
}

fn bounded<'a>(field: &'static str, value: &'a str, max: usize) -> Result<&'a str> {
    if value.is_empty() {
        return Err(ConstraintError::Empty { field });
    }
    let length = value.chars().count();
    if length > max {
        return Err(ConstraintError::TooLong { field, length, max });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_accepts_iso_codes() {
        assert_eq!(check_currency("USD").unwrap(), "USD");
        assert_eq!(check_currency("EUR").unwrap(), "EUR");
    }

    #[test]
    fn currency_rejects_malformed_codes() {
        assert!(matches!(
            check_currency("us"),
            Err(ConstraintError::InvalidCurrency(_))
        ));
        assert!(check_currency("usd").is_err());
        assert!(check_currency("USDX").is_err());
        assert!(check_currency("U$D").is_err());
        assert!(matches!(check_currency(""), Err(ConstraintError::Empty { .. })));
    }

    #[test]
    fn price_bounds() {
        assert_eq!(check_price(100).unwrap(), 100);
        assert_eq!(check_price(0).unwrap(), 0);
        assert_eq!(check_price(MAX_PRICE).unwrap(), MAX_PRICE);
        assert!(matches!(
            check_price(-1),
            Err(ConstraintError::NegativePrice(-1))
        ));
        assert!(matches!(
            check_price(MAX_PRICE + 1),
            Err(ConstraintError::PriceTooLarge(_))
        ));
    }

    #[test]
    fn sku_length_limit() {
        let max = "x".repeat(MAX_SKU_LENGTH);
        assert!(check_sku(&max).is_ok());

        let over = "x".repeat(MAX_SKU_LENGTH + 1);
        assert!(matches!(
            check_sku(&over),
            Err(ConstraintError::TooLong {
                length: 129,
                max: 128,
                ..
            })
        ));
        assert!(check_sku("").is_err());
    }

    #[test]
    fn description_and_display_name_limits() {
        assert!(check_description("a perfectly fine description").is_ok());
        assert!(check_description(&"d".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
        assert!(check_display_name("Pro Plan").is_ok());
        assert!(check_display_name(&"n".repeat(MAX_DISPLAY_NAME_LENGTH + 1)).is_err());
        assert!(check_tax_code(&"t".repeat(MAX_TAX_CODE_LENGTH)).is_ok());
        assert!(check_tax_code(&"t".repeat(MAX_TAX_CODE_LENGTH + 1)).is_err());
    }

    #[test]
    fn uuid_requires_canonical_v4() {
        let ok = "2bdc3cb8-9b0c-4c33-a1b9-2fd2ffbe581b";
        assert_eq!(check_uuid(ok).unwrap(), ok);
        // Case-insensitive, as RFC 4122 hex digits are.
        assert!(check_uuid("2BDC3CB8-9B0C-4C33-A1B9-2FD2FFBE581B").is_ok());

        // Version 1 rejected.
        assert!(check_uuid("2bdc3cb8-9b0c-1c33-a1b9-2fd2ffbe581b").is_err());
        // Wrong variant nibble rejected.
        assert!(check_uuid("2bdc3cb8-9b0c-4c33-01b9-2fd2ffbe581b").is_err());
        // Simple (non-hyphenated) rendering rejected.
        assert!(check_uuid("2bdc3cb89b0c4c33a1b92fd2ffbe581b").is_err());
        assert!(check_uuid("not-a-uuid").is_err());
        assert!(matches!(check_uuid(""), Err(ConstraintError::Empty { .. })));
    }
}
