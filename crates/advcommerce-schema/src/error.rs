/// Errors raised by the scalar constraint checks.
///
/// Structural validators never produce these; they return `false` instead.
#[derive(Debug, thiserror::Error)]
pub enum ConstraintError {
    /// The value is empty where a non-empty string is required.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// The value exceeds the documented per-field length limit.
    #[error("{field} exceeds maximum length ({length} > {max})")]
    TooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },

    /// The value is not a three-letter uppercase ISO 4217 currency code.
    #[error("currency must be a three-letter uppercase ISO 4217 code, got {0:?}")]
    InvalidCurrency(String),

    /// The price is below zero.
    #[error("price must not be negative, got {0}")]
    NegativePrice(i64),

    /// The price exceeds the maximum representable amount.
    #[error("price exceeds maximum allowed value, got {0}")]
    PriceTooLarge(i64),

    /// The value is not a canonical hyphenated version-4 UUID.
    #[error("not a canonical version-4 UUID: {0:?}")]
    InvalidUuid(String),
}

pub type Result<T> = std::result::Result<T, ConstraintError>;
