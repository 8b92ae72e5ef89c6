use thiserror::Error;

/// Errors reported by [`NumberView`](crate::NumberView) operations.
///
/// All errors are local to the call that produced them; a failed setter
/// leaves the widget unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Number text is empty, contains a non-decimal character, or does not
    /// fit the integer type it is parsed into.
    #[error("number text is empty or not a decimal number")]
    InvalidNumberFormat,

    /// Number text has more digits than the widget can hold.
    #[error("number text has more than {max} digits")]
    TooManyDigits { max: usize },

    /// A configured dimension is negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeDimension { field: &'static str, value: i32 },
}
