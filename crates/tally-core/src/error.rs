//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  apply_discount ──┐                                                     │
//! │  calculate_tax  ──┼──► PricingError ──► caller (checkout UI, API)       │
//! │  calculate_total ─┘                                                     │
//! │                                                                         │
//! │  Errors are NEVER caught or transformed inside this crate.              │
//! │  Any invalid input aborts the entire computation; there is no           │
//! │  partial result or recovery path. The caller owns presentation.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant carries a fixed, stable message - downstream code and
//!    user-facing layers rely on these exact strings

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Invalid-input errors raised by the pricing functions.
///
/// One variant per rejected condition. The `Display` messages are part of
/// the crate's compatibility contract: they must not change between
/// releases without a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A price (unit price or subtotal) was below zero.
    ///
    /// ## When This Occurs
    /// - A caller passes a negative unit price to a leaf function
    /// - A negative line item drags an aggregated subtotal below zero
    #[error("price cannot be negative")]
    NegativePrice,

    /// The discount percentage was below zero.
    #[error("discount cannot be negative")]
    NegativeDiscount,

    /// The discount percentage exceeded 100%.
    ///
    /// A discount over 100% would produce a negative price, which no
    /// downstream consumer (receipt, payment, ledger) can represent.
    #[error("discount cannot exceed 100%")]
    DiscountTooLarge,

    /// The tax rate was below zero.
    ///
    /// Note: there is NO upper bound on tax rates. Compound rates over
    /// 100% exist in the wild (e.g. excise on tobacco).
    #[error("tax rate cannot be negative")]
    NegativeTaxRate,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The messages are a compatibility contract; lock them down.
    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            PricingError::NegativePrice.to_string(),
            "price cannot be negative"
        );
        assert_eq!(
            PricingError::NegativeDiscount.to_string(),
            "discount cannot be negative"
        );
        assert_eq!(
            PricingError::DiscountTooLarge.to_string(),
            "discount cannot exceed 100%"
        );
        assert_eq!(
            PricingError::NegativeTaxRate.to_string(),
            "tax rate cannot be negative"
        );
    }
}
