//! # Tax Calculator
//!
//! Computes tax owed on a price, honoring a tax-exemption flag.
//!
//! ## Rounding Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUND HALF AWAY FROM ZERO, AT 2 DECIMALS                               │
//! │                                                                         │
//! │  Tax is the ONE place this crate rounds, because tax authorities        │
//! │  assess in whole cents:                                                 │
//! │    8.125  → 8.13     (half rounds up, away from zero)                   │
//! │    8.124  → 8.12                                                        │
//! │    0.025  → 0.03                                                        │
//! │                                                                         │
//! │  One rule, stated once, applied everywhere. The discount path and       │
//! │  the aggregation loop never round.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{PricingError, PricingResult};

/// Calculates the tax owed on a price.
///
/// Tax-exempt prices owe zero regardless of the rate. Everything else owes
/// `price * tax_rate / 100`, rounded to 2 decimal places half-away-from-zero.
///
/// Inputs are validated BEFORE the exemption short-circuit, so an exempt
/// call with a negative rate still fails instead of silently returning zero.
///
/// There is no upper bound on `tax_rate`; compound rates over 100% exist.
///
/// ## Errors
/// - [`PricingError::NegativePrice`] if `price < 0`
/// - [`PricingError::NegativeTaxRate`] if `tax_rate < 0`
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use tally_core::calculate_tax;
///
/// let tax = calculate_tax(dec!(100), dec!(8.5), false)?;
/// assert_eq!(tax, dec!(8.50));
///
/// let exempt = calculate_tax(dec!(100), dec!(8.5), true)?;
/// assert_eq!(exempt, dec!(0));
/// # Ok::<(), tally_core::PricingError>(())
/// ```
pub fn calculate_tax(
    price: Decimal,
    tax_rate: Decimal,
    is_tax_exempt: bool,
) -> PricingResult<Decimal> {
    if price < Decimal::ZERO {
        return Err(PricingError::NegativePrice);
    }
    if tax_rate < Decimal::ZERO {
        return Err(PricingError::NegativeTaxRate);
    }

    if is_tax_exempt {
        return Ok(Decimal::ZERO);
    }

    let tax = price * tax_rate / Decimal::ONE_HUNDRED;
    Ok(tax.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculates_tax_on_price() {
        assert_eq!(calculate_tax(dec!(100), dec!(8.5), false).unwrap(), dec!(8.5));
    }

    #[test]
    fn test_zero_rate_owes_nothing() {
        assert_eq!(calculate_tax(dec!(50), dec!(0), false).unwrap(), dec!(0));
    }

    /// 19.99 at 10% = 1.999, rounds to 2.00 at cent precision.
    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(calculate_tax(dec!(19.99), dec!(10), false).unwrap(), dec!(2.00));
    }

    /// The distinguishing case for the rounding rule: 100 at 8.125% is
    /// exactly 8.125. Half-away-from-zero gives 8.13 (half-even would
    /// give 8.12).
    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        assert_eq!(
            calculate_tax(dec!(100), dec!(8.125), false).unwrap(),
            dec!(8.13)
        );
        assert_eq!(calculate_tax(dec!(0.50), dec!(5), false).unwrap(), dec!(0.03));
    }

    #[test]
    fn test_exempt_owes_nothing_at_any_rate() {
        assert_eq!(calculate_tax(dec!(100), dec!(8.5), true).unwrap(), dec!(0));
        assert_eq!(calculate_tax(dec!(100), dec!(250), true).unwrap(), dec!(0));
        assert_eq!(calculate_tax(dec!(100), dec!(0), true).unwrap(), dec!(0));
    }

    /// Rates over 100% are legal (compound excise rates exist).
    #[test]
    fn test_no_upper_bound_on_rate() {
        assert_eq!(calculate_tax(dec!(10), dec!(150), false).unwrap(), dec!(15));
    }

    #[test]
    fn test_rejects_negative_price() {
        assert_eq!(
            calculate_tax(dec!(-10), dec!(8.5), false),
            Err(PricingError::NegativePrice)
        );
    }

    #[test]
    fn test_rejects_negative_rate() {
        assert_eq!(
            calculate_tax(dec!(100), dec!(-5), false),
            Err(PricingError::NegativeTaxRate)
        );
    }

    /// Validation runs before the exemption short-circuit.
    #[test]
    fn test_exempt_call_still_validates_rate() {
        assert_eq!(
            calculate_tax(dec!(100), dec!(-5), true),
            Err(PricingError::NegativeTaxRate)
        );
    }
}
