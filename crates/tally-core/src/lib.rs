//! # tally-core: Pure Pricing Logic
//!
//! This crate is the single authoritative place cart totals are computed.
//! It contains three pure functions and the two value types they exchange
//! with callers - nothing else. No server, no persistence, no protocol.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Where tally-core sits                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │              Callers (checkout flow, pricing UI, API)           │    │
//! │  │    supply items + discount/tax parameters, handle errors        │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ tally-core (THIS CRATE) ★                       │    │
//! │  │                                                                 │    │
//! │  │   ┌────────────┐   ┌────────────┐   ┌──────────────────────┐    │    │
//! │  │   │  discount  │   │    tax     │   │        cart          │    │    │
//! │  │   │ percentage │◄──┤ exemption- │◄──┤ one-pass aggregation │    │    │
//! │  │   │   off a    │   │ aware tax  │   │ composing the leaves │    │    │
//! │  │   │   price    │   │  at cents  │   │  into a breakdown    │    │    │
//! │  │   └────────────┘   └────────────┘   └──────────────────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - [`LineItem`] and [`CartTotals`] data transfer objects
//! - [`discount`] - percentage discount on a price (exact, no rounding)
//! - [`tax`] - exemption-aware tax, rounded to cents
//! - [`cart`] - one-pass aggregation composing the two leaves
//! - [`error`] - the [`PricingError`] taxonomy
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, every time - callers may
//!    invoke from any number of threads without coordination
//! 2. **Decimal Money**: every price and percentage is a
//!    [`rust_decimal::Decimal`]; floats are forbidden
//! 3. **One Rounding Rule**: tax rounds half-away-from-zero at 2 decimals;
//!    nothing else rounds, ever
//! 4. **Explicit Errors**: invalid input yields a typed [`PricingError`],
//!    never a panic, and never a silently clamped value
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tally_core::{calculate_total, LineItem};
//!
//! let items = vec![
//!     LineItem::new(dec!(100), 1),
//!     LineItem::new(dec!(25), 3),
//! ];
//!
//! // 10% off, 7% sales tax
//! let totals = calculate_total(&items, dec!(10), dec!(7))?;
//!
//! assert_eq!(totals.subtotal, dec!(175));
//! assert_eq!(totals.discount, dec!(17.50));
//! assert_eq!(totals.tax, dec!(11.03)); // 7% of 157.50, rounded to cents
//! assert_eq!(totals.total, dec!(168.53));
//! # Ok::<(), tally_core::PricingError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod tax;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::LineItem` instead of
// `use tally_core::types::LineItem`

pub use cart::calculate_total;
pub use discount::apply_discount;
pub use error::{PricingError, PricingResult};
pub use tax::calculate_tax;
pub use types::{CartTotals, LineItem};
