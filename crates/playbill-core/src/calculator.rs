//! # Performance Calculators
//!
//! Per-genre billing formulas. Both functions are pure in
//! `(genre, audience)`: no catalog access, no history across performances.
//!
//! ## Formula Table
//! ```text
//! ┌──────────┬──────────────────────────────────────────┬──────────────────────────┐
//! │ Genre    │ Amount (cents)                           │ Volume credits           │
//! ├──────────┼──────────────────────────────────────────┼──────────────────────────┤
//! │ tragedy  │ 40000 + 1000 × (aud − 30)   if aud > 30  │ max(aud − 30, 0)         │
//! │ comedy   │ 30000 + 10000 + 500 × (aud − 20)         │ max(aud − 30, 0)         │
//! │          │                             if aud > 20  │   + floor(aud / 5)       │
//! │          │       + 300 × aud           always       │                          │
//! │ other    │ Err(UnknownGenre)                        │ max(aud − 30, 0)         │
//! └──────────┴──────────────────────────────────────────┴──────────────────────────┘
//! ```
//!
//! The two calculators disagree on unknown genres on purpose: amounts fail,
//! credits fall back to the base rule.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Genre;

const TRAGEDY_BASE: i64 = 40_000;
const TRAGEDY_THRESHOLD: u32 = 30;
const TRAGEDY_PER_EXTRA_SEAT: i64 = 1_000;

const COMEDY_BASE: i64 = 30_000;
const COMEDY_THRESHOLD: u32 = 20;
const COMEDY_OVER_THRESHOLD_FLAT: i64 = 10_000;
const COMEDY_PER_EXTRA_SEAT: i64 = 500;
const COMEDY_PER_SEAT: i64 = 300;

const CREDIT_THRESHOLD: u64 = 30;
const COMEDY_CREDIT_DIVISOR: u64 = 5;

/// Computes the charge for one performance.
///
/// ## Example
/// ```rust
/// use playbill_core::calculator::amount_for;
/// use playbill_core::types::Genre;
///
/// assert_eq!(amount_for(&Genre::Tragedy, 55).unwrap().cents(), 65_000);
/// assert_eq!(amount_for(&Genre::Comedy, 35).unwrap().cents(), 58_000);
/// assert!(amount_for(&Genre::from("history"), 10).is_err());
/// ```
pub fn amount_for(genre: &Genre, audience: u32) -> CoreResult<Money> {
    let seats = i64::from(audience);

    let cents = match genre {
        Genre::Tragedy => {
            let mut result = TRAGEDY_BASE;
            if audience > TRAGEDY_THRESHOLD {
                result += TRAGEDY_PER_EXTRA_SEAT * (seats - i64::from(TRAGEDY_THRESHOLD));
            }
            result
        }
        Genre::Comedy => {
            let mut result = COMEDY_BASE;
            if audience > COMEDY_THRESHOLD {
                result += COMEDY_OVER_THRESHOLD_FLAT
                    + COMEDY_PER_EXTRA_SEAT * (seats - i64::from(COMEDY_THRESHOLD));
            }
            result + COMEDY_PER_SEAT * seats
        }
        Genre::Other(tag) => {
            return Err(CoreError::UnknownGenre { genre: tag.clone() });
        }
    };

    Ok(Money::from_cents(cents))
}

/// Computes the loyalty points for one performance. Never fails.
///
/// Computed in `u64`, so no `u32` audience can overflow.
///
/// ## Example
/// ```rust
/// use playbill_core::calculator::volume_credits_for;
/// use playbill_core::types::Genre;
///
/// assert_eq!(volume_credits_for(&Genre::Tragedy, 55), 25);
/// assert_eq!(volume_credits_for(&Genre::Comedy, 35), 12);
/// assert_eq!(volume_credits_for(&Genre::from("history"), 40), 10);
/// ```
pub fn volume_credits_for(genre: &Genre, audience: u32) -> u64 {
    let seats = u64::from(audience);
    let base = seats.saturating_sub(CREDIT_THRESHOLD);

    match genre {
        Genre::Comedy => base + seats / COMEDY_CREDIT_DIVISOR,
        Genre::Tragedy | Genre::Other(_) => base,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(genre: &Genre, audience: u32) -> i64 {
        amount_for(genre, audience).unwrap().cents()
    }

    #[test]
    fn test_tragedy_amount_threshold() {
        assert_eq!(cents(&Genre::Tragedy, 0), 40_000);
        assert_eq!(cents(&Genre::Tragedy, 30), 40_000);
        assert_eq!(cents(&Genre::Tragedy, 31), 41_000);
        assert_eq!(cents(&Genre::Tragedy, 40), 50_000);
    }

    #[test]
    fn test_comedy_amount_threshold() {
        // Zero seats: no add-on, no per-seat surcharge.
        assert_eq!(cents(&Genre::Comedy, 0), 30_000);
        // At the threshold only the per-seat surcharge applies.
        assert_eq!(cents(&Genre::Comedy, 20), 30_000 + 6_000);
        // One past: flat 10000 + 500 + per-seat.
        assert_eq!(cents(&Genre::Comedy, 21), 30_000 + 10_500 + 6_300);
        assert_eq!(cents(&Genre::Comedy, 35), 58_000);
    }

    #[test]
    fn test_unknown_genre_amount_fails_with_tag() {
        let err = amount_for(&Genre::from("history"), 10).unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownGenre {
                genre: "history".to_string()
            }
        );
    }

    #[test]
    fn test_credits_base_rule() {
        assert_eq!(volume_credits_for(&Genre::Tragedy, 0), 0);
        assert_eq!(volume_credits_for(&Genre::Tragedy, 30), 0);
        assert_eq!(volume_credits_for(&Genre::Tragedy, 40), 10);
    }

    #[test]
    fn test_comedy_credit_bonus() {
        assert_eq!(volume_credits_for(&Genre::Comedy, 4), 0);
        assert_eq!(volume_credits_for(&Genre::Comedy, 5), 1);
        assert_eq!(volume_credits_for(&Genre::Comedy, 30), 6);
        assert_eq!(volume_credits_for(&Genre::Comedy, 35), 5 + 7);
    }

    #[test]
    fn test_unknown_genre_credits_use_base_rule() {
        let history = Genre::from("history");
        assert_eq!(volume_credits_for(&history, 20), 0);
        assert_eq!(volume_credits_for(&history, 45), 15);
    }

    #[test]
    fn test_max_audience_does_not_overflow() {
        let max = u64::from(u32::MAX);

        assert_eq!(cents(&Genre::Tragedy, u32::MAX), 40_000 + 1_000 * (max as i64 - 30));
        assert_eq!(
            cents(&Genre::Comedy, u32::MAX),
            30_000 + 10_000 + 500 * (max as i64 - 20) + 300 * max as i64
        );

        assert_eq!(volume_credits_for(&Genre::Tragedy, u32::MAX), max - 30);
        assert_eq!(volume_credits_for(&Genre::Comedy, u32::MAX), max - 30 + max / 5);
        assert_eq!(volume_credits_for(&Genre::from("history"), u32::MAX), max - 30);
    }
}
