//! # Statement Engine
//!
//! Turns an [`Invoice`] and a [`PlayCatalog`] into [`StatementData`].
//!
//! ## Pipeline
//! ```text
//! Invoice.performances ──► play_for ──► amount_for ──┐
//!        (ordered)                  └─► volume_credits_for
//!                                                    │
//!                          enrich_performance ◄──────┘
//!                                   │   (one per line, same order)
//!                                   ▼
//!                     total_amount / total_volume_credits
//!                                   │
//!                                   ▼
//!                             StatementData
//! ```
//!
//! The first failing line aborts the whole statement.

use tracing::{debug, info};

use crate::calculator::{amount_for, volume_credits_for};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{EnrichedPerformance, Invoice, Performance, Play, PlayCatalog, StatementData};

/// Looks up the play a performance refers to.
pub fn play_for<'a>(performance: &Performance, plays: &'a PlayCatalog) -> CoreResult<&'a Play> {
    plays
        .get(&performance.play_id)
        .ok_or_else(|| CoreError::PlayNotFound {
            play_id: performance.play_id.clone(),
        })
}

/// Resolves the play and computes charges for one performance.
pub fn enrich_performance(
    performance: &Performance,
    plays: &PlayCatalog,
) -> CoreResult<EnrichedPerformance> {
    let play = play_for(performance, plays)?;
    let amount = amount_for(&play.genre, performance.audience)?;
    let volume_credits = volume_credits_for(&play.genre, performance.audience);

    debug!(
        play_id = %performance.play_id,
        audience = performance.audience,
        amount = amount.cents(),
        volume_credits,
        "Enriched performance"
    );

    Ok(EnrichedPerformance {
        play_id: performance.play_id.clone(),
        audience: performance.audience,
        play: play.clone(),
        amount,
        volume_credits,
    })
}

/// Sum of all performance amounts, or `None` if it does not fit in `i64` cents.
pub fn total_amount(performances: &[EnrichedPerformance]) -> Option<Money> {
    performances
        .iter()
        .try_fold(Money::zero(), |acc, p| acc.checked_add(p.amount))
}

/// Sum of all performance credits.
pub fn total_volume_credits(performances: &[EnrichedPerformance]) -> u64 {
    performances.iter().map(|p| p.volume_credits).sum()
}

/// Builds the statement data for an invoice.
///
/// ## Example
/// ```rust
/// use playbill_core::{create_statement_data, Invoice, Performance, Play, PlayCatalog};
///
/// let mut plays = PlayCatalog::new();
/// plays.insert("hamlet".to_string(), Play::new("Hamlet", "tragedy"));
///
/// let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
/// let data = create_statement_data(&invoice, &plays).unwrap();
///
/// assert_eq!(data.total_amount().cents(), 65_000);
/// assert_eq!(data.total_volume_credits(), 25);
/// ```
pub fn create_statement_data(invoice: &Invoice, plays: &PlayCatalog) -> CoreResult<StatementData> {
    let performances = invoice
        .performances
        .iter()
        .map(|performance| enrich_performance(performance, plays))
        .collect::<CoreResult<Vec<_>>>()?;

    let total_amount = total_amount(&performances).ok_or_else(|| CoreError::TotalOverflow {
        customer: invoice.customer.clone(),
    })?;

    let data = StatementData {
        customer: invoice.customer.clone(),
        total_amount,
        total_volume_credits: total_volume_credits(&performances),
        performances,
    };

    info!(
        customer = %data.customer,
        performances = data.performances.len(),
        total_amount = data.total_amount.cents(),
        total_volume_credits = data.total_volume_credits,
        "Statement computed"
    );

    Ok(data)
}

/// Alias of [`create_statement_data`] under the engine's public operation name.
#[inline]
pub fn compute_statement(invoice: &Invoice, plays: &PlayCatalog) -> CoreResult<StatementData> {
    create_statement_data(invoice, plays)
}

// =============================================================================
// Unit Tests
// =============================================================================
