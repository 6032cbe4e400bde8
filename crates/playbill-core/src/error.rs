//! # Error Types
//!
//! Domain-specific error types for playbill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  playbill-core errors (this file)                                      │
//! │  └── CoreError        - Statement computation failures                 │
//! │                                                                         │
//! │  playbill-shop errors (separate crate)                                 │
//! │  └── ShopError        - Registration / purchase rejections             │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the terminal sees (plus exit code)        │
//! │                                                                         │
//! │  Flow: CoreError → CliError → stderr                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant aborts the whole statement. There is no partial statement.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Statement computation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A performance references a play that is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Typo in the invoice's `playID`
    /// - Catalog loaded from a different season than the invoice
    #[error("Play not found: {play_id}")]
    PlayNotFound { play_id: String },

    /// The amount calculator has no formula for this genre tag.
    ///
    /// Only raised while computing amounts. Credit calculation tolerates
    /// unknown genres and applies the base rule.
    #[error("Unknown genre: {genre}")]
    UnknownGenre { genre: String },

    /// The statement total does not fit in `i64` cents.
    #[error("Total amount overflows for customer: {customer}")]
    TotalOverflow { customer: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
