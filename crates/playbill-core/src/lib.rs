//! # playbill-core: Statement Engine for the Theater Company
//!
//! Computes billing statements from an invoice and a play catalog, and
//! renders them. Everything here is a pure function with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Playbill Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    playbill-cli                                 │   │
//! │  │    load plays.json + invoices.json ──► print statements         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ playbill-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ calculator │  │ statement │  │  render   │  │   │
//! │  │   │  Invoice  │  │ amount_for │  │  enrich   │  │ PlainText │  │   │
//! │  │   │   Play    │  │  credits   │  │  totals   │  │   Html    │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Invoice, Performance, Play, StatementData
//! - [`money`] - Integer-cent `Money` and `CurrencyFormat`
//! - [`calculator`] - Per-genre amount and volume credit formulas
//! - [`statement`] - Enrichment and aggregation
//! - [`render`] - Plain text, HTML and JSON output
//! - [`error`] - `CoreError`
//!
//! ## Example Usage
//!
//! ```rust
//! use playbill_core::{statement, Invoice, Performance, Play, PlayCatalog};
//!
//! let mut plays = PlayCatalog::new();
//! plays.insert("othello".to_string(), Play::new("Othello", "tragedy"));
//!
//! let invoice = Invoice::new("BigCo", vec![Performance::new("othello", 40)]);
//! let text = statement(&invoice, &plays).unwrap();
//!
//! assert!(text.contains(" Othello: $500.00 (40석)\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod render;
pub mod statement;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::{CurrencyFormat, Money};
pub use render::{html_statement, statement, Html, Json, PlainText, StatementRenderer};
pub use statement::{compute_statement, create_statement_data};
pub use types::*;
