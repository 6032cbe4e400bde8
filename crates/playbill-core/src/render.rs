//! # Renderers
//!
//! Presentation of [`StatementData`]. No computation happens here beyond
//! currency formatting; every number comes from the statement engine.
//!
//! ## Output Formats
//! ```text
//! StatementData ──┬──► PlainText  "청구 내역 (고객명: BigCo)\n ..."
//!                 ├──► Html       "<h1>청구 내역 (고객명: BigCo)</h1>\n<table>..."
//!                 └──► Json       serde_json of StatementData
//! ```

use std::fmt::Write as _;

use crate::error::CoreResult;
use crate::money::CurrencyFormat;
use crate::statement::create_statement_data;
use crate::types::{Invoice, PlayCatalog, StatementData};

/// A statement output format.
pub trait StatementRenderer {
    fn render(&self, data: &StatementData) -> String;
}

// =============================================================================
// Plain Text
// =============================================================================

/// Line-oriented text statement.
#[derive(Debug, Clone, Default)]
pub struct PlainText {
    pub format: CurrencyFormat,
}

impl PlainText {
    pub fn new(format: CurrencyFormat) -> Self {
        PlainText { format }
    }
}

impl StatementRenderer for PlainText {
    fn render(&self, data: &StatementData) -> String {
        let mut result = format!("청구 내역 (고객명: {})\n", data.customer());

        for perf in data.performances() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                result,
                " {}: {} ({}석)",
                perf.play.name,
                self.format.format(perf.amount),
                perf.audience
            );
        }

        let _ = writeln!(result, "총액: {}", self.format.format(data.total_amount()));
        let _ = writeln!(result, "적립 포인트: {}점", data.total_volume_credits());
        result
    }
}

// =============================================================================
// HTML
// =============================================================================

/// HTML fragment statement: heading, one table row per performance, totals.
#[derive(Debug, Clone, Default)]
pub struct Html {
    pub format: CurrencyFormat,
}

impl Html {
    pub fn new(format: CurrencyFormat) -> Self {
        Html { format }
    }
}

impl StatementRenderer for Html {
    fn render(&self, data: &StatementData) -> String {
        let mut result = format!(
            "<h1>청구 내역 (고객명: {})</h1>\n",
            escape_html(data.customer())
        );
        result.push_str("<table>\n");
        result.push_str("<tr><th>연극</th><th>좌석 수</th><th>금액</th></tr>");

        for perf in data.performances() {
            let _ = writeln!(
                result,
                "<tr><td>{}</td><td>({}석)</td><td>{}</td></tr>",
                escape_html(&perf.play.name),
                perf.audience,
                self.format.format(perf.amount)
            );
        }

        result.push_str("</table>\n");
        let _ = writeln!(
            result,
            "<p>총액: <em>{}</em></p>",
            self.format.format(data.total_amount())
        );
        let _ = writeln!(
            result,
            "<p>적립 포인트: <em>{}</em>점</p>",
            data.total_volume_credits()
        );
        result
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// =============================================================================
// JSON
// =============================================================================

/// Pretty-printed JSON of the statement data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl StatementRenderer for Json {
    fn render(&self, data: &StatementData) -> String {
        // StatementData holds only strings and integers; serialization is infallible.
        serde_json::to_string_pretty(data).unwrap_or_default()
    }
}

// =============================================================================
// One-Shot Helpers
// =============================================================================

/// Computes and renders a plain-text statement in USD.
pub fn statement(invoice: &Invoice, plays: &PlayCatalog) -> CoreResult<String> {
    let data = create_statement_data(invoice, plays)?;
    Ok(PlainText::default().render(&data))
}

/// Computes and renders an HTML statement in USD.
pub fn html_statement(invoice: &Invoice, plays: &PlayCatalog) -> CoreResult<String> {
    let data = create_statement_data(invoice, plays)?;
    Ok(Html::default().render(&data))
}

// =============================================================================
// Unit Tests
// =============================================================================
