//! Analyst-facing text summary of a portfolio report.
//!
//! Produces the plain-text block an analyst (human or LLM) consumes:
//! totals, one line per holding, then the grouped-by-underlying section.
//! The model call that consumes this text is an external collaborator and
//! stays outside the core.

use std::fmt::Write;

use crate::portfolio::allocation::AllocationSlice;
use crate::reports::{format, PortfolioReport};

/// Renders the portfolio report as a deterministic text summary.
pub fn format_portfolio_summary(report: &PortfolioReport, slices: &[AllocationSlice]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "PORTFOLIO SUMMARY:");
    let _ = writeln!(
        out,
        "Total Portfolio Value: {}",
        format::money(report.summary.total_value)
    );
    let _ = writeln!(out, "Total Number of Holdings: {}", report.summary.positions);
    let _ = writeln!(
        out,
        "Average Holding Value: {}",
        format::money(report.summary.average_value)
    );

    let _ = writeln!(out, "\nHOLDINGS DETAILS:");
    for holding in &report.holdings {
        let price = holding
            .unit_price
            .map(format::money)
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(
            out,
            "- {}: {} shares @ {} = {} ({})",
            holding.symbol,
            holding.total_shares,
            price,
            format::money(holding.market_value),
            format::percent(holding.percentage)
        );
    }

    if !report.failed_symbols.is_empty() {
        let _ = writeln!(
            out,
            "\nUNPRICED SYMBOLS: {}",
            report.failed_symbols.join(", ")
        );
    }

    if !slices.is_empty() {
        let _ = writeln!(out, "\nGROUPED BY UNDERLYING TICKER:");
        for slice in slices {
            let _ = writeln!(
                out,
                "- {}: {} ({})",
                slice.label,
                format::money(slice.value),
                format::percent(slice.percentage)
            );
        }
    }

    out
}
