//! Report assembly and export.
//!
//! Pure reshaping: all computation happened upstream in the valuator.

use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::imports::ImportWarning;
use crate::portfolio::valuation::PortfolioValuation;

use super::format;
use super::{PortfolioReport, PortfolioSummary, ReportRow};

/// Assembles the terminal report from the valuation and the import
/// warnings collected earlier in the run.
pub fn build_report(valuation: PortfolioValuation, warnings: Vec<ImportWarning>) -> PortfolioReport {
    let positions = valuation.holdings.len();
    let total_value = valuation.total_value;
    let average_value = if positions > 0 {
        total_value / Decimal::from(positions as u64)
    } else {
        Decimal::ZERO
    };

    debug!(
        "Built report: {} positions, total {}, {} failed symbols, {} warnings",
        positions,
        total_value,
        valuation.failed_symbols.len(),
        warnings.len()
    );

    PortfolioReport {
        holdings: valuation.holdings,
        total_value,
        failed_symbols: valuation.failed_symbols,
        warnings,
        summary: PortfolioSummary {
            positions,
            total_value,
            average_value,
        },
    }
}

/// Exports the report as CSV: `Symbol,Shares,Price,Value,Percentage`,
/// one row per holding in first-seen order, unresolved prices as "N/A",
/// no summary row.
pub fn to_csv(report: &PortfolioReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Symbol", "Shares", "Price", "Value", "Percentage"])?;

    for holding in &report.holdings {
        let shares = holding.total_shares.to_string();
        let price = holding
            .unit_price
            .map(|p| p.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let value = holding.market_value.to_string();
        let percentage = holding.percentage.round_dp(2).to_string();
        writer.write_record([
            holding.symbol.as_str(),
            shares.as_str(),
            price.as_str(),
            value.as_str(),
            percentage.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Report(e.to_string()))
}

/// Formatted breakdown rows, sorted by value descending for display.
/// The report itself keeps first-seen order; only this view re-sorts.
pub fn table_rows(report: &PortfolioReport) -> Vec<ReportRow> {
    let mut holdings: Vec<_> = report.holdings.iter().collect();
    holdings.sort_by(|a, b| b.market_value.cmp(&a.market_value));

    holdings
        .into_iter()
        .map(|holding| ReportRow {
            symbol: holding.symbol.clone(),
            shares: holding.total_shares.to_string(),
            price: holding
                .unit_price
                .map(format::money)
                .unwrap_or_else(|| "N/A".to_string()),
            value: format::money(holding.market_value),
            percentage: format::percent(holding.percentage),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::valuation::ValuedHolding;
    use rust_decimal_macros::dec;

    fn sample_valuation() -> PortfolioValuation {
        PortfolioValuation {
            holdings: vec![
                ValuedHolding {
                    symbol: "AAPL".to_string(),
                    total_shares: dec!(10),
                    unit_price: Some(dec!(150)),
                    market_value: dec!(1500),
                    percentage: dec!(100),
                },
                ValuedHolding {
                    symbol: "GOOGL".to_string(),
                    total_shares: dec!(5),
                    unit_price: None,
                    market_value: Decimal::ZERO,
                    percentage: Decimal::ZERO,
                },
            ],
            total_value: dec!(1500),
            failed_symbols: vec!["GOOGL".to_string()],
        }
    }

    #[test]
    fn summary_counts_positions_and_averages() {
        let report = build_report(sample_valuation(), Vec::new());

        assert_eq!(report.summary.positions, 2);
        assert_eq!(report.summary.total_value, dec!(1500));
        assert_eq!(report.summary.average_value, dec!(750));
    }

    #[test]
    fn empty_report_has_zero_average() {
        let report = build_report(PortfolioValuation::default(), Vec::new());
        assert_eq!(report.summary.average_value, Decimal::ZERO);
    }

    #[test]
    fn csv_export_renders_na_and_no_summary_row() {
        let report = build_report(sample_valuation(), Vec::new());
        let csv = to_csv(&report).unwrap();

        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Symbol,Shares,Price,Value,Percentage");
        assert_eq!(lines[1], "AAPL,10,150,1500,100");
        assert_eq!(lines[2], "GOOGL,5,N/A,0,0");
    }

    #[test]
    fn table_rows_are_formatted_and_sorted_by_value() {
        let report = build_report(sample_valuation(), Vec::new());
        let rows = table_rows(&report);

        assert_eq!(rows[0].symbol, "AAPL");
        assert_eq!(rows[0].price, "$150.00");
        assert_eq!(rows[0].value, "$1,500.00");
        assert_eq!(rows[0].percentage, "100.00%");

        assert_eq!(rows[1].symbol, "GOOGL");
        assert_eq!(rows[1].price, "N/A");
    }
}
