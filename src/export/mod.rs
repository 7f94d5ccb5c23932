//! Tabular financial statements built from the first 36 projection months

mod pnl;
mod balance_sheet;

pub use pnl::{PnlRow, pnl_rows, write_pnl_csv};
pub use balance_sheet::{BalanceSheetRow, balance_sheet_rows, write_balance_sheet_csv};

use crate::currency::Currency;
use crate::error::Result;
use crate::inputs::ModelInputs;
use crate::projection::MonthlyMetrics;
use crate::round_half_up;
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Months covered by the exported statements
pub const EXPORT_MONTHS: usize = 36;

/// Share of fixed costs reported as general & admin; the rest is technology
pub const GENERAL_ADMIN_SHARE: f64 = 0.6;

pub fn pnl_file_name(prefix: &str, currency: Currency) -> String {
    format!("{}_{}m_PnL_{}.csv", prefix, EXPORT_MONTHS, currency.code())
}

pub fn balance_sheet_file_name(prefix: &str, currency: Currency) -> String {
    format!("{}_{}m_BalanceSheet_{}.csv", prefix, EXPORT_MONTHS, currency.code())
}

/// Write both statements into `dir`, returning the two file paths
pub fn export_statements(
    dir: &Path,
    prefix: &str,
    months: &[MonthlyMetrics],
    inputs: &ModelInputs,
    currency: Currency,
) -> Result<(PathBuf, PathBuf)> {
    let pnl_path = dir.join(pnl_file_name(prefix, currency));
    write_pnl_csv(File::create(&pnl_path)?, &pnl_rows(months, inputs, currency), currency)?;
    info!("wrote profit and loss to {}", pnl_path.display());

    let bs_path = dir.join(balance_sheet_file_name(prefix, currency));
    write_balance_sheet_csv(
        File::create(&bs_path)?,
        &balance_sheet_rows(months, inputs, currency),
        currency,
    )?;
    info!("wrote balance sheet to {}", bs_path.display());

    Ok((pnl_path, bs_path))
}

fn column(name: &str, currency: Currency) -> String {
    format!("{} ({})", name, currency.code())
}

fn whole(value: f64) -> String {
    format!("{:.0}", round_half_up(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Scenario;
    use crate::projection::ProjectionEngine;

    #[test]
    fn test_file_names() {
        assert_eq!(pnl_file_name("pitch", Currency::Usd), "pitch_36m_PnL_USD.csv");
        assert_eq!(
            balance_sheet_file_name("pitch", Currency::Aed),
            "pitch_36m_BalanceSheet_AED.csv"
        );
    }

    #[test]
    fn test_whole_rounding() {
        assert_eq!(whole(182_399.999_999_99), "182400");
        assert_eq!(whole(-169_900.4), "-169900");
        assert_eq!(whole(-0.3), "0");
    }

    #[test]
    fn test_export_statements_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = Scenario::Balanced.inputs();
        let months = ProjectionEngine::default().project(&inputs);

        let (pnl, bs) =
            export_statements(dir.path(), "pitch", &months, &inputs, Currency::Eur).unwrap();

        let pnl_text = std::fs::read_to_string(pnl).unwrap();
        let bs_text = std::fs::read_to_string(bs).unwrap();
        // header plus 36 months
        assert_eq!(pnl_text.lines().count(), 37);
        assert_eq!(bs_text.lines().count(), 37);
        assert!(pnl_text.starts_with("Month,Revenue (EUR)"));
    }
}
