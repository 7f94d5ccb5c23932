//! Balance sheet
//!
//! The model has no receivables, inventory, fixed assets or liabilities, so
//! cash is the only asset: paid-in capital plus retained earnings. Cash is
//! not taken from the projection's cumulative cash column, which also nets
//! out the investment and would leave the sheet unbalanced.
//!
//! Investment is an AED input like every other figure and is converted to
//! the display currency, so the balanced preset shows USD 108,800 of paid-in
//! capital rather than 400,000.

use super::{column, whole, EXPORT_MONTHS};
use crate::currency::Currency;
use crate::error::Result;
use crate::inputs::ModelInputs;
use crate::projection::MonthlyMetrics;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheetRow {
    pub month: u32,
    pub cash: f64,
    pub accounts_receivable: f64,
    pub inventory: f64,
    pub total_current_assets: f64,
    pub property_plant_equipment: f64,
    pub intangibles: f64,
    pub total_assets: f64,
    pub accounts_payable: f64,
    pub accrued_expenses: f64,
    pub debt: f64,
    pub total_liabilities: f64,
    pub paid_in_capital: f64,
    pub retained_earnings: f64,
    pub total_equity: f64,
}

const HEADERS: [&str; 14] = [
    "Cash & Equivalents",
    "Accounts Receivable",
    "Inventory",
    "Total Current Assets",
    "PP&E",
    "Intangibles",
    "Total Assets",
    "Accounts Payable",
    "Accrued Expenses",
    "Debt",
    "Total Liabilities",
    "Paid-in Capital",
    "Retained Earnings",
    "Total Equity",
];

pub fn balance_sheet_rows(
    months: &[MonthlyMetrics],
    inputs: &ModelInputs,
    currency: Currency,
) -> Vec<BalanceSheetRow> {
    let paid_in_capital = currency.from_aed(inputs.investment);
    let mut retained_earnings = 0.0;

    months
        .iter()
        .take(EXPORT_MONTHS)
        .map(|m| {
            retained_earnings += currency.from_aed(m.net_income);
            let total_equity = paid_in_capital + retained_earnings;
            let cash = total_equity;
            let total_liabilities = 0.0;

            BalanceSheetRow {
                month: m.month,
                cash,
                accounts_receivable: 0.0,
                inventory: 0.0,
                total_current_assets: cash,
                property_plant_equipment: 0.0,
                intangibles: 0.0,
                total_assets: cash,
                accounts_payable: 0.0,
                accrued_expenses: 0.0,
                debt: 0.0,
                total_liabilities,
                paid_in_capital,
                retained_earnings,
                total_equity,
            }
        })
        .collect()
}

pub fn write_balance_sheet_csv<W: Write>(
    writer: W,
    rows: &[BalanceSheetRow],
    currency: Currency,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Month".to_string()];
    header.extend(HEADERS.iter().map(|name| column(name, currency)));
    wtr.write_record(&header)?;

    for row in rows {
        wtr.write_record(&[
            row.month.to_string(),
            whole(row.cash),
            whole(row.accounts_receivable),
            whole(row.inventory),
            whole(row.total_current_assets),
            whole(row.property_plant_equipment),
            whole(row.intangibles),
            whole(row.total_assets),
            whole(row.accounts_payable),
            whole(row.accrued_expenses),
            whole(row.debt),
            whole(row.total_liabilities),
            whole(row.paid_in_capital),
            whole(row.retained_earnings),
            whole(row.total_equity),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Scenario;
    use crate::projection::ProjectionEngine;
    use approx::assert_relative_eq;

    fn rows(currency: Currency) -> Vec<BalanceSheetRow> {
        let inputs = Scenario::Balanced.inputs();
        let months = ProjectionEngine::default().project(&inputs);
        balance_sheet_rows(&months, &inputs, currency)
    }

    #[test]
    fn test_month_one() {
        let row = &rows(Currency::Aed)[0];
        assert_relative_eq!(row.paid_in_capital, 400_000.0);
        assert_relative_eq!(row.retained_earnings, -169_900.0, epsilon = 1e-6);
        assert_relative_eq!(row.cash, 230_100.0, epsilon = 1e-6);
        assert_eq!(row.total_liabilities, 0.0);
    }

    #[test]
    fn test_sheet_balances() {
        for row in rows(Currency::Eur) {
            assert_relative_eq!(
                row.total_assets,
                row.total_liabilities + row.total_equity,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_retained_earnings_accumulate() {
        let inputs = Scenario::Balanced.inputs();
        let months = ProjectionEngine::default().project(&inputs);
        let sheet = balance_sheet_rows(&months, &inputs, Currency::Aed);

        let expected: f64 = months.iter().take(36).map(|m| m.net_income).sum();
        assert_relative_eq!(sheet[35].retained_earnings, expected, epsilon = 1e-4);
        // Cash tracks the engine's cumulative cash offset by the investment
        assert_relative_eq!(
            sheet[35].cash,
            months[35].cumulative_cash + 2.0 * inputs.investment,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_paid_in_capital_converted() {
        let row = &rows(Currency::Usd)[0];
        assert_relative_eq!(row.paid_in_capital, 108_800.0, epsilon = 1e-6);
    }

    #[test]
    fn test_csv_output() {
        let sheet = rows(Currency::Aed);
        let mut buf = Vec::new();
        write_balance_sheet_csv(&mut buf, &sheet, Currency::Aed).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.len(), 15);
        assert_eq!(&headers[1], "Cash & Equivalents (AED)");

        let first = rdr.records().next().unwrap().unwrap();
        assert_eq!(&first[1], "230100");
        assert_eq!(&first[12], "400000");
        assert_eq!(&first[13], "-169900");
        assert_eq!(&first[14], "230100");
    }
}
