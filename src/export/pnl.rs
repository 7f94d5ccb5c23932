//! Profit and loss statement

use super::{column, whole, EXPORT_MONTHS, GENERAL_ADMIN_SHARE};
use crate::currency::Currency;
use crate::error::Result;
use crate::inputs::ModelInputs;
use crate::projection::MonthlyMetrics;
use std::io::Write;

/// One month of the P&L, converted into the display currency
#[derive(Debug, Clone, PartialEq)]
pub struct PnlRow {
    pub month: u32,
    pub revenue: f64,
    pub cost_of_goods_sold: f64,
    pub gross_profit: f64,
    /// Acquisition spend
    pub marketing: f64,
    pub general_admin: f64,
    pub technology: f64,
    pub total_operating_expenses: f64,
    pub ebitda: f64,
    pub depreciation: f64,
    pub ebit: f64,
    pub interest: f64,
    pub ebt: f64,
    pub tax: f64,
    pub net_income: f64,
}

const HEADERS: [&str; 14] = [
    "Revenue",
    "Cost of Goods Sold",
    "Gross Profit",
    "Marketing & Sales (CAC)",
    "General & Admin",
    "Technology & R&D",
    "Total Operating Expenses",
    "EBITDA",
    "Depreciation & Amortization",
    "EBIT",
    "Interest Expense",
    "EBT",
    "Tax",
    "Net Income",
];

pub fn pnl_rows(months: &[MonthlyMetrics], inputs: &ModelInputs, currency: Currency) -> Vec<PnlRow> {
    let general_admin = currency.from_aed(inputs.fixed_costs_per_month * GENERAL_ADMIN_SHARE);
    let technology = currency.from_aed(inputs.fixed_costs_per_month * (1.0 - GENERAL_ADMIN_SHARE));

    months
        .iter()
        .take(EXPORT_MONTHS)
        .map(|m| {
            let revenue = currency.from_aed(m.revenue);
            let gross_profit = currency.from_aed(m.gross_profit);
            let marketing = currency.from_aed(m.customer_acquisition_cost);
            let ebitda = currency.from_aed(m.ebitda);
            // No depreciation, interest or tax in this model
            let depreciation = 0.0;
            let interest = 0.0;
            let tax = 0.0;
            let ebit = ebitda - depreciation;
            let ebt = ebit - interest;

            PnlRow {
                month: m.month,
                revenue,
                cost_of_goods_sold: revenue - gross_profit,
                gross_profit,
                marketing,
                general_admin,
                technology,
                total_operating_expenses: marketing + general_admin + technology,
                ebitda,
                depreciation,
                ebit,
                interest,
                ebt,
                tax,
                net_income: currency.from_aed(m.net_income),
            }
        })
        .collect()
}

/// Write rows as CSV with amounts rounded to whole units
pub fn write_pnl_csv<W: Write>(writer: W, rows: &[PnlRow], currency: Currency) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Month".to_string()];
    header.extend(HEADERS.iter().map(|name| column(name, currency)));
    wtr.write_record(&header)?;

    for row in rows {
        wtr.write_record(&[
            row.month.to_string(),
            whole(row.revenue),
            whole(row.cost_of_goods_sold),
            whole(row.gross_profit),
            whole(row.marketing),
            whole(row.general_admin),
            whole(row.technology),
            whole(row.total_operating_expenses),
            whole(row.ebitda),
            whole(row.depreciation),
            whole(row.ebit),
            whole(row.interest),
            whole(row.ebt),
            whole(row.tax),
            whole(row.net_income),
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

    fn balanced_rows(currency: Currency) -> Vec<PnlRow> {
        let inputs = Scenario::Balanced.inputs();
        let months = ProjectionEngine::default().project(&inputs);
        pnl_rows(&months, &inputs, currency)
    }

    #[test]
    fn test_first_thirty_six_months_only() {
        let rows = balanced_rows(Currency::Aed);
        assert_eq!(rows.len(), 36);
        assert_eq!(rows.first().unwrap().month, 1);
        assert_eq!(rows.last().unwrap().month, 36);
    }

    #[test]
    fn test_month_one_lines() {
        let row = &balanced_rows(Currency::Aed)[0];

        assert_relative_eq!(row.revenue, 285_000.0, epsilon = 1e-6);
        assert_relative_eq!(row.cost_of_goods_sold, 182_400.0, epsilon = 1e-6);
        assert_relative_eq!(row.marketing, 187_500.0, epsilon = 1e-6);
        assert_relative_eq!(row.general_admin, 51_000.0, epsilon = 1e-6);
        assert_relative_eq!(row.technology, 34_000.0, epsilon = 1e-6);
        assert_relative_eq!(row.total_operating_expenses, 272_500.0, epsilon = 1e-6);
        assert_relative_eq!(row.ebitda, -169_900.0, epsilon = 1e-6);
        assert_eq!(row.ebit, row.ebitda);
        assert_eq!(row.ebt, row.ebitda);
        assert_eq!(row.net_income, row.ebitda);
    }

    #[test]
    fn test_currency_applied_to_every_amount() {
        let aed = &balanced_rows(Currency::Aed)[0];
        let usd = &balanced_rows(Currency::Usd)[0];
        assert_relative_eq!(usd.revenue, aed.revenue * 0.272, epsilon = 1e-6);
        assert_relative_eq!(usd.general_admin, aed.general_admin * 0.272, epsilon = 1e-6);
        assert_relative_eq!(usd.net_income, aed.net_income * 0.272, epsilon = 1e-6);
    }

    #[test]
    fn test_csv_output() {
        let rows = balanced_rows(Currency::Aed);
        let mut buf = Vec::new();
        write_pnl_csv(&mut buf, &rows, Currency::Aed).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.len(), 15);
        assert_eq!(&headers[0], "Month");
        assert_eq!(&headers[4], "Marketing & Sales (CAC) (AED)");

        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 36);

        let first = &records[0];
        assert_eq!(&first[0], "1");
        assert_eq!(&first[1], "285000");
        assert_eq!(&first[2], "182400");
        assert_eq!(&first[3], "102600");
        assert_eq!(&first[8], "-169900");
        assert_eq!(&first[9], "0");
        assert_eq!(&first[14], "-169900");
    }
}
