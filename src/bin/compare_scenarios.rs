//! Side-by-side report of the three investment presets
//!
//! Prints the month 1/12/24/36/60 position of each preset in USD.

use growth_projection::{Currency, ProjectionEngine, Scenario};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let engine = ProjectionEngine::default();
    let currency = Currency::Usd;
    let checkpoints = [1u32, 12, 24, 36, 60];

    for scenario in Scenario::ALL {
        let inputs = scenario.inputs();
        let result = engine.run(&inputs)?;

        println!(
            "\n=== {} (investment {}, {} orders/day, AOV {}, CAC {}, churn {}%, margin {}%) ===",
            scenario,
            currency.format_aed(inputs.investment),
            inputs.orders_per_day,
            currency.format_aed(inputs.aov),
            currency.format_aed(inputs.cac),
            inputs.monthly_churn,
            inputs.contribution_margin,
        );
        println!("{:<6} {:<10} {:<14} {:<14} {:<16} {:<10}",
                 "Month", "Active", "Revenue", "EBITDA", "Cum. cash", "Runway");

        for month in checkpoints {
            if let Some(row) = result.month(month) {
                println!("{:<6} {:<10} {:<14} {:<14} {:<16} {:<10}",
                         row.month,
                         row.active_customers,
                         currency.format_aed(row.revenue),
                         currency.format_aed(row.ebitda),
                         currency.format_aed(row.cumulative_cash),
                         row.runway.to_string());
            }
        }

        let summary = &result.summary;
        println!("Break-even: {}",
                 summary.break_even_month
                     .map(|m| format!("month {}", m))
                     .unwrap_or_else(|| "not reached".to_string()));
        if let Some(headline) = &summary.headline {
            println!("LTV/CAC at month {}: {:.2}", headline.month, headline.ltv_cac_ratio);
        }
    }

    Ok(())
}
