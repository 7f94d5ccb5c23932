//! Command-line front end for the growth projection
//!
//! Runs a projection from a preset, percentile and slider overrides, prints
//! the sampled monthly series, and exports the 36-month statements.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use growth_projection::{
    export,
    inputs::percentile::percentile_label,
    projection::{sample_every, ProjectionConfig, ProjectionEngine, CHART_SAMPLE_STEP},
    sweep::{self, SweepPoint, DEFAULT_SWEEP_PERCENTILES},
    Currency, InputOverrides, InputStore, PercentileRanges, ProjectionResult, Scenario, Session,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project")]
#[command(about = "Monthly growth and cash projection for the pitch calculator", long_about = None)]
struct Cli {
    /// JSON file overriding projection constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file overriding the percentile anchor table
    #[arg(long, global = true)]
    ranges: Option<PathBuf>,

    /// File echoing the last inputs used
    #[arg(long, global = true, default_value = ".growth_projection/last_inputs.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project and print the sampled monthly series
    Run {
        #[command(flatten)]
        inputs: InputArgs,

        /// Months between printed rows
        #[arg(long, default_value_t = CHART_SAMPLE_STEP)]
        step: usize,

        /// Print the full projection as JSON
        #[arg(long)]
        json: bool,

        /// Do not update the saved inputs
        #[arg(long)]
        no_save: bool,
    },
    /// Write the 36-month P&L and balance sheet as CSV
    Export {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// File name prefix
        #[arg(long, default_value = "projection")]
        prefix: String,
    },
    /// Project across a range of percentiles
    Sweep {
        #[command(flatten)]
        inputs: InputArgs,

        /// Comma-separated percentiles (10-90)
        #[arg(long, value_delimiter = ',')]
        percentiles: Vec<f64>,

        #[arg(long)]
        json: bool,
    },
    /// Forget the saved inputs
    Reset,
    /// Compare the three presets
    Scenarios {
        #[arg(long, default_value = "AED")]
        currency: Currency,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Start from the last saved inputs
    #[arg(long)]
    resume: bool,

    /// conservative, balanced or aggressive
    #[arg(short, long)]
    scenario: Option<Scenario>,

    /// Move all tunable inputs to this percentile (10-90)
    #[arg(short, long)]
    percentile: Option<f64>,

    /// Display currency: AED, USD or EUR
    #[arg(short, long)]
    currency: Option<Currency>,

    #[arg(long)]
    investment: Option<f64>,
    #[arg(long)]
    orders_per_day: Option<f64>,
    #[arg(long)]
    aov: Option<f64>,
    #[arg(long)]
    cac: Option<f64>,
    #[arg(long)]
    churn: Option<f64>,
    #[arg(long)]
    margin: Option<f64>,
    #[arg(long)]
    fixed_costs: Option<f64>,
}

impl InputArgs {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            investment: self.investment,
            orders_per_day: self.orders_per_day,
            aov: self.aov,
            cac: self.cac,
            monthly_churn: self.churn,
            contribution_margin: self.margin,
            fixed_costs_per_month: self.fixed_costs,
        }
    }

    /// Apply the arguments in calculator order: saved echo, preset,
    /// percentile, then individual sliders
    fn session(
        &self,
        engine: ProjectionEngine,
        ranges: PercentileRanges,
        store: &InputStore,
    ) -> Result<Session> {
        let saved = if self.resume {
            store.load().context("Failed to read saved inputs")?
        } else {
            None
        };
        let mut session = match saved {
            Some(saved) => Session::restore(engine, &saved),
            None => Session::new(engine),
        }
        .with_ranges(ranges);
        if let Some(scenario) = self.scenario {
            session.load_scenario(scenario);
        }
        if let Some(percentile) = self.percentile {
            session.set_percentile(percentile)?;
        }
        let overrides = self.overrides();
        if !overrides.is_empty() {
            session.apply_overrides(&overrides);
        }
        if let Some(currency) = self.currency {
            session.set_currency(currency);
        }
        Ok(session)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ProjectionConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ProjectionConfig::default(),
    };
    let engine = ProjectionEngine::new(config);
    let ranges = match &cli.ranges {
        Some(path) => PercentileRanges::from_json_file(path)
            .with_context(|| format!("Failed to load percentile ranges from {}", path.display()))?,
        None => PercentileRanges::default(),
    };
    let store = InputStore::new(&cli.state);

    match cli.command {
        Commands::Run { inputs, step, json, no_save } => {
            let session = inputs.session(engine, ranges, &store)?;
            let result = session.project()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{} scenario, percentile {} ({}), {} months\n",
                    session.scenario(),
                    session.percentile(),
                    percentile_label(session.percentile()),
                    session.engine().config().projection_months
                );
                print_projection(&result, session.currency(), step);
            }
            if !no_save {
                store.save(&session.snapshot()).context("Failed to save inputs")?;
            }
        }
        Commands::Export { inputs, out, prefix } => {
            let session = inputs.session(engine, ranges, &store)?;
            let result = session.project()?;
            std::fs::create_dir_all(&out)
                .with_context(|| format!("Failed to create {}", out.display()))?;
            let (pnl, bs) = export::export_statements(
                &out,
                &prefix,
                &result.months,
                &result.inputs,
                session.currency(),
            )?;
            println!("P&L written to {}", pnl.display());
            println!("Balance sheet written to {}", bs.display());
        }
        Commands::Sweep { inputs, percentiles, json } => {
            let session = inputs.session(engine, ranges, &store)?;
            let percentiles = if percentiles.is_empty() {
                DEFAULT_SWEEP_PERCENTILES.to_vec()
            } else {
                percentiles
            };
            let points = session.sweep(&percentiles)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                print_sweep(&points, session.currency());
            }
        }
        Commands::Reset => {
            store.clear().context("Failed to remove saved inputs")?;
            println!("Cleared saved inputs at {}", store.path().display());
        }
        Commands::Scenarios { currency, json } => {
            let points = sweep::compare_scenarios(&engine)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                print_sweep(&points, currency);
            }
        }
    }

    Ok(())
}

fn print_projection(result: &ProjectionResult, currency: Currency, step: usize) {
    println!(
        "{:>5} | {:>9} | {:>7} | {:>18} | {:>18} | {:>18} | {:>9}",
        "Month", "Active", "New", "Revenue", "EBITDA", "Cumulative cash", "Runway"
    );
    for row in sample_every(&result.months, step) {
        println!(
            "{:>5} | {:>9} | {:>7} | {:>18} | {:>18} | {:>18} | {:>9}",
            row.month,
            row.active_customers,
            row.new_customers,
            currency.format_aed(row.revenue),
            currency.format_aed(row.ebitda),
            currency.format_aed(row.cumulative_cash),
            row.runway.to_string(),
        );
    }

    let summary = &result.summary;
    println!("\nSummary ({}):", currency);
    if let Some(headline) = &summary.headline {
        println!(
            "  Month {}: LTV/CAC={:.1}, ARPU={}, operating leverage={:.1}x, market penetration={:.3}%",
            headline.month,
            headline.ltv_cac_ratio,
            currency.format_aed(headline.arpu),
            headline.operating_leverage,
            headline.market_penetration,
        );
    }
    match summary.break_even_month {
        Some(month) => println!("  EBITDA break-even: month {}", month),
        None => println!("  EBITDA break-even: not reached"),
    }
    if let Some(trough) = summary.cash_trough {
        println!(
            "  Cash trough: {} in month {}",
            currency.format_aed(trough.cumulative_cash),
            trough.month
        );
    }
    println!("  Total revenue: {}", currency.format_aed(summary.total_revenue));
}

fn print_sweep(points: &[SweepPoint], currency: Currency) {
    println!(
        "{:<14} | {:>10} | {:>18} | {:>18} | {:>9} | {:>7}",
        "Point", "Break-even", "Cash trough", "Final revenue", "Customers", "LTV/CAC"
    );
    for point in points {
        let break_even = point
            .break_even_month
            .map(|m| format!("month {}", m))
            .unwrap_or_else(|| "-".to_string());
        let trough = point
            .cash_trough
            .map(|t| currency.format_aed(t.cumulative_cash))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} | {:>10} | {:>18} | {:>18} | {:>9} | {:>7.2}",
            point.label,
            break_even,
            trough,
            currency.format_aed(point.final_revenue),
            point.final_active_customers,
            point.ltv_cac_ratio,
        );
    }
}
