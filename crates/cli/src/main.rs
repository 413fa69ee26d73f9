//! # retail-cli
//!
//! Command-line interface for retail demand forecasting and inventory
//! policy analysis.

use analysis::{AnalysisConfig, AnalysisReport, InventoryAnalyzer};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "retail-optimizer")]
#[command(about = "Retail demand forecast and inventory policy CLI", long_about = None)]
struct Cli {
    /// Directory holding train.csv, features.csv and stores.csv
    #[arg(long, global = true, env = "RETAIL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// JSON analysis configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the store and department ids present in the sales data
    List {
        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast demand and compute the inventory policy for one store department
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Store id
    #[arg(short, long)]
    store: Option<u32>,

    /// Department id
    #[arg(short, long)]
    dept: Option<u32>,

    /// Lead time in weeks
    #[arg(long)]
    lead_time: Option<f64>,

    /// Target service level in percent
    #[arg(long)]
    service_level: Option<f64>,

    /// Cost of one unit
    #[arg(long)]
    unit_cost: Option<f64>,

    /// Annual holding cost as a percentage of unit cost
    #[arg(long)]
    holding_cost: Option<f64>,

    /// Fixed cost per order
    #[arg(long)]
    ordering_cost: Option<f64>,

    /// Output file (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Flags win over the configuration file.
    fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(store) = self.store {
            config.store = store;
        }
        if let Some(dept) = self.dept {
            config.dept = dept;
        }
        let params = &mut config.parameters;
        if let Some(v) = self.lead_time {
            params.lead_time = v;
        }
        if let Some(v) = self.service_level {
            params.service_level_pct = v;
        }
        if let Some(v) = self.unit_cost {
            params.unit_cost = v;
        }
        if let Some(v) = self.holding_cost {
            params.holding_cost_pct = v;
        }
        if let Some(v) = self.ordering_cost {
            params.ordering_cost = v;
        }
    }
}

/// Load the analysis configuration, falling back to defaults
fn load_config(path: Option<&PathBuf>, data_dir: Option<PathBuf>) -> CliResult<AnalysisConfig> {
    let mut config = match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|e| format!("Failed to parse config: {}", e))?
        }
        None => AnalysisConfig::default(),
    };
    if let Some(dir) = data_dir {
        config.data.data_dir = dir;
    }
    Ok(config)
}

/// Write a value as JSON to file or stdout
fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>) -> CliResult<bool> {
    match output {
        Some(path) => {
            let mut file =
                File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
            serde_json::to_writer_pretty(&mut file, value)
                .map_err(|e| format!("Failed to write JSON: {}", e))?;
            println!("Results written to {:?}", path);
            Ok(true)
        }
        None => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
            println!("{}", json);
            Ok(false)
        }
    }
}

/// Run list command
fn run_list(config: AnalysisConfig, output: Option<PathBuf>) -> CliResult<()> {
    let mut analyzer = InventoryAnalyzer::from_config(&config);
    let options = analyzer.selections().map_err(|e| e.to_string())?;
    write_json(&options, output.as_ref())?;
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let policy = &report.policy;
    println!("\n=== Inventory Policy: {} ===", report.selection);
    println!("Average Weekly Demand: {}", policy.avg_weekly_demand);
    println!("Demand Std Dev: {}", policy.std_weekly_demand);
    println!("Z-Score: {:.2}", policy.z_score);
    println!("Safety Stock: {}", policy.safety_stock);
    println!("Reorder Point: {}", policy.reorder_point);
    println!("Economic Order Quantity: {}", policy.order_quantity);
    println!("\n{}", report.summary);
}

/// Run analyze command
fn run_analyze(mut config: AnalysisConfig, args: AnalyzeArgs) -> CliResult<()> {
    args.apply(&mut config);

    let mut analyzer = InventoryAnalyzer::from_config(&config);
    let report = analyzer
        .run(config.selection(), &config.parameters)
        .map_err(|e| e.to_string())?;

    if write_json(&report, args.output.as_ref())? {
        print_report(&report);
    }
    Ok(())
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_ref(), cli.data_dir).and_then(|config| {
        match cli.command {
            Commands::List { output } => run_list(config, output),
            Commands::Analyze(args) => run_analyze(config, args),
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
