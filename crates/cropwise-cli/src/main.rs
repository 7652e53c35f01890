mod commands;
mod config;
mod output;
mod telemetry;

use clap::{Parser, Subcommand};
use config::AppConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropwise",
    version,
    about = "Crop recommendations and land planning from soil test results"
)]
struct Cli {
    /// Engine config file (JSON). Overrides CROPWISE_CONFIG
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the crops of a season against a soil sample
    Recommend {
        /// Soil sheet (text) or soil sample (JSON)
        input_file: PathBuf,

        /// Season: kharif, rabi or zaid (default from config)
        #[arg(short, long)]
        season: Option<String>,

        /// Custom catalog partition file(s), replacing the built-in season
        #[arg(short, long = "catalog", value_name = "FILE")]
        catalog: Vec<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show the per-parameter score breakdown
        #[arg(long)]
        verbose: bool,
    },
    /// Split a land area between crops by suitability
    Plan {
        /// Soil sheet (text) or soil sample (JSON)
        input_file: PathBuf,

        /// Total area in acres
        #[arg(short, long)]
        area: String,

        /// Season: kharif, rabi or zaid (default from config)
        #[arg(short, long)]
        season: Option<String>,

        /// Crop id(s) to plant, in order. Default: auto-select by score
        #[arg(long = "crop", value_name = "ID")]
        crop: Vec<String>,

        /// Market price override, e.g. wheat=2400
        #[arg(long = "price", value_name = "ID=PRICE")]
        price: Vec<String>,

        /// Custom catalog partition file(s), replacing the built-in season
        #[arg(short, long = "catalog", value_name = "FILE")]
        catalog: Vec<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show the health of each measured soil parameter
    Status {
        /// Soil sheet (text) or soil sample (JSON)
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate crop catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the built-in season catalogs
    List,
    /// Show the crops of a season and their requirements
    Explain {
        /// Season name (e.g., "rabi")
        season: String,
    },
    /// Print the catalog JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog partition file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(path) = cli.config {
        config.engine_config = Some(path);
    }

    if let Err(e) = telemetry::init(&config.telemetry) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Recommend {
            input_file,
            season,
            catalog,
            output,
            verbose,
        } => commands::recommend::run(&config, input_file, season, catalog, &output, verbose),
        Commands::Plan {
            input_file,
            area,
            season,
            crop,
            price,
            catalog,
            output,
        } => commands::plan::run(
            &config,
            commands::plan::PlanArgs {
                input_file,
                area,
                season,
                crops: crop,
                prices: price,
                catalogs: catalog,
            },
            &output,
        ),
        Commands::Status { input_file, output } => commands::status::run(input_file, &output),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Explain { season } => commands::catalog::explain(&season),
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
