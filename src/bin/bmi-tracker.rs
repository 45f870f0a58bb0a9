// ABOUTME: BMI tracker command-line entry point
// ABOUTME: Calculates BMI, lists or clears saved history and prints the category guide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Metric calculation
//! bmi-tracker calculate --name Ana --gender female --age 28 --height 170 --weight 70 --weight-unit kg
//!
//! # Imperial calculation (height is feet, --inches the remainder)
//! bmi-tracker calculate --gender male --age 40 --height-unit ft-in --height 5 --inches 10 --weight 180
//!
//! # Show history, refreshing until Ctrl-C
//! bmi-tracker history --watch
//!
//! # Delete all saved results
//! bmi-tracker clear
//! ```

use anyhow::Result;
use bmi_tracker::bmi_core::engine;
use bmi_tracker::bmi_core::models::{BmiResult, Gender, HeightUnit, HistoryRecord, WeightUnit};
use bmi_tracker::config::{StorageBackend, TrackerConfig};
use bmi_tracker::context::AppContext;
use bmi_tracker::logging::LoggingConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "bmi-tracker",
    about = "BMI calculator with local history",
    long_about = "Calculates Body Mass Index, keeps a local history of results and shows the category guide."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (file storage)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long, global = true)]
    memory: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate BMI and save the result to history
    Calculate(CalculateArgs),

    /// Show saved results
    History {
        /// Keep refreshing until interrupted
        #[arg(long)]
        watch: bool,
    },

    /// Delete all saved results
    Clear,

    /// Show the BMI category guide
    Guide,
}

#[derive(Args)]
struct CalculateArgs {
    /// Name stored with the result
    #[arg(long, default_value = "")]
    name: String,

    /// male or female
    #[arg(long)]
    gender: Option<Gender>,

    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// Height in centimeters, or feet with --height-unit ft-in
    #[arg(long)]
    height: Option<String>,

    /// Inches, with --height-unit ft-in
    #[arg(long)]
    inches: Option<String>,

    /// cm or ft-in (defaults to BMI_DEFAULT_HEIGHT_UNIT)
    #[arg(long)]
    height_unit: Option<HeightUnit>,

    /// Weight in the selected unit
    #[arg(long)]
    weight: Option<String>,

    /// kg or lb (defaults to BMI_DEFAULT_WEIGHT_UNIT)
    #[arg(long)]
    weight_unit: Option<WeightUnit>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = TrackerConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = dir;
    }
    if cli.memory {
        config.storage.backend = StorageBackend::Memory;
    }
    info!(backend = %config.storage.backend, "Configuration loaded");

    let context = AppContext::from_config(config).await?;

    match cli.command {
        Command::Calculate(args) => calculate(&context, args).await?,
        Command::History { watch } => {
            if watch {
                watch_history(&context).await;
            } else {
                print_history(&context.history().read_all().await);
            }
        }
        Command::Clear => match context.history().clear_all().await {
            Ok(()) => println!("All history deleted."),
            Err(e) => warn!(error = %e, "Failed to delete history"),
        },
        Command::Guide => print_guide(),
    }

    Ok(())
}

async fn calculate(context: &AppContext, args: CalculateArgs) -> Result<()> {
    let mut form = context.new_form();
    if let Some(unit) = args.height_unit {
        form.set_height_unit(unit);
    }
    if let Some(unit) = args.weight_unit {
        form.weight_unit = unit;
    }
    form.name = args.name;
    form.gender = args.gender;
    form.age = args.age.unwrap_or_default();
    form.height = args.height.unwrap_or_default();
    form.height_inches = args.inches.unwrap_or_default();
    form.weight = args.weight.unwrap_or_default();

    let measurement = form.validate()?;
    let result = context.calculate_and_record(&measurement).await?;
    print_result(&result);
    Ok(())
}

async fn watch_history(context: &AppContext) {
    let poller = context.watch_history();
    let mut updates = poller.subscribe();

    let mut shown = context.history().read_all().await;
    print_history(&shown);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                if snapshot != shown {
                    println!();
                    print_history(&snapshot);
                    shown = snapshot;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    poller.stop().await;
}

fn print_result(result: &BmiResult) {
    println!("{}", result.summary());
    println!("Healthy weight range: {}", result.healthy_weight_range());
    println!("Tip: {}", result.tip);
    println!();
    print_guide();
}

fn print_guide() {
    println!("Guide");
    for entry in engine::guide() {
        println!("  {entry}");
    }
}

fn print_history(records: &[HistoryRecord]) {
    println!("HISTORY");
    if records.is_empty() {
        println!("No data found");
        return;
    }
    println!("{:<12}{:<8}Name", "Date", "BMI");
    for record in records {
        let [date, bmi, name] = record.display_row();
        println!("{date:<12}{bmi:<8}{name}");
    }
}
