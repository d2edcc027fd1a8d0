use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use genogram::{
    GenogramProcess, HouseholdGenogram, PersonRecordAccessor, ResolverConfig, read_persons,
    write_persons,
};
use log::info;

#[derive(Debug, Parser)]
#[command(name = "genogram")]
#[command(about = "Infer father, mother and mate links in a household survey population")]
struct Cli {
    /// JSON array of person records to resolve
    #[arg(long, short)]
    input: PathBuf,

    /// Where to write the enriched records
    #[arg(long, short)]
    output: PathBuf,

    /// Date used to derive ages from birth dates (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Parents found by name must be older than this
    #[arg(long, default_value_t = ResolverConfig::default().parent_min_age)]
    parent_min_age: u32,

    /// Largest age difference accepted between mates found by name
    #[arg(long, default_value_t = ResolverConfig::default().mate_max_age_gap)]
    mate_max_age_gap: u32,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,
}

impl Cli {
    fn config(&self) -> ResolverConfig {
        ResolverConfig {
            parent_min_age: self.parent_min_age,
            mate_max_age_gap: self.mate_max_age_gap,
            show_progress: self.progress,
            reference_date: self.reference_date,
        }
    }

    /// The input population is never overwritten
    fn check_paths(&self) -> Result<()> {
        if self.output == self.input {
            anyhow::bail!(
                "Refusing to overwrite the input population {}",
                self.input.display()
            );
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    cli.check_paths()?;

    let mut persons = read_persons(&cli.input)
        .with_context(|| format!("Failed to load population from {}", cli.input.display()))?;

    let config = cli.config();
    let accessor = PersonRecordAccessor::from_config(&config);
    let process = HouseholdGenogram::with_config(accessor, config);
    info!("{}", process.config());
    info!("Ages derived at {}", process.accessor().reference_date());

    let summary = process.process(&mut persons);
    info!("{summary}");

    write_persons(&cli.output, &persons)
        .with_context(|| format!("Failed to write population to {}", cli.output.display()))?;

    Ok(())
}
