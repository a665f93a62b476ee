//! complexity-harness binary entry point.

use anyhow::{Context, Result};
use clap::Parser;
use complexity_harness::config::{ConfigLoader, HarnessConfig, LogLevel};
use complexity_harness::harness::{FailurePolicy, SizeGatedRunner};
use complexity_harness::report::{self, OutputFormat};
use complexity_harness::{logging, plot};
use std::path::PathBuf;
use tracing::{info, warn};

/// Time textbook algorithms across input sizes and compare their growth
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input sizes to sweep, e.g. 10,15,20
    #[arg(short, long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Seed for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Sampling range width as a multiple of the input size
    #[arg(long)]
    range_factor: Option<usize>,

    /// Only measure these algorithm ids, e.g. bubble_sort,fibonacci
    #[arg(long, value_delimiter = ',')]
    only: Option<Vec<String>>,

    /// Output format (table or json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Skip the chart
    #[arg(long)]
    no_plot: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<LogLevel>,

    /// What to do when an algorithm fails (abort or retire)
    #[arg(long)]
    on_failure: Option<FailurePolicy>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Overlay command-line flags on the file configuration.
    fn apply(&self, config: &mut HarnessConfig) {
        if let Some(sizes) = &self.sizes {
            config.sweep.sizes.clone_from(sizes);
        }
        if self.seed.is_some() {
            config.sweep.seed = self.seed;
        }
        if let Some(range_factor) = self.range_factor {
            config.sweep.range_factor = range_factor;
        }
        if let Some(on_failure) = self.on_failure {
            config.sweep.on_failure = on_failure;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.no_plot {
            config.output.plot = false;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }

    /// The file configuration (or defaults) with flags applied, validated.
    fn config(&self, loader: &ConfigLoader) -> Result<HarnessConfig> {
        let mut config = loader
            .load_or_default(self.config.as_ref())
            .context("failed to load configuration")?;
        self.apply(&mut config);
        loader
            .validate(&config)
            .context("invalid command-line options")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loader = ConfigLoader::standard();
    let config = cli.config(&loader)?;

    if cli.print_config {
        print!("{}", loader.to_toml(&config)?);
        return Ok(());
    }

    logging::init(&config.logging)?;
    for issue in loader.warnings(&config) {
        warn!(field = %issue.field, "{}", issue.message);
    }

    let mut catalog = config.catalog()?;
    if let Some(only) = &cli.only {
        catalog = catalog.select(only)?;
    }

    let runner = SizeGatedRunner::new(&catalog, config.plan());
    let results = runner.run()?;

    println!("{}", report::render(&catalog, &results, config.output.format)?);

    if config.output.plot && config.output.format == OutputFormat::Table {
        let chart = plot::ChartData::new(&catalog, &results);
        if let Err(err) = plot::show(&chart) {
            warn!(error = %err, "Chart not shown");
        }
    } else {
        info!("Chart disabled");
    }

    Ok(())
}
