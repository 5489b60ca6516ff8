//! Clap argument types and validation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use cdsfetch::models::{CountrySpec, Dataset, Experiment, ModelError, Resolution, Source, YearRange};

/// Plan and check Copernicus Climate Data Store downloads.
#[derive(Parser, Debug)]
#[command(
    name = "cdsfetch",
    version = cdsfetch::constants::VERSION,
    about = super::ABOUT,
)]
pub struct Cli {
    /// Log debug details (which source supplied each setting) to stderr.
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Config file to use instead of ~/.config/cdsfetch/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Show where the CDS API url and key are read from.
    Credentials(CredentialsArgs),

    /// Print the [north, west, south, east] box for a country.
    Area(AreaArgs),

    /// List the per-year retrieve requests and their target files.
    Plan(Box<PlanArgs>),

    /// Print version and build information.
    Version,
}

/// Arguments for the `credentials` subcommand.
#[derive(Parser, Debug)]
pub struct CredentialsArgs {
    /// CDS API url, overriding $CDSAPI_URL and the rc file.
    #[arg(long)]
    pub url: Option<String>,

    /// CDS API key, overriding $CDSAPI_KEY and the rc file.
    #[arg(long)]
    pub key: Option<String>,
}

/// Arguments for the `area` subcommand.
#[derive(Parser, Debug)]
pub struct AreaArgs {
    /// Country code (2 chars), optionally with a subunit as in ES:Spain.
    pub country: CountrySpec,

    /// Padding in degrees added on every side (default from config: 0.1).
    #[arg(long)]
    pub padding: Option<f64>,
}

/// Arguments for the `plan` subcommand.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Variable name.
    #[arg(long, short = 'v', default_value = "total_precipitation")]
    pub variable: String,

    /// Country to restrict (2 chars code, you can also select a subunit as in ES:Spain).
    #[arg(long, short = 'c', default_value = "IT")]
    pub country: CountrySpec,

    /// ERA5 dataset: single-levels, land or pressure-levels.
    #[arg(long, visible_alias = "ds")]
    pub dataset: Option<Dataset>,

    /// CMIP6 experiment: historical, ssp1_2_6, ssp2_4_5 or ssp3_7_0.
    #[arg(long, short = 'x')]
    pub experiment: Option<Experiment>,

    /// CMIP6 temporal resolution: daily or monthly.
    #[arg(long, default_value = "monthly")]
    pub resolution: Resolution,

    /// Output folder (default: the shared folder if present, else ~/copernicus_data).
    #[arg(long, short = 'o')]
    pub folder: Option<PathBuf>,

    /// Years to retrieve, inclusive: YYYY or YYYY-YYYY.
    #[arg(long, short = 'y', default_value = "2000-2100")]
    pub time_range: YearRange,

    /// Padding in degrees added on every side of the country box.
    #[arg(long)]
    pub padding: Option<f64>,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a plan using the renderer for this format.
    pub fn render(&self, plan: &cdsfetch::plan::Plan) -> String {
        use cdsfetch::output::OutputRenderer;
        match self {
            OutputFormat::Terminal => cdsfetch::output::terminal::TerminalRenderer.render(plan),
            OutputFormat::Json => cdsfetch::output::json::JsonRenderer.render(plan),
        }
    }
}

impl PlanArgs {
    /// Validate that a dataset or an experiment was chosen.
    pub fn source(&self) -> Result<Source, ModelError> {
        Source::choose(self.dataset, self.experiment, self.resolution)
    }
}
