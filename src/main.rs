//! cdsfetch — Copernicus Climate Data Store download helper.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use cdsfetch::config;
use cdsfetch::constants;
use cdsfetch::credentials;
use cdsfetch::env;
use cdsfetch::geo;
use cdsfetch::plan;
use cdsfetch::storage;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::args::{AreaArgs, Cli, Command, CredentialsArgs, PlanArgs};
use config::Config;
use env::Env;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli, &Env::real()) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Log to stderr so stdout stays parseable. `CDSFETCH_LOG` takes
/// precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, env: &Env) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Credentials(args) => run_credentials(args, env),
        Command::Area(args) => run_area(args, &load_config(config_path, env)?),
        Command::Plan(args) => run_plan(*args, &load_config(config_path, env)?),
        Command::Version => run_version(),
    }
}

/// Tool configuration, for the commands that use it.
fn load_config(path: Option<&Path>, env: &Env) -> Result<Config> {
    Config::load(path, env).context("failed to load configuration")
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Resolve the CDS API credentials and report their sources.
fn run_credentials(args: CredentialsArgs, env: &Env) -> Result<()> {
    let overrides = credentials::Overrides {
        url: args.url,
        key: args.key,
    };
    let home = dirs::home_dir();
    let resolved = credentials::ResolvedConfig::lookup(env, home.as_deref(), &overrides)?;

    for (label, value) in cli::describe_credentials(&resolved) {
        println!("  {:8} {}", label.cyan(), value);
    }

    resolved.require()?;
    println!("\n  {} {}", "✔".green().bold(), "credentials complete".green());
    Ok(())
}

/// Load the country table, extended from the configured file if any.
fn country_table(config: &Config) -> Result<geo::CountryTable> {
    let mut table = geo::CountryTable::builtin();
    if let Some(ref file) = config.countries.file {
        let home = dirs::home_dir();
        let path = storage::expand_tilde(file, home.as_deref());
        table
            .extend_from_file(&path)
            .context("failed to load country table")?;
    }
    Ok(table)
}

/// Print the padded bounding box for a country spec.
fn run_area(args: AreaArgs, config: &Config) -> Result<()> {
    let table = country_table(config)?;
    let padding = args.padding.unwrap_or(config.download.padding);
    let area = table.area(&args.country, Some(padding))?;
    println!("{area}");
    Ok(())
}

/// Build the per-year plan and render it.
fn run_plan(args: PlanArgs, config: &Config) -> Result<()> {
    let source = args.source()?;

    let table = country_table(config)?;
    let padding = args.padding.unwrap_or(config.download.padding);
    let area = table
        .area(&args.country, Some(padding))
        .with_context(|| format!("no bounding box for {}", args.country))?;

    let home = dirs::home_dir();
    let folder = args.folder.as_deref().or(config.download.folder.as_deref());
    let root = storage::cache_location(folder, &config.download.shared_folder, home.as_deref())
        .context("failed to prepare download folder")?;

    let spec = plan::PlanSpec {
        source,
        variable: args.variable,
        country: args.country,
        area,
        years: args.time_range,
    };
    let plan = plan::Plan::build(&root, &spec);
    tracing::info!(
        jobs = plan.jobs.len(),
        skipped = plan.skipped(),
        directory = %plan.directory.display(),
        "plan ready"
    );

    print!("{}", args.format.render(&plan));
    Ok(())
}
