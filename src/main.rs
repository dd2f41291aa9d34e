//! nojs - strip javascript and framework residue from rendered pages.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use nojs::cli::{Cli, Commands, apply_pages, check_config};
use nojs::{BuildMode, NojsConfig, log};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    nojs::logger::set_verbose(cli.verbose);

    // The build mode is fixed for the whole process.
    let mode = cli.mode.resolve(BuildMode::from_env);

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let config = NojsConfig::load(cli.config.as_deref(), &cwd)?;

    match &cli.command {
        Commands::Apply { args } => apply_pages(args, &config, mode).map(|_| ()),
        Commands::Check => check_config(&config, mode),
    }
}
