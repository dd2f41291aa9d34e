//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::BuildMode;

/// Strip javascript and framework residue from rendered pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nojs.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Normalize page component files
    #[command(visible_alias = "a")]
    Apply {
        #[command(flatten)]
        args: ApplyArgs,
    },

    /// Show the effective configuration and build mode
    #[command(visible_alias = "c")]
    Check,
}

/// Apply command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Page files (`{ "head": [...], "postBody": [...], "root": {...} }`)
    #[arg(required = true, value_name = "PAGE", value_hint = clap::ValueHint::FilePath)]
    pub pages: Vec<PathBuf>,

    /// Write results into this directory instead of in place
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

/// Build mode override. Without either flag, `NODE_ENV` decides.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Force production mode
    #[arg(long, global = true, conflicts_with = "development")]
    pub production: bool,

    /// Force development mode (pass-through)
    #[arg(long, global = true)]
    pub development: bool,
}

impl ModeArgs {
    /// Resolve the build mode; `env` is only consulted without an override.
    pub fn resolve(&self, env: impl FnOnce() -> BuildMode) -> BuildMode {
        if self.production {
            BuildMode::PRODUCTION
        } else if self.development {
            BuildMode::DEVELOPMENT
        } else {
            env()
        }
    }
}
