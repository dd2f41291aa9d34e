//! `check` command: print the effective configuration and build mode.

use anyhow::{Context, Result};

use crate::{config::NojsConfig, core::BuildMode, log};

pub fn check_config(config: &NojsConfig, mode: BuildMode) -> Result<()> {
    match &config.config_path {
        Some(path) => log!("check"; "config: {}", path.display()),
        None => log!("check"; "config: defaults (no nojs.toml found)"),
    }
    log!("check"; "mode: {}", mode.label());

    let rendered = config.to_toml().context("failed to render config")?;
    print!("{rendered}");
    Ok(())
}
