//! `apply` command: normalize page files in parallel.
//!
//! Pages share nothing, so each one is read, processed and written on its
//! own rayon worker.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{ApplyArgs, Page, PageReport};
use crate::{config::NojsConfig, core::BuildMode, debug, log};

/// Totals over one `apply` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub pages: usize,
    pub nodes_removed: usize,
    pub roots_replaced: usize,
}

impl ApplySummary {
    fn add(mut self, report: PageReport) -> Self {
        self.pages += 1;
        self.nodes_removed += report.nodes_removed();
        self.roots_replaced += usize::from(report.root_replaced);
        self
    }
}

/// Process every page named in `args`.
pub fn apply_pages(args: &ApplyArgs, config: &NojsConfig, mode: BuildMode) -> Result<ApplySummary> {
    if !mode.is_production() {
        log!("apply"; "{} mode, pages pass through unchanged", mode.label());
    }

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory `{}`", dir.display()))?;
    }

    let reports = args
        .pages
        .par_iter()
        .map(|path| {
            let dest = destination(path, args.output.as_deref())?;
            apply_page(path, &dest, config, mode)
        })
        .collect::<Result<Vec<_>>>()?;

    let summary = reports.into_iter().fold(ApplySummary::default(), ApplySummary::add);

    log!(
        "apply";
        "{} page(s), {} node(s) removed, {} root element(s) rewritten",
        summary.pages,
        summary.nodes_removed,
        summary.roots_replaced
    );
    Ok(summary)
}

/// Read `src`, run the hooks, write the result to `dest`.
fn apply_page(src: &Path, dest: &Path, config: &NojsConfig, mode: BuildMode) -> Result<PageReport> {
    let mut page = Page::read(src)?;
    let report = page.process(config, mode);

    debug!(
        "apply";
        "{}: head -{}, postBody -{}{}",
        src.display(),
        report.head_removed,
        report.post_body_removed,
        if report.root_replaced { ", root rewritten" } else { "" }
    );

    page.write(dest)?;
    Ok(report)
}

/// Output path for `src`: in place, or same file name under `output`.
fn destination(src: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let Some(dir) = output else {
        return Ok(src.to_path_buf());
    };
    let name = src
        .file_name()
        .with_context(|| format!("`{}` is not a file path", src.display()))?;
    Ok(dir.join(name))
}
