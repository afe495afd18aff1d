pub mod config;
pub mod error;
pub mod helm;
pub mod output;
pub mod scratch;
pub mod split;

use std::path::PathBuf;

use crate::config::{resolve_config, ConfigLocations};
use crate::error::Result;
use crate::helm::{plan_steps, run_step, ChartRequest};
use crate::output::Console;
use crate::scratch::ScratchDir;
use crate::split::{split_tree, SplitOptions, SplitSummary};

/// Chart subdirectories of the rendered output that get split, in order.
pub const RENDERED_ROOTS: &[&str] = &["templates", "crds"];

/// Options for a full fetch-render-split run.
#[derive(Debug)]
pub struct RunOptions {
    pub chart: ChartRequest,
    /// Where the per-resource files go.
    pub output_dir: PathBuf,
    /// Explicit shortcut config, bypassing the user/system lookup.
    pub config: Option<PathBuf>,
    pub config_locations: ConfigLocations,
    pub scratch_dir: PathBuf,
    /// helm executable to invoke.
    pub helm_bin: String,
    pub split: SplitOptions,
}

#[derive(Debug)]
pub struct RunSummary {
    pub config_path: PathBuf,
    pub split: SplitSummary,
}

/// Fetch and render the chart, then split the rendered manifests into
/// `output_dir`.
///
/// The scratch directory is removed on return, on success or error, unless
/// the console is in debug mode.
pub fn run(options: &RunOptions, console: &Console) -> Result<RunSummary> {
    let shortcuts = resolve_config(
        options.config.as_deref(),
        &options.config_locations,
        console,
    )?;
    console.debug(format!(
        "Loaded {} shortcuts from {}",
        shortcuts.len(),
        shortcuts.source().display()
    ));

    let scratch = ScratchDir::create(&options.scratch_dir, console.is_debug())?;

    for step in plan_steps(&options.chart, scratch.path()) {
        run_step(&options.helm_bin, &step, console)?;
    }

    let rendered = scratch
        .path()
        .join("rendered")
        .join(&options.chart.chart);

    let mut summary = SplitSummary::default();
    for root in RENDERED_ROOTS {
        let source = rendered.join(root);
        if !source.is_dir() {
            console.debug(format!("Directory {} not found", source.display()));
            continue;
        }
        summary.extend(split_tree(
            &source,
            &options.output_dir,
            &shortcuts,
            &options.split,
            console,
        )?);
    }

    console.success(format!(
        "Split {} manifests into {}",
        summary.files_written.len(),
        options.output_dir.display()
    ));
    if !summary.files_overwritten.is_empty() {
        println!("  {} files overwritten", summary.files_overwritten.len());
    }

    Ok(RunSummary {
        config_path: shortcuts.source().to_path_buf(),
        split: summary,
    })
}
