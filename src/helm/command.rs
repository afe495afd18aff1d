use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, SplitterError};
use crate::output::Console;

/// What to fetch and how to render it.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub namespace: String,
    pub repository: String,
    pub chart: String,
    /// Pinned chart version; latest when unset.
    pub version: Option<String>,
    pub values_file: Option<PathBuf>,
    pub include_crds: bool,
}

/// One helm invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelmStep {
    pub description: &'static str,
    pub args: Vec<String>,
}

impl HelmStep {
    fn new(description: &'static str, args: Vec<String>) -> Self {
        Self { description, args }
    }

    /// Printable command line, for debug output and error messages.
    pub fn display_with(&self, program: &str) -> String {
        std::iter::once(program)
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the repo-add, repo-update, pull and template invocations.
///
/// The chart is pulled into `scratch/<chart>` and rendered into
/// `scratch/rendered/<chart>/...`.
pub fn plan_steps(request: &ChartRequest, scratch: &Path) -> Vec<HelmStep> {
    let chart = &request.chart;
    let scratch_str = scratch.to_string_lossy().into_owned();

    let repo_add = HelmStep::new(
        "Adding helm repository",
        vec![
            "repo".into(),
            "add".into(),
            chart.clone(),
            request.repository.clone(),
        ],
    );

    let repo_update = HelmStep::new(
        "Updating helm repository",
        vec!["repo".into(), "update".into()],
    );

    let mut pull: Vec<String> = vec![
        "pull".into(),
        "--untar".into(),
        "--untardir".into(),
        scratch_str.clone(),
    ];
    if let Some(version) = &request.version {
        pull.push("--version".into());
        pull.push(version.clone());
    }
    pull.push(format!("{chart}/{chart}"));

    let mut template: Vec<String> = vec!["template".into()];
    if let Some(values) = &request.values_file {
        template.push("--values".into());
        template.push(values.to_string_lossy().into_owned());
    }
    if request.include_crds {
        template.push("--include-crds".into());
    }
    template.extend([
        "--namespace".into(),
        request.namespace.clone(),
        chart.clone(),
        scratch.join(chart).to_string_lossy().into_owned(),
        "--output-dir".into(),
        scratch.join("rendered").to_string_lossy().into_owned(),
    ]);

    vec![
        repo_add,
        repo_update,
        HelmStep::new("Pulling helm chart", pull),
        HelmStep::new("Templating helm chart", template),
    ]
}

/// Run one step, capturing stdout and stderr together.
///
/// In debug mode the output is echoed as it is collected, and is left out of
/// the error so it is not printed twice.
pub fn run_step(program: &str, step: &HelmStep, console: &Console) -> Result<()> {
    let command_line = step.display_with(program);
    console.debug(step.description);
    console.debug(format!("Running command: {command_line}"));

    let output = Command::new(program)
        .args(&step.args)
        .output()
        .map_err(|e| SplitterError::HelmNotFound {
            program: program.to_string(),
            source: e,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    console.debug_block(&combined);

    if !output.status.success() {
        return Err(SplitterError::HelmFailed {
            command: command_line,
            status: output.status,
            output: if console.is_debug() {
                String::new()
            } else {
                combined.trim_end().to_string()
            },
        });
    }

    Ok(())
}
