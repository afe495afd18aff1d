use std::path::PathBuf;

use clap::Parser;
use helm_splitter::config::ConfigLocations;
use helm_splitter::error::{Result, SplitterError};
use helm_splitter::helm::ChartRequest;
use helm_splitter::scratch::SCRATCH_DIR_NAME;
use helm_splitter::split::SplitOptions;
use helm_splitter::RunOptions;

#[derive(Parser, Debug)]
#[command(
    name = "helm-splitter",
    about = "Render a helm chart and split the output into one file per resource"
)]
pub struct Cli {
    /// Target k8s namespace
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Helm repository URL
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Helm chart name
    #[arg(short, long)]
    pub chart: Option<String>,

    /// Helm chart version (default: latest)
    #[arg(long = "version")]
    pub chart_version: Option<String>,

    /// File with custom values
    #[arg(long, value_name = "FILE")]
    pub custom_values_file: Option<PathBuf>,

    /// Output directory (default: the chart name)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Do not generate CRDs
    #[arg(long)]
    pub skip_crds: bool,

    /// Overwrite existing output files
    #[arg(long)]
    pub overwrite: bool,

    /// Path to the shortcut config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug output and keep the scratch directory
    #[arg(long)]
    pub debug: bool,

    /// helm executable to run
    #[arg(long, env = "HELM_BIN", default_value = "helm")]
    pub helm_bin: String,
}

impl Cli {
    /// Check required parameters and build the run options.
    pub fn into_options(self) -> Result<RunOptions> {
        let missing: Vec<String> = [
            ("--namespace", self.namespace.is_none()),
            ("--repository", self.repository.is_none()),
            ("--chart", self.chart.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(flag, _)| flag.to_string())
        .collect();

        let (Some(namespace), Some(repository), Some(chart)) =
            (self.namespace, self.repository, self.chart)
        else {
            return Err(SplitterError::MissingParameters { missing });
        };

        if namespace.is_empty() || repository.is_empty() || chart.is_empty() {
            let missing = [
                ("--namespace", &namespace),
                ("--repository", &repository),
                ("--chart", &chart),
            ]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(flag, _)| flag.to_string())
            .collect();
            return Err(SplitterError::MissingParameters { missing });
        }

        let output_dir = self
            .output_dir
            .unwrap_or_else(|| PathBuf::from(&chart));

        Ok(RunOptions {
            chart: ChartRequest {
                namespace,
                repository,
                chart,
                version: self.chart_version.filter(|v| !v.is_empty()),
                values_file: self.custom_values_file,
                include_crds: !self.skip_crds,
            },
            output_dir,
            config: self.config,
            config_locations: ConfigLocations::from_host(),
            scratch_dir: PathBuf::from(SCRATCH_DIR_NAME),
            helm_bin: self.helm_bin,
            split: SplitOptions {
                overwrite: self.overwrite,
            },
        })
    }
}
