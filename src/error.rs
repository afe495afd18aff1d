#![allow(unused_assignments)]

use std::path::PathBuf;
use std::process::ExitStatus;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SplitterError {
    #[error("Missing parameters: {}", missing.join(", "))]
    #[diagnostic(help("\"--namespace\", \"--repository\" and \"--chart\" MUST be specified"))]
    MissingParameters { missing: Vec<String> },

    #[error("Failed to read config file {path}")]
    #[diagnostic(help("Check that the file passed with --config exists and is readable"))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(help("The config must be YAML with a 'shortcuts' mapping of kind to short code"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize default config for {path}")]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write default config to {path}")]
    #[diagnostic(help("Check that the home directory is writable, or pass --config"))]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not execute '{program}'")]
    #[diagnostic(help("Install helm (https://helm.sh) or point --helm-bin / HELM_BIN at it"))]
    HelmNotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status})\n{output}")]
    #[diagnostic(help("Check the repository, chart name, version and values file"))]
    HelmFailed {
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("Failed to parse manifest in {path}")]
    #[diagnostic(help("The rendered chart produced a document that is not valid YAML"))]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unknown kind \"{kind}\"! Add a shortcut for this kind to {config_path} and rerun")]
    #[diagnostic(help("Every rendered kind needs an entry under 'shortcuts'"))]
    UnknownKind { kind: String, config_path: PathBuf },

    #[error("File {path} is present")]
    #[diagnostic(help("Use --overwrite if you want to skip this error"))]
    OutputExists { path: PathBuf },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SplitterError>;
