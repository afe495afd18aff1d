pub mod defaults;
pub mod schema;

use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};
use crate::output::Console;

pub use defaults::default_shortcuts;
pub use schema::{ShortcutFile, ShortcutTable};

pub const USER_CONFIG_NAME: &str = ".helm-splitter.yaml";
pub const SYSTEM_CONFIG_PATH: &str = "/etc/helm-splitter/config.yaml";

/// Where to look for a shortcut config when none is given explicitly.
#[derive(Debug, Clone)]
pub struct ConfigLocations {
    /// Per-user config. Also where the built-in defaults get written.
    pub user: Option<PathBuf>,
    pub system: PathBuf,
}

impl ConfigLocations {
    /// `~/.helm-splitter.yaml` and `/etc/helm-splitter/config.yaml`.
    pub fn from_host() -> Self {
        Self {
            user: dirs::home_dir().map(|home| home.join(USER_CONFIG_NAME)),
            system: PathBuf::from(SYSTEM_CONFIG_PATH),
        }
    }
}

/// Resolve the shortcut table.
///
/// Order: explicit path, per-user path, system path. When none of them exist
/// the built-in defaults are written to the per-user path and used.
pub fn resolve_config(
    explicit: Option<&Path>,
    locations: &ConfigLocations,
    console: &Console,
) -> Result<ShortcutTable> {
    console.debug("Checking configs...");

    if let Some(path) = explicit {
        console.debug(format!("--config was specified, using {}", path.display()));
        return load_config(path);
    }

    if let Some(user) = locations.user.as_deref().filter(|p| p.exists()) {
        console.debug(format!("Found {}, using it", user.display()));
        return load_config(user);
    }

    if locations.system.exists() {
        console.debug(format!("Found {}, using it", locations.system.display()));
        return load_config(&locations.system);
    }

    match locations.user.as_deref() {
        Some(user) => {
            console.debug(format!(
                "No config was found, creating a default one in {}",
                user.display()
            ));
            write_default_config(user)
        }
        None => {
            console.warn("no home directory found; using built-in shortcuts without saving them");
            Ok(ShortcutTable::new(
                default_shortcuts(),
                locations.system.clone(),
            ))
        }
    }
}

/// Load and parse a shortcut config file.
pub fn load_config(path: &Path) -> Result<ShortcutTable> {
    let content = std::fs::read_to_string(path).map_err(|e| SplitterError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file: ShortcutFile =
        serde_yaml::from_str(&content).map_err(|e| SplitterError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(ShortcutTable::new(file.shortcuts, path))
}

/// Persist the built-in shortcuts to `path` so later runs pick them up.
pub fn write_default_config(path: &Path) -> Result<ShortcutTable> {
    let file = ShortcutFile {
        filepath: None,
        shortcuts: default_shortcuts(),
    };

    let content = serde_yaml::to_string(&file).map_err(|e| SplitterError::ConfigSerialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SplitterError::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| SplitterError::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(ShortcutTable::new(file.shortcuts, path))
}
