use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ShortcutTable;
use crate::error::{Result, SplitterError};
use crate::output::Console;
use crate::split::fragment::{parse_header, split_fragments};

#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOptions {
    /// Replace existing output files instead of failing.
    pub overwrite: bool,
}

#[derive(Debug, Default)]
pub struct SplitSummary {
    pub files_written: Vec<PathBuf>,
    /// Subset of `files_written` that replaced an existing file.
    pub files_overwritten: Vec<PathBuf>,
    /// Fragments without a `kind`.
    pub fragments_skipped: usize,
}

impl SplitSummary {
    pub fn extend(&mut self, other: SplitSummary) {
        self.files_written.extend(other.files_written);
        self.files_overwritten.extend(other.files_overwritten);
        self.fragments_skipped += other.fragments_skipped;
    }
}

/// `{code}-{name}.yaml`
pub fn output_file_name(code: &str, name: &str) -> String {
    format!("{code}-{name}.yaml")
}

/// Split every file under `source` into one file per manifest under `dest`.
///
/// The directory structure below `source` is mirrored into `dest`; a
/// destination directory is only created once a fragment is written to it.
/// The first error stops the walk, and files already written stay in place.
pub fn split_tree(
    source: &Path,
    dest: &Path,
    shortcuts: &ShortcutTable,
    options: &SplitOptions,
    console: &Console,
) -> Result<SplitSummary> {
    console.debug(format!("Processing directory {}", source.display()));

    let mut summary = SplitSummary::default();

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| SplitterError::Io {
            context: format!("walking {}", source.display()),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let src_path = entry.path();
        console.debug(format!("Checking file {}", src_path.display()));

        let rel_dir = src_path
            .parent()
            .and_then(|parent| parent.strip_prefix(source).ok())
            .unwrap_or_else(|| Path::new(""));
        let dest_dir = dest.join(rel_dir);

        split_file(src_path, &dest_dir, shortcuts, options, console, &mut summary)?;
    }

    Ok(summary)
}

fn split_file(
    src_path: &Path,
    dest_dir: &Path,
    shortcuts: &ShortcutTable,
    options: &SplitOptions,
    console: &Console,
    summary: &mut SplitSummary,
) -> Result<()> {
    let content = std::fs::read_to_string(src_path).map_err(|e| SplitterError::Io {
        context: format!("reading {}", src_path.display()),
        source: e,
    })?;

    for fragment in split_fragments(&content) {
        let header = parse_header(fragment).map_err(|e| SplitterError::ManifestParse {
            path: src_path.to_path_buf(),
            source: e,
        })?;

        let Some(header) = header else {
            console.debug("Empty kind, skipping manifest:");
            console.debug_block(fragment);
            summary.fragments_skipped += 1;
            continue;
        };

        let code = shortcuts.code_for(&header.kind).map_err(|e| {
            console.debug("Caused by this manifest:");
            console.debug_block(fragment);
            e
        })?;

        if !dest_dir.exists() {
            console.debug(format!("Creating directory {}", dest_dir.display()));
            std::fs::create_dir_all(dest_dir).map_err(|e| SplitterError::Io {
                context: format!("creating directory {}", dest_dir.display()),
                source: e,
            })?;
        }

        let out_path = dest_dir.join(output_file_name(code, &header.name));
        console.generating(&out_path);

        let existed = out_path.exists();
        if existed {
            if !options.overwrite {
                return Err(SplitterError::OutputExists { path: out_path });
            }
            console.warn(format!(
                "File {} is present. Continue anyway, because --overwrite was provided",
                out_path.display()
            ));
        }

        std::fs::write(&out_path, fragment).map_err(|e| SplitterError::Io {
            context: format!("writing {}", out_path.display()),
            source: e,
        })?;

        if existed {
            summary.files_overwritten.push(out_path.clone());
        }
        summary.files_written.push(out_path);
    }

    Ok(())
}
