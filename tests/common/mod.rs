#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const CHART: &str = "demo";

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Write a stand-in `helm` that logs its arguments to `helm.log` next to the
/// script and, on `template`, copies the rendered fixture into `--output-dir`.
/// `crds/` is only copied when `--include-crds` is passed. A `repo add` for
/// a repository containing `broken` fails.
#[cfg(unix)]
pub fn fake_helm(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-helm");
    let log = dir.join("helm.log");
    let fixture = fixture_path("rendered");
    let body = format!(
        r#"#!/bin/sh
echo "$*" >> "{log}"
case "$*" in
  *broken*)
    echo "Error: broken repository index" >&2
    exit 1
    ;;
esac
if [ "$1" = "template" ]; then
  out=""
  prev=""
  crds=0
  for arg in "$@"; do
    [ "$prev" = "--output-dir" ] && out="$arg"
    [ "$arg" = "--include-crds" ] && crds=1
    prev="$arg"
  done
  mkdir -p "$out/{chart}"
  cp -R "{fixture}/templates" "$out/{chart}/"
  [ "$crds" = 1 ] && cp -R "{fixture}/crds" "$out/{chart}/"
  echo "wrote $out/{chart}"
fi
exit 0
"#,
        log = log.display(),
        fixture = fixture.display(),
        chart = CHART,
    );
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

pub fn helm_log(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("helm.log")).unwrap_or_default()
}

/// Relative paths of every file under `dir`, sorted.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}
