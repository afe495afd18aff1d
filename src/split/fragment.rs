use serde_yaml::Value;

/// Document separator line emitted by `helm template`.
pub const SEPARATOR: &str = "---";

/// The two fields read from a manifest. Everything else stays opaque text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestHeader {
    pub kind: String,
    pub name: String,
}

/// Text form of a scalar node. yaml decodes unquoted `12345` or `true` as
/// numbers and booleans, but they are still valid kinds and names.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_separator(line: &str) -> bool {
    line.trim_end_matches('\n').trim_end_matches('\r') == SEPARATOR
}

/// Split rendered text into fragments, one per separator line.
///
/// Each fragment is the exact span from its separator line up to the next
/// one, so it starts with `---` and can be written back byte-for-byte.
/// Anything before the first separator is dropped.
pub fn split_fragments(content: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if is_separator(line) {
            starts.push(offset);
        }
        offset += line.len();
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(content.len());
            &content[start..end]
        })
        .collect()
}

/// Read `kind` and `metadata.name` from a fragment.
///
/// Returns `Ok(None)` for fragments with nothing to write: empty or
/// comment-only documents, non-mapping documents, and mappings without a
/// `kind`.
pub fn parse_header(fragment: &str) -> Result<Option<ManifestHeader>, serde_yaml::Error> {
    let value: Value = serde_yaml::from_str(fragment)?;

    let kind = value.get("kind").and_then(scalar_text).unwrap_or_default();
    if kind.is_empty() {
        return Ok(None);
    }

    let name = value
        .get("metadata")
        .and_then(|metadata| metadata.get("name"))
        .and_then(scalar_text)
        .unwrap_or_default();
    Ok(Some(ManifestHeader { kind, name }))
}
