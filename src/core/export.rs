//! Export variables to an env file.
//!
//! Appends `KEY=VALUE` lines; the target is created if missing and never
//! truncated, so repeated exports accumulate lines. Secret values are written
//! in full.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::core::domain::VariableSet;

/// Summary of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exported {
    /// Lines written.
    pub written: usize,
    /// How many of them carry a secret value.
    pub secrets: usize,
}

/// Render the lines that an export of `variables` would write.
pub fn render(variables: &VariableSet, key: Option<&str>) -> String {
    let mut output = String::new();
    for var in variables.filter_key(key).iter() {
        output.push_str(var.key());
        output.push('=');
        output.push_str(var.value());
        output.push('\n');
    }
    output
}

/// Append matching variables to `path`.
///
/// # Errors
///
/// Returns the `io::Error` if the file cannot be opened or written.
pub fn append(
    variables: &VariableSet,
    key: Option<&str>,
    path: impl AsRef<Path>,
) -> std::io::Result<Exported> {
    let path = path.as_ref();
    let selected = variables.filter_key(key);
    debug!(path = %path.display(), count = selected.len(), "exporting variables");

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)?;

    let mut content = render(&selected, None);
    if needs_leading_newline(&mut file)? {
        content.insert(0, '\n');
    }
    file.write_all(content.as_bytes())?;
    file.flush()?;

    Ok(Exported {
        written: selected.len(),
        secrets: selected.iter().filter(|v| v.is_secret()).count(),
    })
}

/// Whether the file has content that does not end in a newline.
fn needs_leading_newline(file: &mut std::fs::File) -> std::io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
