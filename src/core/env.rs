//! Env file parsing.
//!
//! Reads flat `KEY=VALUE` files into candidates. Lines are split on the
//! first `=` only; there is no quoting, escaping or whitespace trimming.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::core::domain::{Candidate, Origin, Reason, Rejection};

/// Result of parsing an env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// Accepted candidates in file order.
    pub candidates: Vec<Candidate>,
    /// Lines that were skipped with a reason.
    pub rejections: Vec<Rejection>,
}

/// Parse an env file from disk.
///
/// # Errors
///
/// Returns the underlying `io::Error` if the file cannot be read. Callers
/// treat this as "no file candidates", not as a fatal failure.
pub fn load(path: impl AsRef<Path>) -> std::io::Result<Parsed> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading env file");

    let contents = std::fs::read_to_string(path)?;
    let parsed = parse_str(&contents);

    debug!(
        accepted = parsed.candidates.len(),
        rejected = parsed.rejections.len(),
        "env file parsed"
    );
    Ok(parsed)
}

/// Parse env file contents.
///
/// Comment lines (`#...`) and empty lines are skipped silently. Lines with
/// an empty key, an empty value, no `=`, or a key already seen earlier in the
/// same content are rejected. The first occurrence of a key wins.
pub fn parse_str(contents: &str) -> Parsed {
    let mut parsed = Parsed::default();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (idx, raw) in contents.lines().enumerate() {
        let origin = Origin::File { line: idx + 1 };
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            parsed.rejections.push(Rejection::new(
                origin,
                Reason::MalformedLine {
                    line: line.to_string(),
                },
            ));
            continue;
        };

        if key.is_empty() {
            parsed.rejections.push(Rejection::new(
                origin,
                Reason::EmptyKey {
                    value: value.to_string(),
                },
            ));
            continue;
        }

        if value.is_empty() {
            parsed.rejections.push(Rejection::new(
                origin,
                Reason::EmptyValue {
                    key: key.to_string(),
                },
            ));
            continue;
        }

        if let Some(&first_line) = seen.get(key) {
            parsed.rejections.push(Rejection::new(
                origin,
                Reason::DuplicateInFile {
                    key: key.to_string(),
                    first_line,
                },
            ));
            continue;
        }

        seen.insert(key.to_string(), idx + 1);
        parsed.candidates.push(Candidate::new(key, value, origin));
    }

    parsed
}
