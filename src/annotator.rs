//! Line-by-line annotation of `pipdeptree` output.
//!
//! Two line shapes carry a package name:
//!
//! ```text
//! pipdeptree==2.25.1
//! │ ├── numpy [required: >=1.19.5, installed: 1.26.4]
//! ```
//!
//! A line whose package is in the [`LookupTable`] gets the [`Marks::annotation`]
//! suffix; every other line is written back unchanged.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::trace;

use crate::config::Marks;
use crate::lookup::LookupTable;
use crate::models::BuildStyle;

const EQUALITY_SEPARATOR: &str = "==";
const INSTALLED_SEPARATOR: &str = "installed:";
const REQUIRED_SEPARATOR: &str = " [required:";

/// Counts gathered while annotating a stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub annotated: usize,
    pub pyproject_toml: usize,
    pub setup_py: usize,
    pub neither: usize,
}

impl Summary {
    fn record(&mut self, style: &BuildStyle) {
        self.annotated += 1;
        if style.uses_pyproject_toml {
            self.pyproject_toml += 1;
        }
        if style.uses_setup_py {
            self.setup_py += 1;
        }
        if !style.uses_pyproject_toml && !style.uses_setup_py {
            self.neither += 1;
        }
    }
}

/// Extract the lower-cased package name from a recognized line.
///
/// A line containing `==` is only ever treated as the `name==version` form,
/// even when that split fails.
pub fn extract_package(line: &str) -> Option<String> {
    let candidate = if line.contains(EQUALITY_SEPARATOR) {
        let (name, _) = split_in_two(line, EQUALITY_SEPARATOR)?;
        name.trim()
    } else if line.contains(INSTALLED_SEPARATOR) {
        let (head, _) = split_in_two(line, INSTALLED_SEPARATOR)?;
        let head = head.split(REQUIRED_SEPARATOR).next().unwrap_or(head);
        // Last token skips the tree-drawing prefix.
        head.split_whitespace().last()?
    } else {
        return None;
    };

    if candidate.is_empty() {
        return None;
    }
    Some(candidate.to_lowercase())
}

/// Split on `separator` only when it occurs exactly once.
fn split_in_two<'a>(line: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let (first, rest) = line.split_once(separator)?;
    if rest.contains(separator) {
        return None;
    }
    Some((first, rest))
}

fn lookup<'t>(line: &str, table: &'t LookupTable) -> Option<&'t BuildStyle> {
    extract_package(line).and_then(|name| table.get(&name))
}

/// Append the annotation before the line terminator. An unterminated line gains `\n`.
fn render(line: &str, style: &BuildStyle, marks: &Marks) -> String {
    let (body, terminator) = if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "\n")
    };
    format!("{}{}{}", body, marks.annotation(style), terminator)
}

/// Annotate a single line (terminator included, if any).
pub fn annotate_line<'a>(line: &'a str, table: &LookupTable, marks: &Marks) -> Cow<'a, str> {
    match lookup(line, table) {
        Some(style) => Cow::Owned(render(line, style, marks)),
        None => Cow::Borrowed(line),
    }
}

/// Copy `reader` to `writer`, annotating every line whose package is known.
///
/// Line order and count are preserved. Lines that are not valid UTF-8 are
/// copied byte for byte.
pub fn annotate_stream<R, W>(
    mut reader: R,
    mut writer: W,
    table: &LookupTable,
    marks: &Marks,
) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }
        summary.lines += 1;

        let written = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let annotated = annotate_line(line, table, marks);
                if let (Cow::Owned(_), Some(style)) = (&annotated, lookup(line, table)) {
                    summary.record(style);
                }
                writer.write_all(annotated.as_bytes())
            }
            Err(_) => {
                trace!(line = summary.lines, "passing through non-UTF-8 line");
                writer.write_all(&buf)
            }
        };
        written.context("failed to write output")?;
    }

    writer.flush().context("failed to write output")?;
    Ok(summary)
}
