use std::path::Path;

use colored::*;

use crate::annotator::Summary;

/// Render a colored summary of the run to stderr.
pub fn render(summary: &Summary, report_path: &Path, known_packages: usize) {
    eprintln!(
        "\n {} v{}",
        "pipdeptree-annotate".bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!(" Report: {} ({} packages)\n", report_path.display(), known_packages);

    eprintln!("{}", BORDER_TOP);
    eprintln!(" │  {} │", format!("{:<49}", "SUMMARY").bold());
    eprintln!("{}", row(&format!("Lines read         : {:>6}", summary.lines)));
    eprintln!("{}", row(&format!("Lines annotated    : {:>6}", summary.annotated)));
    eprintln!(
        "{}",
        glyph_row(
            "✓".green(),
            &format!("pyproject.toml  : {:>6}", summary.pyproject_toml)
        )
    );
    eprintln!(
        "{}",
        glyph_row("⚠".yellow(), &format!("setup.py        : {:>6}", summary.setup_py))
    );
    eprintln!(
        "{}",
        glyph_row("✗".red(), &format!("neither         : {:>6}", summary.neither))
    );
    eprintln!("{}\n", BORDER_BOTTOM);
}

const BORDER_TOP: &str = " ┌────────────────────────────────────────────────────┐";
const BORDER_BOTTOM: &str = " └────────────────────────────────────────────────────┘";

// Padding is applied to plain text only; color codes would skew the width.
fn row(text: &str) -> String {
    format!(" │  {:<49} │", text)
}

fn glyph_row(glyph: impl std::fmt::Display, text: &str) -> String {
    format!(" │  {}  {:<46} │", glyph, text)
}

/// One-line form of the summary, used when stderr is not worth a box.
pub fn summary_line(summary: &Summary) -> String {
    format!(
        "Lines: {}  Annotated: {}  pyproject.toml: {}  setup.py: {}  Neither: {}",
        summary.lines,
        summary.annotated,
        summary.pyproject_toml,
        summary.setup_py,
        summary.neither,
    )
}
