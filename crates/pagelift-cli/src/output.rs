use std::io::Write;

use owo_colors::OwoColorize;
use pagelift_extract::Extraction;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Width of the `-` separator lines around the console preview.
const PREVIEW_SEPARATOR_WIDTH: usize = 80;

/// Print the success line after the output file has been written.
pub fn print_confirmation(
    w: &mut dyn Write,
    extraction: &Extraction,
    color: ColorMode,
) -> std::io::Result<()> {
    let msg = format!(
        "Successfully extracted page {} content to: {}",
        extraction.page_index + 1,
        extraction.dest.display()
    );
    if color.enabled() {
        writeln!(w, "{} {}", "✓".green(), msg)?;
    } else {
        writeln!(w, "✓ {}", msg)?;
    }
    Ok(())
}

/// Print the truncated page preview bounded by dash separator lines.
pub fn print_preview(
    w: &mut dyn Write,
    page: usize,
    preview: &str,
    color: ColorMode,
) -> std::io::Result<()> {
    let separator = "-".repeat(PREVIEW_SEPARATOR_WIDTH);
    writeln!(w)?;
    writeln!(w, "{}", separator)?;
    if color.enabled() {
        writeln!(w, "{}", format!("PAGE {page} PREVIEW:").bold())?;
    } else {
        writeln!(w, "PAGE {page} PREVIEW:")?;
    }
    writeln!(w, "{}", separator)?;
    writeln!(w, "{}", preview)?;
    Ok(())
}
