use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pagelift_core::PdfBackend;
use pagelift_extract::{Banner, ExtractConfig, extract_page, preview};
use pagelift_pdf_mupdf::MupdfBackend;

mod output;

use output::ColorMode;

/// Pagelift - extract the text of a single PDF page to a file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract one page of a PDF to a text file with a banner header
    Extract {
        /// Path to the source PDF
        source: PathBuf,

        /// Path to the output text file (its parent directory must exist)
        dest: PathBuf,

        /// Page number to extract (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Banner title line (default: "PAGE <N> CONTENT")
        #[arg(long)]
        title: Option<String>,

        /// Banner subtitle line (default: the source file name)
        #[arg(long)]
        subtitle: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the number of pages in a PDF
    Info {
        /// Path to the source PDF
        source: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            source,
            dest,
            page,
            title,
            subtitle,
            no_color,
        } => extract(source, dest, page, title, subtitle, no_color),
        Command::Info { source } => info(source),
    }
}

fn extract(
    source: PathBuf,
    dest: PathBuf,
    page: usize,
    title: Option<String>,
    subtitle: Option<String>,
    no_color: bool,
) -> anyhow::Result<()> {
    if !source.exists() {
        anyhow::bail!("File not found: {}", source.display());
    }
    if page == 0 {
        anyhow::bail!("Page numbers are 1-based; there is no page 0");
    }

    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| source.display().to_string());

    let config = ExtractConfig {
        page_index: page - 1,
        banner: Banner {
            title: title.unwrap_or_else(|| format!("PAGE {page} CONTENT")),
            subtitle: subtitle.unwrap_or(file_name),
        },
    };

    let backend = MupdfBackend::new();
    let extraction = extract_page(&source, &dest, config, &backend)?;

    let color = ColorMode(!no_color);
    let mut writer: Box<dyn Write> = Box::new(std::io::stdout());
    output::print_confirmation(&mut writer, &extraction, color)?;
    output::print_preview(&mut writer, page, &preview(&extraction.text), color)?;

    Ok(())
}

fn info(source: PathBuf) -> anyhow::Result<()> {
    if !source.exists() {
        anyhow::bail!("File not found: {}", source.display());
    }

    let backend = MupdfBackend::new();
    let count = backend.page_count(&source)?;
    println!("{}: {} page(s)", source.display(), count);

    Ok(())
}
