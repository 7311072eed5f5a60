//! catalographer CLI - artwork record extraction from gallery-catalog PDFs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use catalographer::{extract_file_with_options, output, ArtworkRecord, ExtractOptions};

#[derive(Parser)]
#[command(name = "catalographer")]
#[command(version)]
#[command(about = "Extract artwork records from gallery-catalog PDFs", long_about = None)]
struct Cli {
    /// Directory containing input PDF files
    #[arg(value_name = "INPUT_DIR")]
    input: PathBuf,

    /// Output directory for JSON files (defaults to the input directory)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Also write extracted images to this directory
    #[arg(long, value_name = "DIR")]
    images: Option<PathBuf>,

    /// Embed the dominant page image as base64 in each record
    #[arg(long)]
    embed: bool,

    /// Byte limit for embedded base64 payloads (0 = unlimited)
    #[arg(long, value_name = "BYTES", default_value_t = 2 * 1024 * 1024)]
    embed_limit: usize,

    /// Line-count threshold above which a page is treated as text-heavy
    #[arg(long, value_name = "N", default_value_t = 40)]
    max_lines: usize,

    /// Suppress per-file progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let pdf_files = collect_pdfs(&cli.input)?;
    if pdf_files.is_empty() {
        return Err(format!("no PDF files found in {}", cli.input.display()));
    }

    let output_dir = cli.output.clone().unwrap_or_else(|| cli.input.clone());
    fs::create_dir_all(&output_dir)
        .map_err(|e| format!("cannot create output directory: {}", e))?;

    let mut options = ExtractOptions::new()
        .with_embedded_images(cli.embed)
        .with_embed_limit(cli.embed_limit)
        .with_max_artwork_lines(cli.max_lines);
    if let Some(dir) = &cli.images {
        fs::create_dir_all(dir)
            .map_err(|e| format!("cannot create image directory: {}", e))?;
        options = options.with_image_dir(dir);
    }

    let progress = file_progress(pdf_files.len() as u64, cli.quiet);

    let mut all_records: Vec<ArtworkRecord> = Vec::new();
    let mut succeeded = 0usize;

    for path in &pdf_files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.set_message(name.clone());

        match extract_file_with_options(path, &options) {
            Ok(records) => {
                let out_path = output_dir.join(json_filename(path));
                if let Err(e) = output::write_records(&records, &out_path) {
                    progress.suspend(|| {
                        eprintln!("{} {}: {}", "warn:".yellow(), name, e);
                    });
                } else {
                    succeeded += 1;
                    if !cli.quiet {
                        progress.suspend(|| {
                            println!(
                                "{} {} \u{2192} {} ({} records)",
                                "ok:".green(),
                                name,
                                out_path.display(),
                                records.len()
                            );
                        });
                    }
                    all_records.extend(records);
                }
            }
            Err(e) => {
                progress.suspend(|| {
                    eprintln!("{} {}: {}", "warn:".yellow(), name, e);
                });
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();

    if succeeded == 0 {
        return Err("all input files failed".to_string());
    }

    // Batch summary across every input file
    let summary_path = output_dir.join("all_artworks.json");
    output::write_records(&all_records, &summary_path)
        .map_err(|e| format!("cannot write summary: {}", e))?;

    if !cli.quiet {
        println!(
            "{} {} of {} files, {} artwork records \u{2192} {}",
            "done:".green().bold(),
            succeeded,
            pdf_files.len(),
            all_records.len(),
            summary_path.display()
        );
    }

    Ok(())
}

/// List PDF files in the input directory, sorted for stable output order.
fn collect_pdfs(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("cannot read {}: {}", dir.display(), e))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Per-file output name: `<stem>_artworks.json`.
fn json_filename(pdf_path: &Path) -> String {
    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());
    format!("{}_artworks.json", stem)
}

fn file_progress(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );
    bar
}
