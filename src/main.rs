use std::path::PathBuf;

use clap::Parser;
use rvtools_csv2excel::config::{DEFAULT_OUTPUT, DEFAULT_PREFIX};
use rvtools_csv2excel::{convert, discover};
use rvtools_csv2excel::{ConvertOptions, Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose)?;
    let options = cli.into_options();

    if !options.input.is_dir() {
        return Err(ToolError::MissingInput(options.input));
    }

    let files =
        discover::find_csv_files(&options.input, options.recursive, options.prefix.as_deref())?;
    if files.is_empty() {
        println!("No CSV files found in {}", options.input.display());
        return Ok(());
    }
    println!("Found {} CSV files to convert", files.len());

    let report =
        convert::convert_csv_to_excel(&files, &options.output, options.naming_prefix())?;
    println!("Conversion complete. Output file: {}", report.output.display());
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        "rvtools_csv2excel=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|error| ToolError::Logging(error.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert RVTools CSV exports into a single formatted Excel workbook."
)]
struct Cli {
    /// Input directory containing CSV files.
    #[arg(short, long, default_value = ".")]
    input: PathBuf,

    /// Output Excel file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Scan subdirectories for CSV files.
    #[arg(short, long)]
    recursive: bool,

    /// Only process files with this prefix. Pass an empty string to accept every CSV file.
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Show detailed processing information.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> ConvertOptions {
        let mut options = ConvertOptions::new(self.input).with_prefix(self.prefix);
        options.output = self.output;
        options.recursive = self.recursive;
        options
    }
}
