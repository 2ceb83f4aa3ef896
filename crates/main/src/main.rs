use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use sample_pdf::{FailureKind, GenerateError};

/// Generates the structured sample PDF used by the pdf2md test suite.
///
/// A TrueType font family is required. See `assets/fonts/README.md` or set
/// `SAMPLE_PDF_FONTS_DIR` if no system font is picked up.
#[derive(Parser)]
#[command(author, version, about = "Generate the sample PDF test fixture")]
struct Cli {
    /// Output file. Defaults to tests/fixtures/sample.pdf in the project root.
    output: Option<PathBuf>,

    /// Log progress information.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    sample_pdf::logging::init_logging(cli.verbose);

    let output = cli.output.unwrap_or_else(sample_pdf::default_output_path);
    println!("Generating test PDF at: {}", output.display());

    match sample_pdf::generate(&output) {
        Ok(report) => {
            log::info!("{} pages, {} bytes", report.pages, report.bytes);
            println!("Generated test PDF: {}", report.path.display());
            println!("Success!");
        }
        Err(err) => {
            report_failure(&err);
            process::exit(err.exit_code());
        }
    }
}

fn report_failure(err: &GenerateError) {
    match err.kind() {
        FailureKind::CapabilityUnavailable => {
            println!("Error: {}", err);
            if let Some(hint) = err.remediation() {
                println!("{}", hint);
            }
        }
        FailureKind::GenerationFailure => {
            println!("Error generating PDF: {}", err);
            print_error_sources(err);
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        println!("  caused by: {}", source);
        error = source;
    }
}
