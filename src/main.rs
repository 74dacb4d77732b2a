//! nutrisheet
//!
//! Reads a sheet request (profile + parameters) as JSON, computes the
//! nutrition targets and writes the PDF sheet. Metadata goes to stdout,
//! logs to stderr.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use nutrisheet::build_info;
use nutrisheet::models::{SheetRequest, ValidationMode};
use nutrisheet::report::{self, ReportConfig};

const USAGE: &str = "usage: nutrisheet <request.json> [output_dir]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs on stderr so stdout carries only the metadata JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrisheet=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let mut args = std::env::args().skip(1);
    let request_path = PathBuf::from(args.next().ok_or(USAGE)?);

    let mut config = ReportConfig::from_env()?;
    if let Some(dir) = args.next() {
        config.output_dir = PathBuf::from(dir);
    }

    eprintln!("Reading request: {}", request_path.display());
    let request: SheetRequest = serde_json::from_str(&std::fs::read_to_string(&request_path)?)?;

    let evaluation = match request.evaluate(ValidationMode::CollectAll) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            tracing::error!(error = %e, "Request rejected");
            return Err(e.into());
        }
    };

    let (path, metadata) = report::generate_sheet_in_dir(&evaluation, &config)?;
    eprintln!("Sheet written to {}", path.display());

    println!("{}", metadata.to_json()?);

    Ok(())
}
