//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_batch` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;
use structopt::StructOpt;

use dns_batch::initialization::init_logger_with;
use dns_batch::{run_batch, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opt = Opt::from_args();

    init_logger_with(opt.log_level.into(), opt.log_format)
        .context("Failed to initialize logger")?;

    let config = opt.into_config();

    match run_batch(config).await {
        Ok(report) => {
            println!(
                "✅ Resolved {} domain{} ({} with records, {} without) in {:.1}s",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.resolved,
                report.empty,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_batch error: {:#}", e);
            process::exit(1);
        }
    }
}
