//! dns_batch library: batch A/AAAA/CNAME resolution into a spreadsheet
//!
//! Reads one domain per line from an input file, queries A, AAAA and CNAME
//! records for each against a fixed nameserver, and writes one spreadsheet row
//! per domain.
//!
//! # Example
//!
//! ```no_run
//! use dns_batch::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new("domains.txt");
//! let report = run_batch(config).await?;
//! println!("Resolved {} domains into {}", report.total_domains, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Queries are issued one at a time;
//! a single-threaded runtime is enough.

#![warn(missing_docs)]

mod batch;
pub mod config;
pub mod dns;
mod error_handling;
pub mod export;
pub mod initialization;
mod models;

// Re-export public API
pub use batch::{query_domain, read_domains, resolve_domains, split_lines};
pub use config::{Config, LogFormat, LogLevel, Opt, ResolverSettings};
pub use error_handling::{BatchError, ExportError, InitializationError, QueryError, QueryStats};
pub use models::DomainRecord;
pub use run::{run_batch, run_batch_with, BatchReport};

// Internal run module (contains the top-level batch orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::batch::{read_domains, resolve_domains};
    use crate::config::Config;
    use crate::dns::{EmptyReason, RecordLookup};
    use crate::error_handling::{BatchError, QueryStats};
    use crate::export::write_workbook;
    use crate::initialization::init_resolver;

    /// Results of a batch run.
    #[derive(Debug, Clone)]
    pub struct BatchReport {
        /// Number of domains read (one per input line)
        pub total_domains: usize,
        /// Domains with at least one A, AAAA or CNAME value
        pub resolved: usize,
        /// Domains with no values of any type
        pub empty: usize,
        /// Number of queries issued
        pub queries: usize,
        /// Path of the written workbook
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a batch with a resolver built from `config.resolver`.
    ///
    /// Reads the input file, resolves every domain, and writes the workbook.
    /// Nothing is written unless every query either succeeds or ends in a
    /// tolerated empty result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file is missing or unreadable
    /// - Any query fails with a non-tolerated error
    /// - The workbook cannot be written
    pub async fn run_batch(config: Config) -> Result<BatchReport> {
        let resolver = init_resolver(&config.resolver);
        info!(
            "Querying nameserver {} with a {}s timeout",
            config.resolver.nameserver,
            config.resolver.timeout.as_secs()
        );
        run_batch_with(config, &resolver).await
    }

    /// Runs a batch using `lookup` for every query.
    ///
    /// `config.resolver` is ignored; the caller owns the lookup.
    ///
    /// # Errors
    ///
    /// Same as [`run_batch`].
    pub async fn run_batch_with<L: RecordLookup>(config: Config, lookup: &L) -> Result<BatchReport> {
        let start_time = Instant::now();

        if !config.input.exists() {
            return Err(BatchError::InputMissing(config.input).into());
        }

        let domains = read_domains(&config.input).await?;
        info!("Read {} domains from {}", domains.len(), config.input.display());

        let mut stats = QueryStats::new();
        let records = resolve_domains(lookup, &domains, &mut stats)
            .await
            .context("DNS resolution aborted, no output written")?;

        let written = write_workbook(&records, &config.output, &config.separator)
            .with_context(|| format!("Failed to write {}", config.output.display()))?;

        let resolved = records.iter().filter(|r| r.has_records()).count();
        info!(
            "{} queries, {} empty ({} no answer, {} non-existent domain, {} no nameservers)",
            stats.total_queries(),
            stats.total_empty(),
            stats.empty_count(EmptyReason::NoAnswer),
            stats.empty_count(EmptyReason::NonExistentDomain),
            stats.empty_count(EmptyReason::NoNameservers),
        );

        Ok(BatchReport {
            total_domains: written,
            resolved,
            empty: written - resolved,
            queries: stats.total_queries(),
            output_path: config.output,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
