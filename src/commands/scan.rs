//! Scan command implementation

use crate::cli::Cli;
use crate::config::HostFile;
use crate::output::render;
use crate::scanner::Scanner;
use crate::utils::{create_progress_bar, hidden_progress_bar, Result};
use std::io::Write;

/// Run a scan for the parsed command line, writing the result to `writer`
///
/// Configuration problems fail before any host is contacted. Hosts that
/// cannot be reached are logged and skipped.
pub async fn run_scan<W: Write>(cli: &Cli, writer: &mut W) -> Result<()> {
    let options = cli.options();
    let host_file = HostFile::load(&cli.host_file)?;
    tracing::debug!(
        path = %cli.host_file.display(),
        hosts = host_file.hosts.len(),
        "loaded host file"
    );

    let pb = if cli.verbose {
        hidden_progress_bar()
    } else {
        create_progress_bar(host_file.hosts.len() as u64, "Scanning hosts")
    };

    let scanner = Scanner::new(options);
    let report = scanner
        .scan_with_progress(&host_file.hosts, || pb.inc(1))
        .await;
    pb.finish_and_clear();

    render(&report.records, scanner.options(), cli.output, writer)?;
    Ok(())
}
