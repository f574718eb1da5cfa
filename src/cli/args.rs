//! CLI argument definitions using clap

use crate::config::{Options, DEFAULT_PARALLEL, DEFAULT_TIMEOUT_SECS};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

const AFTER_LONG_HELP: &str = "\
INPUT FILE:
  The host file may be JSON or YAML, selected by its extension.

  JSON:
    {
      \"hosts\": [
        { \"address\": \"www.example.com\", \"port\": \"443\" },
        { \"address\": \"mail.example.com\", \"port\": 993 }
      ]
    }

  YAML:
    hosts:
      - address: www.example.com
        port: 443
      - address: mail.example.com
        port: 993

SHOW ALL:
  By default only the host, common name, created and expire dates are shown
  in table and CSV output, and CA certificates are skipped. JSON and YAML
  output always include every field.

  --show-all keeps CA certificates and adds the issuer and DNS names columns.";

#[derive(Parser, Debug)]
#[command(name = "certls")]
#[command(version)]
#[command(about = "Read TLS certificates from remote hosts", long_about = None)]
#[command(after_long_help = AFTER_LONG_HELP)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to JSON or YAML file containing hosts
    #[arg(short = 'f', long, env = "CERTLS_HOST_FILE", value_name = "FILE")]
    pub host_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Seconds allowed per host for connect and handshake (0 waits indefinitely)
    #[arg(short, long, env = "CERTLS_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Skip verification of TLS certificates (INSECURE)
    #[arg(short = 'i', long, env = "CERTLS_SKIP_TLS_VERIFY")]
    pub skip_tls_verify: bool,

    /// Show CA certificates, issuer and DNS names
    #[arg(short = 'a', long, env = "CERTLS_SHOW_ALL")]
    pub show_all: bool,

    /// Also show CA certificates from the chain
    #[arg(long)]
    pub show_ca: bool,

    /// Add the issuer column to table and CSV output
    #[arg(long)]
    pub show_issuer: bool,

    /// Add the DNS names column to table and CSV output
    #[arg(long)]
    pub show_dns_names: bool,

    /// Number of hosts to probe at once
    #[arg(short, long, env = "CERTLS_PARALLEL", default_value_t = DEFAULT_PARALLEL)]
    pub parallel: usize,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options for this run
    pub fn options(&self) -> Options {
        Options::new()
            .with_skip_tls_verify(self.skip_tls_verify)
            .with_show_all(self.show_all)
            .with_show_ca(self.show_ca)
            .with_show_issuer(self.show_issuer)
            .with_show_dns_names(self.show_dns_names)
            .with_timeout_secs(self.timeout)
            .with_parallel(self.parallel)
    }
}
