use std::path::PathBuf;

use clap::Parser;

/// Simple subdomain finder (DNS + optional HTTP probe).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "subfinder",
    version,
    about,
    after_help = "Use only on targets you own or have permission to test."
)]
pub struct Args {
    /// Target domain, e.g. example.com
    #[arg(short, long)]
    pub domain: String,

    /// Path to subdomain wordlist file
    #[arg(short, long)]
    pub wordlist: PathBuf,

    /// Maximum number of hosts probed concurrently
    #[arg(short, long, default_value_t = 32)]
    pub threads: usize,

    /// Timeout for each DNS/HTTP operation, in seconds
    #[arg(long, default_value_t = 3.0)]
    pub timeout: f64,

    /// Skip DNS resolution
    #[arg(long)]
    pub skip_dns: bool,

    /// Skip HTTP probing
    #[arg(long)]
    pub skip_http: bool,

    /// Show resolved IPs in output (printed/JSON)
    #[arg(long)]
    pub show_ips: bool,

    /// Save results to file (.json or .txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// -v to print misses too
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing but the summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// 0 = silent, 1 = hits, 2 = hits and misses.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}
