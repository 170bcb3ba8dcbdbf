//! Command-line arguments.
//!
//! Every flag is optional; running with none reproduces the plain
//! interactive prompt against the public DefiLlama endpoint.

use clap::Parser;

use crate::configuration::{DEFAULT_API_URL, DEFAULT_TOP_N};

/// DeFi yield pool explorer
#[derive(Parser, Debug)]
#[command(name = "yield-scout")]
#[command(about = "Top DeFi yield pools by TVL for a token symbol", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of pools to show per query
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Pools endpoint returning `{"data": [...]}`
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Request timeout in seconds (client default when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,
}
