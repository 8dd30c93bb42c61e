use clap::Parser;
use std::path::PathBuf;

/// RFE: A Rust-based terminal File Explorer
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to start in (default: current)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Command used to open files instead of the system default handler
    #[arg(long, env = "RFE_OPENER", value_name = "CMD")]
    pub opener: Option<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "RFE_LOG", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
