use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notelist")]
#[command(about = "Interactive in-memory note list")]
#[command(version)]
pub struct Cli {
    /// Log level: trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, env = "NOTELIST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (logging is off if omitted)
    #[arg(long, env = "NOTELIST_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
