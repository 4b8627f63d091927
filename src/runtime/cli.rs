use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the XDG default
    #[arg(short, long, env = "ROMEO_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// TOML catalog file (overrides `catalog.path` from the config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Console log level (default: warn)
    #[arg(long, default_value = "warn", env = "ROMEO_LOG_LEVEL")]
    pub log_level: log::LevelFilter,

    /// File log level (default: debug)
    #[arg(long, default_value = "debug")]
    pub log_file_level: log::LevelFilter,

    /// Path to log file
    #[arg(long, env = "ROMEO_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
