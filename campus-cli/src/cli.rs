use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Campus platform client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides configuration)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Config directory (overrides CAMPUS_CONFIG_DIR and ./.campus)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<std::path::PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
