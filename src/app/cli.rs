use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Count non-blank lines of code in a project, skipping excluded directories"
)]
pub struct Cli {
    /// Directory to analyze
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "line_counter_config.json")]
    pub config: PathBuf,

    /// Show the count for each individual file
    #[arg(long)]
    pub show_files: bool,

    /// Save the configuration file and exit
    #[arg(long)]
    pub save_config: bool,
}
