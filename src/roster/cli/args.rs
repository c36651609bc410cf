use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Keyboard-driven user management dashboard", long_about = None)]
pub struct Cli {
    /// Start with an empty collection instead of the seed data
    #[arg(long)]
    pub empty: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read configuration from this directory
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,
}
