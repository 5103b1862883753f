use clap::Parser;
use std::path::PathBuf;

/// A single-screen terminal to-do list
#[derive(Parser, Debug)]
#[command(name = "jot", version, about = "A single-screen terminal to-do list")]
pub struct Cli {
    /// Tasks to pre-populate the list with, in order
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,

    /// Path to a config file (defaults to .jot.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with completed tasks hidden
    #[arg(long)]
    pub hide_completed: bool,

    /// Start with the list sorted by name
    #[arg(long)]
    pub sort_by_name: bool,
}
