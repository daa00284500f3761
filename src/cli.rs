//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::ui::render::DEFAULT_COLUMN_WIDTH;

#[derive(Parser, Debug)]
#[command(
    name = "sidelog",
    version,
    about = "Compare the histories of two git branches side by side"
)]
pub struct Cli {
    /// Branch to compare against the current branch, or two branches to compare
    #[arg(value_name = "BRANCH")]
    pub branches: Vec<String>,

    /// Run as if started in this repository
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Width of the left column
    #[arg(long, default_value_t = DEFAULT_COLUMN_WIDTH)]
    pub width: usize,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Show complete histories instead of stopping where the branches converge
    #[arg(long)]
    pub full: bool,

    /// Open a scrollable full-screen view
    #[arg(short, long)]
    pub interactive: bool,
}

/// `--color` choices
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether output should carry ANSI escapes
    pub fn enabled(self, stdout_is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => stdout_is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
