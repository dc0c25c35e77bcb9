//! Command-line argument parsing and text output
//!
//! Supports:
//! - Printing the outline or fold ranges of a file
//! - Inspecting the active entry and schema at a line
//! - Watching a file and reprinting the outline as it is saved

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::model::{OutlineEntry, OutlineView};

/// Outline and schema navigation for KV3 VData files
#[derive(Parser, Debug)]
#[command(name = "vdata-nav", version, about = "Outline and schema navigation for VData files")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/vdata-nav/config.yaml
    #[arg(short = 'c', long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the outline of a file
    Outline {
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the fold ranges of a file
    Folds {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Show the active outline entry and schema for a line
    Inspect {
        file: PathBuf,
        /// 1-based line to place the cursor on
        #[arg(short = 'l', long, value_name = "N")]
        line: usize,
        /// Open the schema documentation in the browser
        #[arg(long)]
        open: bool,
    },
    /// Reprint the outline whenever the file is saved
    Watch {
        file: PathBuf,
        /// 1-based line to place the cursor on
        #[arg(short = 'l', long, value_name = "N")]
        line: Option<usize>,
        #[arg(long)]
        open: bool,
    },
}

fn marker(entry: &OutlineEntry) -> &'static str {
    if entry.active {
        ">"
    } else {
        " "
    }
}

/// Outline as indented text, one entry per line
pub fn format_outline(view: &OutlineView) -> String {
    let mut out = String::new();
    for entry in &view.items {
        let _ = writeln!(
            out,
            "{}{:>5}  {}{} {}",
            marker(entry),
            entry.line,
            "  ".repeat(entry.depth),
            entry.kind.label(),
            entry.label
        );
    }
    out
}

/// Jump list entries, one per line
pub fn format_jumps(view: &OutlineView) -> String {
    let mut out = String::new();
    for entry in &view.jumps {
        let _ = writeln!(out, "{}{:>5}  {}", marker(entry), entry.line, entry.short_label);
    }
    out
}

/// Fold ranges as `start-end`, one per line
pub fn format_folds(view: &OutlineView) -> String {
    let mut out = String::new();
    for fold in &view.folds {
        let _ = writeln!(out, "{}-{}", fold.start, fold.end);
    }
    out
}
