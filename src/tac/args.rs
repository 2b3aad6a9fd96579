use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tac")]
#[command(about = "Compose structured academic paragraphs from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    #[command(alias = "n")]
    New {
        /// Project name
        name: String,

        /// Author recorded in the project metadata
        #[arg(short, long, default_value = "")]
        author: String,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List projects, most recently modified first
    #[command(alias = "ls")]
    List,

    /// Show a project's paragraphs
    #[command(alias = "s")]
    Show {
        /// Project id or name
        project: String,
    },

    /// Append a paragraph to a project
    #[command(alias = "a")]
    Add {
        /// Project id or name
        project: String,

        /// Paragraph type (topic, argument, argument_quote, conclusion)
        kind: String,

        /// Paragraph text
        #[arg(default_value = "")]
        content: String,
    },

    /// Edit a paragraph's content and/or formatting
    #[command(alias = "e")]
    Edit {
        /// Project id or name
        project: String,

        /// Paragraph position (1-based) or id prefix
        paragraph: String,

        /// Replacement text
        #[arg(long)]
        content: Option<String>,

        /// Formatting overrides, e.g. --format font_size=14 --format bold=true
        #[arg(long = "format", value_name = "KEY=VALUE")]
        format: Vec<String>,
    },

    /// Move a paragraph to a new position
    #[command(alias = "mv")]
    Move {
        /// Project id or name
        project: String,

        /// Paragraph position (1-based) or id prefix
        paragraph: String,

        /// Target position (1-based, clamped to the valid range)
        position: usize,
    },

    /// Remove a paragraph from a project
    #[command(alias = "rm")]
    Remove {
        /// Project id or name
        project: String,

        /// Paragraph position (1-based) or id prefix
        paragraph: String,
    },

    /// Move a project to the trash
    #[command(alias = "del")]
    Delete {
        /// Project id or name
        project: String,
    },

    /// Duplicate a project under a new name
    #[command(alias = "dup")]
    Duplicate {
        /// Project id or name
        project: String,

        /// Name for the copy
        new_name: String,
    },

    /// Print word and character counts
    Stats {
        /// Project id or name
        project: String,
    },

    /// Export a project to txt, html or odt
    Export {
        /// Project id or name
        project: String,

        /// Output format
        #[arg(short, long, default_value = "txt")]
        format: String,

        /// Output file (defaults to <name>.<ext> in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Bundle projects into a gzipped tar archive
    Archive {
        /// Projects to include (all when omitted)
        projects: Vec<String>,

        /// Output file (defaults to tac-<timestamp>.tar.gz)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
