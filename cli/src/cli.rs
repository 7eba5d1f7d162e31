//! CLI argument parsing for fieldpicker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use common::{Category, LoopControl};
use taskpane::InsertionStrategy;

#[derive(Parser, Debug)]
#[command(name = "fieldpicker")]
#[command(author, version, about = "Browse template fields and insert placeholder tokens", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the fields of a definition file by category
    Catalog {
        /// `.fields` definition file
        source: PathBuf,

        /// Only list this category (general, unique, plural)
        #[arg(short = 't', long)]
        category: Option<Category>,

        /// Case-insensitive substring filter
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Sort Z-A instead of the configured direction
        #[arg(short, long)]
        descending: bool,

        /// Print JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Print the placeholder token for a field or a loop control
    Token {
        /// Field name as written in the definition file
        #[arg(required_unless_present = "loop_control", conflicts_with = "loop_control")]
        field: Option<String>,

        /// Tab the field is chosen from (defaults to the field's own category)
        #[arg(short = 't', long)]
        category: Option<Category>,

        /// Print a loop control token instead (open, close)
        #[arg(long = "loop")]
        loop_control: Option<LoopControl>,
    },

    /// Print the field-code markup package for a raw token
    Fragment {
        /// Token text, e.g. '$r.item.precio'
        token: String,
    },

    /// Insert tokens into an empty in-memory document and print the result
    Insert {
        /// `.fields` definition file
        source: PathBuf,

        /// Field names to insert, in order; `:foreach` and `:end` insert loop controls
        #[arg(required = true)]
        items: Vec<String>,

        /// Embedding strategy (field-code, hidden-region)
        #[arg(short, long)]
        strategy: Option<InsertionStrategy>,

        /// Unwrap hidden regions after inserting
        #[arg(long)]
        clean: bool,

        /// Print the document nodes as JSON
        #[arg(long)]
        json: bool,
    },
}
