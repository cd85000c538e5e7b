use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// heapdom - dominator trees for heap object graphs
#[derive(Debug, Parser)]
#[command(name = "heapdom", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the dominator tree, each object under its immediate dominator.
    Tree {
        /// Path to the heap graph file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Maximum depth below the starting object to print.
        #[arg(short, long)]
        depth: Option<usize>,

        /// Print only the subtree dominated by this object.
        #[arg(long, value_name = "NAME")]
        root: Option<String>,
    },

    /// Print the dominator chain of one object up to the super-root.
    Idom {
        /// Path to the heap graph file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Name of the object to look up.
        #[arg(value_name = "OBJECT")]
        object: String,
    },

    /// Print object, reference, and dominator statistics.
    Stats {
        /// Path to the heap graph file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Number of objects to list in the top-dominators ranking.
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}
