//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::parser::parse_edge;

/// Classic data structures demonstrated: array, linked list, stack, queue, BST and graph
#[derive(Parser, Debug)]
#[command(name = "rsds")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (overrides the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full demonstration (default)
    Demo,

    /// Fixed-capacity array
    Array {
        /// Values to store (default: configured sample)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Singly linked list
    List {
        /// Values to append (default: configured sample)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// LIFO stack
    Stack {
        /// Values to push (default: configured sample)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
        /// Number of pops after pushing
        #[arg(long, default_value_t = 1)]
        pop: usize,
    },

    /// FIFO queue
    Queue {
        /// Values to enqueue (default: configured sample)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
        /// Number of dequeues after enqueueing
        #[arg(long, default_value_t = 1)]
        dequeue: usize,
    },

    /// Binary search tree
    Bst {
        /// Values to insert, in order (default: configured sample)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
        /// Also print the tree shape
        #[arg(short, long)]
        tree: bool,
    },

    /// Directed graph as adjacency lists
    Graph {
        /// Number of vertices (default: configured sample)
        #[arg(short, long)]
        vertices: Option<usize>,
        /// Edge SRC:DEST, repeatable (default: configured sample)
        #[arg(short, long = "edge", value_parser = parse_edge, allow_hyphen_values = true)]
        edges: Vec<(i32, i32)>,
        /// Breadth-first order from this vertex
        #[arg(long, allow_negative_numbers = true)]
        bfs: Option<i32>,
        /// Depth-first order from this vertex
        #[arg(long, allow_negative_numbers = true)]
        dfs: Option<i32>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show global config file location
    Path,
}
