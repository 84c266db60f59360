//! rsds: classic data structures with a console demonstration.
//!
//! - [`domain`]: array, linked list, stack, queue, binary search tree, graph
//! - [`application`]: builds structures from [`config::Settings`] and renders them
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod util;
