//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::application::Section;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print banner line (bold)
pub fn banner(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().bold());
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data lines)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print a section as `--- N. TITLE ---` (or `--- TITLE ---`) followed by its lines
pub fn section(number: Option<usize>, section: &Section) {
    match number {
        Some(n) => header(&format!("--- {}. {} ---", n, section.title)),
        None => header(&format!("--- {} ---", section.title)),
    }
    for line in &section.lines {
        info(line);
    }
}
