//! Console transcript helpers shared by the demo binaries.
//!
//! Output here is for humans only; tests assert on return values instead.

use crate::config::DemoConfig;
use colored::Colorize;
use std::fmt::Display;

/// Applies the colour setting before anything is printed.
pub fn configure(config: &DemoConfig) {
    if !config.color {
        colored::control::set_override(false);
    }
}

pub fn banner(title: &str) {
    let rule = "=".repeat(title.len() + 8);
    println!("{}", rule.bright_blue());
    println!("{}", format!("=== {title} ===").bold());
    println!("{}", rule.bright_blue());
}

pub fn section(title: &str) {
    println!("\n{}", format!("== {title} ==").cyan().bold());
}

pub fn line(text: impl Display) {
    println!("  {text}");
}

pub fn kv(key: &str, value: impl Display) {
    println!("  {}: {value}", key.dimmed());
}

pub fn ok(text: impl Display) {
    println!("  {} {text}", "[ok]".green());
}

pub fn err(text: impl Display) {
    println!("  {} {text}", "[err]".red());
}

/// Prints a rendered result, green for `Ok`, red for `Err`.
pub fn outcome<T: Display, E: Display>(result: &Result<T, E>) {
    match result {
        Ok(value) => ok(value),
        Err(error) => err(error),
    }
}
