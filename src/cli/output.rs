//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings, rejected variables
//! - Cyan: keys, paths, hints
//! - Bold: headers
//! - Dimmed: secondary info

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ added DATABASE_URL`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ deployment not found: abc123`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ line 3: 'A' already defined on line 1, skipping duplicate`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "⚠".yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a success message to stderr, for commands whose stdout is data.
pub fn success_stderr(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print a warning to stderr, for commands whose stdout is data.
pub fn warn_stderr(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan) to stderr, below an error.
///
/// Example: `→ run: depvar deployment create <LABEL>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "→".cyan(), msg.cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no variables found`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Print machine-readable output with no decoration.
pub fn data(content: &str) {
    println!("{}", content);
}

/// Format a key name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        k.cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a path in cyan.
pub fn path(p: &std::path::Path) -> String {
    let p = p.display().to_string();
    if colors_enabled() {
        p.cyan().to_string()
    } else {
        p
    }
}

/// Render rows as a table.
pub fn table<T: Tabled>(rows: &[T]) {
    println!("{}", Table::new(rows).with(Style::modern()));
}
