//! CLI output formatting.
//!
//! Each kind of output has a `format_*` function (returns lines, pure, no I/O)
//! for testability and a `print_*` wrapper that writes to stdout.
//!
//! # Output Format
//!
//! ## Diagnostics
//!
//! One line per render, space separated. `render` writes them to stderr so
//! its stdout stays valid JSON; every other command uses stdout:
//!
//! ```text
//! about-page 2026-10-18T09:30:00.123Z About page rendered: venue story and mission
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 About → about.html (3 nodes)
//!     Home → index.html
//! 002 FAQs → faqs.html (10 nodes)
//! 003 Gallery → gallery.html (14 nodes)
//! 004 Hall Details → hall-details.html (9 nodes)
//!
//! Generated 4 pages
//! ```
//!
//! ## Tokens
//!
//! ```text
//! color
//!     background  #FAF8F5
//!     primary     #2D5A4A
//! font
//!     body        'Inter', system-ui, sans-serif
//! ```

use crate::diagnostics::DiagnosticEvent;
use crate::generate::GeneratedPage;
use crate::tokens::{DesignTokens, TokenCategory};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Diagnostics
// ============================================================================

pub fn format_diagnostic_line(event: &DiagnosticEvent) -> String {
    format!("{} {} {}", event.source_id, event.timestamp, event.message)
}

pub fn print_diagnostic(event: &DiagnosticEvent) {
    println!("{}", format_diagnostic_line(event));
}

pub fn eprint_diagnostic(event: &DiagnosticEvent) {
    eprintln!("{}", format_diagnostic_line(event));
}

// ============================================================================
// Build
// ============================================================================

/// Format the summary of a site build.
pub fn format_generate_output(pages: &[GeneratedPage]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in pages.iter().enumerate() {
        lines.push(format!(
            "{} {} → {} ({} nodes)",
            format_index(i + 1),
            page.page.nav_label(),
            page.path,
            page.node_count
        ));
        for alias in &page.aliases {
            lines.push(format!("{}Home → {}", indent(1), alias));
        }
    }

    lines.push(String::new());
    let noun = if pages.len() == 1 { "page" } else { "pages" };
    lines.push(format!("Generated {} {}", pages.len(), noun));
    lines
}

pub fn print_generate_output(pages: &[GeneratedPage]) {
    for line in format_generate_output(pages) {
        println!("{}", line);
    }
}

// ============================================================================
// Tokens
// ============================================================================

/// Format every token, grouped by category with names aligned.
pub fn format_token_list(tokens: &DesignTokens) -> Vec<String> {
    let width = tokens.iter().map(|t| t.name.len()).max().unwrap_or(0);
    let mut lines = Vec::new();
    let mut current: Option<TokenCategory> = None;

    for token in tokens.iter() {
        if current != Some(token.category) {
            lines.push(token.category.to_string());
            current = Some(token.category);
        }
        lines.push(format!(
            "{}{:<width$}  {}",
            indent(1),
            token.name,
            token.value,
            width = width
        ));
    }
    lines
}

pub fn print_token_list(tokens: &DesignTokens) {
    for line in format_token_list(tokens) {
        println!("{}", line);
    }
}
