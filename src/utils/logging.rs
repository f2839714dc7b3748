// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored result formatting

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

pub fn format_found(keyword: &str, pages: &[i64]) -> String {
    let pages = pages
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} {} {}",
        "✓".green().bold(),
        keyword.green().bold(),
        format!("(pages: {})", pages).dimmed()
    )
}

pub fn format_missing(keyword: &str) -> String {
    format!("{} {} {}", "✗".red().bold(), keyword.red(), "(not found)".dimmed())
}

/// Sentence line; unrelated sentences are dimmed.
pub fn format_sentence(text: &str, is_related: Option<bool>) -> String {
    match is_related {
        Some(false) => format!("    {} {}", "·".dimmed(), text.dimmed()),
        _ => format!("    {} {}", "•".cyan(), text),
    }
}
