//! CLI output formatting utilities.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a search result.
    pub fn search_result(rank: usize, timestamp: &str, distance: f32, content: &str) {
        println!(
            "\n{} {} @ {} (distance: {:.4})",
            style(">>").green(),
            style(format!("#{}", rank)).bold(),
            style(timestamp).cyan(),
            distance
        );
        println!("   {}", content_preview(content, 200));
    }

    /// Print a chunk with its time range.
    pub fn chunk(order: usize, start: &str, end: &str, content: &str) {
        println!(
            "  {} [{} - {}] {}",
            style(format!("{:>3}", order)).dim(),
            style(start).cyan(),
            style(end).cyan(),
            content_preview(content, 120)
        );
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Truncate content with ellipsis.
fn content_preview(content: &str, max_len: usize) -> String {
    let content = content.replace('\n', " ");
    if content.len() <= max_len {
        content
    } else {
        let mut cut = max_len;
        while !content.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &content[..cut])
    }
}
