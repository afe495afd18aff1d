use std::fmt::Display;
use std::path::Path;

use console::style;

/// Operator-facing output. Passed by reference through every stage of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    debug: bool,
}

impl Console {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Print a diagnostic line on stderr, only in debug mode.
    pub fn debug(&self, message: impl Display) {
        if self.debug {
            eprintln!("{} {}", style("DEBUG").dim(), message);
        }
    }

    /// Print a multi-line block (command output, manifest bodies) in debug mode.
    pub fn debug_block(&self, block: &str) {
        if self.debug && !block.trim().is_empty() {
            for line in block.lines() {
                eprintln!("{}   {}", style("DEBUG").dim(), style(line).dim());
            }
        }
    }

    pub fn warn(&self, message: impl Display) {
        eprintln!(
            "{} {}",
            style("warning:").yellow().bold(),
            style(message).yellow()
        );
    }

    pub fn generating(&self, path: &Path) {
        println!("Generating {}", style(path.display()).cyan());
    }

    pub fn success(&self, message: impl Display) {
        println!("\n{} {}", style("✓").green().bold(), message);
    }
}
