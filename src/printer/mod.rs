//! Status-line printer for user-facing progress output.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub struct StatusPrinter {
    color: bool,
}

impl Default for StatusPrinter {
    fn default() -> Self {
        Self { color: std::io::stdout().is_terminal() }
    }
}

impl StatusPrinter {
    pub fn info(&self, text: &str) {
        if self.color {
            println!("{}", text.cyan());
        } else {
            println!("{}", text);
        }
    }

    pub fn ok(&self, text: &str) {
        if self.color {
            println!("{}", text.green());
        } else {
            println!("{}", text);
        }
    }

    pub fn warn(&self, text: &str) {
        if self.color {
            println!("{}", text.yellow());
        } else {
            println!("{}", text);
        }
    }

    /// Diagnostic lines go to stderr so piped stdout stays usable.
    pub fn error(&self, text: &str) {
        if self.color && std::io::stderr().is_terminal() {
            eprintln!("{}", text.red());
        } else {
            eprintln!("{}", text);
        }
    }

    pub fn plain(&self, text: &str) {
        println!("{}", text);
    }
}
