//! Terminal notifications.

use accrue_api::Notifier;
use colored::Colorize;

/// Prints action notifications to stderr, keeping stdout for results.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn loading(&self, _key: &str, message: &str) {
        eprintln!("{}", message.dimmed());
    }

    fn dismiss(&self, _key: &str) {}

    fn success(&self, message: &str) {
        eprintln!("{}", message.green().bold());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.red().bold());
    }
}
