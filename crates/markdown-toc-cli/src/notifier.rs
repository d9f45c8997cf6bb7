use crossterm::style::Stylize;
use markdown_toc_engine::Notifier;

/// Prints notifications to stderr so `--stdout` output stays clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn info(&self, message: &str) {
        log::debug!("info: {message}");
        eprintln!("{message}");
    }

    fn warning(&self, message: &str) {
        log::debug!("warning: {message}");
        eprintln!("{}", message.yellow());
    }
}
