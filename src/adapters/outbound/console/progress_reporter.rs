use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Uses indicatif for a bar over the release feed. While the bar is live,
/// messages are printed above it so the two never interleave.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} releases - {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn print(&self, line: String) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.println(line),
            _ => eprintln!("{}", line),
        }
    }

    fn finish(&self) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.finish_and_clear();
        }
    }
}

/// Clears a bar left live by an aborted run so later stderr output starts clean
impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        let prefix = "⚠️  Warning:";
        self.print(format!(
            "{} {}",
            prefix.if_supports_color(Stream::Stderr, |p| p.yellow()),
            message
        ));
    }

    fn report_error(&self, message: &str) {
        self.print(format!(
            "{}",
            message.if_supports_color(Stream::Stderr, |m| m.red())
        ));
    }

    fn report_completion(&self, message: &str) {
        self.finish();
        eprintln!();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |m| m.green())
        );
    }
}
