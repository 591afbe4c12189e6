use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Console reporting for the CLI layer.
///
/// Errors and warnings always print and go to stderr so they survive
/// shell redirection of generator output; informational lines go to
/// stdout; verbose lines only appear when enabled.
#[derive(Debug, Clone)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    pub fn warning(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("💬 {}", message);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Spinner shown while a generator runs. In verbose mode the spinner is
/// replaced by plain log lines so command output stays readable.
#[derive(Clone)]
pub struct ProgressReporter {
    logger: Logger,
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(logger: Logger) -> Self {
        let progress_bar = if !logger.is_verbose() {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .unwrap()
                    .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        Self {
            logger,
            progress_bar,
        }
    }

    pub fn start(&mut self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        } else {
            self.logger.info(&format!("🚀 {}", message));
        }
    }

    pub fn complete(&mut self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
        self.logger.info(&format!("✅ {}", message));
    }

    pub fn fail(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_is_exposed() {
        assert!(Logger::new(true).is_verbose());
        assert!(!Logger::new(false).is_verbose());
    }

    #[test]
    fn test_verbose_reporter_skips_the_spinner() {
        let reporter = ProgressReporter::new(Logger::new(true));
        assert!(reporter.progress_bar.is_none());
    }
}
