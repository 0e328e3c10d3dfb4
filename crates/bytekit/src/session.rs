//! Interactive line checking.
//!
//! A [`CheckSession`] prompts for lines, checks each against its rules, and
//! reports every violation on one line. It stops at the quit command or at
//! end of input.

use std::io::{BufRead, Write};

use crate::config::ToolkitConfig;
use crate::error::Result;

/// Printed when a line passes every rule.
pub const PASSED_MESSAGE: &str = "The string passed the check";

/// Counts from a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Lines that passed every rule.
    pub passed: usize,
    /// Lines that broke at least one rule.
    pub failed: usize,
}

impl SessionSummary {
    /// Total lines checked.
    pub fn checked(&self) -> usize {
        self.passed + self.failed
    }
}

/// A prompt-and-check loop over any line input and text output.
#[derive(Debug, Clone, Default)]
pub struct CheckSession {
    config: ToolkitConfig,
}

impl CheckSession {
    /// Create a session with the given configuration.
    pub fn new(config: ToolkitConfig) -> Self {
        Self { config }
    }

    /// The session configuration.
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Run until the quit command or end of input.
    pub fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<SessionSummary>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let mut summary = SessionSummary::default();
        let mut line = Vec::new();

        loop {
            output.write_all(self.config.prompt.as_bytes())?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                tracing::debug!("session input closed");
                break;
            }

            // Undecodable bytes are checked as U+FFFD rather than ending the session.
            let decoded = String::from_utf8_lossy(&line);
            let text = decoded.strip_suffix('\n').unwrap_or(&*decoded);
            let text = text.strip_suffix('\r').unwrap_or(text);
            if text == self.config.quit_command {
                break;
            }

            match self.config.rules.check(text) {
                Ok(()) => {
                    summary.passed += 1;
                    writeln!(output, "{PASSED_MESSAGE}")?;
                }
                Err(failures) => {
                    summary.failed += 1;
                    writeln!(output, "{failures}")?;
                }
            }
        }

        tracing::debug!(
            passed = summary.passed,
            failed = summary.failed,
            "check session finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytekit_check::LineRules;

    fn run(config: ToolkitConfig, input: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary = CheckSession::new(config)
            .run(&mut input.as_bytes(), &mut out)
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_reports_each_line_until_quit() {
        let (summary, out) = run(ToolkitConfig::default(), "a b c\nabc123\nq\nignored\n");
        let prompt = "Enter string (to quit press q): ";
        assert_eq!(
            out,
            format!(
                "{prompt}The string passed the check\n{prompt}found numbers;no 2 spaces\n{prompt}"
            )
        );
        assert_eq!(summary, SessionSummary { passed: 1, failed: 1 });
    }

    #[test]
    fn test_end_of_input_without_quit() {
        let (summary, _) = run(ToolkitConfig::default(), "x y z");
        assert_eq!(summary.checked(), 1);
        assert_eq!(summary.passed, 1);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let mut out = Vec::new();
        let summary = CheckSession::default()
            .run(&mut &b"a b c\n\xff\xfe x y\nhello\nq\n"[..], &mut out)
            .unwrap();

        assert_eq!(summary, SessionSummary { passed: 2, failed: 1 });
        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with("no 2 spaces\nEnter string (to quit press q): "));
    }

    #[test]
    fn test_crlf_lines() {
        let (summary, out) = run(ToolkitConfig::default(), "one two three\r\nq\r\n");
        assert_eq!(summary.passed, 1);
        assert!(out.contains(PASSED_MESSAGE));
    }

    #[test]
    fn test_custom_config() {
        let config = ToolkitConfig {
            rules: LineRules {
                min_spaces: 0,
                ..LineRules::default()
            },
            quit_command: "exit".to_string(),
            prompt: "> ".to_string(),
            ..ToolkitConfig::default()
        };
        let (summary, out) = run(config, "q\nexit\n");
        assert_eq!(out, "> The string passed the check\n> ");
        assert_eq!(summary.passed, 1);
    }
}
