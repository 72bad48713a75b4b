//! Line handling for `sqlquest play`.
//!
//! SQL accumulates across lines until a line ends with `;` or a blank line
//! is entered. Lines starting with `:` on an empty buffer are meta-commands.

mod command;

pub use command::{HELP, MetaCommand};

/// What one line of input amounts to.
#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    MetaCommand(MetaCommand),
    /// A complete query, ready to submit.
    Query(String),
    /// More lines are needed.
    Incomplete,
    Empty,
}

/// Pending multi-line query text.
#[derive(Debug, Default)]
pub struct InputBuffer {
    buffer: String,
}

impl InputBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn process_line(&mut self, line: &str) -> InputResult {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return self
                .force_submit()
                .map_or(InputResult::Empty, InputResult::Query);
        }

        if trimmed.starts_with(':') && self.buffer.is_empty() {
            return InputResult::MetaCommand(MetaCommand::parse(trimmed));
        }

        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line.trim_end());

        if trimmed.ends_with(';') {
            return self
                .force_submit()
                .map_or(InputResult::Empty, InputResult::Query);
        }
        InputResult::Incomplete
    }

    /// Take whatever has been typed so far, if anything.
    pub fn force_submit(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.buffer);
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}
