//! Terminal capabilities and the display rules derived from them.
//!
//! Sampled once at startup; rendering and the spinner read the result
//! through [`prefs`].

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower terminals get unconstrained tables rather than unreadable ones.
const MIN_TABLE_WIDTH: usize = 40;

/// What the surrounding terminal supports.
#[derive(Clone, Debug, Default)]
pub struct Terminal {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    /// `NO_COLOR` is set.
    pub no_color: bool,
    /// `COLUMNS`, when it parses.
    pub columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdin_tty: std::io::stdin().is_terminal(),
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.trim().parse().ok()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Difficulty badges and the success banner are colored.
    pub table_color: bool,
    /// The engine-loading spinner is drawn. It writes to stderr.
    pub progress: bool,
    pub term_width: Option<usize>,
    /// A learner is typing at the play prompt: greet them and print
    /// follow-up tips. Off when SQL is piped in or output is captured.
    pub interactive: bool,
}

impl UiPrefs {
    #[must_use]
    pub fn resolve(flags: &GlobalFlags, term: &Terminal) -> Self {
        let text = flags.format == OutputFormat::Table;
        Self {
            table_color: text && term.stdout_tty && !term.no_color,
            progress: text && term.stderr_tty && !flags.quiet,
            term_width: term.columns.filter(|width| *width >= MIN_TABLE_WIDTH),
            interactive: text && term.stdin_tty && term.stdout_tty && !flags.quiet,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs::resolve(flags, &Terminal::detect());
    tracing::trace!(?prefs, "terminal preferences");
    let _ = UI_PREFS.set(prefs);
}

/// Preferences from [`init`], or everything off before it runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            catalog: None,
        }
    }

    fn console() -> Terminal {
        Terminal {
            stdin_tty: true,
            stdout_tty: true,
            stderr_tty: true,
            no_color: false,
            columns: Some(100),
        }
    }

    #[test]
    fn console_gets_everything() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, false), &console());
        assert_eq!(
            prefs,
            UiPrefs {
                table_color: true,
                progress: true,
                term_width: Some(100),
                interactive: true,
            }
        );
    }

    #[rstest]
    #[case(OutputFormat::Json)]
    #[case(OutputFormat::Raw)]
    fn machine_formats_are_plain(#[case] format: OutputFormat) {
        let prefs = UiPrefs::resolve(&flags(format, false), &console());
        assert!(!prefs.table_color);
        assert!(!prefs.progress);
        assert!(!prefs.interactive);
    }

    #[test]
    fn piped_sql_is_not_interactive() {
        let term = Terminal {
            stdin_tty: false,
            ..console()
        };
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, false), &term);
        assert!(!prefs.interactive);
        assert!(prefs.table_color);
    }

    #[test]
    fn captured_stdout_drops_color_but_keeps_spinner() {
        let term = Terminal {
            stdout_tty: false,
            ..console()
        };
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, false), &term);
        assert!(!prefs.table_color);
        assert!(!prefs.interactive);
        assert!(prefs.progress);
    }

    #[test]
    fn quiet_silences_spinner_and_greeting() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, true), &console());
        assert!(!prefs.progress);
        assert!(!prefs.interactive);
        assert!(prefs.table_color);
    }

    #[test]
    fn no_color_wins() {
        let term = Terminal {
            no_color: true,
            ..console()
        };
        assert!(!UiPrefs::resolve(&flags(OutputFormat::Table, false), &term).table_color);
    }

    #[rstest]
    #[case(Some(39), None)]
    #[case(Some(40), Some(40))]
    #[case(None, None)]
    fn narrow_terminals_are_ignored(#[case] columns: Option<usize>, #[case] expected: Option<usize>) {
        let term = Terminal {
            columns,
            ..console()
        };
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, false), &term);
        assert_eq!(prefs.term_width, expected);
    }
}
