use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod views;

pub use views::TableView;

/// Knobs for the human-readable rendering.
#[derive(Clone, Copy, Debug)]
pub struct ViewOptions {
    pub table: table::TableOptions,
    /// Result rows shown before the rest are summarized.
    pub max_rows: usize,
    pub show_schema: bool,
}

impl ViewOptions {
    /// Options from the terminal preferences and the display config.
    #[must_use]
    pub fn from_prefs(display: &quest_config::DisplayConfig) -> Self {
        let prefs = ui::prefs();
        Self {
            table: table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            },
            max_rows: display.max_rows,
            show_schema: display.show_schema,
        }
    }
}

/// Render a response to a string in the requested format.
pub fn render<T>(value: &T, format: OutputFormat, options: &ViewOptions) -> anyhow::Result<String>
where
    T: Serialize + TableView + ?Sized,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(value.render_table(options)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T>(value: &T, format: OutputFormat, options: &ViewOptions) -> anyhow::Result<()>
where
    T: Serialize + TableView + ?Sized,
{
    let rendered = render(value, format, options)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use quest_core::Catalog;
    use quest_core::responses::PuzzleSummary;

    use super::*;

    pub(crate) const PLAIN: ViewOptions = ViewOptions {
        table: table::TableOptions {
            max_width: None,
            color: false,
        },
        max_rows: 50,
        show_schema: true,
    };

    fn summaries() -> Vec<PuzzleSummary> {
        let catalog = Catalog::builtin().unwrap();
        catalog
            .iter()
            .enumerate()
            .map(|(index, puzzle)| PuzzleSummary::new(puzzle, index, index == 0))
            .collect()
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&summaries(), OutputFormat::Json, &PLAIN).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[0]["id"], 1);
        assert_eq!(parsed[0]["difficulty"], "easy");
        assert_eq!(parsed[0]["solved"], true);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&summaries(), OutputFormat::Raw, &PLAIN).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed.as_array().map(Vec::len), Some(10));
    }

    #[test]
    fn table_render_lists_every_puzzle() {
        let out = render(&summaries(), OutputFormat::Table, &PLAIN).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with('#'));
        assert!(lines[2].contains("基本のSELECT"));
        assert!(lines[2].contains("初級"));
        assert!(lines[2].ends_with('✓'));
    }
}
