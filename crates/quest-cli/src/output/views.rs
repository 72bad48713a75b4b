//! Human-readable renderings of the response types.

use std::fmt::Write;

use quest_core::enums::Outcome;
use quest_core::responses::{ProgressResponse, PuzzleSummary, PuzzleView, SubmissionResponse};
use quest_core::{Cell, Row, TableSchema};

use super::ViewOptions;
use super::table::{TableOptions, badge_color, paint, render_table};

const BAR_WIDTH: usize = 20;

/// Table-format rendering for a response.
pub trait TableView {
    fn render_table(&self, options: &ViewOptions) -> String;
}

impl TableView for [PuzzleSummary] {
    fn render_table(&self, options: &ViewOptions) -> String {
        let rows = self
            .iter()
            .map(|summary| {
                vec![
                    summary.position.to_string(),
                    summary.id.to_string(),
                    summary.title.clone(),
                    summary.difficulty.label().to_string(),
                    if summary.solved { "✓" } else { "" }.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        render_table(&["#", "id", "title", "difficulty", "solved"], &rows, options.table)
    }
}

impl TableView for Vec<PuzzleSummary> {
    fn render_table(&self, options: &ViewOptions) -> String {
        self.as_slice().render_table(options)
    }
}

impl TableView for PuzzleView {
    fn render_table(&self, options: &ViewOptions) -> String {
        let mut out = String::new();
        let tier = badge(self.difficulty.label(), options.table);
        let _ = write!(out, "#{} {}  {tier}", self.id, self.title);
        if self.solved {
            let _ = write!(out, "  {}", badge("✓", options.table));
        }
        let _ = writeln!(out, "  ({}/{})", self.position, self.total);
        let _ = writeln!(out, "{}", self.description);

        if options.show_schema {
            out.push('\n');
            out.push_str(&render_schema(&self.tables, options.table));
            out.push('\n');
        }

        let _ = write!(out, "\n🎯 お題\n{}", self.question);
        if let Some(hint) = &self.hint {
            let _ = write!(out, "\n\n💡 ヒント\n{hint}");
        }
        if let Some(explanation) = &self.explanation {
            let _ = write!(out, "\n\n📖 解説\n{explanation}");
        }
        out
    }
}

impl TableView for SubmissionResponse {
    fn render_table(&self, options: &ViewOptions) -> String {
        if self.outcome == Outcome::ExecutionError {
            let message = self.error.as_deref().unwrap_or_default();
            return format!("❌ エラー\n{message}");
        }

        let mut out = String::from("📋 実行結果\n");
        out.push_str(&render_rows(
            self.rows.as_deref().unwrap_or_default(),
            options.max_rows,
            options.table,
        ));
        out.push_str("\n\n");
        if self.is_correct() {
            out.push_str(&badge("🎉 正解！ 宝箱を開けることができました！", options.table));
        } else {
            out.push_str("まだ宝箱は開かない…");
            if self.solved {
                out.push_str(" (クリア済み)");
            }
        }
        out
    }
}

impl TableView for ProgressResponse {
    fn render_table(&self, _options: &ViewOptions) -> String {
        format!(
            "クリア {} / {}  試行回数 {}  ヒント使用 {}\n{} {:.0}%",
            self.solved,
            self.total,
            self.attempts,
            self.hints,
            progress_bar(self.percent),
            self.percent
        )
    }
}

/// Schema tables for display: one block per table, columns in order.
#[must_use]
pub fn render_schema(tables: &[TableSchema], options: TableOptions) -> String {
    let mut out = String::from("📊 テーブル構造");
    for schema in tables {
        let rows = schema
            .columns
            .iter()
            .map(|column| vec![column.name.clone(), column.sql_type.clone()])
            .collect::<Vec<_>>();
        let _ = write!(
            out,
            "\n\n{}\n{}",
            schema.name,
            render_table(&["カラム名", "型"], &rows, options)
        );
    }
    out
}

/// Result rows as a table, in the column order the query produced.
///
/// Only the first `max_rows` rows are drawn. Result values are never
/// colored, whatever `options.color` says.
#[must_use]
pub fn render_rows(rows: &[Row], max_rows: usize, options: TableOptions) -> String {
    if rows.is_empty() {
        return String::from("結果が空です");
    }

    let mut headers = Vec::<&str>::new();
    for row in rows {
        for column in row.columns() {
            if !headers.contains(&column) {
                headers.push(column);
            }
        }
    }

    let cells = rows
        .iter()
        .take(max_rows)
        .map(|row| {
            headers
                .iter()
                .map(|header| row.get(header).map_or_else(String::new, Cell::to_string))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut out = render_table(
        &headers,
        &cells,
        TableOptions {
            color: false,
            ..options
        },
    );
    if rows.len() > max_rows {
        let _ = write!(out, "\n… {} more rows", rows.len() - max_rows);
    }
    let _ = write!(out, "\n({} rows)", rows.len());
    out
}

fn badge(text: &str, options: TableOptions) -> String {
    let code = if text.starts_with('🎉') {
        Some("32")
    } else {
        badge_color(text)
    };
    match code {
        Some(code) if options.color => paint(text, code),
        _ => text.to_string(),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quest_core::Catalog;

    use super::*;
    use crate::output::tests::PLAIN;

    fn view(show_hint: bool, show_explanation: bool) -> PuzzleView {
        let catalog = Catalog::builtin().unwrap();
        PuzzleView::new(
            catalog.get(0).unwrap(),
            0,
            catalog.len(),
            show_hint,
            show_explanation,
            false,
        )
    }

    #[test]
    fn puzzle_view_shows_schema_and_question() {
        let out = view(false, false).render_table(&PLAIN);
        assert!(out.starts_with("#1 基本のSELECT  初級  (1/10)"), "{out}");
        assert!(out.contains("adventurers"));
        assert!(out.contains("level     INTEGER"), "{out}");
        assert!(out.contains("レベルが5以上の冒険者の名前を取得せよ"));
        assert!(!out.contains("ヒント"));
        assert!(!out.contains("解説"));
    }

    #[test]
    fn puzzle_view_reveals_when_asked() {
        let out = view(true, true).render_table(&PLAIN);
        assert!(out.contains("💡 ヒント\nWHERE句"));
        assert!(out.contains("📖 解説\nSELECT name FROM adventurers WHERE level >= 5"));
    }

    #[test]
    fn schema_can_be_hidden() {
        let options = ViewOptions {
            show_schema: false,
            ..PLAIN
        };
        let out = view(false, false).render_table(&options);
        assert!(!out.contains("テーブル構造"));
    }

    #[test]
    fn rows_keep_query_column_order() {
        let rows = vec![
            Row::new().with("name", "アリア").with("level", 5),
            Row::new().with("name", "ルーク").with("level", 8),
        ];
        let out = render_rows(&rows, 50, PLAIN.table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "name    level");
        assert_eq!(lines[2], "アリア      5");
        assert_eq!(lines.last(), Some(&"(2 rows)"));
    }

    #[test]
    fn rows_beyond_limit_are_summarized() {
        let rows: Vec<Row> = (0..5).map(|i| Row::new().with("n", i)).collect();
        let out = render_rows(&rows, 2, PLAIN.table);
        assert!(out.contains("… 3 more rows"));
        assert!(!out.lines().any(|line| line.trim() == "4"));
    }

    #[test]
    fn empty_and_null_results() {
        assert_eq!(render_rows(&[], 50, PLAIN.table), "結果が空です");
        let out = render_rows(&[Row::new().with("x", Cell::Null)], 50, PLAIN.table);
        assert!(out.contains("NULL"));
    }

    #[test]
    fn submission_outcomes() {
        let failed = SubmissionResponse {
            puzzle_id: 1,
            outcome: Outcome::ExecutionError,
            rows: None,
            error: Some("no such table: adventurer".into()),
            solved: false,
        };
        assert_eq!(failed.render_table(&PLAIN), "❌ エラー\nno such table: adventurer");

        let solved = SubmissionResponse {
            puzzle_id: 1,
            outcome: Outcome::Correct,
            rows: Some(vec![Row::new().with("name", "アリア")]),
            error: None,
            solved: true,
        };
        let out = solved.render_table(&PLAIN);
        assert!(out.starts_with("📋 実行結果\nname"));
        assert!(out.ends_with("🎉 正解！ 宝箱を開けることができました！"));

        let missed_again = SubmissionResponse {
            outcome: Outcome::Incorrect,
            ..solved
        };
        assert!(missed_again.render_table(&PLAIN).ends_with("まだ宝箱は開かない… (クリア済み)"));
    }

    #[test]
    fn progress_line_and_bar() {
        let out = ProgressResponse::new(3, 10, 4, 1, 2).render_table(&PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "クリア 3 / 10  試行回数 4  ヒント使用 1");
        assert_eq!(lines[1], format!("[{}{}] 30%", "█".repeat(6), "░".repeat(14)));
    }
}
