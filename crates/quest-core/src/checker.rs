//! Answer checking.
//!
//! A submission is correct when it returns the same number of rows as the
//! expected result and every expected row is matched by some actual row:
//!
//! - only the columns named in the expected row are compared; extra actual
//!   columns are ignored
//! - numeric pairs match within an absolute [`TOLERANCE`]
//! - every other pair must be exactly equal, tag included (`5` ≠ `"5"`)
//!
//! Matching is existence-based, not a bijection: one actual row may satisfy
//! several expected rows. Row order never matters.

use crate::row::Row;
use crate::value::Cell;

/// Absolute difference below which two numeric cells are considered equal.
pub const TOLERANCE: f64 = 0.01;

/// Why a submission was judged incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The result has a different number of rows than expected.
    RowCount { expected: usize, actual: usize },
    /// The expected row at `index` has no matching actual row.
    UnmatchedRow { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect(Mismatch),
}

impl Verdict {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Judge `actual` against `expected`, reporting the first reason for failure.
#[must_use]
pub fn check(actual: &[Row], expected: &[Row]) -> Verdict {
    if actual.len() != expected.len() {
        return Verdict::Incorrect(Mismatch::RowCount {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    match expected
        .iter()
        .position(|want| !actual.iter().any(|got| row_matches(want, got)))
    {
        Some(index) => Verdict::Incorrect(Mismatch::UnmatchedRow { index }),
        None => Verdict::Correct,
    }
}

#[must_use]
pub fn is_correct(actual: &[Row], expected: &[Row]) -> bool {
    check(actual, expected).is_correct()
}

/// Every column of `expected` must be present in `actual` with a matching value.
#[must_use]
pub fn row_matches(expected: &Row, actual: &Row) -> bool {
    expected.iter().all(|(column, want)| {
        actual
            .get(column)
            .is_some_and(|got| cells_match(want, got))
    })
}

#[must_use]
pub fn cells_match(expected: &Cell, actual: &Cell) -> bool {
    match (expected.as_number(), actual.as_number()) {
        (Some(want), Some(got)) => (want - got).abs() < TOLERANCE,
        _ => expected == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn names(values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .map(|name| Row::new().with("name", *name))
            .collect()
    }

    #[test]
    fn row_count_mismatch_fails_before_matching() {
        let expected = names(&["アリア", "ルーク", "マックス"]);
        let actual = names(&["ルーク", "マックス"]);
        assert_eq!(
            check(&actual, &expected),
            Verdict::Incorrect(Mismatch::RowCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn extra_rows_fail_even_when_every_expected_row_matches() {
        let expected = names(&["アリア"]);
        let actual = names(&["アリア", "アリア"]);
        assert!(!is_correct(&actual, &expected));
    }

    #[test]
    fn identical_sets_are_correct() {
        let expected = names(&["アリア", "ルーク", "マックス"]);
        assert!(is_correct(&expected, &expected));
    }

    #[test]
    fn row_order_is_irrelevant() {
        let expected = names(&["アリア", "ルーク", "マックス"]);
        let reversed = names(&["マックス", "ルーク", "アリア"]);
        let rotated = names(&["ルーク", "マックス", "アリア"]);
        assert!(is_correct(&reversed, &expected));
        assert!(is_correct(&rotated, &expected));
    }

    #[test]
    fn empty_expected_accepts_only_empty_actual() {
        assert!(is_correct(&[], &[]));
        assert!(!is_correct(&names(&["アリア"]), &[]));
    }

    #[test]
    fn first_unmatched_row_is_reported() {
        let expected = names(&["アリア", "ルーク"]);
        let actual = names(&["アリア", "エリン"]);
        assert_eq!(
            check(&actual, &expected),
            Verdict::Incorrect(Mismatch::UnmatchedRow { index: 1 })
        );
    }

    #[rstest]
    #[case(5.5, 5.509_999, true)]
    #[case(5.5, 5.490_001, true)]
    #[case(5.5, 5.50000001, true)]
    #[case(0.0, 0.01, false)]
    #[case(5.0, 5.02, false)]
    #[case(10.0, 9.5, false)]
    fn numeric_tolerance_boundary(#[case] want: f64, #[case] got: f64, #[case] matches: bool) {
        assert_eq!(cells_match(&Cell::Real(want), &Cell::Real(got)), matches);
    }

    #[test]
    fn integer_and_real_compare_numerically() {
        assert!(cells_match(&Cell::Integer(10), &Cell::Real(10.0)));
        assert!(cells_match(&Cell::Real(3.0), &Cell::Integer(3)));
        assert!(!cells_match(&Cell::Integer(3), &Cell::Integer(4)));
    }

    #[rstest]
    #[case(Cell::Integer(5), Cell::Text("5".into()))]
    #[case(Cell::Text("5".into()), Cell::Real(5.0))]
    #[case(Cell::Null, Cell::Integer(0))]
    #[case(Cell::Null, Cell::Text(String::new()))]
    #[case(Cell::Text("戦士".into()), Cell::Text("僧侶".into()))]
    fn mixed_tags_never_match(#[case] want: Cell, #[case] got: Cell) {
        assert!(!cells_match(&want, &got));
    }

    #[test]
    fn exact_equality_for_non_numeric() {
        assert!(cells_match(&Cell::Null, &Cell::Null));
        assert!(cells_match(
            &Cell::Text("魔法使い".into()),
            &Cell::Text("魔法使い".into())
        ));
    }

    #[test]
    fn extra_actual_columns_are_ignored() {
        let expected = vec![Row::new().with("class", "戦士").with("avg_level", 5.5)];
        let actual = vec![
            Row::new()
                .with("class", "戦士")
                .with("avg_level", 5.500_000_01)
                .with("extra_col", "x"),
        ];
        assert!(is_correct(&actual, &expected));
    }

    #[test]
    fn missing_expected_column_fails() {
        let expected = vec![Row::new().with("name", "ルーク").with("cleared_count", 3)];
        let actual = vec![Row::new().with("name", "ルーク").with("count", 3)];
        assert!(!is_correct(&actual, &expected));
    }

    #[test]
    fn one_actual_row_may_satisfy_several_expected_rows() {
        let expected = names(&["アリア", "アリア"]);
        let actual = vec![
            Row::new().with("name", "アリア"),
            Row::new().with("name", "ルーク"),
        ];
        assert!(is_correct(&actual, &expected));
    }
}
