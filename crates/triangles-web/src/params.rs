//! Query-string binding.
//!
//! Parameters are read by hand rather than through a typed extractor so that
//! a missing or malformed number is reported the same way as an out-of-range
//! one: as a field-keyed validation entry.

use std::collections::HashMap;
use triangles_grid::{CoordinatesQuery, Validate, ValidationOutcome, VerticesQuery};

pub(crate) type RawParams = HashMap<String, String>;

/// Query parameter name and the field it is reported under.
const VERTEX_PARAMS: [(&str, &str); 6] = [
    ("x1", "X1"),
    ("y1", "Y1"),
    ("x2", "X2"),
    ("y2", "Y2"),
    ("x3", "X3"),
    ("y3", "Y3"),
];

struct ParamReader<'a> {
    params: &'a RawParams,
    outcome: ValidationOutcome,
}

impl<'a> ParamReader<'a> {
    fn new(params: &'a RawParams) -> Self {
        Self {
            params,
            outcome: ValidationOutcome::new(),
        }
    }

    /// Case-insensitive lookup; blank values count as absent.
    fn text(&self, name: &str) -> Option<&'a str> {
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Read an integer, recording a failure and yielding 0 if it is unusable.
    fn int(&mut self, name: &str, field: &str) -> i32 {
        match self.text(name) {
            None => {
                self.outcome.error(field, format!("Please Specify {field}"));
                0
            }
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                self.outcome
                    .error(field, format!("{field} Must Be A Whole Number"));
                0
            }),
        }
    }

    /// Hand back the query, or every binding and rule failure together.
    fn finish<Q: Validate>(self, query: Q) -> Result<Q, ValidationOutcome> {
        if self.outcome.is_empty() {
            return Ok(query);
        }

        let mut outcome = self.outcome;
        let rule_failures: Vec<_> = query
            .validate()
            .into_iter()
            .filter(|f| !outcome.has_field(&f.field))
            .collect();
        outcome.extend(rule_failures);
        Err(outcome)
    }
}

/// Bind `row` and `column`.
pub(crate) fn coordinates_query(params: &RawParams) -> Result<CoordinatesQuery, ValidationOutcome> {
    let mut reader = ParamReader::new(params);
    let row = reader.text("row");
    let column = reader.int("column", "Column");
    reader.finish(CoordinatesQuery::parse(row, column))
}

/// Bind `x1`, `y1`, `x2`, `y2`, `x3`, `y3`.
pub(crate) fn vertices_query(params: &RawParams) -> Result<VerticesQuery, ValidationOutcome> {
    let mut reader = ParamReader::new(params);
    let [x1, y1, x2, y2, x3, y3] = VERTEX_PARAMS.map(|(name, field)| reader.int(name, field));
    reader.finish(VerticesQuery::new(x1, y1, x2, y2, x3, y3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangles_grid::{RequestedRow, Row};

    fn params(pairs: &[(&str, &str)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn fields(outcome: &ValidationOutcome) -> Vec<&str> {
        outcome.failures().iter().map(|f| f.field.as_str()).collect()
    }

    #[test]
    fn binds_coordinates_case_insensitively() {
        let query = coordinates_query(&params(&[("Row", "c"), ("COLUMN", " 4 ")])).unwrap();
        assert_eq!(query.row, RequestedRow::Known(Row::C));
        assert_eq!(query.column, 4);
    }

    #[test]
    fn missing_row_is_left_to_validation() {
        let query = coordinates_query(&params(&[("column", "4")])).unwrap();
        assert_eq!(query.row, RequestedRow::Unset);
    }

    #[test]
    fn bad_column_reported_with_row_rule() {
        let outcome = coordinates_query(&params(&[("column", "four")])).unwrap_err();
        assert_eq!(fields(&outcome), vec!["Column", "Row"]);
        assert_eq!(outcome.failures()[0].message, "Column Must Be A Whole Number");
    }

    #[test]
    fn binds_vertices() {
        let query = vertices_query(&params(&[
            ("x1", "10"),
            ("y1", "10"),
            ("x2", "20"),
            ("y2", "10"),
            ("x3", "20"),
            ("y3", "20"),
        ]))
        .unwrap();
        assert_eq!(query, VerticesQuery::new(10, 10, 20, 10, 20, 20));
    }

    #[test]
    fn vertex_binding_and_range_failures_merge() {
        let outcome = vertices_query(&params(&[
            ("x1", "10"),
            ("y1", "70"),
            ("x2", "abc"),
            ("y2", "10"),
            ("x3", "20"),
        ]))
        .unwrap_err();

        assert_eq!(fields(&outcome), vec!["X2", "Y3", "Y1"]);
        assert_eq!(outcome.failures()[1].message, "Please Specify Y3");
    }
}
