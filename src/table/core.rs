//! The [Table] type and the line-span materialiser
//!
//! [materialize] is the single path from a span of raw text lines to a
//! [Table]. Callers hand it the lines (comment-filtered or not - filtering
//! is never done here), a separator policy, the column specification, and
//! optionally which column becomes the row key.

// standard library
use std::ops::Range;

// internal modules
use crate::error::{ReadError, Result};
use crate::table::value::{ColumnSpec, ColumnType, Value};
use crate::utils::is_dashed_separator;

// external crates
use log::trace;
use serde::Serialize;

/// Field separator policy for a block's data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Any run of whitespace (the common case)
    Whitespace,
    /// Any run of the given character - dotted leader lines split on `'.'`
    Runs(char),
}

/// Everything [materialize] needs to know about a block's layout
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub separator: Separator,
    pub columns: Vec<ColumnSpec>,
    /// Explicit character ranges; overrides `separator` when present
    pub widths: Option<Vec<Range<usize>>>,
    /// Position of the column promoted to row key, if any
    pub index: Option<usize>,
    /// Keep only the first n fields of every row
    pub take: Option<usize>,
}

impl TableSpec {
    pub fn new(separator: Separator, columns: Vec<ColumnSpec>) -> Self {
        Self {
            separator,
            columns,
            widths: None,
            index: None,
            take: None,
        }
    }

    pub fn with_index(mut self, position: usize) -> Self {
        self.index = Some(position);
        self
    }

    pub fn with_take(mut self, fields: usize) -> Self {
        self.take = Some(fields);
        self
    }

    pub fn with_widths(mut self, widths: Vec<Range<usize>>) -> Self {
        self.widths = Some(widths);
        self
    }
}

/// An ordered sequence of rows with named, typed columns
///
/// Created fresh on every materialisation and never mutated in place by the
/// readers, beyond the post-processing steps applied before a table is
/// handed out (separator-row drops, curve realignment).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    index_name: Option<String>,
    columns: Vec<String>,
    index: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Assemble a table directly from prepared parts
    ///
    /// Used by the readers whose blocks are not row-shaped text (continuity
    /// scans, the LSPC variable listing). Row widths must match the column
    /// count, and the key count must match the row count when indexed.
    pub fn from_parts(
        index_name: Option<&str>,
        columns: Vec<String>,
        index: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self> {
        if (index_name.is_some() || !index.is_empty()) && index.len() != rows.len() {
            return Err(ReadError::InvalidConfiguration {
                reason: format!("{} row keys for {} rows", index.len(), rows.len()),
            });
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != columns.len()) {
            return Err(ReadError::InvalidConfiguration {
                reason: format!("row of width {} in a {}-column table", bad.len(), columns.len()),
            });
        }
        Ok(Self {
            index_name: index_name.map(String::from),
            columns,
            index,
            rows,
        })
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// True when no data rows were found
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data column names, excluding the index column
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Name of the designated row-key column, if any
    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    /// Row keys, parallel to the rows; empty for unindexed tables
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Cell by row position and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let position = self.column_position(column)?;
        self.rows.get(row)?.get(position)
    }

    /// First row whose key equals `key`
    pub fn row_by_key(&self, key: &str) -> Option<&[Value]> {
        let position = self.index.iter().position(|k| k == key)?;
        self.rows.get(position).map(Vec::as_slice)
    }

    /// 0-based position of a named column
    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Replace the row keys wholesale
    ///
    /// The element-count block carries prose labels that get swapped for
    /// canonical short names after parsing.
    pub fn set_index_labels(&mut self, labels: Vec<String>) -> Result<()> {
        if labels.len() != self.rows.len() {
            return Err(ReadError::InvalidConfiguration {
                reason: format!(
                    "{} index labels for {} rows",
                    labels.len(),
                    self.rows.len()
                ),
            });
        }
        self.index = labels;
        Ok(())
    }

    /// Rename the column at `position`
    pub fn rename_column(&mut self, position: usize, name: &str) {
        if let Some(column) = self.columns.get_mut(position) {
            *column = name.to_string();
        }
    }

    /// Drop every row whose key contains a run of dashes
    ///
    /// Some summary blocks end with dashed divider rows that parse like
    /// data; this removes them after materialisation.
    pub fn drop_separator_rows(&mut self) {
        if self.index.len() != self.rows.len() {
            return;
        }
        let keep: Vec<bool> = self.index.iter().map(|k| !is_dashed_separator(k)).collect();
        let mut position = 0;
        self.rows.retain(|_| {
            let kept = keep[position];
            position += 1;
            kept
        });
        self.index.retain(|k| !is_dashed_separator(k));
    }

    /// Mutable row access for reader-side post-processing
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<Value>] {
        &mut self.rows
    }
}

/// Parse a span of lines into a [Table]
///
/// Blank lines are skipped. Rows shorter than the column set pad with
/// [Value::Empty]; rows longer than it (after any `take` cap) fail with
/// [ReadError::RowShape]. Column typing follows the spec's hints, with
/// [ColumnType::Auto] columns resolved by whole-column inference.
pub fn materialize<S: AsRef<str>>(lines: &[S], spec: &TableSpec) -> Result<Table> {
    let n_columns = spec.columns.len();

    // split every data line into raw fields
    let mut raw: Vec<Vec<String>> = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = split_fields(line, spec);
        if let Some(cap) = spec.take {
            fields.truncate(cap);
        }
        if fields.len() > n_columns {
            return Err(ReadError::RowShape {
                row: raw.len(),
                found: fields.len(),
                expected: n_columns,
            });
        }
        fields.resize(n_columns, String::new());
        raw.push(fields);
    }
    trace!("{} data rows over {} columns", raw.len(), n_columns);

    // pull the index column out before typing the rest
    let (index_name, index) = match spec.index {
        Some(position) => {
            let name = spec.columns[position].name.clone();
            let keys = raw.iter().map(|row| row[position].clone()).collect();
            for row in &mut raw {
                row.remove(position);
            }
            (Some(name), keys)
        }
        None => (None, Vec::new()),
    };
    let data_columns: Vec<&ColumnSpec> = spec
        .columns
        .iter()
        .enumerate()
        .filter(|(position, _)| Some(*position) != spec.index)
        .map(|(_, column)| column)
        .collect();

    // coerce column by column
    let mut rows: Vec<Vec<Value>> = vec![Vec::with_capacity(data_columns.len()); raw.len()];
    for (position, column) in data_columns.iter().enumerate() {
        let fields: Vec<&str> = raw.iter().map(|row| row[position].as_str()).collect();
        let kind = resolve_kind(column.kind, &fields);
        for (row, field) in fields.iter().enumerate() {
            rows[row].push(coerce(field, kind, &column.name)?);
        }
    }

    Ok(Table {
        index_name,
        columns: data_columns.iter().map(|c| c.name.clone()).collect(),
        index,
        rows,
    })
}

fn split_fields(line: &str, spec: &TableSpec) -> Vec<String> {
    if let Some(widths) = &spec.widths {
        return widths
            .iter()
            .map(|range| {
                line.chars()
                    .skip(range.start)
                    .take(range.end - range.start)
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .collect();
    }

    match spec.separator {
        Separator::Whitespace => line.split_whitespace().map(String::from).collect(),
        Separator::Runs(separator) => line
            .split(separator)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(String::from)
            .collect(),
    }
}

/// Resolve [ColumnType::Auto] against every non-empty field in the column
fn resolve_kind(kind: ColumnType, fields: &[&str]) -> ColumnType {
    if kind != ColumnType::Auto {
        return kind;
    }

    let filled: Vec<&&str> = fields.iter().filter(|f| !f.is_empty()).collect();
    if filled.is_empty() {
        return ColumnType::Text;
    }
    if filled.iter().all(|f| f.parse::<i64>().is_ok()) {
        ColumnType::Int
    } else if filled.iter().all(|f| f.parse::<f64>().is_ok()) {
        ColumnType::Real
    } else {
        ColumnType::Text
    }
}

fn coerce(field: &str, kind: ColumnType, column: &str) -> Result<Value> {
    if field.is_empty() {
        return Ok(Value::Empty);
    }
    match kind {
        ColumnType::Auto | ColumnType::Text => Ok(Value::Text(field.to_string())),
        ColumnType::Int => field
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| value_error(column, field, "an integer")),
        ColumnType::Real => field
            .parse::<f64>()
            .map(Value::Real)
            .map_err(|_| value_error(column, field, "a number")),
    }
}

fn value_error(column: &str, field: &str, expected: &'static str) -> ReadError {
    ReadError::Value {
        column: column.to_string(),
        value: field.to_string(),
        expected,
    }
}
