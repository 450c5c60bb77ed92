// src/table.rs
use std::path::Path;

use crate::errors::ScrapeError;

/// Column-named table of scraped records.
///
/// Sources emit whatever schema they emit; columns are data here, not types,
/// because validation and geography filtering are driven by column names at
/// runtime. Cells are nullable strings and `None` is the null value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl DataTable {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Append a row. Width must match the column count. Empty strings are
    /// stored as nulls so tables survive a CSV round trip unchanged.
    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<(), ScrapeError> {
        if row.len() != self.columns.len() {
            return Err(ScrapeError::RowWidth {
                want: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(
            row.into_iter()
                .map(|cell| cell.filter(|s| !s.is_empty()))
                .collect(),
        );
        Ok(())
    }

    /// Cell at `(row, column)`; `None` for nulls, unknown columns, and rows
    /// out of range.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Cell parsed as a float; `None` for nulls and non-numeric text.
    pub fn float(&self, row: usize, column: &str) -> Option<f64> {
        self.value(row, column)?.trim().parse().ok()
    }

    /// Keep only the rows whose index passes `keep`.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize) -> bool,
    {
        let mut index = 0;
        self.rows.retain(|_| {
            let kept = keep(index);
            index += 1;
            kept
        });
    }

    /// Write the table as CSV: header row first, nulls as empty fields.
    pub fn write_csv(&self, path: &Path) -> Result<(), ScrapeError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a table back from CSV, empty fields becoming nulls.
    pub fn read_csv(path: &Path) -> Result<DataTable, ScrapeError> {
        let mut reader = csv::Reader::from_path(path)?;
        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut table = DataTable::new(columns);
        for record in reader.records() {
            let record = record?;
            table.push_row(
                record
                    .iter()
                    .map(|field| {
                        if field.is_empty() {
                            None
                        } else {
                            Some(field.to_string())
                        }
                    })
                    .collect(),
            )?;
        }
        Ok(table)
    }
}
