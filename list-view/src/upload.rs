//! Bulk upload sheets: a CSV parsed into editable rows, each validated on
//! its own.

use std::collections::BTreeMap;
use std::io;

use crate::{UploadError, ValidationError};

/// Cells of one uploaded row, keyed by column header.
pub type RowCells = BTreeMap<String, String>;

/// Turns the raw cells of a row into a record, or explains why it can't.
pub trait RowValidator {
    type Record;

    fn validate(
        &self,
        row: usize,
        cells: &RowCells,
    ) -> Result<Self::Record, Vec<ValidationError>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowStatus<R> {
    Valid(R),
    Invalid(Vec<ValidationError>),
    /// Edited since it was last validated.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRow<R> {
    pub cells: RowCells,
    pub status: RowStatus<R>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadSheet<R> {
    headers: Vec<String>,
    rows: Vec<UploadRow<R>>,
}

impl<R> UploadSheet<R> {
    /// Parse a CSV with a header line and validate every row.
    pub fn from_csv<V>(
        reader: impl io::Read,
        validator: &V,
    ) -> Result<Self, UploadError>
    where
        V: RowValidator<Record = R>,
    {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> =
            reader.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|header| header.is_empty()) {
            return Err(UploadError::MissingHeader);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cells = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = record.get(i).unwrap_or_default().to_string();
                    (header.clone(), value)
                })
                .collect();
            rows.push(UploadRow {
                cells,
                status: RowStatus::Stale,
            });
        }

        let mut sheet = Self { headers, rows };
        sheet.validate_all(validator);
        tracing::debug!(
            rows = sheet.len(),
            errors = sheet.error_count(),
            "parsed upload sheet"
        );
        Ok(sheet)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[UploadRow<R>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Change one cell and mark the row for revalidation. Returns false if
    /// the row doesn't exist.
    pub fn edit_cell(
        &mut self,
        row: usize,
        column: &str,
        value: impl Into<String>,
    ) -> bool {
        let Some(target) = self.rows.get_mut(row) else {
            return false;
        };
        target.cells.insert(column.to_string(), value.into());
        target.status = RowStatus::Stale;
        true
    }

    pub fn revalidate<V>(&mut self, row: usize, validator: &V)
    where
        V: RowValidator<Record = R>,
    {
        if let Some(target) = self.rows.get_mut(row) {
            target.status = match validator.validate(row, &target.cells) {
                Ok(record) => RowStatus::Valid(record),
                Err(errors) => RowStatus::Invalid(errors),
            };
        }
    }

    pub fn validate_all<V>(&mut self, validator: &V)
    where
        V: RowValidator<Record = R>,
    {
        for row in 0..self.rows.len() {
            self.revalidate(row, validator);
        }
    }

    pub fn errors_for(&self, row: usize) -> &[ValidationError] {
        match self.rows.get(row).map(|target| &target.status) {
            Some(RowStatus::Invalid(errors)) => errors,
            _ => &[],
        }
    }

    /// Validation errors keyed by row index.
    pub fn errors(&self) -> BTreeMap<usize, &[ValidationError]> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, target)| match &target.status {
                RowStatus::Invalid(errors) => Some((i, errors.as_slice())),
                _ => None,
            })
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.rows
            .iter()
            .map(|target| match &target.status {
                RowStatus::Invalid(errors) => errors.len(),
                _ => 0,
            })
            .sum()
    }

    pub fn has_stale_rows(&self) -> bool {
        self.rows
            .iter()
            .any(|target| matches!(target.status, RowStatus::Stale))
    }

    /// Records from rows that passed validation, in sheet order.
    pub fn eligible_records(&self) -> Vec<&R> {
        self.rows
            .iter()
            .filter_map(|target| match &target.status {
                RowStatus::Valid(record) => Some(record),
                _ => None,
            })
            .collect()
    }
}
