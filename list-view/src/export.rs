use serde::Serialize;
use std::io;

use crate::ExportError;
use crate::columns::{
    ExportDescriptor, ExportRow, display_value, project_row_for_export,
};

/// Headers plus projected rows, ready to be written out as CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<(String, String)>,
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    pub fn from_records<T: Serialize>(
        records: &[T],
        descriptor: &ExportDescriptor,
    ) -> Result<Self, ExportError> {
        let rows = records
            .iter()
            .map(|record| {
                let value = serde_json::to_value(record)?;
                Ok(project_row_for_export(&value, descriptor))
            })
            .collect::<Result<Vec<_>, ExportError>>()?;

        Ok(Self {
            headers: descriptor.headers(),
            rows,
        })
    }

    pub fn write_csv<W: io::Write>(
        &self,
        writer: W,
    ) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.headers.iter().map(|(_, label)| label))?;
        for row in &self.rows {
            writer.write_record(self.headers.iter().map(|(key, _)| {
                row.get(key).map(display_value).unwrap_or_default()
            }))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        // The writer only ever receives UTF-8 strings.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
