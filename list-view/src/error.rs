use payloads::ClientError;

/// A list call that failed, whether from the network, a non-2xx status or a
/// body that didn't parse.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch data: {0}")]
pub struct FetchError(#[from] pub ClientError);

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("record could not be converted for export: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write csv: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("csv header is required")]
    MissingHeader,
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),
}

/// A problem with one row of a bulk upload. Rows with errors are held back
/// from submission; the rest of the sheet is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {}: {message}", .row + 1)]
pub struct ValidationError {
    /// Zero-based data row (the header is not counted).
    pub row: usize,
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(row: usize, message: impl Into<String>) -> Self {
        Self {
            row,
            field: None,
            message: message.into(),
        }
    }

    pub fn for_field(
        row: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row,
            field: Some(field.into()),
            message: message.into(),
        }
    }
}
