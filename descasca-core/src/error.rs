use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescascaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8 in upload: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("empty batch: no records to analyze")]
    EmptyBatch,

    #[error("schema overflow: first record has {fields} fields, schema holds {max}")]
    SchemaOverflow { fields: usize, max: usize },

    #[error("ragged row {row}: expected {expected} fields, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("metrics error: {0}")]
    Metrics(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("export error: {0}")]
    Export(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, DescascaError>;
