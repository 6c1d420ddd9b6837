use crate::error::{DescascaError, Result};

/// Fixed column layout of the debarker log export. A batch binds a prefix of
/// this list; the single-letter tail names whatever extra columns the machine
/// firmware appends after the documented ones.
pub const COLUMN_NAMES: [&str; 34] = [
    "Data",
    "Hora",
    "Série",
    "N.º Tronco",
    "D min",
    "D méd",
    "D máx",
    "Comprimento",
    "Box",
    "s", "d", "f", "g", "h", "j", "k", "l", "z", "x", "c", "v", "b", "n",
    "m", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p",
];

pub const COL_DATA: &str = "Data";
pub const COL_HORA: &str = "Hora";
pub const COL_TRONCO: &str = "N.º Tronco";
pub const COL_BOX: &str = "Box";

/// Bind the first `fields` column names. A record wider than the schema is a
/// hard error, never a silent truncation.
pub fn bind(fields: usize) -> Result<Vec<String>> {
    if fields > COLUMN_NAMES.len() {
        return Err(DescascaError::SchemaOverflow {
            fields,
            max: COLUMN_NAMES.len(),
        });
    }
    Ok(COLUMN_NAMES[..fields]
        .iter()
        .map(|s| s.to_string())
        .collect())
}
