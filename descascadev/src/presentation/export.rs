use std::path::Path;

use descasca_core::Table;
use descasca_core::error::{DescascaError, Result};

/// Spreadsheet contract: row 0 is the header, the index column is labelled
/// "Linha", and data rows carry the table's 1-based indices.
pub fn write_csv(table: &Table, out: &Path) -> Result<()> {
    let mut w = csv::Writer::from_path(out)
        .map_err(|e| DescascaError::Export(format!("{}: {e}", out.display())))?;

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push("Linha".to_string());
    header.extend(table.columns.iter().cloned());
    w.write_record(&header)
        .map_err(|e| DescascaError::Export(e.to_string()))?;

    for (i, row) in table.rows.iter().enumerate() {
        let mut rec = Vec::with_capacity(row.len() + 1);
        rec.push((i + 1).to_string());
        rec.extend(row.iter().cloned());
        w.write_record(&rec)
            .map_err(|e| DescascaError::Export(e.to_string()))?;
    }
    w.flush()?;
    Ok(())
}
