use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{DescascaError, Result};
use crate::schema;

/// A batch of records bound to the fixed schema. Rows keep their raw string
/// fields; the typed views (`box_code`, `data`) coerce on access and turn
/// unparseable values into `None`. Rows are displayed 1-indexed.
#[derive(Clone, Debug)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Bind a batch to the schema. The first record fixes the column count;
    /// every other record must match it exactly.
    pub fn build(records: &[Vec<String>]) -> Result<Self> {
        let Some(first) = records.first() else {
            return Err(DescascaError::EmptyBatch);
        };
        let columns = schema::bind(first.len())?;
        for (i, rec) in records.iter().enumerate() {
            if rec.len() != columns.len() {
                return Err(DescascaError::RaggedRow {
                    row: i + 1,
                    expected: columns.len(),
                    found: rec.len(),
                });
            }
        }
        tracing::debug!(rows = records.len(), cols = columns.len(), "batch bound to schema");
        Ok(Self {
            columns,
            rows: records.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn col_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Raw field of row `row` (0-based) under column `name`, when both exist.
    pub fn field(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.col_index(name)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Best-effort integer Box code for one row.
    pub fn box_code(&self, row: usize) -> Option<i64> {
        parse_box(self.field(row, schema::COL_BOX)?)
    }

    /// Best-effort calendar date for one row.
    pub fn data(&self, row: usize) -> Option<Date> {
        parse_date(self.field(row, schema::COL_DATA)?)
    }
}

fn parse_box(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    // the firmware occasionally writes codes with a decimal point
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i64),
        _ => None,
    }
}

const DATE_FORMATS: [&[BorrowedFormatItem<'static>]; 3] = [
    format_description!("[year]-[month]-[day]"),
    format_description!("[day]-[month]-[year]"),
    format_description!("[day]/[month]/[year]"),
];

fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    DATE_FORMATS.iter().find_map(|f| Date::parse(raw, *f).ok())
}
