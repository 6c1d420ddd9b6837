use std::collections::BTreeMap;

use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::boxmap;
use crate::error::{DescascaError, Result};
use crate::schema;
use crate::table::Table;

/// Fixed correction subtracted from every elapsed-time reading. The machine
/// clock runs one hour ahead of the shift log, and all historical throughput
/// figures were produced with this offset applied.
pub const DEFAULT_CLOCK_CORRECTION_SECS: i64 = 3600;

/// Sentinel shown when no row carries a parseable `Data` value.
pub const DATE_UNAVAILABLE: &str = "Data não disponível";

const HORA_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug)]
pub struct MetricsOptions {
    pub clock_correction_secs: i64,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            clock_correction_secs: DEFAULT_CLOCK_CORRECTION_SECS,
        }
    }
}

/// Corrected wall time between the first and last record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    fn from_secs(secs: i64) -> Self {
        Self {
            hours: secs / 3600,
            minutes: secs % 3600 / 60,
            seconds: secs % 60,
        }
    }

    pub fn total_minutes(&self) -> f64 {
        self.hours as f64 * 60.0 + self.minutes as f64 + self.seconds as f64 / 60.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxCount {
    pub code: i64,
    pub count: u64,
    pub description: &'static str,
}

#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Non-empty `N.º Tronco` entries.
    pub total: u64,
    pub elapsed: Elapsed,
    /// Records per minute; `None` when the corrected elapsed time is zero.
    pub throughput: Option<f64>,
    /// Maximum `Data` value across the table, when any row has one.
    pub analysis_date: Option<time::Date>,
    /// Counts per distinct Box code, ascending.
    pub per_box: Vec<BoxCount>,
}

impl Snapshot {
    pub fn analysis_date_label(&self) -> String {
        self.analysis_date
            .and_then(|d| d.format(ISO_DATE).ok())
            .unwrap_or_else(|| DATE_UNAVAILABLE.to_string())
    }
}

/// Derive the production statistics for a bound table. Every `Hora` value
/// must parse as `HH:MM:SS`; anything else makes the elapsed-time figure
/// meaningless, so it is an error rather than a zeroed result.
pub fn snapshot(table: &Table, opts: Option<&MetricsOptions>) -> Result<Snapshot> {
    if table.is_empty() {
        return Err(DescascaError::EmptyBatch);
    }
    let correction = opts
        .map(|o| o.clock_correction_secs)
        .unwrap_or(DEFAULT_CLOCK_CORRECTION_SECS);

    let tronco_idx = require_col(table, schema::COL_TRONCO)?;
    let total = table
        .rows
        .iter()
        .filter(|r| !r[tronco_idx].trim().is_empty())
        .count() as u64;

    let hora_idx = require_col(table, schema::COL_HORA)?;
    let mut horas = Vec::with_capacity(table.len());
    for (i, row) in table.rows.iter().enumerate() {
        let raw = row[hora_idx].trim();
        let t = Time::parse(raw, HORA_FORMAT).map_err(|e| {
            DescascaError::Metrics(format!("row {}: bad Hora {raw:?}: {e}", i + 1))
        })?;
        horas.push(t);
    }
    // first and last exist: the table is non-empty
    let span = horas[horas.len() - 1] - horas[0];
    let secs = span.whole_seconds() - correction;
    if secs < 0 {
        return Err(DescascaError::Metrics(format!(
            "elapsed time is negative ({secs}s) after the {correction}s clock correction"
        )));
    }
    let elapsed = Elapsed::from_secs(secs);

    let minutes = elapsed.total_minutes();
    let throughput = if minutes == 0.0 {
        None
    } else {
        Some(total as f64 / minutes)
    };

    let analysis_date = (0..table.len()).filter_map(|i| table.data(i)).max();

    let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
    for i in 0..table.len() {
        if let Some(code) = table.box_code(i) {
            *counts.entry(code).or_default() += 1;
        }
    }
    let per_box = counts
        .into_iter()
        .map(|(code, count)| BoxCount {
            code,
            count,
            description: boxmap::label(code),
        })
        .collect();

    tracing::debug!(total, ?elapsed, "snapshot computed");
    Ok(Snapshot {
        total,
        elapsed,
        throughput,
        analysis_date,
        per_box,
    })
}

/// Drill-down over the Box dimension: 0-based indices of the rows whose Box
/// code equals `code`. Code 0 means no filter; an empty result for any other
/// code is a normal outcome.
pub fn filter_by_box(table: &Table, code: i64) -> Vec<usize> {
    if code == 0 {
        return (0..table.len()).collect();
    }
    (0..table.len())
        .filter(|&i| table.box_code(i) == Some(code))
        .collect()
}

fn require_col(table: &Table, name: &str) -> Result<usize> {
    table
        .col_index(name)
        .ok_or_else(|| DescascaError::Metrics(format!("column {name:?} missing from batch")))
}
