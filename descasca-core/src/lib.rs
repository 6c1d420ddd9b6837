#![forbid(unsafe_code)]

pub mod error;

pub mod boxmap;
pub mod metrics;
pub mod parse;
pub mod schema;
pub mod table;

pub mod store;
pub mod store_factory;
pub mod store_json;

// Re-exports: stable API surface
pub use metrics::{BoxCount, Elapsed, MetricsOptions, Snapshot, filter_by_box, snapshot};
pub use parse::parse;
pub use table::Table;
