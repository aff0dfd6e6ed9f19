//! CSV import and export.
//!
//! The import side is a hand-rolled RFC4180-ish parser that supports
//! quoted multi-line fields; the export side produces the rankings CSV.

mod export;
mod parse;

pub use export::export_rankings;
pub use parse::parse_projects;
