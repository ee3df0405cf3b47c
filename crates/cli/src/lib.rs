//! Command-line front end for u-loading.
//!
//! Reads vehicle and package manifests from CSV, runs the fleet classifier
//! and writes the console summary, package lists and JSON reports.

pub mod dataset;
pub mod parser;
pub mod report;

pub use dataset::{Dataset, DatasetInfo};
pub use parser::{DatasetParser, ParseError};
pub use report::{render_text, save_json, write_lists};
