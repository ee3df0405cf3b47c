//! CSV manifest parser.
//!
//! Vehicle files carry `Platform, Name, Width, Height, Thickness, Weight`;
//! package files carry `Name, Width, Height, Thickness, Weight`. The first
//! line is a header and is skipped. Blank lines are ignored.
//!
//! The three size columns are taken positionally as axes 0, 1 and 2, so the
//! `Height` column lands on the y axis and `Thickness` on the z axis. Packing
//! results and reported orientation indices depend on this order.

use crate::dataset::Dataset;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use u_loading_d3::{Fleet, Package, Vehicle};

/// Errors that can occur when parsing manifests.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Line {line}: {message}")]
    InvalidFormat { line: usize, message: String },

    #[error("Line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: u_loading_core::Error,
    },

    #[error("No {0} found")]
    Empty(&'static str),
}

/// Parser for vehicle and package manifests.
#[derive(Debug, Default)]
pub struct DatasetParser;

impl DatasetParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Loads a dataset, falling back to the demo fleet or demo packages for
    /// whichever path is missing.
    pub fn load(
        &self,
        vehicles: Option<&Path>,
        packages: Option<&Path>,
    ) -> Result<Dataset, ParseError> {
        let fleet = match vehicles {
            Some(path) => self.parse_vehicles_file(path)?,
            None => Dataset::demo_fleet(),
        };
        let packages = match packages {
            Some(path) => self.parse_packages_file(path)?,
            None => Dataset::demo_packages(),
        };
        Ok(Dataset::new(fleet, packages))
    }

    /// Parses a vehicle manifest file.
    pub fn parse_vehicles_file(&self, path: impl AsRef<Path>) -> Result<Fleet, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_vehicles_csv(&content)
    }

    /// Parses a package manifest file.
    pub fn parse_packages_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<Arc<Package>>, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_packages_csv(&content)
    }

    /// Parses vehicle rows from CSV text.
    pub fn parse_vehicles_csv(&self, csv: &str) -> Result<Fleet, ParseError> {
        let mut fleet = Fleet::new();

        for (line, fields) in records(csv, 6)? {
            let vehicle = Vehicle::new(
                fields[0].as_str(),
                fields[1].as_str(),
                number(&fields[2], "Width", line)?,
                number(&fields[3], "Height", line)?,
                number(&fields[4], "Thickness", line)?,
                number(&fields[5], "Weight", line)?,
            );
            vehicle
                .validate()
                .map_err(|source| ParseError::InvalidRecord { line, source })?;
            fleet.add_vehicle(vehicle);
        }

        if fleet.is_empty() {
            return Err(ParseError::Empty("vehicles"));
        }
        Ok(fleet)
    }

    /// Parses package rows from CSV text.
    pub fn parse_packages_csv(&self, csv: &str) -> Result<Vec<Arc<Package>>, ParseError> {
        let mut packages = Vec::new();

        for (line, fields) in records(csv, 5)? {
            let package = Package::new(
                fields[0].as_str(),
                number(&fields[1], "Width", line)?,
                number(&fields[2], "Height", line)?,
                number(&fields[3], "Thickness", line)?,
                number(&fields[4], "Weight", line)?,
            );
            package
                .validate()
                .map_err(|source| ParseError::InvalidRecord { line, source })?;
            packages.push(Arc::new(package));
        }

        if packages.is_empty() {
            return Err(ParseError::Empty("packages"));
        }
        Ok(packages)
    }
}

/// Splits CSV text into (1-based line, fields) pairs, skipping the header
/// and blank lines. Every row must have exactly `arity` fields.
fn records(csv: &str, arity: usize) -> Result<Vec<(usize, Vec<String>)>, ParseError> {
    let mut rows = Vec::new();

    for (idx, raw) in csv.lines().enumerate().skip(1) {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields = split_fields(raw, line)?;
        if fields.len() != arity {
            return Err(ParseError::InvalidFormat {
                line,
                message: format!("expected {} fields, found {}", arity, fields.len()),
            });
        }
        rows.push((line, fields));
    }

    Ok(rows)
}

/// Splits one CSV line, honouring double-quoted fields (`""` escapes a quote)
/// and trimming whitespace around unquoted fields.
fn split_fields(raw: &str, line: usize) -> Result<Vec<String>, ParseError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }

    if quoted {
        return Err(ParseError::InvalidFormat {
            line,
            message: "unterminated quoted field".to_string(),
        });
    }
    fields.push(current.trim().to_string());
    Ok(fields)
}

fn number(field: &str, column: &str, line: usize) -> Result<f64, ParseError> {
    field.parse::<f64>().map_err(|_| ParseError::InvalidFormat {
        line,
        message: format!("{} '{}' is not a number", column, field),
    })
}
