//! CLI commands and the file handling they share.

pub mod country;
pub mod inspect;

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::OutputFormat;

/// Read a JSON or YAML document, choosing the parser by file extension.
///
/// `.yml` and `.yaml` files are parsed as YAML; everything else as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as `T`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

    let document = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(document)
}

/// Load a gateway country table: an ordered list of alpha-3 codes.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a list of strings.
pub fn load_table(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let table: Vec<String> = read_document(path)?;
    info!(path = %path.display(), entries = table.len(), "Loaded gateway country table");
    Ok(table)
}

/// Write a report to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render<T: Serialize>(
    report: &T,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, report)?,
    }
    Ok(())
}
