//! Resolve a raw country string.
//!
//! # Usage
//!
//! ```bash
//! vb-cli country CA
//! vb-cli country "United Kingdom" --table gateway-countries.json
//! ```

use std::path::Path;

use serde::Serialize;
use tracing::warn;

use vaulted_billing_core::{CardRecord, Country};

use super::{load_table, render};
use crate::config::CliConfig;

/// Resolution of one raw country string.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CountryReport {
    pub input: String,
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_position: Option<usize>,
}

impl CountryReport {
    /// Resolve `raw` the same way a card's billing country is resolved.
    #[must_use]
    pub fn new(raw: &str, table: Option<&[String]>) -> Self {
        let mut card = CardRecord::new();
        card.set_country(raw);

        let country = card.country();
        let gateway_position = table.and_then(|t| country.and_then(|c| c.gateway_position(t)));

        Self {
            input: raw.to_owned(),
            country: country.and_then(|c| c.resolve()),
            gateway_index: table.map(|t| country.map_or(0, |c| c.gateway_index(t))),
            gateway_position,
        }
    }
}

/// Print how `raw` resolves.
///
/// # Errors
///
/// Returns an error if the table cannot be read or the report cannot be written.
pub fn run(
    raw: &str,
    table: Option<&Path>,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = table
        .or(config.gateway_table.as_deref())
        .map(load_table)
        .transpose()?;

    let report = CountryReport::new(raw, table.as_deref());
    if report.country.is_none() {
        warn!(input = %raw, "Country does not resolve to an ISO-3166 entry");
    }

    render(&report, config.output, &mut std::io::stdout().lock())
}
