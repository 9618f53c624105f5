//! Inspect a card payload.
//!
//! # Usage
//!
//! ```bash
//! # Normalize a JSON payload
//! vb-cli inspect card.json
//!
//! # Include the card's position in a gateway country table
//! vb-cli inspect card.yaml --table gateway-countries.yaml
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use vaulted_billing_core::{CardField, CardRecord};

use super::{load_table, read_document, render};
use crate::config::CliConfig;

/// Normalized view of a card payload.
///
/// The card number is masked to its last four digits and the CVV is masked
/// entirely.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub attributes: BTreeMap<CardField, serde_json::Value>,
    pub name_on_card: String,
    pub vaulted: bool,
    pub numeric_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_position: Option<usize>,
}

impl InspectReport {
    /// Build the report for `card`, indexing into `table` if one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if an attribute cannot be converted to JSON.
    pub fn new(card: &CardRecord, table: Option<&[String]>) -> Result<Self, serde_json::Error> {
        let mut attributes = BTreeMap::new();
        for (field, value) in &card.attributes() {
            let value = match (field, value.as_ref().and_then(|v| v.as_str())) {
                (CardField::CardNumber, Some(number)) => mask_card_number(number).into(),
                (CardField::CvvNumber, Some(cvv)) => "*".repeat(cvv.chars().count()).into(),
                _ => serde_json::to_value(value)?,
            };
            attributes.insert(*field, value);
        }

        let country = card.country();
        let gateway_position = table.and_then(|t| country.and_then(|c| c.gateway_position(t)));

        Ok(Self {
            attributes,
            name_on_card: card.name_on_card(),
            vaulted: card.is_vaulted(),
            numeric_code: country.and_then(|c| c.numeric_code()),
            gateway_index: table.map(|t| country.map_or(0, |c| c.gateway_index(t))),
            gateway_position,
        })
    }
}

/// Mask all but the last four characters of a card number.
#[must_use]
pub fn mask_card_number(number: &str) -> String {
    let len = number.chars().count();
    let visible = len.saturating_sub(4);
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { c })
        .collect()
}

/// Load a card payload and print its normalized report.
///
/// # Errors
///
/// Returns an error if the payload or table cannot be read, or the report
/// cannot be written.
pub fn run(
    file: &Path,
    table: Option<&Path>,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = %file.display(), "Loading card payload");
    let card: CardRecord = read_document(file)?;

    let table = table
        .or(config.gateway_table.as_deref())
        .map(load_table)
        .transpose()?;

    if let Some(country) = card.country() {
        if country.resolve().is_none() {
            warn!(country = %country, "Country does not resolve to an ISO-3166 entry");
        }
    }

    let report = InspectReport::new(&card, table.as_deref())?;
    render(&report, config.output, &mut std::io::stdout().lock())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn table() -> Vec<String> {
        ["USA", "CAN", "MEX"].map(String::from).to_vec()
    }

    fn card(country: &str) -> CardRecord {
        CardRecord::from_fields([
            ("card_number", "4111111111111111"),
            ("cvv_number", "123"),
            ("first_name", "Jane"),
            ("last_name", "Doe"),
            ("country", country),
        ])
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4111111111111111"), "************1111");
        assert_eq!(mask_card_number("1234"), "1234");
        assert_eq!(mask_card_number("12"), "12");
        assert_eq!(mask_card_number(""), "");
    }

    #[test]
    fn test_report_masks_secrets() {
        let report = InspectReport::new(&card("US"), None).unwrap();
        assert_eq!(report.attributes[&CardField::CardNumber], json!("************1111"));
        assert_eq!(report.attributes[&CardField::CvvNumber], json!("***"));
        assert_eq!(report.attributes[&CardField::FirstName], json!("Jane"));
        assert_eq!(report.attributes[&CardField::Phone], json!(null));
        assert_eq!(report.attributes.len(), 13);
    }

    #[test]
    fn test_report_derived_fields() {
        let report = InspectReport::new(&card("CA"), Some(table().as_slice())).unwrap();
        assert_eq!(report.name_on_card, "Jane Doe");
        assert!(!report.vaulted);
        assert_eq!(report.numeric_code, Some(124));
        assert_eq!(report.gateway_index, Some(1));
        assert_eq!(report.gateway_position, Some(1));
    }

    #[test]
    fn test_report_unresolved_country() {
        let report = InspectReport::new(&card("Nonexistent"), Some(table().as_slice())).unwrap();
        assert_eq!(report.numeric_code, None);
        assert_eq!(report.gateway_index, Some(0));
        assert_eq!(report.gateway_position, None);
    }

    #[test]
    fn test_report_first_entry_and_unlisted_share_index() {
        let listed = InspectReport::new(&card("US"), Some(table().as_slice())).unwrap();
        let unlisted = InspectReport::new(&card("FR"), Some(table().as_slice())).unwrap();
        assert_eq!(listed.gateway_index, Some(0));
        assert_eq!(unlisted.gateway_index, Some(0));
        assert_eq!(listed.gateway_position, Some(0));
        assert_eq!(unlisted.gateway_position, None);
    }

    #[test]
    fn test_report_without_table_omits_gateway_fields() {
        let report = InspectReport::new(&card("US"), None).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("gateway_index").is_none());
        assert!(json.get("gateway_position").is_none());
        assert_eq!(json["numeric_code"], json!(840));
        assert_eq!(json["attributes"]["country"], json!("US"));
    }
}
