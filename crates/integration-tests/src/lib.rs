//! Integration tests for Vaulted Billing.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vaulted-billing-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `card_payloads` - Building card records from JSON and YAML payloads
//! - `country_codes` - ISO-3166 and gateway table translation through a card
//! - `gateway_adapter` - Handing records and caller types to adapter code

/// A gateway country table in the shape adapters receive it.
pub const SAMPLE_GATEWAY_TABLE: [&str; 3] = ["USA", "CAN", "MEX"];
