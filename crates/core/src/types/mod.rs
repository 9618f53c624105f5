//! Core types for Vaulted Billing.
//!
//! This module provides the card value object and the types it is built from.

pub mod card;
pub mod country;
pub mod field;
pub mod iso3166;

pub use card::{AsCardRecord, AttributeValue, CardAttributes, CardRecord};
pub use country::{Country, CountryCode, CountryLookup};
pub use field::{CardField, FieldError, FieldValue};
pub use iso3166::Iso3166;
