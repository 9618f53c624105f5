//! Vaulted Billing Core - Gateway-agnostic card types.
//!
//! This crate provides the value object that sits between a calling
//! application's local card data and the payment gateway integrations:
//! - [`CardRecord`] - Card number, expiration, cardholder and billing address
//! - [`CountryCode`] - Country of the billing address with ISO-3166 lookups
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no network
//! clients, no persistence. Gateway adapters read the normalized
//! [`CardAttributes`] snapshot or the derived country codes when building
//! provider-specific requests.
//!
//! # Modules
//!
//! - [`types`] - The card record, field-name normalization, and country lookups

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
