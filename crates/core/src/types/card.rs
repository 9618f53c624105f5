//! Credit card value object.
//!
//! [`CardRecord`] translates local credit card information into the shape
//! every gateway adapter understands. Generally only the card number and
//! expiration date are required by a gateway; the remaining fields are
//! optional and may or may not be stored remotely.
//!
//! The `vault_id` is the identifier a gateway returns when it first stores
//! the card. A record carrying a `vault_id` describes a card that is already
//! vaulted; a record without one describes new card data.

use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::NaiveDate;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::country::CountryCode;
use super::field::{CardField, FieldError, FieldValue};

const REDACTED: &str = "[REDACTED]";

/// Conversion into a [`CardRecord`].
///
/// Gateway adapters accept `impl AsCardRecord` rather than a concrete record,
/// so callers can hand over their own card models directly. `CardRecord`
/// converts to itself.
pub trait AsCardRecord {
    /// Produce the card record to submit to a gateway.
    fn to_vaulted_billing(&self) -> CardRecord;
}

impl AsCardRecord for CardRecord {
    fn to_vaulted_billing(&self) -> CardRecord {
        self.clone()
    }
}

impl<T: AsCardRecord + ?Sized> AsCardRecord for &T {
    fn to_vaulted_billing(&self) -> CardRecord {
        (**self).to_vaulted_billing()
    }
}

/// A credit card plus the cardholder's billing and contact details.
///
/// Two records are equal when all thirteen fields are equal, which is the
/// same as their [`attributes`](Self::attributes) snapshots being equal.
///
/// ## Examples
///
/// ```
/// use vaulted_billing_core::CardRecord;
///
/// let card = CardRecord::from_fields([
///     ("card_number", "4111111111111111"),
///     ("firstName", "Jane"),
///     (":last_name", "Doe"),
///     ("country", "US"),
///     ("favorite_color", "teal"), // ignored
/// ]);
///
/// assert_eq!(card.name_on_card(), "Jane Doe");
/// assert_eq!(card.country().and_then(|c| c.numeric_code()), Some(840));
/// assert!(card.is_new());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    vault_id: Option<String>,
    currency: Option<String>,
    card_number: Option<String>,
    cvv_number: Option<String>,
    expires_on: Option<NaiveDate>,
    first_name: Option<String>,
    last_name: Option<String>,
    street_address: Option<String>,
    locality: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<CountryCode>,
    phone: Option<String>,
}

/// Generates a getter and setter for each string-valued field.
macro_rules! text_fields {
    ($($(#[$doc:meta])* $field:ident => $setter:ident;)*) => {
        impl CardRecord {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $field(&self) -> Option<&str> {
                    self.$field.as_deref()
                }

                #[doc = concat!("Set `", stringify!($field), "`.")]
                pub fn $setter(&mut self, value: impl Into<String>) {
                    self.$field = Some(value.into());
                }
            )*
        }
    };
}

text_fields! {
    /// The unique, gateway-generated identifier for this card.
    vault_id => set_vault_id;
    /// The currency used by the card.
    currency => set_currency;
    /// The card number.
    card_number => set_card_number;
    /// The verification number (CVV2) on the card.
    cvv_number => set_cvv_number;
    /// The first name of the cardholder.
    first_name => set_first_name;
    /// The last name of the cardholder.
    last_name => set_last_name;
    /// House number and street name of the billing address.
    street_address => set_street_address;
    /// The "city" of the billing address.
    locality => set_locality;
    /// The "state" of the billing address.
    region => set_region;
    /// The postal code of the billing address.
    postal_code => set_postal_code;
    /// A phone number for the cardholder.
    phone => set_phone;
}

impl CardRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from loosely keyed field data.
    ///
    /// Keys are matched with [`CardField::from_key`]. Keys that name no
    /// field, and values a field cannot hold, are skipped. When two keys
    /// name the same field the later one wins.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let mut record = Self::new();
        for (key, value) in fields {
            let key = key.as_ref();
            if let Err(e) = record.try_assign(key, value) {
                debug!(key = %key, error = %e, "Skipping card field");
            }
        }
        record
    }

    /// Assign a value to the field named by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownField`] if `key` names no field, or
    /// [`FieldError::InvalidDate`] if `expires_on` gets unparseable text.
    pub fn try_assign(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<(), FieldError> {
        let field: CardField = key.parse()?;
        self.assign(field, value)
    }

    /// Assign a value to a field.
    ///
    /// [`FieldValue::Null`] clears the field, except for `country`, which
    /// keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidDate`] if `expires_on` gets unparseable
    /// text. The field is left unchanged in that case.
    pub fn assign(&mut self, field: CardField, value: impl Into<FieldValue>) -> Result<(), FieldError> {
        let value = value.into();
        match field {
            CardField::ExpiresOn => self.expires_on = value.into_date()?,
            CardField::Country => {
                if let Some(raw) = value.into_text() {
                    self.set_country(raw);
                }
            }
            _ => {
                if let Some(slot) = self.text_slot(field) {
                    *slot = value.into_text();
                }
            }
        }
        Ok(())
    }

    /// Unset a field.
    pub fn clear(&mut self, field: CardField) {
        match field {
            CardField::ExpiresOn => self.expires_on = None,
            CardField::Country => self.country = None,
            _ => {
                if let Some(slot) = self.text_slot(field) {
                    *slot = None;
                }
            }
        }
    }

    fn text_slot(&mut self, field: CardField) -> Option<&mut Option<String>> {
        match field {
            CardField::VaultId => Some(&mut self.vault_id),
            CardField::Currency => Some(&mut self.currency),
            CardField::CardNumber => Some(&mut self.card_number),
            CardField::CvvNumber => Some(&mut self.cvv_number),
            CardField::FirstName => Some(&mut self.first_name),
            CardField::LastName => Some(&mut self.last_name),
            CardField::StreetAddress => Some(&mut self.street_address),
            CardField::Locality => Some(&mut self.locality),
            CardField::Region => Some(&mut self.region),
            CardField::PostalCode => Some(&mut self.postal_code),
            CardField::Phone => Some(&mut self.phone),
            CardField::ExpiresOn | CardField::Country => None,
        }
    }

    /// The date on which the card expires.
    #[must_use]
    pub const fn expires_on(&self) -> Option<NaiveDate> {
        self.expires_on
    }

    /// Set `expires_on`.
    pub fn set_expires_on(&mut self, date: NaiveDate) {
        self.expires_on = Some(date);
    }

    /// The country of the billing address.
    #[must_use]
    pub const fn country(&self) -> Option<&CountryCode> {
        self.country.as_ref()
    }

    /// Set the country from a raw identifier ("US", "CAN", "Mexico", ...).
    ///
    /// Blank input is ignored and leaves the current country in place.
    pub fn set_country(&mut self, raw: impl AsRef<str>) {
        if let Some(country) = CountryCode::new(raw.as_ref()) {
            self.country = Some(country);
        }
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, field: CardField) -> Option<AttributeValue> {
        let text = |value: &Option<String>| value.clone().map(AttributeValue::Text);
        match field {
            CardField::VaultId => text(&self.vault_id),
            CardField::Currency => text(&self.currency),
            CardField::CardNumber => text(&self.card_number),
            CardField::CvvNumber => text(&self.cvv_number),
            CardField::ExpiresOn => self.expires_on.map(AttributeValue::Date),
            CardField::FirstName => text(&self.first_name),
            CardField::LastName => text(&self.last_name),
            CardField::StreetAddress => text(&self.street_address),
            CardField::Locality => text(&self.locality),
            CardField::Region => text(&self.region),
            CardField::PostalCode => text(&self.postal_code),
            CardField::Country => self.country.clone().map(AttributeValue::Country),
            CardField::Phone => text(&self.phone),
        }
    }

    /// Snapshot of all thirteen fields.
    #[must_use]
    pub fn attributes(&self) -> CardAttributes {
        CardAttributes(
            CardField::ALL
                .into_iter()
                .map(|field| (field, self.get(field)))
                .collect(),
        )
    }

    /// The cardholder name as printed on the card.
    ///
    /// First and last name joined by a space, skipping whichever is unset.
    #[must_use]
    pub fn name_on_card(&self) -> String {
        [self.first_name(), self.last_name()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the card has already been stored by a gateway.
    #[must_use]
    pub const fn is_vaulted(&self) -> bool {
        self.vault_id.is_some()
    }

    /// Whether the card is new data that has not been vaulted yet.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        !self.is_vaulted()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for CardRecord {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut record = Self::new();
        for (key, value) in map {
            let result = key
                .parse::<CardField>()
                .and_then(|field| FieldValue::from_json(field, value).map(|v| (field, v)))
                .and_then(|(field, v)| record.assign(field, v));
            if let Err(e) = result {
                debug!(key = %key, error = %e, "Skipping card field");
            }
        }
        record
    }
}

/// Reads a map one entry at a time so unknown keys never reach `serde_json::Value`.
struct CardRecordVisitor;

impl<'de> Visitor<'de> for CardRecordVisitor {
    type Value = CardRecord;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map of card fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut record = CardRecord::new();
        while let Some(key) = map.next_key::<String>()? {
            let Some(field) = CardField::from_key(&key) else {
                map.next_value::<IgnoredAny>()?;
                debug!(key = %key, "Skipping unknown card field");
                continue;
            };
            let value: serde_json::Value = map.next_value()?;
            let result = FieldValue::from_json(field, value).and_then(|v| record.assign(field, v));
            if let Err(e) = result {
                debug!(key = %key, error = %e, "Skipping card field");
            }
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for CardRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CardRecordVisitor)
    }
}

impl Serialize for CardRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attributes().serialize(serializer)
    }
}

/// Implements `Debug` manually to redact the card number and CVV.
impl std::fmt::Debug for CardRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.attributes(), f)
    }
}

/// The value held by one field of a [`CardRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Date(NaiveDate),
    Country(CountryCode),
}

impl AttributeValue {
    /// Returns the text of a string-valued field, or the raw country string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Country(country) => Some(country.as_str()),
            Self::Date(_) => None,
        }
    }

    /// Returns the date of `expires_on`.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(_) | Self::Country(_) => None,
        }
    }

    /// Returns the country.
    #[must_use]
    pub const fn as_country(&self) -> Option<&CountryCode> {
        match self {
            Self::Country(country) => Some(country),
            Self::Text(_) | Self::Date(_) => None,
        }
    }
}

/// Read-only snapshot of a [`CardRecord`]'s thirteen fields.
///
/// Always holds an entry for every [`CardField`]; unset fields map to `None`.
/// Serializes as a flat object keyed by `snake_case` field name, with unset
/// fields as `null`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardAttributes(BTreeMap<CardField, Option<AttributeValue>>);

impl CardAttributes {
    /// Returns the value of a field, or `None` if it is unset.
    #[must_use]
    pub fn get(&self, field: CardField) -> Option<&AttributeValue> {
        self.0.get(&field).and_then(Option::as_ref)
    }

    /// Iterate over all fields in snapshot order.
    pub fn iter(&self) -> btree_map::Iter<'_, CardField, Option<AttributeValue>> {
        self.0.iter()
    }

    /// Number of fields in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a CardAttributes {
    type Item = (&'a CardField, &'a Option<AttributeValue>);
    type IntoIter = btree_map::Iter<'a, CardField, Option<AttributeValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for CardAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (field, value) in self {
            match value {
                Some(_) if field.is_sensitive() => map.entry(&field.as_str(), &REDACTED),
                _ => map.entry(&field.as_str(), value),
            };
        }
        map.finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> CardRecord {
        CardRecord::from_fields([
            ("card_number", "4111111111111111"),
            ("cvv_number", "123"),
            ("expires_on", "2027-05-31"),
            ("first_name", "Jane"),
            ("last_name", "Doe"),
            ("country", "US"),
        ])
    }

    #[test]
    fn test_new_is_empty() {
        let card = CardRecord::new();
        assert!(card.attributes().iter().all(|(_, v)| v.is_none()));
        assert_eq!(card.name_on_card(), "");
    }

    #[test]
    fn test_from_fields_sets_known_fields() {
        let card = CardRecord::from_fields([
            ("vault_id", "v-1"),
            ("currency", "USD"),
            ("card_number", "4111111111111111"),
            ("cvv_number", "123"),
            ("first_name", "Jane"),
            ("last_name", "Doe"),
            ("street_address", "1 Main St"),
            ("locality", "Springfield"),
            ("region", "IL"),
            ("postal_code", "62701"),
            ("phone", "555-0100"),
        ]);

        assert_eq!(card.vault_id(), Some("v-1"));
        assert_eq!(card.currency(), Some("USD"));
        assert_eq!(card.card_number(), Some("4111111111111111"));
        assert_eq!(card.cvv_number(), Some("123"));
        assert_eq!(card.first_name(), Some("Jane"));
        assert_eq!(card.last_name(), Some("Doe"));
        assert_eq!(card.street_address(), Some("1 Main St"));
        assert_eq!(card.locality(), Some("Springfield"));
        assert_eq!(card.region(), Some("IL"));
        assert_eq!(card.postal_code(), Some("62701"));
        assert_eq!(card.phone(), Some("555-0100"));
    }

    #[test]
    fn test_from_fields_ignores_unknown_keys() {
        let card = CardRecord::from_fields([("email", "jane@example.com"), ("first_name", "Jane")]);
        let expected = CardRecord::from_fields([("first_name", "Jane")]);
        assert_eq!(card, expected);
    }

    #[test]
    fn test_from_fields_key_spelling_is_indifferent() {
        let snake = CardRecord::from_fields([("card_number", "4111"), ("first_name", "Jane")]);
        let symbol = CardRecord::from_fields([(":card_number", "4111"), (":first_name", "Jane")]);
        let camel = CardRecord::from_fields([("cardNumber", "4111"), ("FIRST_NAME", "Jane")]);
        assert_eq!(snake, symbol);
        assert_eq!(snake, camel);
    }

    #[test]
    fn test_from_fields_later_key_wins() {
        let card = CardRecord::from_fields([("first_name", "Jane"), (":first_name", "Janet")]);
        assert_eq!(card.first_name(), Some("Janet"));
    }

    #[test]
    fn test_from_fields_hash_map() {
        let mut fields = HashMap::new();
        fields.insert("postal_code".to_owned(), "62701".to_owned());
        let card = CardRecord::from_fields(fields);
        assert_eq!(card.postal_code(), Some("62701"));
    }

    #[test]
    fn test_from_fields_skips_invalid_date() {
        let card = CardRecord::from_fields([("expires_on", "someday"), ("first_name", "Jane")]);
        assert_eq!(card.expires_on(), None);
        assert_eq!(card.first_name(), Some("Jane"));
    }

    #[test]
    fn test_expires_on_parsing() {
        let card = CardRecord::from_fields([("expires_on", "05/27")]);
        assert_eq!(card.expires_on(), Some(date(2027, 5, 31)));

        let card = CardRecord::from_fields([("expires_on", FieldValue::from(date(2030, 1, 15)))]);
        assert_eq!(card.expires_on(), Some(date(2030, 1, 15)));
    }

    #[test]
    fn test_try_assign_unknown_field() {
        let mut card = CardRecord::new();
        assert_eq!(
            card.try_assign("email", "x"),
            Err(FieldError::UnknownField {
                key: "email".to_owned()
            })
        );
        assert_eq!(card, CardRecord::new());
    }

    #[test]
    fn test_assign_invalid_date_keeps_previous() {
        let mut card = CardRecord::new();
        card.set_expires_on(date(2027, 5, 31));
        assert!(card.assign(CardField::ExpiresOn, "never").is_err());
        assert_eq!(card.expires_on(), Some(date(2027, 5, 31)));
    }

    #[test]
    fn test_assign_null_clears_text_field() {
        let mut card = sample();
        card.assign(CardField::FirstName, FieldValue::Null).unwrap();
        assert_eq!(card.first_name(), None);
        card.assign(CardField::ExpiresOn, None::<&str>).unwrap();
        assert_eq!(card.expires_on(), None);
    }

    #[test]
    fn test_country_is_wrapped() {
        let card = CardRecord::from_fields([("country", "US")]);
        let country = card.country().unwrap();
        assert_eq!(country.as_str(), "US");
        assert_eq!(
            card.attributes().get(CardField::Country),
            Some(&AttributeValue::Country(country.clone()))
        );
    }

    #[test]
    fn test_country_blank_or_null_keeps_previous() {
        let mut card = CardRecord::new();
        card.set_country("");
        assert!(card.country().is_none());

        card.set_country("CA");
        card.set_country("");
        card.set_country("   ");
        card.assign(CardField::Country, FieldValue::Null).unwrap();
        assert_eq!(card.country().map(CountryCode::as_str), Some("CA"));
    }

    #[test]
    fn test_country_reassignment_replaces() {
        let mut card = CardRecord::from_fields([("country", "CA")]);
        card.set_country("MX");
        assert_eq!(card.country().map(CountryCode::as_str), Some("MX"));
    }

    #[test]
    fn test_clear() {
        let mut card = sample();
        card.clear(CardField::Country);
        card.clear(CardField::CardNumber);
        assert!(card.country().is_none());
        assert!(card.card_number().is_none());
        assert_eq!(card.first_name(), Some("Jane"));
    }

    #[test]
    fn test_name_on_card() {
        let both = CardRecord::from_fields([("first_name", "Jane"), ("last_name", "Doe")]);
        let first = CardRecord::from_fields([("first_name", "Jane")]);
        let last = CardRecord::from_fields([("last_name", "Doe")]);
        assert_eq!(both.name_on_card(), "Jane Doe");
        assert_eq!(first.name_on_card(), "Jane");
        assert_eq!(last.name_on_card(), "Doe");
        assert_eq!(CardRecord::new().name_on_card(), "");
    }

    #[test]
    fn test_name_on_card_tracks_mutation() {
        let mut card = CardRecord::from_fields([("first_name", "Jane")]);
        card.set_last_name("Roe");
        assert_eq!(card.name_on_card(), "Jane Roe");
    }

    #[test]
    fn test_vaulted_state() {
        let mut card = sample();
        assert!(card.is_new());
        assert!(!card.is_vaulted());
        card.set_vault_id("v-42");
        assert!(card.is_vaulted());
        assert!(!card.is_new());
    }

    #[test]
    fn test_attributes_has_every_field() {
        let attributes = CardRecord::new().attributes();
        assert_eq!(attributes.len(), 13);
        let fields: Vec<_> = attributes.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, CardField::ALL);
    }

    #[test]
    fn test_attributes_idempotent() {
        let card = sample();
        assert_eq!(card.attributes(), card.attributes());
    }

    #[test]
    fn test_attributes_mutation_changes_one_entry() {
        let mut card = sample();
        let before = card.attributes();
        card.set_phone("555-0100");
        let after = card.attributes();

        for field in CardField::ALL {
            if field == CardField::Phone {
                assert_ne!(before.get(field), after.get(field));
            } else {
                assert_eq!(before.get(field), after.get(field), "{field}");
            }
        }
    }

    #[test]
    fn test_equality_matches_attributes() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);
        assert_eq!(a.attributes(), b.attributes());

        b.set_region("IL");
        assert_ne!(a, b);
        assert_ne!(a.attributes(), b.attributes());
    }

    #[test]
    fn test_equality_compares_country() {
        let us = CardRecord::from_fields([("country", "US")]);
        let usa = CardRecord::from_fields([("country", "USA")]);
        assert_ne!(us, usa);
        assert_eq!(us, CardRecord::from_fields([("COUNTRY", "US")]));
    }

    #[test]
    fn test_to_vaulted_billing_returns_equal_record() {
        let card = sample();
        assert_eq!(card.to_vaulted_billing(), card);
    }

    #[test]
    fn test_as_card_record_for_caller_type() {
        struct LocalCard {
            number: String,
            holder: (String, String),
        }

        impl AsCardRecord for LocalCard {
            fn to_vaulted_billing(&self) -> CardRecord {
                let mut card = CardRecord::new();
                card.set_card_number(self.number.as_str());
                card.set_first_name(self.holder.0.as_str());
                card.set_last_name(self.holder.1.as_str());
                card
            }
        }

        fn name_for(card: &impl AsCardRecord) -> String {
            card.to_vaulted_billing().name_on_card()
        }

        let local = LocalCard {
            number: "4111".to_owned(),
            holder: ("Jane".to_owned(), "Doe".to_owned()),
        };
        assert_eq!(name_for(&local), "Jane Doe");
        assert_eq!(name_for(&sample()), "Jane Doe");
    }

    #[test]
    fn test_from_json_map() {
        let value = json!({
            "cardNumber": 4_111_111_111_111_111_u64,
            "postal_code": 62701,
            "expires_on": "2027-05",
            "country": "CA",
            "tags": ["a", "b"],
            "unknown": "x"
        });
        let serde_json::Value::Object(map) = value else {
            panic!("expected object");
        };
        let card = CardRecord::from(map);

        assert_eq!(card.card_number(), Some("4111111111111111"));
        assert_eq!(card.postal_code(), Some("62701"));
        assert_eq!(card.expires_on(), Some(date(2027, 5, 31)));
        assert_eq!(card.country().map(CountryCode::as_str), Some("CA"));
    }

    #[test]
    fn test_from_json_null_country_is_ignored() {
        let card: CardRecord = serde_json::from_value(json!({"country": null})).unwrap();
        assert!(card.country().is_none());
    }

    #[test]
    fn test_deserialize_matches_from_fields() {
        let card: CardRecord = serde_json::from_value(json!({
            ":first_name": "Jane",
            "LAST_NAME": "Doe",
            "country": "US"
        }))
        .unwrap();
        let expected =
            CardRecord::from_fields([("first_name", "Jane"), ("last_name", "Doe"), ("country", "US")]);
        assert_eq!(card, expected);
    }

    #[test]
    fn test_deserialize_skips_unknown_values_unread() {
        let card: CardRecord = serde_json::from_str(
            r#"{"first_name": "Jane", "extra": {"nested": [1, 2, {"deep": null}]}, "last_name": "Doe"}"#,
        )
        .unwrap();
        assert_eq!(card.name_on_card(), "Jane Doe");
    }

    #[test]
    fn test_deserialize_false_country_is_ignored() {
        let mut card = sample();
        card.assign(
            CardField::Country,
            FieldValue::from_json(CardField::Country, json!(false)).unwrap(),
        )
        .unwrap();
        assert_eq!(card.country().map(CountryCode::as_str), Some("US"));

        let card: CardRecord = serde_json::from_value(json!({"country": false})).unwrap();
        assert!(card.country().is_none());
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_value::<CardRecord>(json!(["US"])).is_err());
    }

    #[test]
    fn test_serialize_attributes() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            json!({
                "vault_id": null,
                "currency": null,
                "card_number": "4111111111111111",
                "cvv_number": "123",
                "expires_on": "2027-05-31",
                "first_name": "Jane",
                "last_name": "Doe",
                "street_address": null,
                "locality": null,
                "region": null,
                "postal_code": null,
                "country": "US",
                "phone": null
            })
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let card = sample();
        let json = serde_json::to_string(&card).unwrap();
        let parsed: CardRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, card);
    }

    #[test]
    fn test_debug_redacts_sensitive_fields() {
        let debug = format!("{:?}", sample());
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("\"123\""));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("Jane"));
    }

    #[test]
    fn test_attribute_value_accessors() {
        let card = sample();
        let attributes = card.attributes();
        assert_eq!(
            attributes.get(CardField::FirstName).and_then(AttributeValue::as_str),
            Some("Jane")
        );
        assert_eq!(
            attributes.get(CardField::ExpiresOn).and_then(AttributeValue::as_date),
            Some(date(2027, 5, 31))
        );
        assert_eq!(
            attributes
                .get(CardField::Country)
                .and_then(AttributeValue::as_country)
                .and_then(CountryCode::numeric_code),
            Some(840)
        );
        assert!(attributes.get(CardField::Phone).is_none());
    }
}
