//! Card field names and loosely typed field values.
//!
//! Card data arrives from many shapes (form posts, deserialized API payloads,
//! YAML fixtures), so field names are matched indifferently: a leading `:`,
//! ASCII case, and `_`/`-`/space separators are all ignored. `card_number`,
//! `:card_number`, `cardNumber` and `CARD-NUMBER` name the same field.

use core::fmt;

use chrono::{DateTime, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Errors that can occur when assigning a value to a [`CardField`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The key does not name a card field.
    #[error("unknown card field: {key}")]
    UnknownField {
        /// The key as supplied by the caller.
        key: String,
    },
    /// The value is an array or object.
    #[error("{field} requires a scalar value")]
    NonScalar {
        /// The field the value was assigned to.
        field: CardField,
    },
    /// The value assigned to `expires_on` is not a recognized date.
    #[error("invalid expiration date: {value}")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },
}

/// One of the thirteen fields of a [`CardRecord`](crate::CardRecord).
///
/// Variants are declared in attribute-snapshot order, which is also the
/// `Ord` order used by [`CardAttributes`](crate::CardAttributes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    VaultId,
    Currency,
    CardNumber,
    CvvNumber,
    ExpiresOn,
    FirstName,
    LastName,
    StreetAddress,
    Locality,
    Region,
    PostalCode,
    Country,
    Phone,
}

impl CardField {
    /// All fields, in attribute-snapshot order.
    pub const ALL: [Self; 13] = [
        Self::VaultId,
        Self::Currency,
        Self::CardNumber,
        Self::CvvNumber,
        Self::ExpiresOn,
        Self::FirstName,
        Self::LastName,
        Self::StreetAddress,
        Self::Locality,
        Self::Region,
        Self::PostalCode,
        Self::Country,
        Self::Phone,
    ];

    /// The canonical `snake_case` name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VaultId => "vault_id",
            Self::Currency => "currency",
            Self::CardNumber => "card_number",
            Self::CvvNumber => "cvv_number",
            Self::ExpiresOn => "expires_on",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::StreetAddress => "street_address",
            Self::Locality => "locality",
            Self::Region => "region",
            Self::PostalCode => "postal_code",
            Self::Country => "country",
            Self::Phone => "phone",
        }
    }

    /// Whether the field holds card secrets that must not be logged.
    #[must_use]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::CardNumber | Self::CvvNumber)
    }

    /// Resolve a loosely spelled key to a field.
    ///
    /// Returns `None` when the key does not name any card field.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let wanted = canonical_key(key);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|field| canonical_key(field.as_str()) == wanted)
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| FieldError::UnknownField { key: s.to_owned() })
    }
}

/// Strip symbol prefix and separators, and lowercase what remains.
fn canonical_key(key: &str) -> String {
    let key = key.trim();
    let key = key.strip_prefix(':').unwrap_or(key);
    key.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A loosely typed value supplied for a card field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// No value. Clears the field (except `country`, which keeps its value).
    #[default]
    Null,
    /// Text input. Parsed as a date when assigned to `expires_on`.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
}

impl FieldValue {
    /// Convert into text for a string-valued field.
    pub(crate) fn into_text(self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text),
            Self::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        }
    }

    /// Convert into a date for `expires_on`.
    pub(crate) fn into_date(self) -> Result<Option<NaiveDate>, FieldError> {
        match self {
            Self::Null => Ok(None),
            Self::Date(date) => Ok(Some(date)),
            Self::Text(text) => parse_expiration(&text).map(Some),
        }
    }

    /// Convert a JSON value, rejecting arrays and objects.
    ///
    /// `false` is treated as "no value" for `country`, so it leaves a stored
    /// country untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NonScalar`] for arrays and objects.
    pub fn from_json(field: CardField, value: serde_json::Value) -> Result<Self, FieldError> {
        use serde_json::Value;

        match value {
            Value::Null | Value::Bool(false) if field == CardField::Country => Ok(Self::Null),
            Value::Null => Ok(Self::Null),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Number(n) => Ok(Self::Text(n.to_string())),
            Value::Bool(b) => Ok(Self::Text(b.to_string())),
            Value::Array(_) | Value::Object(_) => Err(FieldError::NonScalar { field }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Parse an expiration date.
///
/// Accepts full dates (`2027-05-14`, RFC 3339 timestamps) and month-granular
/// card formats (`2027-05`, `05/2027`, `05/27`). Month-granular input resolves
/// to the last day of that month.
///
/// # Errors
///
/// Returns [`FieldError::InvalidDate`] if no format matches.
pub fn parse_expiration(input: &str) -> Result<NaiveDate, FieldError> {
    let s = input.trim();
    let invalid = || FieldError::InvalidDate {
        value: input.to_owned(),
    };

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Ok(timestamp.date_naive());
    }

    let (year, month) = if let Some((year, month)) = s.split_once('-') {
        (parse_number(year, 4), parse_number(month, 2))
    } else if let Some((month, year)) = s.split_once('/') {
        let year = match year.len() {
            2 => parse_number(year, 2).map(|y| y + 2000),
            _ => parse_number(year, 4),
        };
        (year, parse_number(month, 2))
    } else {
        return Err(invalid());
    };

    let (Some(year), Some(month)) = (year, month) else {
        return Err(invalid());
    };
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)
}

/// Parse an all-digit component of at most `max_len` digits.
fn parse_number(s: &str, max_len: usize) -> Option<u16> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
