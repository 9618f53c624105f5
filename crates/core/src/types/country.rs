//! Country of a card's billing address.
//!
//! A [`CountryCode`] is usually just the string the caller supplied ("US",
//! "CAN", "Mexico"), but gateway adapters need it translated: some gateways
//! want the ISO-3166 numeric code, others want the country's position in a
//! proprietary ordered table. Both translations go through a
//! [`CountryLookup`], [`Iso3166`] by default.

use core::fmt;

use serde::{Serialize, Serializer};

use super::iso3166::Iso3166;

/// A country as resolved by a [`CountryLookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    /// ISO-3166 alpha-2 code (e.g. "US").
    pub alpha2: &'static str,
    /// ISO-3166 alpha-3 code (e.g. "USA").
    pub alpha3: &'static str,
    /// ISO-3166 numeric code (e.g. 840).
    pub numeric: u16,
    /// English short name.
    pub name: &'static str,
}

/// Resolves a raw country string to a [`Country`].
///
/// Implementations must be pure: the same input always resolves the same way.
pub trait CountryLookup {
    /// Look up a raw country identifier, returning `None` if it is unknown.
    fn lookup(&self, raw: &str) -> Option<Country>;
}

impl<L: CountryLookup + ?Sized> CountryLookup for &L {
    fn lookup(&self, raw: &str) -> Option<Country> {
        (**self).lookup(raw)
    }
}

/// The country of a card's billing address.
///
/// Wraps the raw string assigned to [`CardRecord::set_country`](crate::CardRecord::set_country).
/// The wrapped value never changes after construction; the derived codes are
/// computed on each call.
///
/// ## Examples
///
/// ```
/// use vaulted_billing_core::CardRecord;
///
/// let mut card = CardRecord::new();
/// card.set_country("CA");
///
/// let country = card.country().unwrap();
/// assert_eq!(country.numeric_code(), Some(124));
/// assert_eq!(country.gateway_index(&["USA", "CAN", "MEX"]), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Wrap a raw country string, or `None` if it is blank.
    pub(crate) fn new(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| Self(raw.to_owned()))
    }

    /// Returns the raw country string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against the built-in ISO-3166 table.
    #[must_use]
    pub fn resolve(&self) -> Option<Country> {
        self.resolve_with(&Iso3166)
    }

    /// Resolve against the given lookup.
    #[must_use]
    pub fn resolve_with(&self, lookup: &impl CountryLookup) -> Option<Country> {
        lookup.lookup(&self.0)
    }

    /// Returns the ISO-3166 numeric code, or `None` if the country is unknown.
    #[must_use]
    pub fn numeric_code(&self) -> Option<u16> {
        self.numeric_code_with(&Iso3166)
    }

    /// Like [`numeric_code`](Self::numeric_code), using the given lookup.
    #[must_use]
    pub fn numeric_code_with(&self, lookup: &impl CountryLookup) -> Option<u16> {
        self.resolve_with(lookup).map(|country| country.numeric)
    }

    /// Returns this country's position in a gateway's ordered alpha-3 table.
    ///
    /// Returns `0` when the country is unknown or missing from `table`, which
    /// is indistinguishable from a country at position `0`. Gateways using
    /// this convention treat `0` as "unspecified"; use
    /// [`gateway_position`](Self::gateway_position) to tell the cases apart.
    #[must_use]
    pub fn gateway_index<S: AsRef<str>>(&self, table: &[S]) -> usize {
        self.gateway_index_with(&Iso3166, table)
    }

    /// Like [`gateway_index`](Self::gateway_index), using the given lookup.
    #[must_use]
    pub fn gateway_index_with<S: AsRef<str>>(
        &self,
        lookup: &impl CountryLookup,
        table: &[S],
    ) -> usize {
        self.gateway_position_with(lookup, table).unwrap_or(0)
    }

    /// Returns this country's position in `table`, or `None` if the country
    /// is unknown or not listed.
    ///
    /// Table entries must be uppercase alpha-3 codes; they are compared
    /// exactly.
    #[must_use]
    pub fn gateway_position<S: AsRef<str>>(&self, table: &[S]) -> Option<usize> {
        self.gateway_position_with(&Iso3166, table)
    }

    /// Like [`gateway_position`](Self::gateway_position), using the given lookup.
    #[must_use]
    pub fn gateway_position_with<S: AsRef<str>>(
        &self,
        lookup: &impl CountryLookup,
        table: &[S],
    ) -> Option<usize> {
        let country = self.resolve_with(lookup)?;
        table
            .iter()
            .position(|code| code.as_ref() == country.alpha3)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
