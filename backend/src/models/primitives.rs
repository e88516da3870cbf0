//! Validated scalar types shared by the resource DTOs.
//!
//! Each type checks its structural invariant while deserialising, so a
//! payload that violates it fails shape resolution instead of leaking
//! through to clients.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

use crate::domain::parse_iso_instant;

/// Structural violations of the primitives below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    /// Not a strict ISO-8601 date or date-time.
    #[error("'{0}' is not an ISO 8601 timestamp")]
    Timestamp(String),
    /// Not a plain decimal number.
    #[error("'{0}' is not a decimal amount")]
    Amount(String),
    /// Not exactly three characters.
    #[error("currency code '{0}' must be exactly 3 characters")]
    Currency(String),
    /// Not a well-formed address.
    #[error("'{0}' is not a valid email address")]
    Email(String),
}

/// UTC instant, serialised as RFC 3339 with a `Z` suffix.
///
/// # Examples
/// ```
/// use events_gateway::models::Timestamp;
///
/// let ts: Timestamp = serde_json::from_str("\"2025-07-01T10:00:00+02:00\"").unwrap();
/// assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2025-07-01T08:00:00Z\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, format = DateTime, example = "2025-07-01T08:00:00Z")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Underlying instant.
    pub fn instant(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_iso_instant(&value)
            .map(Self)
            .ok_or(PrimitiveError::Timestamp(value))
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// Exact decimal amount.
///
/// Accepted as a JSON number or a decimal string and always emitted as a
/// string, so no precision is lost on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "AmountRepr", into = "String")]
#[schema(value_type = String, example = "123.45")]
pub struct Amount(String);

impl Amount {
    /// Decimal text as received.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Number(Number),
    Text(String),
}

impl TryFrom<AmountRepr> for Amount {
    type Error = PrimitiveError;

    fn try_from(value: AmountRepr) -> Result<Self, Self::Error> {
        let text = match value {
            AmountRepr::Text(text) => text,
            AmountRepr::Number(number) => number_text(&number),
        };
        if is_decimal(&text) {
            Ok(Self(text))
        } else {
            Err(PrimitiveError::Amount(text))
        }
    }
}

impl TryFrom<&str> for Amount {
    type Error = PrimitiveError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(AmountRepr::Text(value.to_owned()))
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn number_text(number: &Number) -> String {
    if number.is_f64() {
        // f64 Display never switches to exponent notation.
        number
            .as_f64()
            .map_or_else(|| number.to_string(), |value| value.to_string())
    } else {
        number.to_string()
    }
}

/// `-?digits(.digits)?`
fn is_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

/// Three-character currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "PLN")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Polish złoty, the upstream default currency.
    pub fn pln() -> Self {
        Self("PLN".to_owned())
    }

    /// Code text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.chars().count() == 3 {
            Ok(Self(value))
        } else {
            Err(PrimitiveError::Currency(value))
        }
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

/// Email address with a minimal structural check.
///
/// Exactly one `@`, a non-empty local part, a dotted domain with no empty
/// labels, and no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "ada@example.com")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Address text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_email(&value) {
            Ok(Self(value))
        } else {
            Err(PrimitiveError::Email(value))
        }
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!("2025-07-01"), "2025-07-01T00:00:00Z")]
    #[case(json!("2025-07-01T10:00:00"), "2025-07-01T10:00:00Z")]
    #[case(json!("2025-07-01T10:00:00.5-01:00"), "2025-07-01T11:00:00.500Z")]
    fn timestamps_normalise_to_utc(#[case] input: Value, #[case] expected: &str) {
        let ts: Timestamp = serde_json::from_value(input).expect("timestamp");
        assert_eq!(ts.to_string(), expected);
    }

    #[rstest]
    #[case(json!("01/07/2025"))]
    #[case(json!(1_720_000_000))]
    fn rejects_non_iso_timestamps(#[case] input: Value) {
        assert!(serde_json::from_value::<Timestamp>(input).is_err());
    }

    #[rstest]
    #[case(json!(123.45), "123.45")]
    #[case(json!(10), "10")]
    #[case(json!(-3), "-3")]
    #[case(json!("0.10"), "0.10")]
    #[case(json!("-42.5"), "-42.5")]
    fn amounts_accept_numbers_and_decimal_text(#[case] input: Value, #[case] expected: &str) {
        let amount: Amount = serde_json::from_value(input).expect("amount");
        assert_eq!(serde_json::to_value(&amount).expect("serialise"), json!(expected));
    }

    #[rstest]
    #[case(json!("12,50"))]
    #[case(json!("1e3"))]
    #[case(json!(".5"))]
    #[case(json!(""))]
    #[case(json!(true))]
    fn amounts_reject_non_decimals(#[case] input: Value) {
        assert!(serde_json::from_value::<Amount>(input).is_err());
    }

    #[rstest]
    #[case("PLN", true)]
    #[case("EUR", true)]
    #[case("ZŁX", true)]
    #[case("EU", false)]
    #[case("EURO", false)]
    fn currency_codes_have_three_characters(#[case] code: &str, #[case] valid: bool) {
        assert_eq!(CurrencyCode::try_from(code.to_owned()).is_ok(), valid);
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("first.last+tag@mail.example.org", true)]
    #[case("ada@localhost", false)]
    #[case("@example.com", false)]
    #[case("ada@@example.com", false)]
    #[case("ada@example..com", false)]
    #[case("ada lovelace@example.com", false)]
    fn emails_are_structurally_checked(#[case] address: &str, #[case] valid: bool) {
        assert_eq!(EmailAddress::try_from(address.to_owned()).is_ok(), valid);
    }
}
