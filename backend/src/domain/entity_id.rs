//! Identifiers of upstream entities.
//!
//! The DB Handler keys events and users either by integer or by UUID, so
//! path parameters accept both and reject everything else before any
//! upstream call is made.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Error;

/// Integer or UUID identifier.
///
/// Serialises exactly as received: integers as JSON numbers, UUIDs as
/// hyphenated strings.
///
/// # Examples
/// ```
/// use events_gateway::domain::EntityId;
///
/// let numeric: EntityId = "42".parse().unwrap();
/// assert_eq!(numeric, EntityId::Numeric(42));
/// let uuid: EntityId = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
/// assert!(matches!(uuid, EntityId::Uuid(_)));
/// assert!("abc".parse::<EntityId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EntityId {
    /// Integer key.
    Numeric(i64),
    /// UUID key.
    Uuid(Uuid),
}

/// Rejected identifier text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is neither an integer nor a UUID")]
pub struct EntityIdError {
    value: String,
}

impl FromStr for EntityId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(number) = s.parse::<i64>() {
            return Ok(Self::Numeric(number));
        }
        Uuid::parse_str(s).map(Self::Uuid).map_err(|_| EntityIdError {
            value: s.to_owned(),
        })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(number) => write!(f, "{number}"),
            Self::Uuid(uuid) => write!(f, "{uuid}"),
        }
    }
}

/// Parse a path parameter, naming the parameter in the failure message.
///
/// # Errors
/// [`crate::domain::ErrorKind::InvalidInput`] when the text is not an id.
pub fn parse_entity_id(raw: &str, parameter: &str) -> Result<EntityId, Error> {
    raw.parse()
        .map_err(|err: EntityIdError| Error::invalid_input(format!("{parameter}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("0", EntityId::Numeric(0))]
    #[case("-7", EntityId::Numeric(-7))]
    #[case(
        "123e4567-e89b-12d3-a456-426614174000",
        EntityId::Uuid(Uuid::from_u128(0x123e4567_e89b_12d3_a456_426614174000))
    )]
    fn parses_integers_and_uuids(#[case] raw: &str, #[case] expected: EntityId) {
        assert_eq!(raw.parse::<EntityId>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("1.5")]
    #[case("99999999999999999999")]
    #[case("abcdef12-3456-7890-abcd")]
    fn malformed_path_ids_are_invalid_input(#[case] raw: &str) {
        let error = parse_entity_id(raw, "event_id").expect_err("must be rejected");
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
        assert!(error.message().starts_with("event_id: "));
    }

    #[rstest]
    fn json_form_is_preserved() {
        let numeric: EntityId = serde_json::from_value(json!(1)).expect("number id");
        let uuid: EntityId =
            serde_json::from_value(json!("123e4567-e89b-12d3-a456-426614174000")).expect("uuid id");
        assert_eq!(serde_json::to_value(numeric).expect("serialise"), json!(1));
        assert_eq!(
            serde_json::to_value(uuid).expect("serialise"),
            json!("123e4567-e89b-12d3-a456-426614174000")
        );
        assert!(serde_json::from_value::<EntityId>(json!(true)).is_err());
    }
}
