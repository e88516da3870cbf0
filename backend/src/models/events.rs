//! Event-centred resource views.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CurrencyCode, Participant, Timestamp};
use crate::domain::EntityId;

/// A place visited during an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    /// Location identifier.
    pub id: EntityId,
    /// Display name.
    #[schema(example = "Old Town Square")]
    pub name: String,
    /// Arrival time.
    pub entered_at: Timestamp,
    /// Departure time.
    pub exited_at: Timestamp,
}

/// Full event record.
///
/// Only `id` and `name` are required. Optional parts are omitted from the
/// response when the DB Handler does not send them.
///
/// # Examples
/// ```
/// use events_gateway::models::EventData;
/// use serde_json::json;
///
/// let body = json!({"id": 1, "name": "Trip", "total_cost": 123.45});
/// let event: EventData = serde_json::from_value(body.clone()).unwrap();
/// assert_eq!(serde_json::to_value(&event).unwrap(), body);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventData {
    /// Event identifier.
    pub id: EntityId,
    /// Event name.
    #[schema(example = "Trip")]
    pub name: String,
    /// When the event was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<Timestamp>,
    /// When the event was closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<Timestamp>,
    /// Places visited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    /// Invited participants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,
    /// Event owners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<Participant>>,
    /// Sum of all transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 123.45)]
    pub total_cost: Option<f64>,
}

/// `{"summary": EventData}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventSummary {
    /// The event.
    pub summary: EventData,
}

/// `{"summaries": [EventSummary]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventSummaryList {
    /// One entry per event in the requested range.
    pub summaries: Vec<EventSummary>,
}

/// Location as listed for one event, coordinates included when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventLocation {
    /// Location identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Arrival time.
    pub entered_at: Option<Timestamp>,
    /// Departure time.
    pub exited_at: Option<Timestamp>,
    /// WGS84 latitude.
    pub latitude: Option<f64>,
    /// WGS84 longitude.
    pub longitude: Option<f64>,
}

/// `{"locations": [EventLocation]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventLocationList {
    /// Locations of the event.
    pub locations: Vec<EventLocation>,
}

/// Settlement state of one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantSettlementStatus {
    /// Participant identifier.
    pub participant_id: EntityId,
    /// Display name.
    pub name: String,
    /// Contact address as stored upstream; not validated.
    pub email: String,
    /// Whether the invite was accepted.
    pub accepted: bool,
    /// Acceptance time.
    pub accepted_at: Option<Timestamp>,
    /// Whether the participant has settled.
    pub settled: bool,
    /// Settlement time.
    pub settled_at: Option<Timestamp>,
    /// Amount spent within the event.
    #[schema(example = 12.5)]
    pub total_spent: f64,
    /// Currency of `total_spent`.
    #[serde(default = "CurrencyCode::pln")]
    pub currency: CurrencyCode,
}

/// Settlement overview of one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventSettlementStatus {
    /// Event identifier.
    pub event_id: EntityId,
    /// Per-participant state.
    pub participants: Vec<ParticipantSettlementStatus>,
}

/// Compact event card used by user-centred lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventQuickInfo {
    /// Event identifier.
    pub id: EntityId,
    /// Event name.
    pub name: String,
    /// When the event was opened.
    pub opened_at: Timestamp,
    /// When the event was closed, if it was.
    pub closed_at: Option<Timestamp>,
    /// Number of participants.
    pub participant_count: u32,
    /// Number of locations.
    pub location_count: u32,
    /// Number of transactions.
    pub transaction_count: u32,
}

/// `{"events": [EventQuickInfo]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventQuickInfoList {
    /// Matching events.
    pub events: Vec<EventQuickInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn full_event_keeps_every_field() {
        let body = json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "name": "Trip",
            "opened_at": "2025-07-01T08:00:00Z",
            "closed_at": "2025-07-03T18:30:00Z",
            "locations": [{
                "id": 4,
                "name": "Harbour",
                "entered_at": "2025-07-01T09:00:00Z",
                "exited_at": "2025-07-01T11:00:00Z"
            }],
            "participants": [{"id": 2, "name": "Ada", "email": "ada@example.com"}],
            "owners": [],
            "total_cost": 99.5
        });
        let event: EventData = serde_json::from_value(body.clone()).expect("event");
        assert_eq!(serde_json::to_value(&event).expect("serialise"), body);
    }

    #[rstest]
    #[case(json!({"name": "Trip"}))]
    #[case(json!({"id": 1}))]
    #[case(json!({"id": 1, "name": "Trip", "opened_at": "yesterday"}))]
    #[case(json!({
        "id": 1,
        "name": "Trip",
        "participants": [{"id": 2, "name": "Ada", "email": "nope"}]
    }))]
    fn structurally_invalid_events_are_rejected(#[case] body: Value) {
        assert!(serde_json::from_value::<EventData>(body).is_err());
    }

    #[rstest]
    fn settlement_currency_defaults_to_pln() {
        let status: ParticipantSettlementStatus = serde_json::from_value(json!({
            "participant_id": 3,
            "name": "Ada",
            "email": "ada@example.com",
            "accepted": true,
            "accepted_at": null,
            "settled": false,
            "settled_at": null,
            "total_spent": 12.5
        }))
        .expect("status");
        assert_eq!(status.currency, CurrencyCode::pln());
        assert!((status.total_spent - 12.5).abs() < f64::EPSILON);
    }

    #[rstest]
    fn settlement_status_keeps_upstream_field_types() {
        let body = json!({
            "event_id": 1,
            "participants": [{
                "participant_id": 3,
                "name": "Ada",
                "email": "ada@localhost",
                "accepted": true,
                "accepted_at": "2025-07-01T08:00:00Z",
                "settled": false,
                "settled_at": null,
                "total_spent": 12.5,
                "currency": "EUR"
            }]
        });
        let status: EventSettlementStatus = serde_json::from_value(body.clone()).expect("status");
        assert_eq!(serde_json::to_value(&status).expect("serialise"), body);
    }
}
