//! Money-related views: transactions and financial summaries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Amount, CurrencyCode, Timestamp};
use crate::domain::EntityId;

/// One transaction recorded within an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventTransactionItem {
    /// Transaction identifier.
    pub id: EntityId,
    /// Owning event.
    pub event_id: EntityId,
    /// Total transaction amount.
    pub amount: Amount,
    /// Currency of `amount`.
    pub currency: CurrencyCode,
    /// Free-text note.
    pub description: Option<String>,
    /// When the transaction happened.
    pub timestamp: Timestamp,
    /// Display name of the participant.
    pub participant: String,
}

/// `{"items": [EventTransactionItem]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventTransactionList {
    /// Transactions of the event.
    pub items: Vec<EventTransactionItem>,
}

/// Calendar window a summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeRange {
    /// First day.
    #[schema(value_type = String, format = Date, example = "2025-07-01")]
    pub start: NaiveDate,
    /// Last day.
    #[schema(value_type = String, format = Date, example = "2025-07-10")]
    pub end: NaiveDate,
}

/// Per-event contribution to a financial summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventFinancialBreakdown {
    /// Event identifier.
    pub event_id: EntityId,
    /// Event name.
    pub event_name: String,
    /// Paid by the user within the event.
    pub total_paid: Amount,
    /// Received by the user within the event.
    pub total_received: Amount,
}

/// What a user paid and received over a time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserFinancialSummary {
    /// Paid across all events.
    pub total_paid: Amount,
    /// Received across all events.
    pub total_received: Amount,
    /// Currency of the totals.
    #[serde(default = "CurrencyCode::pln")]
    pub currency: CurrencyCode,
    /// Number of events in the range.
    pub event_count: u32,
    /// Range covered.
    pub time_range: TimeRange,
    /// Per-event breakdown.
    #[serde(default)]
    pub details: Vec<EventFinancialBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn summary_defaults_apply_when_fields_are_missing() {
        let summary: UserFinancialSummary = serde_json::from_value(json!({
            "total_paid": "120.00",
            "total_received": 40,
            "event_count": 2,
            "time_range": {"start": "2025-07-01", "end": "2025-07-10"}
        }))
        .expect("summary");
        assert_eq!(summary.currency, CurrencyCode::pln());
        assert!(summary.details.is_empty());
        assert_eq!(
            serde_json::to_value(&summary).expect("serialise"),
            json!({
                "total_paid": "120.00",
                "total_received": "40",
                "currency": "PLN",
                "event_count": 2,
                "time_range": {"start": "2025-07-01", "end": "2025-07-10"},
                "details": []
            })
        );
    }

    #[rstest]
    fn transaction_currency_must_have_three_characters() {
        let result = serde_json::from_value::<EventTransactionItem>(json!({
            "id": 1,
            "event_id": 1,
            "amount": "10.00",
            "currency": "EURO",
            "description": null,
            "timestamp": "2025-07-01T10:00:00Z",
            "participant": "Ada"
        }));
        let message = result.expect_err("currency must be rejected").to_string();
        assert!(message.contains("exactly 3 characters"), "{message}");
    }
}
