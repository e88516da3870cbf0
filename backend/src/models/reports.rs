//! Data-consistency reports computed by the DB Handler.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Amount;
use crate::domain::EntityId;

/// Participant without a cost declaration for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeclarationIssue {
    /// Affected event.
    pub event_id: EntityId,
    /// Participant missing a declaration.
    pub participant_id: EntityId,
    /// Explanation.
    pub reason: String,
}

/// Event whose declared total differs from its transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TotalMismatch {
    /// Affected event.
    pub event_id: EntityId,
    /// Sum of recorded transactions.
    pub expected_total: Amount,
    /// Total declared on the event.
    pub declared_total: Amount,
}

/// Transaction not attached to any event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrphanedTransaction {
    /// Transaction identifier.
    pub transaction_id: EntityId,
    /// Explanation.
    pub reason: String,
}

/// All inconsistencies found in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssuesReport {
    /// Missing cost declarations.
    pub missing_declarations: Vec<DeclarationIssue>,
    /// Mismatched totals.
    pub mismatched_totals: Vec<TotalMismatch>,
    /// Orphaned transactions.
    pub orphaned_transactions: Vec<OrphanedTransaction>,
}
