//! Resource data models.
//!
//! Purpose: define the records the DB Handler returns and this gateway
//! passes through. Types carry structural invariants only (required fields,
//! primitive formats) and no behaviour. Fields the DB Handler adds beyond
//! these shapes are ignored.
//!
//! Public surface:
//! - Timestamp, Amount, CurrencyCode, EmailAddress: validated scalars.
//! - Event views (EventData, EventSettlementStatus, EventQuickInfo, ...).
//! - Participant views (Participant, AcceptedParticipant, PendingInvite).
//! - Money views (EventTransactionItem, UserFinancialSummary).
//! - ValidationIssuesReport.

pub mod events;
pub mod participants;
pub mod primitives;
pub mod reports;
pub mod transactions;

pub use self::events::{
    EventData, EventLocation, EventLocationList, EventQuickInfo, EventQuickInfoList,
    EventSettlementStatus, EventSummary, EventSummaryList, Location, ParticipantSettlementStatus,
};
pub use self::participants::{
    AcceptedParticipant, AcceptedParticipantList, Participant, ParticipantList, PendingInvite,
    PendingInviteList,
};
pub use self::primitives::{Amount, CurrencyCode, EmailAddress, PrimitiveError, Timestamp};
pub use self::reports::{
    DeclarationIssue, OrphanedTransaction, TotalMismatch, ValidationIssuesReport,
};
pub use self::transactions::{
    EventFinancialBreakdown, EventTransactionItem, EventTransactionList, TimeRange,
    UserFinancialSummary,
};
