//! Participant and invite views.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EmailAddress, Timestamp};
use crate::domain::EntityId;

/// Person invited to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    /// User identifier.
    pub id: EntityId,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact address.
    pub email: EmailAddress,
}

/// `{"participants": [Participant]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantList {
    /// Invited participants.
    pub participants: Vec<Participant>,
}

/// Participant who accepted the invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AcceptedParticipant {
    /// User identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: EmailAddress,
    /// Acceptance time.
    pub accepted_at: Timestamp,
    /// Whether the participant has settled.
    pub settled: bool,
    /// Settlement time.
    pub settled_at: Option<Timestamp>,
}

/// `{"participants": [AcceptedParticipant]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AcceptedParticipantList {
    /// Accepted participants.
    pub participants: Vec<AcceptedParticipant>,
}

/// Invite a user has not answered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PendingInvite {
    /// Event the invite is for.
    pub event_id: EntityId,
    /// Name of that event.
    pub event_name: String,
    /// When the invite was sent.
    pub invited_at: Option<Timestamp>,
    /// Who sent it.
    pub invited_by: Option<String>,
}

/// `{"invites": [PendingInvite]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PendingInviteList {
    /// Unanswered invites.
    pub invites: Vec<PendingInvite>,
}
