use crate::core::errors::LedgerError;
use crate::core::models::{TripProfile, UserIdentity};
use async_trait::async_trait;

/// Resolves trip budget, currency and the participant set. Participants are
/// the trip owner plus every collaborator with an accepted invitation; how
/// that is determined stays behind this trait.
#[async_trait]
pub trait TripDirectory: Send + Sync {
    async fn trip_profile(&self, trip_id: &str) -> Result<Option<TripProfile>, LedgerError>;

    /// Participant user ids for the trip; empty when the trip is unknown.
    async fn trip_participants(&self, trip_id: &str) -> Result<Vec<String>, LedgerError>;
}

/// Resolves a participant id to a display identity.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    async fn display_identity(&self, user_id: &str) -> Result<Option<UserIdentity>, LedgerError>;
}

pub mod in_memory;
