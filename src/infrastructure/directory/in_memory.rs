use crate::core::errors::LedgerError;
use crate::core::models::{TripProfile, UserIdentity};
use crate::infrastructure::directory::{IdentityDirectory, TripDirectory};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory trip and identity registry backing both directory traits.
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    trips: Arc<RwLock<HashMap<String, TripRecord>>>,
    users: Arc<RwLock<HashMap<String, UserIdentity>>>,
}

struct TripRecord {
    profile: TripProfile,
    owner_id: String,
    collaborators: Vec<Collaborator>,
}

struct Collaborator {
    user_id: String,
    accepted: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register_identity(&self, identity: UserIdentity) {
        self.users.write().await.insert(identity.id.clone(), identity);
    }

    pub async fn upsert_trip(&self, profile: TripProfile, owner_id: &str) {
        self.trips.write().await.insert(
            profile.id.clone(),
            TripRecord {
                profile,
                owner_id: owner_id.to_string(),
                collaborators: Vec::new(),
            },
        );
    }

    pub async fn invite(&self, trip_id: &str, user_id: &str) {
        if let Some(record) = self.trips.write().await.get_mut(trip_id) {
            record.collaborators.push(Collaborator {
                user_id: user_id.to_string(),
                accepted: false,
            });
        }
    }

    pub async fn accept_invitation(&self, trip_id: &str, user_id: &str) {
        if let Some(record) = self.trips.write().await.get_mut(trip_id) {
            for collaborator in record
                .collaborators
                .iter_mut()
                .filter(|c| c.user_id == user_id)
            {
                collaborator.accepted = true;
            }
        }
    }

    pub async fn remove_collaborator(&self, trip_id: &str, user_id: &str) {
        if let Some(record) = self.trips.write().await.get_mut(trip_id) {
            record.collaborators.retain(|c| c.user_id != user_id);
        }
    }
}

#[async_trait]
impl TripDirectory for InMemoryDirectory {
    async fn trip_profile(&self, trip_id: &str) -> Result<Option<TripProfile>, LedgerError> {
        let trips = self.trips.read().await;
        Ok(trips.get(trip_id).map(|record| record.profile.clone()))
    }

    async fn trip_participants(&self, trip_id: &str) -> Result<Vec<String>, LedgerError> {
        let trips = self.trips.read().await;
        Ok(trips
            .get(trip_id)
            .map(|record| {
                let mut participants = vec![record.owner_id.clone()];
                participants.extend(
                    record
                        .collaborators
                        .iter()
                        .filter(|c| c.accepted)
                        .map(|c| c.user_id.clone()),
                );
                participants
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryDirectory {
    async fn display_identity(&self, user_id: &str) -> Result<Option<UserIdentity>, LedgerError> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }
}
