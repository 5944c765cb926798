use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display identity of a participant, as resolved by the identity directory.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}
