//! Authenticated customer identity.

use uuid::Uuid;

/// Read-only view of the session collaborator's resolved user.
///
/// Login, signup and session refresh happen outside this crate; a route
/// guard ensures checkout is only reached with an identity present, so
/// guest checkout never occurs here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerIdentity {
    pub user_uuid: Uuid,
    pub email: String,
    /// Display name from the identity provider's user metadata, when set.
    pub full_name: Option<String>,
}
