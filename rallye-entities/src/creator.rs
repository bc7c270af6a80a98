use crate::id::CreatorId;

/// An organizer account that owns rallies.
///
/// Creators are registered by the authentication layer and referenced
/// here by the external identity they signed in with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub id: CreatorId,
    pub external_id: String,
    pub username: String,
}
