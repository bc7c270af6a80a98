use crate::id::{RallyId, UserId};

/// A user's opt-in participation in a rally.
///
/// The pair is unique, a user is in a rally at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RallyMembership {
    pub rally_id: RallyId,
    pub user_id: UserId,
}
