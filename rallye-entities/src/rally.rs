use crate::{
    id::{CreatorId, RallyId},
    time::Timestamp,
};

/// A themed collection of geographic checkpoints with a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct Rally {
    pub id: RallyId,
    pub creator_id: CreatorId,
    pub title: String,
    pub description: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    /// Denormalized number of participants, kept in sync with the
    /// membership relation by the membership use cases.
    pub users_count: u64,
    pub reward_points: u32,
}

impl Rally {
    /// Rallies are listed for participants until their time window has elapsed.
    pub fn is_active(&self, now: Timestamp) -> bool {
        self.end_at > now
    }
}
