use crate::{
    geo::MapPoint,
    id::{LocationId, RallyId},
    time::Timestamp,
};

/// Per-request projection of a rally together with its checkpoints.
///
/// Views are never persisted. They are folded from the flat rows of a
/// rally/location join and decorated with derived fields afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RallyView {
    pub id: RallyId,
    pub title: String,
    pub description: String,
    pub creator_name: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub users_count: u64,
    pub reward_points: u32,
    pub locations: Vec<LocationView>,
    /// Unweighted mean of the checkpoint positions, used as a map marker.
    /// `None` if the rally has no checkpoints.
    pub center: Option<MapPoint>,
    /// Whether all checkpoints have been visited. Only present in views
    /// that carry visit flags.
    pub complete: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationView {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub pos: MapPoint,
    /// Present in views scoped to a participant.
    pub visited: Option<bool>,
}
