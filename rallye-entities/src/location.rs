use crate::{
    geo::MapPoint,
    id::{LocationId, RallyId},
};

/// A single checkpoint belonging to exactly one rally.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub rally_id: RallyId,
    pub name: String,
    pub description: String,
    pub pos: MapPoint,
}
