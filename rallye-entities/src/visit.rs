use crate::id::{LocationId, UserId};

/// A per-user, per-location flag marking whether a checkpoint has been
/// reached.
///
/// Visit records exist exactly as long as the owning rally membership:
/// one is created for every checkpoint of a rally when the user joins
/// and all of them are removed when the user leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationVisit {
    pub location_id: LocationId,
    pub user_id: UserId,
    pub visited: bool,
}
