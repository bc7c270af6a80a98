// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// One row of the denormalized rally/location join.
///
/// The rally columns are repeated for every checkpoint of the rally.
#[derive(Debug, Clone, PartialEq)]
pub struct RallyLocationRow {
    pub rally_id: RallyId,
    pub title: String,
    pub description: String,
    pub creator_name: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub users_count: u64,
    pub reward_points: u32,
    pub location_id: LocationId,
    pub location_name: String,
    pub location_description: String,
    pub pos: MapPoint,
    /// Only loaded by participant-scoped queries.
    pub visited: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewRallyRecord {
    pub creator_id: CreatorId,
    pub title: String,
    pub description: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub reward_points: u32,
}

#[derive(Debug, Clone)]
pub struct NewLocationRecord {
    pub rally_id: RallyId,
    pub name: String,
    pub description: String,
    pub pos: MapPoint,
}

#[derive(Debug, Clone, Copy)]
pub struct NewVisitRecord {
    pub location_id: LocationId,
    pub user_id: UserId,
    pub visited: bool,
}

#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub hash: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewCreatorRecord {
    pub external_id: String,
    pub username: String,
}

pub trait RallyRepo {
    fn create_rally(&self, rally: &NewRallyRecord) -> Result<RallyId>;

    /// Rows of all rallies whose time window has not yet elapsed.
    fn active_rally_rows(&self, now: Timestamp) -> Result<Vec<RallyLocationRow>>;

    /// Rows of the rallies the given user participates in, carrying
    /// the user's visit flags.
    fn chosen_rally_rows(&self, user_id: UserId) -> Result<Vec<RallyLocationRow>>;

    /// Rows of all rallies owned by the given creator, expired ones
    /// included.
    fn created_rally_rows(&self, creator_external_id: &str) -> Result<Vec<RallyLocationRow>>;

    /// Adjusts the denormalized participant counter in place.
    ///
    /// Implementations must express this as an atomic increment, not as
    /// a read followed by a write.
    fn adjust_users_count(&self, rally_id: RallyId, delta: i64) -> Result<()>;

    fn users_count_of_rally(&self, rally_id: RallyId) -> Result<u64>;
}

pub trait LocationRepo {
    fn create_locations(&self, locations: &[NewLocationRecord]) -> Result<()>;
    fn location_ids_of_rally(&self, rally_id: RallyId) -> Result<Vec<LocationId>>;
}

pub trait MembershipRepo {
    fn membership_exists(&self, user_id: UserId, rally_id: RallyId) -> Result<bool>;
    fn create_membership(&self, user_id: UserId, rally_id: RallyId) -> Result<()>;
    fn delete_membership(&self, user_id: UserId, rally_id: RallyId) -> Result<()>;
    fn rally_ids_of_user(&self, user_id: UserId) -> Result<Vec<RallyId>>;
}

pub trait VisitRepo {
    fn create_visits(&self, visits: &[NewVisitRecord]) -> Result<()>;
    fn delete_visits(&self, user_id: UserId, location_ids: &[LocationId]) -> Result<()>;

    /// Updates the visit flag of a single checkpoint. Touching a pair
    /// without a visit record is a silent no-op, like the underlying
    /// `UPDATE` statement.
    fn set_visited(&self, user_id: UserId, location_id: LocationId, visited: bool) -> Result<()>;

    fn visits_of_user(&self, user_id: UserId) -> Result<Vec<LocationVisit>>;
}

pub trait CreatorRepo {
    /// Resolves the external identity of an organizer to the internal id.
    fn resolve_creator(&self, external_id: &str) -> Result<Option<CreatorId>>;

    /// Registers an organizer account.
    ///
    /// Only the authentication layer and the seeding tool register
    /// creators, the use cases never do.
    fn create_creator(&self, creator: &NewCreatorRecord) -> Result<CreatorId>;
}

pub trait UserRepo {
    fn create_user(&self, user: &NewUserRecord) -> Result<User>;
    fn try_get_user_by_hash(&self, hash: &str) -> Result<Option<User>>;
    fn delete_user_by_hash(&self, hash: &str) -> Result<()>;

    /// Credits experience points with an atomic in-place increment.
    fn award_points(&self, user_id: UserId, points: u32) -> Result<()>;
}
