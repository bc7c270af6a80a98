use std::cell::RefCell;

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory double of the relational store for the use case tests.
#[derive(Debug, Default)]
pub struct MockDb {
    pub creators: RefCell<Vec<Creator>>,
    pub users: RefCell<Vec<User>>,
    pub rallies: RefCell<Vec<Rally>>,
    pub locations: RefCell<Vec<Location>>,
    pub memberships: RefCell<Vec<RallyMembership>>,
    pub visits: RefCell<Vec<LocationVisit>>,
}

impl MockDb {
    fn creator_name(&self, creator_id: CreatorId) -> Option<String> {
        self.creators
            .borrow()
            .iter()
            .find(|c| c.id == creator_id)
            .map(|c| c.username.clone())
    }

    fn rows_of_rally(&self, rally: &Rally, creator_name: &str) -> Vec<RallyLocationRow> {
        self.locations
            .borrow()
            .iter()
            .filter(|l| l.rally_id == rally.id)
            .map(|l| join_row(rally, creator_name, l, None))
            .collect()
    }
}

fn join_row(
    rally: &Rally,
    creator_name: &str,
    location: &Location,
    visited: Option<bool>,
) -> RallyLocationRow {
    RallyLocationRow {
        rally_id: rally.id,
        title: rally.title.clone(),
        description: rally.description.clone(),
        creator_name: creator_name.into(),
        start_at: rally.start_at,
        end_at: rally.end_at,
        users_count: rally.users_count,
        reward_points: rally.reward_points,
        location_id: location.id,
        location_name: location.name.clone(),
        location_description: location.description.clone(),
        pos: location.pos,
        visited,
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

impl RallyRepo for MockDb {
    fn create_rally(&self, rally: &NewRallyRecord) -> RepoResult<RallyId> {
        let mut rallies = self.rallies.borrow_mut();
        let id = RallyId::new(next_id(rallies.iter().map(|r| r.id.into_inner())));
        rallies.push(Rally {
            id,
            creator_id: rally.creator_id,
            title: rally.title.clone(),
            description: rally.description.clone(),
            start_at: rally.start_at,
            end_at: rally.end_at,
            users_count: 0,
            reward_points: rally.reward_points,
        });
        Ok(id)
    }

    fn active_rally_rows(&self, now: Timestamp) -> RepoResult<Vec<RallyLocationRow>> {
        Ok(self
            .rallies
            .borrow()
            .iter()
            .filter(|r| r.is_active(now))
            .filter_map(|r| self.creator_name(r.creator_id).map(|name| (r, name)))
            .flat_map(|(r, name)| self.rows_of_rally(r, &name))
            .collect::<Vec<_>>())
    }

    fn chosen_rally_rows(&self, user_id: UserId) -> RepoResult<Vec<RallyLocationRow>> {
        let mut rows = Vec::new();
        for rally in self.rallies.borrow().iter() {
            let is_member = self
                .memberships
                .borrow()
                .iter()
                .any(|m| m.rally_id == rally.id && m.user_id == user_id);
            if !is_member {
                continue;
            }
            let Some(creator_name) = self.creator_name(rally.creator_id) else {
                continue;
            };
            for location in self
                .locations
                .borrow()
                .iter()
                .filter(|l| l.rally_id == rally.id)
            {
                let visit = self
                    .visits
                    .borrow()
                    .iter()
                    .find(|v| v.location_id == location.id && v.user_id == user_id)
                    .map(|v| v.visited);
                if let Some(visited) = visit {
                    rows.push(join_row(rally, &creator_name, location, Some(visited)));
                }
            }
        }
        Ok(rows)
    }

    fn created_rally_rows(&self, creator_external_id: &str) -> RepoResult<Vec<RallyLocationRow>> {
        let creators = self.creators.borrow();
        let Some(creator) = creators
            .iter()
            .find(|c| c.external_id == creator_external_id)
        else {
            return Ok(vec![]);
        };
        Ok(self
            .rallies
            .borrow()
            .iter()
            .filter(|r| r.creator_id == creator.id)
            .flat_map(|r| self.rows_of_rally(r, &creator.username))
            .collect::<Vec<_>>())
    }

    fn adjust_users_count(&self, rally_id: RallyId, delta: i64) -> RepoResult<()> {
        let mut rallies = self.rallies.borrow_mut();
        let rally = rallies
            .iter_mut()
            .find(|r| r.id == rally_id)
            .ok_or(RepoError::NotFound)?;
        rally.users_count = (rally.users_count as i64 + delta).max(0) as u64;
        Ok(())
    }

    fn users_count_of_rally(&self, rally_id: RallyId) -> RepoResult<u64> {
        self.rallies
            .borrow()
            .iter()
            .find(|r| r.id == rally_id)
            .map(|r| r.users_count)
            .ok_or(RepoError::NotFound)
    }
}

impl LocationRepo for MockDb {
    fn create_locations(&self, locations: &[NewLocationRecord]) -> RepoResult<()> {
        let mut all = self.locations.borrow_mut();
        for location in locations {
            let id = LocationId::new(next_id(all.iter().map(|l| l.id.into_inner())));
            all.push(Location {
                id,
                rally_id: location.rally_id,
                name: location.name.clone(),
                description: location.description.clone(),
                pos: location.pos,
            });
        }
        Ok(())
    }

    fn location_ids_of_rally(&self, rally_id: RallyId) -> RepoResult<Vec<LocationId>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|l| l.rally_id == rally_id)
            .map(|l| l.id)
            .collect())
    }
}

impl MembershipRepo for MockDb {
    fn membership_exists(&self, user_id: UserId, rally_id: RallyId) -> RepoResult<bool> {
        Ok(self
            .memberships
            .borrow()
            .iter()
            .any(|m| m.rally_id == rally_id && m.user_id == user_id))
    }

    fn create_membership(&self, user_id: UserId, rally_id: RallyId) -> RepoResult<()> {
        if self.membership_exists(user_id, rally_id)? {
            return Err(RepoError::AlreadyExists);
        }
        self.memberships
            .borrow_mut()
            .push(RallyMembership { rally_id, user_id });
        Ok(())
    }

    fn delete_membership(&self, user_id: UserId, rally_id: RallyId) -> RepoResult<()> {
        self.memberships
            .borrow_mut()
            .retain(|m| !(m.rally_id == rally_id && m.user_id == user_id));
        Ok(())
    }

    fn rally_ids_of_user(&self, user_id: UserId) -> RepoResult<Vec<RallyId>> {
        Ok(self
            .memberships
            .borrow()
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.rally_id)
            .collect())
    }
}

impl VisitRepo for MockDb {
    fn create_visits(&self, visits: &[NewVisitRecord]) -> RepoResult<()> {
        let mut all = self.visits.borrow_mut();
        for visit in visits {
            if all
                .iter()
                .any(|v| v.location_id == visit.location_id && v.user_id == visit.user_id)
            {
                return Err(RepoError::AlreadyExists);
            }
            all.push(LocationVisit {
                location_id: visit.location_id,
                user_id: visit.user_id,
                visited: visit.visited,
            });
        }
        Ok(())
    }

    fn delete_visits(&self, user_id: UserId, location_ids: &[LocationId]) -> RepoResult<()> {
        self.visits
            .borrow_mut()
            .retain(|v| !(v.user_id == user_id && location_ids.contains(&v.location_id)));
        Ok(())
    }

    fn set_visited(
        &self,
        user_id: UserId,
        location_id: LocationId,
        visited: bool,
    ) -> RepoResult<()> {
        if let Some(visit) = self
            .visits
            .borrow_mut()
            .iter_mut()
            .find(|v| v.location_id == location_id && v.user_id == user_id)
        {
            visit.visited = visited;
        }
        Ok(())
    }

    fn visits_of_user(&self, user_id: UserId) -> RepoResult<Vec<LocationVisit>> {
        Ok(self
            .visits
            .borrow()
            .iter()
            .filter(|v| v.user_id == user_id)
            .copied()
            .collect())
    }
}

impl CreatorRepo for MockDb {
    fn resolve_creator(&self, external_id: &str) -> RepoResult<Option<CreatorId>> {
        Ok(self
            .creators
            .borrow()
            .iter()
            .find(|c| c.external_id == external_id)
            .map(|c| c.id))
    }

    fn create_creator(&self, creator: &NewCreatorRecord) -> RepoResult<CreatorId> {
        let mut creators = self.creators.borrow_mut();
        if creators
            .iter()
            .any(|c| c.external_id == creator.external_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        let id = CreatorId::new(next_id(creators.iter().map(|c| c.id.into_inner())));
        creators.push(Creator {
            id,
            external_id: creator.external_id.clone(),
            username: creator.username.clone(),
        });
        Ok(id)
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &NewUserRecord) -> RepoResult<User> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.hash == user.hash) {
            return Err(RepoError::AlreadyExists);
        }
        let created = User {
            id: UserId::new(next_id(users.iter().map(|u| u.id.into_inner()))),
            hash: user.hash.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            exp: 0,
        };
        users.push(created.clone());
        Ok(created)
    }

    fn try_get_user_by_hash(&self, hash: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.hash == hash)
            .cloned())
    }

    fn delete_user_by_hash(&self, hash: &str) -> RepoResult<()> {
        self.users.borrow_mut().retain(|u| u.hash != hash);
        Ok(())
    }

    fn award_points(&self, user_id: UserId, points: u32) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(RepoError::NotFound)?;
        user.exp += i64::from(points);
        Ok(())
    }
}

pub mod fixtures {
    use rallye_entities::builders::Builder as _;

    use super::*;

    pub use super::MockDb;

    pub const USER_ID: UserId = UserId::new(7);
    pub const CREATOR_EXTERNAL_ID: &str = "google-oauth2|demo-creator";

    /// Two rallies of the same creator: rally 1 (checkpoints 10, 11)
    /// expires at t = 100, rally 2 (checkpoint 20) at t = 200. One
    /// registered participant without any memberships.
    pub fn db_with_two_rallies() -> MockDb {
        let db = MockDb::default();
        db.creators.borrow_mut().push(Creator {
            id: CreatorId::new(1),
            external_id: CREATOR_EXTERNAL_ID.into(),
            username: "tourist-board".into(),
        });
        db.users.borrow_mut().push(User {
            id: USER_ID,
            hash: "opaque-session-hash".into(),
            username: "wanderer".into(),
            email: "wanderer@example.org".into(),
            exp: 0,
        });
        db.rallies.borrow_mut().extend([
            Rally::build()
                .id(1)
                .creator_id(1)
                .title("Old town tour")
                .period(Timestamp::from_seconds(-100), Timestamp::from_seconds(100))
                .reward_points(10)
                .finish(),
            Rally::build()
                .id(2)
                .creator_id(1)
                .title("Harbour walk")
                .period(Timestamp::from_seconds(-100), Timestamp::from_seconds(200))
                .reward_points(20)
                .finish(),
        ]);
        db.locations.borrow_mut().extend([
            Location::build()
                .id(10)
                .rally_id(1)
                .name("Town hall")
                .pos(MapPoint::from_lat_lng_deg(0.0, 0.0))
                .finish(),
            Location::build()
                .id(11)
                .rally_id(1)
                .name("Market square")
                .pos(MapPoint::from_lat_lng_deg(2.0, 4.0))
                .finish(),
            Location::build()
                .id(20)
                .rally_id(2)
                .name("Lighthouse")
                .pos(MapPoint::from_lat_lng_deg(1.0, 1.0))
                .finish(),
        ]);
        db
    }
}
