// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamps in seconds.

use rallye_core::{entities::*, repositories::RallyLocationRow};

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = rallies)]
pub struct NewRally<'a, 'b> {
    pub creator_id: i64,
    pub title: &'a str,
    pub description: &'b str,
    pub start_at: i64,
    pub end_at: i64,
    pub reward_points: i32,
}

#[derive(Insertable)]
#[diesel(table_name = locations)]
pub struct NewLocation<'a, 'b> {
    pub rally_id: i64,
    pub name: &'a str,
    pub description: &'b str,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Insertable)]
#[diesel(table_name = rallies_to_users)]
pub struct NewRallyMembership {
    pub rally_id: i64,
    pub user_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = locations_to_users)]
pub struct NewLocationVisit {
    pub location_id: i64,
    pub user_id: i64,
    pub visited: bool,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a, 'b, 'c> {
    pub hash: &'a str,
    pub username: &'b str,
    pub email: &'c str,
    pub exp: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub hash: String,
    pub username: String,
    pub email: String,
    pub exp: i64,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            hash,
            username,
            email,
            exp,
        } = from;
        Self {
            id: id.into(),
            hash,
            username,
            email,
            exp,
        }
    }
}

#[derive(Queryable)]
pub struct LocationVisitEntity {
    pub location_id: i64,
    pub user_id: i64,
    pub visited: bool,
}

impl From<LocationVisitEntity> for LocationVisit {
    fn from(from: LocationVisitEntity) -> Self {
        let LocationVisitEntity {
            location_id,
            user_id,
            visited,
        } = from;
        Self {
            location_id: location_id.into(),
            user_id: user_id.into(),
            visited,
        }
    }
}

/// One row of the rally/location/creator join.
#[derive(Queryable)]
pub struct JoinedRallyLocation {
    pub rally_id: i64,
    pub title: String,
    pub description: String,
    pub start_at: i64,
    pub end_at: i64,
    pub users_count: i64,
    pub reward_points: i32,
    pub creator_name: String,
    pub location_id: i64,
    pub location_name: String,
    pub location_description: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<JoinedRallyLocation> for RallyLocationRow {
    fn from(from: JoinedRallyLocation) -> Self {
        let JoinedRallyLocation {
            rally_id,
            title,
            description,
            start_at,
            end_at,
            users_count,
            reward_points,
            creator_name,
            location_id,
            location_name,
            location_description,
            lat,
            lng,
        } = from;
        Self {
            rally_id: rally_id.into(),
            title,
            description,
            creator_name,
            start_at: Timestamp::from_seconds(start_at),
            end_at: Timestamp::from_seconds(end_at),
            users_count: users_count.max(0) as u64,
            reward_points: reward_points.max(0) as u32,
            location_id: location_id.into(),
            location_name,
            location_description,
            pos: MapPoint::from_lat_lng_deg(lat, lng),
            visited: None,
        }
    }
}

/// Like [`JoinedRallyLocation`], additionally carrying the visit flag
/// of the participant the query was scoped to.
#[derive(Queryable)]
pub struct JoinedRallyLocationWithVisit {
    pub rally_id: i64,
    pub title: String,
    pub description: String,
    pub start_at: i64,
    pub end_at: i64,
    pub users_count: i64,
    pub reward_points: i32,
    pub creator_name: String,
    pub location_id: i64,
    pub location_name: String,
    pub location_description: String,
    pub lat: f64,
    pub lng: f64,
    pub visited: bool,
}

impl From<JoinedRallyLocationWithVisit> for RallyLocationRow {
    fn from(from: JoinedRallyLocationWithVisit) -> Self {
        let JoinedRallyLocationWithVisit {
            rally_id,
            title,
            description,
            start_at,
            end_at,
            users_count,
            reward_points,
            creator_name,
            location_id,
            location_name,
            location_description,
            lat,
            lng,
            visited,
        } = from;
        Self {
            rally_id: rally_id.into(),
            title,
            description,
            creator_name,
            start_at: Timestamp::from_seconds(start_at),
            end_at: Timestamp::from_seconds(end_at),
            users_count: users_count.max(0) as u64,
            reward_points: reward_points.max(0) as u32,
            location_id: location_id.into(),
            location_name,
            location_description,
            pos: MapPoint::from_lat_lng_deg(lat, lng),
            visited: Some(visited),
        }
    }
}
