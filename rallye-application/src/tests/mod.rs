pub mod prelude {

    pub use rallye_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            rallye_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_creator(&self, external_id: &str, username: &str) -> CreatorId {
            let mut connection = self.db_connections.exclusive().unwrap();
            connection
                .transaction(|conn| {
                    conn.create_creator(&NewCreatorRecord {
                        external_id: external_id.into(),
                        username: username.into(),
                    })
                })
                .unwrap()
        }

        pub fn create_user(&self, hash: &str, username: &str) -> User {
            flows::register_user(
                &self.db_connections,
                usecases::NewUser {
                    hash: hash.into(),
                    username: username.into(),
                    email: format!("{username}@example.org"),
                },
            )
            .unwrap()
        }

        pub fn create_rally(
            &self,
            creator_external_id: &str,
            title: &str,
            end_at: i64,
            checkpoints: &[(f64, f64)],
        ) -> RallyId {
            flows::create_rally(
                &self.db_connections,
                usecases::NewRally {
                    creator_external_id: creator_external_id.into(),
                    title: title.into(),
                    description: "".into(),
                    start_at: Timestamp::from_seconds(-1000),
                    end_at: Timestamp::from_seconds(end_at),
                    reward_points: 10,
                    locations: checkpoints
                        .iter()
                        .enumerate()
                        .map(|(nr, (lat, lng))| usecases::NewRallyLocation {
                            name: format!("checkpoint {nr}"),
                            description: "".into(),
                            lat: lat.to_string(),
                            lng: lng.to_string(),
                        })
                        .collect(),
                },
            )
            .unwrap()
        }

        pub fn users_count(&self, rally_id: RallyId) -> u64 {
            self.db_connections
                .shared()
                .unwrap()
                .users_count_of_rally(rally_id)
                .unwrap()
        }

        pub fn visits_of_user(&self, user_id: UserId) -> Vec<LocationVisit> {
            self.db_connections
                .shared()
                .unwrap()
                .visits_of_user(user_id)
                .unwrap()
        }
    }
}

use self::prelude::*;

const NOW: Timestamp = Timestamp::from_seconds(0);

#[test]
fn join_and_leave_a_rally() {
    let fixture = BackendFixture::new();
    fixture.create_creator("creator-1", "tourist-board");
    let rally_id = fixture.create_rally("creator-1", "Old town tour", 1000, &[(0.0, 0.0), (2.0, 4.0)]);
    let user = fixture.create_user("h1", "wanderer");

    flows::toggle_rally(&fixture.db_connections, user.id, rally_id, true).unwrap();
    assert_eq!(1, fixture.users_count(rally_id));
    let visits = fixture.visits_of_user(user.id);
    assert_eq!(2, visits.len());
    assert!(visits.iter().all(|v| !v.visited));

    // Joining again neither double-counts nor duplicates visit records.
    flows::toggle_rally(&fixture.db_connections, user.id, rally_id, true).unwrap();
    assert_eq!(1, fixture.users_count(rally_id));
    assert_eq!(2, fixture.visits_of_user(user.id).len());

    flows::toggle_rally(&fixture.db_connections, user.id, rally_id, false).unwrap();
    assert_eq!(0, fixture.users_count(rally_id));
    assert!(fixture.visits_of_user(user.id).is_empty());
}

#[test]
fn counter_counts_every_participant() {
    let fixture = BackendFixture::new();
    fixture.create_creator("creator-1", "tourist-board");
    let rally_id = fixture.create_rally("creator-1", "Old town tour", 1000, &[(0.0, 0.0)]);
    let first = fixture.create_user("h1", "wanderer");
    let second = fixture.create_user("h2", "rambler");

    flows::toggle_rally(&fixture.db_connections, first.id, rally_id, true).unwrap();
    flows::toggle_rally(&fixture.db_connections, second.id, rally_id, true).unwrap();
    assert_eq!(2, fixture.users_count(rally_id));

    flows::toggle_rally(&fixture.db_connections, first.id, rally_id, false).unwrap();
    assert_eq!(1, fixture.users_count(rally_id));
}

#[test]
fn created_rally_shows_up_with_centroid() {
    let fixture = BackendFixture::new();
    fixture.create_creator("creator-1", "tourist-board");
    let rally_id = fixture.create_rally("creator-1", "Old town tour", 1000, &[(0.0, 0.0), (2.0, 4.0)]);

    let views = flows::all_rallies(&fixture.db_connections, NOW).unwrap();
    assert_eq!(1, views.len());
    let view = &views[0];
    assert_eq!(rally_id, view.id);
    assert_eq!("tourist-board", view.creator_name);
    assert_eq!(2, view.locations.len());
    assert_eq!(
        (1.0, 2.0),
        view.center.unwrap().to_lat_lng_deg()
    );
    assert_eq!(None, view.complete);
}

#[test]
fn unresolved_creator_persists_nothing() {
    let fixture = BackendFixture::new();
    fixture.create_creator("creator-1", "tourist-board");

    let result = flows::create_rally(
        &fixture.db_connections,
        usecases::NewRally {
            creator_external_id: "creator-2".into(),
            title: "Ghost rally".into(),
            description: "".into(),
            start_at: Timestamp::from_seconds(0),
            end_at: Timestamp::from_seconds(1000),
            reward_points: 0,
            locations: vec![usecases::NewRallyLocation {
                name: "Nowhere".into(),
                description: "".into(),
                lat: "0.0".into(),
                lng: "0.0".into(),
            }],
        },
    );
    assert!(matches!(
        result,
        Err(AppError::Business(crate::error::BError::Parameter(
            usecases::Error::CreatorNotFound
        )))
    ));
    assert!(flows::all_rallies(&fixture.db_connections, NOW)
        .unwrap()
        .is_empty());
    assert!(
        flows::created_rallies(&fixture.db_connections, "creator-2")
            .unwrap()
            .is_empty()
    );
}

#[test]
fn chosen_and_not_chosen_are_complementary() {
    let fixture = BackendFixture::new();
    fixture.create_creator("creator-1", "tourist-board");
    let first = fixture.create_rally("creator-1", "Old town tour", 1000, &[(0.0, 0.0)]);
    let second = fixture.create_rally("creator-1", "Harbour walk", 1000, &[(1.0, 1.0)]);
    let user = fixture.create_user("h1", "wanderer");

    flows::toggle_rally(&fixture.db_connections, user.id, first, true).unwrap();

    let chosen: Vec<_> = flows::chosen_rallies(&fixture.db_connections, user.id)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    let not_chosen: Vec<_> = flows::not_chosen_rallies(&fixture.db_connections, user.id, NOW)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(vec![first], chosen);
    assert_eq!(vec![second], not_chosen);
}

#[test]
fn marking_all_checkpoints_completes_the_rally() {
    let fixture = BackendFixture::new();
    fixture.create_creator("creator-1", "tourist-board");
    let rally_id = fixture.create_rally("creator-1", "Old town tour", 1000, &[(0.0, 0.0), (2.0, 4.0)]);
    let user = fixture.create_user("h1", "wanderer");
    flows::toggle_rally(&fixture.db_connections, user.id, rally_id, true).unwrap();

    let location_ids: Vec<_> = flows::chosen_rallies(&fixture.db_connections, user.id)
        .unwrap()[0]
        .locations
        .iter()
        .map(|l| l.id)
        .collect();

    flows::toggle_location(&fixture.db_connections, user.id, location_ids[0], true).unwrap();
    let views = flows::chosen_rallies(&fixture.db_connections, user.id).unwrap();
    assert_eq!(Some(false), views[0].complete);

    flows::toggle_location(&fixture.db_connections, user.id, location_ids[1], true).unwrap();
    let views = flows::chosen_rallies(&fixture.db_connections, user.id).unwrap();
    assert_eq!(Some(true), views[0].complete);

    // Unmarking flips it back.
    flows::toggle_location(&fixture.db_connections, user.id, location_ids[1], false).unwrap();
    let views = flows::chosen_rallies(&fixture.db_connections, user.id).unwrap();
    assert_eq!(Some(false), views[0].complete);
}

#[test]
fn expired_rallies_are_only_visible_to_their_creator() {
    let fixture = BackendFixture::new();
    fixture.create_creator("creator-1", "tourist-board");
    fixture.create_rally("creator-1", "Bygone rally", -10, &[(0.0, 0.0)]);

    assert!(flows::all_rallies(&fixture.db_connections, NOW)
        .unwrap()
        .is_empty());
    assert_eq!(
        1,
        flows::created_rallies(&fixture.db_connections, "creator-1")
            .unwrap()
            .len()
    );
}

#[test]
fn reward_points_accumulate_on_the_account() {
    let fixture = BackendFixture::new();
    let user = fixture.create_user("h1", "wanderer");

    flows::award_points(&fixture.db_connections, user.id, 10).unwrap();
    flows::award_points(&fixture.db_connections, user.id, 20).unwrap();

    let user = flows::get_user(&fixture.db_connections, "h1").unwrap().unwrap();
    assert_eq!(30, user.exp);
}

#[test]
fn deleted_users_are_gone() {
    let fixture = BackendFixture::new();
    fixture.create_user("h1", "wanderer");
    flows::delete_user(&fixture.db_connections, "h1").unwrap();
    assert_eq!(None, flows::get_user(&fixture.db_connections, "h1").unwrap());
}
