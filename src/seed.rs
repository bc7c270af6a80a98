use anyhow::Result;

use rallye_application::prelude as flows;
use rallye_core::{
    entities::*,
    repositories::{CreatorRepo as _, LocationRepo as _, NewCreatorRecord},
    usecases,
};
use rallye_db_sqlite::Connections;

/// Replaces the database contents with a small demo dataset: one
/// organizer, two participants and two rallies, with the first
/// participant already taking part in the first rally.
pub fn populate_demo_data(connections: &Connections) -> Result<()> {
    let connection = connections.exclusive()?;
    rallye_db_sqlite::delete_all_data(&connection)?;
    drop(connection);

    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| {
        conn.create_creator(&NewCreatorRecord {
            external_id: "google-oauth2|demo-creator".into(),
            username: "tourist-board".into(),
        })
    })?;
    drop(connection);

    let now = Timestamp::now().into_seconds();
    let in_a_week = now + 7 * 24 * 3600;

    let old_town = flows::create_rally(
        connections,
        new_rally(
            "Old town tour",
            "Historic highlights of the old town.",
            now,
            in_a_week,
            &[
                ("Town hall", "48.137", "11.575"),
                ("Market square", "48.135", "11.576"),
                ("City gate", "48.139", "11.571"),
            ],
        ),
    )?;
    flows::create_rally(
        connections,
        new_rally(
            "Harbour walk",
            "Along the waterfront.",
            now,
            in_a_week,
            &[("Lighthouse", "53.544", "9.966"), ("Pier", "53.546", "9.969")],
        ),
    )?;

    let wanderer = flows::register_user(
        connections,
        usecases::NewUser {
            hash: "demo-wanderer".into(),
            username: "wanderer".into(),
            email: "wanderer@example.org".into(),
        },
    )?;
    flows::register_user(
        connections,
        usecases::NewUser {
            hash: "demo-rambler".into(),
            username: "rambler".into(),
            email: "rambler@example.org".into(),
        },
    )?;

    flows::toggle_rally(connections, wanderer.id, old_town, true)?;
    let first_checkpoint = connections
        .shared()?
        .location_ids_of_rally(old_town)?
        .first()
        .copied();
    if let Some(location_id) = first_checkpoint {
        flows::toggle_location(connections, wanderer.id, location_id, true)?;
    }

    log::info!("Seeded demo data");
    Ok(())
}

fn new_rally(
    title: &str,
    description: &str,
    start_at: i64,
    end_at: i64,
    checkpoints: &[(&str, &str, &str)],
) -> usecases::NewRally {
    usecases::NewRally {
        creator_external_id: "google-oauth2|demo-creator".into(),
        title: title.into(),
        description: description.into(),
        start_at: Timestamp::from_seconds(start_at),
        end_at: Timestamp::from_seconds(end_at),
        reward_points: 25,
        locations: checkpoints
            .iter()
            .map(|(name, lat, lng)| usecases::NewRallyLocation {
                name: (*name).into(),
                description: "".into(),
                lat: (*lat).into(),
                lng: (*lng).into(),
            })
            .collect(),
    }
}
