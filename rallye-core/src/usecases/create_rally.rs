use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewRally {
    /// External identity of the organizer, as issued by the sign-in
    /// provider.
    pub creator_external_id: String,
    pub title: String,
    pub description: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub reward_points: u32,
    pub locations: Vec<NewRallyLocation>,
}

/// Checkpoint input as submitted by the organizer form.
///
/// The coordinates arrive as strings and are parsed here.
#[derive(Debug, Clone)]
pub struct NewRallyLocation {
    pub name: String,
    pub description: String,
    pub lat: String,
    pub lng: String,
}

/// Persists a new rally together with all of its checkpoints.
///
/// Nothing is written unless the organizer resolves and all input is
/// valid. Must run inside a single store transaction so that a failed
/// checkpoint insert does not leave an orphaned rally behind.
pub fn create_rally<R>(repo: &R, new_rally: NewRally) -> Result<RallyId>
where
    R: CreatorRepo + RallyRepo + LocationRepo,
{
    let NewRally {
        creator_external_id,
        title,
        description,
        start_at,
        end_at,
        reward_points,
        locations,
    } = new_rally;
    if title.trim().is_empty() {
        return Err(Error::Title);
    }
    if end_at <= start_at {
        return Err(Error::EndDateBeforeStart);
    }
    let positions = locations
        .iter()
        .map(|l| parse_position(&l.lat, &l.lng))
        .collect::<Result<Vec<_>>>()?;
    let Some(creator_id) = repo.resolve_creator(&creator_external_id)? else {
        return Err(Error::CreatorNotFound);
    };
    let rally_id = repo.create_rally(&NewRallyRecord {
        creator_id,
        title,
        description,
        start_at,
        end_at,
        reward_points,
    })?;
    let records: Vec<_> = locations
        .into_iter()
        .zip(positions)
        .map(|(l, pos)| NewLocationRecord {
            rally_id,
            name: l.name,
            description: l.description,
            pos,
        })
        .collect();
    repo.create_locations(&records)?;
    log::info!("Created rally {rally_id} with {} checkpoints", records.len());
    Ok(rally_id)
}

fn parse_position(lat: &str, lng: &str) -> Result<MapPoint> {
    let lat = lat.trim().parse::<f64>().map_err(|_| Error::Coordinate)?;
    let lng = lng.trim().parse::<f64>().map_err(|_| Error::Coordinate)?;
    Ok(MapPoint::try_from_lat_lng_deg(lat, lng)?)
}
