use super::*;

/// Persists a new rally and all of its checkpoints.
///
/// Both inserts run within a single database transaction, so a failure
/// in between cannot leave an orphaned rally without checkpoints
/// behind.
pub fn create_rally(
    connections: &sqlite::Connections,
    new_rally: usecases::NewRally,
) -> Result<RallyId> {
    let mut connection = connections.exclusive()?;
    let rally_id = connection.transaction(|conn| {
        usecases::create_rally(conn, new_rally).inspect_err(|err| {
            warn!("Failed to create rally: {err}");
        })
    })?;
    Ok(rally_id)
}
