use super::*;

/// Marks or unmarks a single checkpoint as visited for the given user.
pub fn toggle_location(
    connections: &sqlite::Connections,
    user_id: UserId,
    location_id: LocationId,
    visited: bool,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection
        .transaction(|conn| usecases::toggle_location(conn, user_id, location_id, visited))?;
    Ok(())
}
