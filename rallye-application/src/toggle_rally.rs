use super::*;

/// Switches a user's participation in a rally on or off.
///
/// The membership row, the visit records and the denormalized
/// participant counter change within a single database transaction. A
/// concurrent reader never observes the membership changed while the
/// counter is still stale, or vice versa.
pub fn toggle_rally(
    connections: &sqlite::Connections,
    user_id: UserId,
    rally_id: RallyId,
    chosen: bool,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| {
        usecases::toggle_rally(conn, user_id, rally_id, chosen).inspect_err(|err| {
            warn!("Failed to toggle rally {rally_id} for user {user_id}: {err}");
        })
    })?;
    Ok(())
}
