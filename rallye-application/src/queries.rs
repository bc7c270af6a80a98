use super::*;

/// All rallies that are currently open for participation.
pub fn all_rallies(connections: &sqlite::Connections, now: Timestamp) -> Result<Vec<RallyView>> {
    let db = connections.shared()?;
    Ok(usecases::all_rallies(&*db, now)?)
}

/// The rallies the given user participates in, with visit flags and
/// completion state.
pub fn chosen_rallies(
    connections: &sqlite::Connections,
    user_id: UserId,
) -> Result<Vec<RallyView>> {
    let db = connections.shared()?;
    Ok(usecases::chosen_rallies(&*db, user_id)?)
}

/// The active rallies the given user has not joined yet.
pub fn not_chosen_rallies(
    connections: &sqlite::Connections,
    user_id: UserId,
    now: Timestamp,
) -> Result<Vec<RallyView>> {
    let db = connections.shared()?;
    Ok(usecases::not_chosen_rallies(&*db, user_id, now)?)
}

/// All rallies owned by the given creator, expired ones included.
pub fn created_rallies(
    connections: &sqlite::Connections,
    creator_external_id: &str,
) -> Result<Vec<RallyView>> {
    let db = connections.shared()?;
    Ok(usecases::created_rallies(&*db, creator_external_id)?)
}
