use super::*;

pub fn get_user(connections: &sqlite::Connections, hash: &str) -> Result<Option<User>> {
    let db = connections.shared()?;
    Ok(usecases::get_user(&*db, hash)?)
}

pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::register_user(conn, new_user))?)
}

pub fn delete_user(connections: &sqlite::Connections, hash: &str) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_user(conn, hash))?;
    Ok(())
}

/// Credits reward points to a participant.
pub fn award_points(
    connections: &sqlite::Connections,
    user_id: UserId,
    points: u32,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::award_points(conn, user_id, points))?;
    Ok(())
}
