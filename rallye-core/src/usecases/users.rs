use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub hash: String,
    pub username: String,
    pub email: String,
}

/// Looks up a participant by the opaque session identity issued by the
/// authentication layer.
pub fn get_user<R: UserRepo>(repo: &R, hash: &str) -> Result<Option<User>> {
    Ok(repo.try_get_user_by_hash(hash)?)
}

pub fn register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        hash,
        username,
        email,
    } = new_user;
    log::debug!("Registering participant {username}");
    Ok(repo.create_user(&NewUserRecord {
        hash,
        username,
        email,
    })?)
}

pub fn delete_user<R: UserRepo>(repo: &R, hash: &str) -> Result<()> {
    Ok(repo.delete_user_by_hash(hash)?)
}

/// Credits reward points to a participant, e.g. after completing a
/// rally.
pub fn award_points<R: UserRepo>(repo: &R, user_id: UserId, points: u32) -> Result<()> {
    Ok(repo.award_points(user_id, points)?)
}
