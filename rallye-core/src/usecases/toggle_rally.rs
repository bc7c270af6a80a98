use super::prelude::*;

/// Switches a user's participation in a rally on or off.
///
/// Joining creates the membership, one unvisited visit record per
/// checkpoint of the rally and bumps the participant counter. Leaving
/// removes all of them again. Requesting the current state is a no-op,
/// so repeated calls neither double-count nor duplicate visit records.
///
/// Must run inside a single store transaction so that the membership,
/// the visit records and the counter always change together.
pub fn toggle_rally<R>(repo: &R, user_id: UserId, rally_id: RallyId, chosen: bool) -> Result<()>
where
    R: MembershipRepo + LocationRepo + VisitRepo + RallyRepo,
{
    let was_chosen = repo.membership_exists(user_id, rally_id)?;
    if was_chosen == chosen {
        return Ok(());
    }
    let location_ids = repo.location_ids_of_rally(rally_id)?;
    if chosen {
        log::debug!("User {user_id} joins rally {rally_id}");
        repo.create_membership(user_id, rally_id)?;
        let visits: Vec<_> = location_ids
            .into_iter()
            .map(|location_id| NewVisitRecord {
                location_id,
                user_id,
                visited: false,
            })
            .collect();
        repo.create_visits(&visits)?;
        repo.adjust_users_count(rally_id, 1)?;
    } else {
        log::debug!("User {user_id} leaves rally {rally_id}");
        repo.delete_membership(user_id, rally_id)?;
        repo.delete_visits(user_id, &location_ids)?;
        repo.adjust_users_count(rally_id, -1)?;
    }
    Ok(())
}
