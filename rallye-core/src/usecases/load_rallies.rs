use std::collections::HashSet;

use super::{
    aggregate::{rally_views, Completion},
    prelude::*,
};

/// All rallies that are currently open for participation.
pub fn all_rallies<R: RallyRepo>(repo: &R, now: Timestamp) -> Result<Vec<RallyView>> {
    let rows = repo.active_rally_rows(now)?;
    Ok(rally_views(rows, Completion::Skip))
}

/// The rallies the given user participates in, with visit flags and
/// completion state.
pub fn chosen_rallies<R: RallyRepo>(repo: &R, user_id: UserId) -> Result<Vec<RallyView>> {
    let rows = repo.chosen_rally_rows(user_id)?;
    Ok(rally_views(rows, Completion::FromVisits))
}

/// The active rallies the given user has not joined yet: the complement
/// of the user's membership set by rally id.
pub fn not_chosen_rallies<R>(repo: &R, user_id: UserId, now: Timestamp) -> Result<Vec<RallyView>>
where
    R: RallyRepo + MembershipRepo,
{
    let chosen: HashSet<_> = repo.rally_ids_of_user(user_id)?.into_iter().collect();
    let rows = repo
        .active_rally_rows(now)?
        .into_iter()
        .filter(|row| !chosen.contains(&row.rally_id));
    Ok(rally_views(rows, Completion::Skip))
}

/// All rallies owned by the given creator, expired ones included.
pub fn created_rallies<R: RallyRepo>(
    repo: &R,
    creator_external_id: &str,
) -> Result<Vec<RallyView>> {
    let rows = repo.created_rally_rows(creator_external_id)?;
    Ok(rally_views(rows, Completion::Skip))
}
