use super::prelude::*;

/// Sets the visit flag of a single checkpoint for the given user.
///
/// Callers are trusted to have joined the owning rally first; without a
/// visit record the update silently affects nothing. Setting the same
/// value twice has no further effect.
pub fn toggle_location<R: VisitRepo>(
    repo: &R,
    user_id: UserId,
    location_id: LocationId,
    visited: bool,
) -> Result<()> {
    repo.set_visited(user_id, location_id, visited)?;
    Ok(())
}
