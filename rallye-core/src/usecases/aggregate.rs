use std::collections::HashMap;

use rallye_entities::geo::centroid;

use super::prelude::*;

/// Controls whether aggregated views carry a completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The view is not scoped to a participant.
    Skip,
    /// Derive the flag from the per-checkpoint visit flags.
    FromVisits,
}

/// Folds the flat rows of a rally/location join into one view per rally.
///
/// The rally columns are expected to be identical across all rows of a
/// rally; the values of the first row encountered win and repetitions
/// are ignored. The output preserves the order in which rallies first
/// appear in the input.
pub fn rally_views<I>(rows: I, completion: Completion) -> Vec<RallyView>
where
    I: IntoIterator<Item = RallyLocationRow>,
{
    let mut views: Vec<RallyView> = Vec::new();
    let mut index: HashMap<RallyId, usize> = HashMap::new();
    for row in rows {
        let RallyLocationRow {
            rally_id,
            title,
            description,
            creator_name,
            start_at,
            end_at,
            users_count,
            reward_points,
            location_id,
            location_name,
            location_description,
            pos,
            visited,
        } = row;
        let location = LocationView {
            id: location_id,
            name: location_name,
            description: location_description,
            pos,
            visited,
        };
        match index.get(&rally_id) {
            Some(&at) => views[at].locations.push(location),
            None => {
                index.insert(rally_id, views.len());
                views.push(RallyView {
                    id: rally_id,
                    title,
                    description,
                    creator_name,
                    start_at,
                    end_at,
                    users_count,
                    reward_points,
                    locations: vec![location],
                    center: None,
                    complete: None,
                });
            }
        }
    }
    for view in &mut views {
        decorate(view, completion);
    }
    views
}

fn decorate(view: &mut RallyView, completion: Completion) {
    let positions: Vec<_> = view.locations.iter().map(|l| l.pos).collect();
    view.center = centroid(&positions);
    view.complete = match completion {
        Completion::Skip => None,
        // A missing flag counts as not visited. Vacuously true without
        // any checkpoints.
        Completion::FromVisits => Some(view.locations.iter().all(|l| l.visited == Some(true))),
    };
}
