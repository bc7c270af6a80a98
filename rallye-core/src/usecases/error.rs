use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Invalid geographic coordinates")]
    Coordinate,
    #[error("The creator does not exist")]
    CreatorNotFound,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<rallye_entities::geo::InvalidMapPoint> for Error {
    fn from(_: rallye_entities::geo::InvalidMapPoint) -> Self {
        Self::Coordinate
    }
}
