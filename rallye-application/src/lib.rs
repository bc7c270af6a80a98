#[macro_use]
extern crate log;

mod create_rally;
mod queries;
mod toggle_location;
mod toggle_rally;
mod users;

pub mod prelude {
    pub use super::{create_rally::*, queries::*, toggle_location::*, toggle_rally::*, users::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use rallye_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use rallye_db_sqlite::Connections;
}
