mod aggregate;
mod create_rally;
mod error;
mod load_rallies;
mod toggle_location;
mod toggle_rally;
mod users;

#[cfg(test)]
pub mod tests;

pub use self::{
    aggregate::*, create_rally::*, error::Error, load_rallies::*, toggle_location::*,
    toggle_rally::*, users::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
