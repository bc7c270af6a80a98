use std::ops::DerefMut;

use diesel::{
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    sqlite::SqliteConnection,
};

use rallye_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, Connection};

mod creator;
mod location;
mod membership;
mod rally;
mod user;
mod visit;

type Result<T> = std::result::Result<T, repo::Error>;

pub(crate) fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

fn resolve_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}
