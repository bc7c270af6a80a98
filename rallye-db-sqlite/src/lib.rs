#[macro_use]
extern crate diesel;

use std::{
    cell::{RefCell, RefMut},
    ops::{Deref, DerefMut},
    sync::Arc,
};

use anyhow::Result as Fallible;
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rallye_core::usecases as uc;

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedConnectionPool = Arc<RwLock<ConnectionPool>>;

/// Database access through an exclusively held SQLite connection.
///
/// All repository traits are implemented once for this wrapper. Both the
/// pooled read-only guard and the connection handed into a transaction
/// closure are (or deref into) a `Connection`.
pub struct Connection<C> {
    conn: RefCell<C>,
}

impl<C: DerefMut<Target = SqliteConnection>> Connection<C> {
    fn new(conn: C) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }

    fn conn(&self) -> RefMut<'_, C> {
        self.conn.borrow_mut()
    }
}

pub struct DbReadOnly<'a> {
    _locked_pool: RwLockReadGuard<'a, ConnectionPool>,
    conn: Connection<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.read();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read-only access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: Connection::new(conn),
        })
    }
}

impl Deref for DbReadOnly<'_> {
    type Target = Connection<PooledConnection>;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

pub struct DbReadWrite<'a> {
    _locked_pool: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.write();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read/write access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    /// Runs `f` inside a database transaction.
    ///
    /// The transaction is rolled back if `f` returns an error, and the
    /// error is passed through to the caller.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: for<'c> FnOnce(&Connection<&'c mut SqliteConnection>) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut usecase_error = None;
        self.conn
            .borrow_mut()
            .transaction(|conn| {
                f(&Connection::new(conn)).map_err(|err| {
                    usecase_error = Some(err.into());
                    diesel::result::Error::RollbackTransaction
                })
            })
            .map_err(|err| match usecase_error {
                Some(usecase_error) => {
                    debug_assert!(matches!(err, diesel::result::Error::RollbackTransaction));
                    usecase_error
                }
                None => uc::Error::Repo(repo_impl::from_diesel_err(err)),
            })
    }

    fn sqlite_conn(&self) -> RefMut<'_, PooledConnection> {
        self.conn.borrow_mut()
    }
}

#[derive(Clone)]
pub struct Connections {
    // Only a single connection with write access is handed out at a
    // time while multiple read connections can be used concurrently.
    // This locking pattern around the pool prevents SQLITE_LOCKED
    // ("database is locked") errors under concurrent requests.
    pool: SharedConnectionPool,
}

/// Configure the database engine.
///
/// The repository implementations rely on this configuration, e.g. on
/// enforced foreign key constraints and cascading deletes.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    use diesel::RunQueryDsl as _;
    diesel::sql_query(
        r#"
PRAGMA journal_mode = WAL;     -- better write-concurrency
PRAGMA synchronous = NORMAL;   -- fsync only in critical moments, safe together with WAL
PRAGMA foreign_keys = 1;       -- check foreign key constraints
PRAGMA recursive_triggers = 1; -- for recursive ON CASCADE DELETE actions
PRAGMA encoding = 'UTF-8';
"#,
    )
    .execute(connection)?;
    Ok(())
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Establish a test connection before creating the pool to fail
        // early on an inaccessible database file instead of having r2d2
        // retry and log repeatedly.
        use diesel::Connection as _;
        let _ = SqliteConnection::establish(url)?;
        let manager = ConnectionManager::new(url);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .build(manager)?;
        initialize_database(&mut *pool.get()?)?;
        Ok(Self::new(pool))
    }

    fn new(pool: ConnectionPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }

    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        DbReadWrite::try_new(&self.pool)
    }
}

/// Removes all rows from all tables, e.g. before seeding demo data.
pub fn delete_all_data(conn: &DbReadWrite<'_>) -> Fallible<()> {
    use diesel::RunQueryDsl as _;
    let mut conn = conn.sqlite_conn();
    // Children before their parents, foreign keys are enforced.
    diesel::delete(schema::locations_to_users::table).execute(&mut **conn)?;
    diesel::delete(schema::rallies_to_users::table).execute(&mut **conn)?;
    diesel::delete(schema::locations::table).execute(&mut **conn)?;
    diesel::delete(schema::rallies::table).execute(&mut **conn)?;
    diesel::delete(schema::users::table).execute(&mut **conn)?;
    diesel::delete(schema::creators::table).execute(&mut **conn)?;
    Ok(())
}

pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    conn.sqlite_conn()
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    Ok(())
}
