pub mod migrations;
pub mod models;
pub mod repositories;

use diesel::{
    r2d2::{ConnectionManager, Pool},
    SqliteConnection,
};

use crate::data::models::ProgressError;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Builds the connection pool and applies the schema.
///
/// An in-memory database lives and dies with its connection, so `:memory:`
/// gets a single-connection pool.
pub fn establish_pool(database_url: &str) -> Result<DbPool, ProgressError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = Pool::builder();
    if database_url == ":memory:" {
        builder = builder.max_size(1);
    }
    let pool = builder.build(manager)?;

    let mut conn = pool.get()?;
    migrations::run(&mut conn)?;
    log::info!("Database ready at {}", database_url);

    Ok(pool)
}
