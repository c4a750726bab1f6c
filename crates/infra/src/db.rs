use sqlx::PgPool;

pub type Db = PgPool;

/// Embedded schema migrations, shared by the binary and the Postgres tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");
