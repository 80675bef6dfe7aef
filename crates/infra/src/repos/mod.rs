mod shared;
mod user;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use user::{InMemoryUserRepo, SqliteUserRepo};

pub use shared::DeleteResult;
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub async fn create_sqlite(connection_string: &str) -> anyhow::Result<Self> {
        let options =
            SqliteConnectOptions::from_str(connection_string)?.create_if_missing(true);

        // One connection only: a second one would get its own empty
        // database when connected to `sqlite::memory:`.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        info!("DB CHECKING CONNECTION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            users: Arc::new(SqliteUserRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}
