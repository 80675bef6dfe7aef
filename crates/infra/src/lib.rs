mod config;
mod repos;

pub use config::Config;
pub use repos::{DeleteResult, IUserRepo, Repos};

/// Everything a caller needs to reach the store.
#[derive(Clone)]
pub struct RegistroContext {
    pub repos: Repos,
    pub config: Config,
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> RegistroContext {
    let config = Config::new();
    let repos = Repos::create_sqlite(&config.database_url)
        .await
        .expect("Database connection string must be valid");
    RegistroContext { repos, config }
}
