use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the sqlite database backing the store
    pub database_url: String,
}

impl Config {
    pub fn new() -> Self {
        const DATABASE_URL: &str = "DATABASE_URL";
        const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

        let database_url = match std::env::var(DATABASE_URL) {
            Ok(url) => url,
            Err(_) => {
                info!(
                    "Did not find {} environment variable. Falling back to {}, which does not outlive the process.",
                    DATABASE_URL, DEFAULT_DATABASE_URL
                );
                DEFAULT_DATABASE_URL.into()
            }
        };
        Self { database_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
