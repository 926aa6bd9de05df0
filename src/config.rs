use std::env;

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `ADDRESS` and `PORT`, falling back to local defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or("app.db".to_string());
        let address = lookup("ADDRESS").unwrap_or("127.0.0.1".to_string());
        let port = lookup("PORT")
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(8080);

        Self {
            database_url,
            address,
            port,
        }
    }
}
