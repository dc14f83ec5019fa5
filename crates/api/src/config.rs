use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Document database connection string.
    pub database_url: String,
    /// Logical database name.
    pub database_name: String,
    /// Directory uploaded file blobs are written to.
    pub upload_dir: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `DATABASE_URL`         | `mongodb://localhost:27017`  |
    /// | `DATABASE_NAME`        | `appdb`                      |
    /// | `UPLOAD_DIR`           | `/tmp/uploads`               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".into());

        let database_name = std::env::var("DATABASE_NAME").unwrap_or_else(|_| "appdb".into());

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "/tmp/uploads".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            database_name,
            upload_dir,
            request_timeout_secs,
        }
    }
}
