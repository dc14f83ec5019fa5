use std::sync::Arc;

use tally_core::records::{Activity, FileMeta, Finance};
use tally_db::{DbHandle, Repository};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Holds one typed repository per collection, constructed once at startup
/// from the connected database handle and injected into every handler.
/// This is cheaply cloneable (repositories clone a collection handle,
/// config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Activity records.
    pub activities: Repository<Activity>,
    /// Finance records.
    pub finances: Repository<Finance>,
    /// Uploaded file metadata.
    pub files: Repository<FileMeta>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Bind typed repositories against the connected database.
    pub fn new(db: &DbHandle, config: ServerConfig) -> Self {
        let database = db.database();
        Self {
            activities: Repository::new(&database),
            finances: Repository::new(&database),
            files: Repository::new(&database),
            config: Arc::new(config),
        }
    }
}
