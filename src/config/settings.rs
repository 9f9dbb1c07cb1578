//! Runtime settings for the `SixJars` engine.
//!
//! Settings come from environment variables, with a `.env` file loaded
//! first when present. Everything has a sensible default except the remote
//! URL, which is required once the remote backend is selected.

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Which persistence collaborator the session should open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Keyed JSON blobs in a local data directory
    #[default]
    Local,
    /// A remote backend service over HTTP
    Remote,
}

impl std::str::FromStr for StorageBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(Error::Config {
                message: format!("unknown storage backend {other:?}, expected `local` or `remote`"),
            }),
        }
    }
}

/// Resolved runtime settings.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Selected persistence collaborator
    pub backend: StorageBackend,
    /// Data directory for the local blob store
    pub data_dir: PathBuf,
    /// Base URL of the remote backend, required for [`StorageBackend::Remote`]
    pub remote_url: Option<String>,
    /// Optional category catalog file overriding the built-in catalog
    pub category_file: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from the environment, reading a `.env` file first if
    /// one exists.
    ///
    /// * `SIX_JARS_BACKEND` - `local` (default) or `remote`
    /// * `SIX_JARS_DATA_DIR` - local blob directory, default `data`
    /// * `SIX_JARS_REMOTE_URL` - backend base URL, required when remote
    /// * `SIX_JARS_CATEGORY_FILE` - optional catalog override
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let backend = match std::env::var("SIX_JARS_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };
        let data_dir = std::env::var("SIX_JARS_DATA_DIR")
            .map_or_else(|_| PathBuf::from("data"), PathBuf::from);
        let remote_url = std::env::var("SIX_JARS_REMOTE_URL").ok();
        let category_file = std::env::var("SIX_JARS_CATEGORY_FILE").ok().map(PathBuf::from);

        if backend == StorageBackend::Remote && remote_url.is_none() {
            return Err(Error::Config {
                message: "SIX_JARS_REMOTE_URL must be set when SIX_JARS_BACKEND is `remote`"
                    .to_string(),
            });
        }

        Ok(Self {
            backend,
            data_dir,
            remote_url,
            category_file,
        })
    }
}
