/// Category catalog loading from TOML
pub mod categories;
/// Runtime settings from the environment and `.env`
pub mod settings;

pub use categories::{builtin_catalog, catalog, load_catalog};
pub use settings::{Settings, StorageBackend};
