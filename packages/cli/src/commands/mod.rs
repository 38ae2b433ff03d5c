pub mod export;
pub mod init;
pub mod list;
pub mod show;

pub use export::ExportArgs;
pub use init::InitArgs;

use std::path::Path;

use anyhow::{bail, Result};
use cvforge_persist::{FileStorage, PersistenceEngine};
use cvforge_store::Store;

/// Open and hydrate a store from an existing file.
pub fn open_store(path: &Path) -> Result<Store> {
    if !path.exists() {
        bail!(
            "no store file at {} (run `cvforge init` first)",
            path.display()
        );
    }
    let engine = PersistenceEngine::new(Box::new(FileStorage::new(path)));
    let mut store = Store::with_persistence(engine);
    store.hydrate_from_storage()?;
    Ok(store)
}
