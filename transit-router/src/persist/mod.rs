//! Saving a built router so later processes can skip the build.
//!
//! The record holds the routing settings, the graph with its edge order and
//! incidence lists, the full shortest-path table and the stop/edge lookup
//! tables. Loading it gives back a router that answers every query exactly
//! as the one that was saved.

mod codec;
mod error;
mod schema;

pub use codec::{decode, encode, from_record, to_record};
pub use error::PersistError;
pub use schema::TransitBase;

use std::path::Path;

use tracing::info;

use crate::router::TransportRouter;

/// Write a router to a file, creating parent directories if needed.
pub fn save(router: &TransportRouter, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let bytes = encode(router);
    std::fs::write(path, &bytes)?;

    info!(path = %path.display(), bytes = bytes.len(), "saved router");
    Ok(())
}

/// Read a router from a file written by [`save`].
pub fn load(path: impl AsRef<Path>) -> Result<TransportRouter, PersistError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let router = decode(&bytes)?;

    info!(
        path = %path.display(),
        stops = router.essentials().stop_count(),
        edges = router.graph().edge_count(),
        "loaded router"
    );
    Ok(router)
}
