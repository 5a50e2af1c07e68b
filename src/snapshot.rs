//! Whole-graph snapshot persistence
//!
//! A snapshot is an opaque blob; the only guarantee is that decoding an
//! encoded graph yields an equal graph, parent edges included.

use std::path::Path;

use crate::error::util::{safe_read, safe_write};
use crate::error::Result;
use crate::models::FamilyGraph;

/// Encode a graph into a snapshot blob
pub fn to_bytes(graph: &FamilyGraph) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(graph)?)
}

/// Decode a snapshot blob
///
/// Rejects blobs whose edges point outside the person arena.
pub fn from_bytes(bytes: &[u8]) -> Result<FamilyGraph> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Write a snapshot file
pub fn save(graph: &FamilyGraph, path: &Path) -> Result<()> {
    let bytes = to_bytes(graph)?;
    safe_write(path, bytes)?;
    log::info!("Saved snapshot of {} persons to {}", graph.len(), path.display());
    Ok(())
}

/// Read a snapshot file
pub fn load(path: &Path) -> Result<FamilyGraph> {
    let bytes = safe_read(path, "reading snapshot")?;
    from_bytes(&bytes)
}
