//! YAML export functionality
//!
//! Renders the same versioned snapshot as the JSON export in YAML.

use std::io::Write;

use crate::error::{KakeiboError, KakeiboResult};
use crate::storage::Storage;

use super::json::FullExport;

/// Export the full data set to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> KakeiboResult<()> {
    let export = FullExport::from_storage(storage)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}
