//! JSON export functionality

use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{AppError, Result};

/// Export data to JSON file (pretty-printed)
pub fn export_to_json<T, P>(data: &[T], path: P) -> Result<usize>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let count = data.len();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, data)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {}", e)))?;

    Ok(count)
}
