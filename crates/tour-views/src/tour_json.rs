//! Plain JSON copy of the tour graph, exchanged with the editing step.

use crate::error::TourError;
use crate::types::TourData;
use std::fs;
use std::path::Path;

pub fn from_json_str(text: &str, source_name: &str) -> Result<TourData, TourError> {
    serde_json::from_str(text).map_err(|e| TourError::format(source_name, e.to_string()))
}

pub fn to_json_string(data: &TourData) -> Result<String, TourError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Load a tour JSON document written by [`write_tour_json`] or the editor.
pub fn read_tour_json(path: &Path) -> Result<TourData, TourError> {
    if !path.is_file() {
        return Err(TourError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    from_json_str(&text, &path.display().to_string())
}

pub fn write_tour_json(data: &TourData, path: &Path) -> Result<(), TourError> {
    fs::write(path, to_json_string(data)?)?;
    Ok(())
}
