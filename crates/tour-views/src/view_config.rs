use crate::error::TourError;
use crate::types::ViewConfig;
use std::fs;
use std::path::Path;

/// Pretty-printed JSON document for the transition runtime.
pub fn to_json_string(config: &ViewConfig) -> Result<String, TourError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Write the view configuration to `path`.
pub fn write_view_config(config: &ViewConfig, path: &Path) -> Result<(), TourError> {
    fs::write(path, to_json_string(config)?)?;
    log::info!("View config saved to: {}", path.display());
    Ok(())
}

/// Read a previously generated view configuration.
pub fn read_view_config(path: &Path) -> Result<ViewConfig, TourError> {
    if !path.is_file() {
        return Err(TourError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| TourError::format(path.display().to_string(), e.to_string()))
}
