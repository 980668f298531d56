/// Error types for tour processing.
pub mod error;

/// Core type definitions for the tour graph and view configuration.
pub mod types;

/// Yaw normalization.
pub mod angle;

/// `data.js` loading and regeneration.
pub mod data_script;

/// Plain JSON persistence of the tour graph.
pub mod tour_json;

/// Per-link entry view resolution.
pub mod resolver;

/// `entryAngles` annotation of scenes.
pub mod entry_angles;

/// View-configuration document output.
pub mod view_config;

pub use error::TourError;
pub use resolver::{resolve_views, resolve_views_with, EntryAnchor, ResolveObserver};
pub use types::{
    InitReport, LinkHotspot, Orientation, Scene, SceneViews, TourConfig, TourData, ViewConfig,
    ViewParameters, DEFAULT_FOV,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Prepare an extracted tour for editing.
///
/// Reads `app-files/data.js`, annotates entry angles, and writes
/// `view_config.json` plus the `tour_data.json` copy next to it.
pub fn init_tour(
    config: &TourConfig,
    observer: &mut dyn ResolveObserver,
) -> Result<InitReport, TourError> {
    let data_js = config.data_script_path();
    log::info!("Parsing {}", data_js.display());
    let mut data = data_script::read_data_js(&data_js, &config.script_ident)?;
    log::info!(
        "  {} scenes, {} link hotspots",
        data.scenes.len(),
        data.link_count()
    );

    let entry_angles = entry_angles::annotate_entry_angles(&mut data);

    log::info!("Resolving entry views");
    let views = resolve_views_with(&data, observer);

    let view_config_path = config.view_config_path();
    view_config::write_view_config(&views, &view_config_path)?;

    let tour_json_path = config.tour_json_path();
    tour_json::write_tour_json(&data, &tour_json_path)?;
    log::info!("Tour data saved to: {}", tour_json_path.display());

    Ok(InitReport {
        scene_count: data.scenes.len(),
        link_count: data.link_count(),
        entry_angles,
        view_entries: views.entry_count(),
        view_config_path,
        tour_json_path,
    })
}

/// Regenerate `app-files/data.js` from an edited tour JSON document.
///
/// Returns the path written.
pub fn build_tour(config: &TourConfig, tour_json_path: &Path) -> Result<PathBuf, TourError> {
    log::info!("Loading {}", tour_json_path.display());
    let data = tour_json::read_tour_json(tour_json_path)?;

    let app_files = config.app_files_path();
    if !app_files.is_dir() {
        return Err(TourError::NotFound(app_files));
    }

    let out = config.data_script_path();
    data_script::write_data_js(&data, &out, &config.script_ident)?;
    log::info!("Wrote {} ({} scenes)", out.display(), data.scenes.len());
    Ok(out)
}

/// Resolve views for a single `data.js` and write the document to `output`.
pub fn resolve_file(
    input: &Path,
    output: &Path,
    script_ident: &str,
    observer: &mut dyn ResolveObserver,
) -> Result<ViewConfig, TourError> {
    let data = data_script::read_data_js(input, script_ident)?;
    let views = resolve_views_with(&data, observer);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    view_config::write_view_config(&views, output)?;
    Ok(views)
}

/// Find the tour directory an edited JSON document belongs to.
///
/// Checks the document's own directory, then its parent, for the
/// app-files subdirectory named in `config`.
pub fn locate_tour_dir(config: &TourConfig, tour_json_path: &Path) -> Result<PathBuf, TourError> {
    let dir = tour_json_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let candidates = std::iter::once(dir).chain(dir.parent());
    for candidate in candidates {
        let candidate = if candidate.as_os_str().is_empty() {
            Path::new(".")
        } else {
            candidate
        };
        if candidate.join(&config.app_files_dir).is_dir() {
            return Ok(candidate.to_path_buf());
        }
    }
    Err(TourError::NotFound(dir.join(&config.app_files_dir)))
}
