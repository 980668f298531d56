use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Field of view (radians) used when a scene does not specify one.
///
/// Matches the viewer library's default rectilinear projection.
pub const DEFAULT_FOV: f64 = 1.3365071038314758;

/// Configuration for the tour pipeline (used by the CLI).
#[derive(Debug, Clone)]
pub struct TourConfig {
    /// Root of an extracted tour export.
    pub tour_dir: PathBuf,
    /// Subdirectory holding the runtime files (default: `app-files`).
    pub app_files_dir: String,
    /// Name of the embedded-script graph file (default: `data.js`).
    pub data_script: String,
    /// Name of the generated view-configuration file (default: `view_config.json`).
    pub view_config: String,
    /// Name of the plain JSON copy handed to the editor (default: `tour_data.json`).
    pub tour_json: String,
    /// Identifier the graph literal is assigned to (default: `APP_DATA`).
    pub script_ident: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            tour_dir: PathBuf::from("."),
            app_files_dir: "app-files".to_string(),
            data_script: "data.js".to_string(),
            view_config: "view_config.json".to_string(),
            tour_json: "tour_data.json".to_string(),
            script_ident: crate::data_script::APP_DATA_IDENT.to_string(),
        }
    }
}

impl TourConfig {
    /// Config rooted at `tour_dir` with default file names.
    pub fn for_dir(tour_dir: impl Into<PathBuf>) -> Self {
        Self {
            tour_dir: tour_dir.into(),
            ..Default::default()
        }
    }

    /// Directory holding `data.js` and the generated documents.
    pub fn app_files_path(&self) -> PathBuf {
        self.tour_dir.join(&self.app_files_dir)
    }

    pub fn data_script_path(&self) -> PathBuf {
        self.app_files_path().join(&self.data_script)
    }

    pub fn view_config_path(&self) -> PathBuf {
        self.app_files_path().join(&self.view_config)
    }

    pub fn tour_json_path(&self) -> PathBuf {
        self.app_files_path().join(&self.tour_json)
    }
}

/// Summary of an [`init_tour`](crate::init_tour) run.
#[derive(Debug, Clone)]
pub struct InitReport {
    pub scene_count: usize,
    pub link_count: usize,
    /// `entryAngles` values written onto scenes.
    pub entry_angles: usize,
    /// `ifCameFrom` entries in the view configuration.
    pub view_entries: usize,
    pub view_config_path: PathBuf,
    pub tour_json_path: PathBuf,
}

/// Canonical tour graph.
///
/// Fields the resolver does not read are kept in `extra` so that a
/// load/save cycle reproduces the whole document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TourData {
    /// Scenes in document order.
    pub scenes: Vec<Scene>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TourData {
    /// Look up a scene by identifier (first match in document order).
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// Total number of link hotspots across all scenes.
    pub fn link_count(&self) -> usize {
        self.scenes.iter().map(|s| s.link_hotspots.len()).sum()
    }
}

/// One panoramic viewpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Unique identifier within the tour.
    pub id: String,
    #[serde(default)]
    pub initial_view_parameters: ViewParameters,
    /// Outgoing links, in the order they appear in the document.
    #[serde(default)]
    pub link_hotspots: Vec<LinkHotspot>,
    /// Source scene id -> entry yaw, filled in by
    /// [`annotate_entry_angles`](crate::entry_angles::annotate_entry_angles).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entry_angles: IndexMap<String, f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Scene {
    /// Field of view of the scene's initial view, or [`DEFAULT_FOV`].
    pub fn fov(&self) -> f64 {
        self.initial_view_parameters.fov.unwrap_or(DEFAULT_FOV)
    }

    /// First hotspot in this scene that links to `target`.
    pub fn link_to(&self, target: &str) -> Option<&LinkHotspot> {
        self.link_hotspots.iter().find(|h| h.target == target)
    }
}

/// Initial camera parameters of a scene (radians).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewParameters {
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fov: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Directional marker in a scene that navigates to another scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkHotspot {
    /// Horizontal bearing of the hotspot in the source scene (radians).
    pub yaw: f64,
    /// Target scene id. May name a scene that does not exist.
    #[serde(default)]
    pub target: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Camera orientation emitted in the view configuration. Pitch is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
    pub fov: f64,
}

impl Orientation {
    /// Level orientation (pitch 0) at the given yaw and field of view.
    pub fn level(yaw: f64, fov: f64) -> Self {
        Self {
            yaw,
            pitch: 0.0,
            fov,
        }
    }
}

/// View data for one scene: its default view plus per-source overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneViews {
    #[serde(rename = "Init_parameters")]
    pub init_parameters: Orientation,
    /// Source scene id -> orientation to assume when arriving from it.
    #[serde(rename = "ifCameFrom")]
    pub if_came_from: IndexMap<String, Orientation>,
}

/// View-configuration document, keyed by scene id in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewConfig {
    pub scenes: IndexMap<String, SceneViews>,
}

impl ViewConfig {
    pub fn get(&self, scene_id: &str) -> Option<&SceneViews> {
        self.scenes.get(scene_id)
    }

    /// Orientation for `target` when entered from `source`, if any.
    pub fn entry(&self, target: &str, source: &str) -> Option<&Orientation> {
        self.scenes.get(target)?.if_came_from.get(source)
    }

    /// Number of conditional (`ifCameFrom`) entries across all scenes.
    pub fn entry_count(&self) -> usize {
        self.scenes.values().map(|v| v.if_came_from.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
