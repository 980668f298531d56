//! End-to-end tests for the init / build / resolve pipelines on a temp tour directory.

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use tour_views::resolver::NoopObserver;
use tour_views::{data_script, tour_json, view_config, TourConfig, TourError, DEFAULT_FOV};

/// Export-style data.js: single quotes, trailing commas, extra fields.
const DATA_JS: &str = r#"var APP_DATA = {
  "scenes": [
    {
      "id": "a",
      "name": "Entrance",
      "levels": [ { "tileSize": 512, "size": 512 }, ],
      "initialViewParameters": { "yaw": 0.2, "pitch": 0.35, "fov": 1.2 },
      "linkHotspots": [
        { "yaw": 0.0, "pitch": 0.1, "rotation": 0, "target": "b" },
        { 'yaw': 1.0, 'pitch': 0.0, 'rotation': 0, 'target': 'd' },
        { "yaw": 2.0, "pitch": 0.0, "rotation": 0, "target": "attic" },
      ],
      "infoHotspots": []
    },
    {
      "id": "b",
      "name": "Kitchen",
      "initialViewParameters": { "yaw": -1.0, "pitch": 0 },
      "linkHotspots": [ { "yaw": 3.0, "pitch": 0.0, "rotation": 0, "target": "a" } ]
    },
    {
      "id": "d",
      "name": 'Dad\'s "den"',
      "initialViewParameters": { "yaw": 0.0, "pitch": 0.0, "fov": 0.9 },
      "linkHotspots": []
    },
  ],
  "name": "House",
  "settings": { "mouseViewMode": "drag", "autorotateEnabled": true, "fullscreenButton": false },
};
"#;

fn make_tour(root: &Path) -> TourConfig {
    let config = TourConfig::for_dir(root);
    fs::create_dir_all(config.app_files_path()).unwrap();
    fs::write(config.data_script_path(), DATA_JS).unwrap();
    config
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

mod init {
    use super::*;

    #[test]
    fn writes_view_config_and_tour_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = make_tour(dir.path());

        let report = tour_views::init_tour(&config, &mut NoopObserver).unwrap();
        assert_eq!(report.scene_count, 3);
        assert_eq!(report.link_count, 4);
        assert_eq!(report.view_entries, 3);
        assert!(report.view_config_path.is_file());
        assert!(report.tour_json_path.is_file());
    }

    #[test]
    fn view_config_follows_doorway_policy() {
        let dir = tempfile::tempdir().unwrap();
        let config = make_tour(dir.path());
        tour_views::init_tour(&config, &mut NoopObserver).unwrap();

        let views = view_config::read_view_config(&config.view_config_path()).unwrap();
        let keys: Vec<&str> = views.scenes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "d"]);

        // return link in b at yaw 3.0
        let b_from_a = views.entry("b", "a").unwrap();
        assert!(approx(b_from_a.yaw, 3.0 - PI));
        assert_eq!(b_from_a.pitch, 0.0);
        assert_eq!(b_from_a.fov, DEFAULT_FOV);

        // no return link in d, forward yaw 1.0
        let d_from_a = views.entry("d", "a").unwrap();
        assert!(approx(d_from_a.yaw, 1.0 - PI));
        assert_eq!(d_from_a.fov, 0.9);

        // return link in a at yaw 0.0
        assert!(approx(views.entry("a", "b").unwrap().yaw, PI));

        assert!(views.get("attic").is_none());
        let a_init = &views.get("a").unwrap().init_parameters;
        assert_eq!(a_init.yaw, 0.2);
        assert_eq!(a_init.pitch, 0.0);
        assert_eq!(a_init.fov, 1.2);
    }

    #[test]
    fn tour_json_carries_entry_angles() {
        let dir = tempfile::tempdir().unwrap();
        let config = make_tour(dir.path());
        let report = tour_views::init_tour(&config, &mut NoopObserver).unwrap();
        assert_eq!(report.entry_angles, 3);

        let data = tour_json::read_tour_json(&config.tour_json_path()).unwrap();
        let b = data.scene("b").unwrap();
        // forward hotspot a -> b at 0.0
        assert!(approx(b.entry_angles["a"], PI));
        assert_eq!(data.extra["name"], "House");
        assert_eq!(data.scene("d").unwrap().extra["name"], "Dad's \"den\"");
    }

    #[test]
    fn missing_data_js() {
        let dir = tempfile::tempdir().unwrap();
        let config = TourConfig::for_dir(dir.path());
        let err = tour_views::init_tour(&config, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, TourError::NotFound(p) if p == config.data_script_path()));
    }

    #[test]
    fn malformed_data_js() {
        let dir = tempfile::tempdir().unwrap();
        let config = TourConfig::for_dir(dir.path());
        fs::create_dir_all(config.app_files_path()).unwrap();
        fs::write(config.data_script_path(), "window.data = {};").unwrap();

        let err = tour_views::init_tour(&config, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, TourError::Format { .. }));
        assert!(!config.view_config_path().exists());
    }
}

mod build {
    use super::*;

    #[test]
    fn regenerates_data_js_from_edited_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = make_tour(dir.path());
        tour_views::init_tour(&config, &mut NoopObserver).unwrap();

        let mut edited = tour_json::read_tour_json(&config.tour_json_path()).unwrap();
        edited.scenes[1].initial_view_parameters.yaw = 0.75;
        let edited_path = dir.path().join("edited.json");
        tour_json::write_tour_json(&edited, &edited_path).unwrap();

        let written = tour_views::build_tour(&config, &edited_path).unwrap();
        assert_eq!(written, config.data_script_path());

        let text = fs::read_to_string(&written).unwrap();
        assert!(text.starts_with("var APP_DATA = "));
        let reloaded = data_script::load(&text).unwrap();
        assert_eq!(reloaded, edited);
        assert_eq!(reloaded.scenes[1].initial_view_parameters.yaw, 0.75);
    }

    #[test]
    fn missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = make_tour(dir.path());
        let err = tour_views::build_tour(&config, &dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, TourError::NotFound(_)));
    }

    #[test]
    fn locates_tour_dir_from_json_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = make_tour(dir.path());

        let beside = dir.path().join("config.json");
        assert_eq!(
            tour_views::locate_tour_dir(&config, &beside).unwrap(),
            dir.path()
        );

        let inside = config.tour_json_path();
        assert_eq!(
            tour_views::locate_tour_dir(&config, &inside).unwrap(),
            dir.path()
        );

        let elsewhere = tempfile::tempdir().unwrap();
        let err = tour_views::locate_tour_dir(&config, &elsewhere.path().join("c.json"));
        assert!(matches!(err, Err(TourError::NotFound(_))));
    }
}

mod resolve {
    use super::*;

    #[test]
    fn resolve_file_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = make_tour(dir.path());
        let output = dir.path().join("out").join("views.json");

        let views = tour_views::resolve_file(
            &config.data_script_path(),
            &output,
            data_script::APP_DATA_IDENT,
            &mut NoopObserver,
        )
        .unwrap();

        assert!(output.is_file());
        assert_eq!(view_config::read_view_config(&output).unwrap(), views);
    }

    #[test]
    fn round_trip_through_save() {
        let first = data_script::load(DATA_JS).unwrap();
        let second = data_script::load(&data_script::save(&first).unwrap()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            tour_views::resolve_views(&first),
            tour_views::resolve_views(&second)
        );
    }
}
