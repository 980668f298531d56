//! Per-link entry orientation ("walk through the doorway").
//!
//! For a link S -> T the viewer should arrive in T facing away from the
//! hotspot in T that leads back to S. If T has no such return hotspot the
//! forward hotspot's yaw in S is used instead. Either way the entry yaw is
//! the anchor rotated by π, pitch is leveled to 0 and the field of view is
//! T's own default.

use crate::angle::{normalize_yaw, opposite_yaw};
use crate::types::{Orientation, Scene, SceneViews, TourData, ViewConfig};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Which yaw an entry orientation was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryAnchor {
    /// Yaw of the first hotspot in the target scene that links back to the source.
    ReturnLink(f64),
    /// Yaw of the forward hotspot in the source scene (no return link exists).
    Forward(f64),
}

impl EntryAnchor {
    pub fn yaw(&self) -> f64 {
        match *self {
            EntryAnchor::ReturnLink(yaw) | EntryAnchor::Forward(yaw) => yaw,
        }
    }
}

/// Receives progress callbacks while views are resolved.
///
/// All methods default to no-ops.
pub trait ResolveObserver {
    /// A scene's default orientation was computed.
    fn scene_default(&mut self, _scene: &Scene, _view: &Orientation) {}

    /// An `ifCameFrom` entry was written for `target`.
    fn entry_resolved(
        &mut self,
        _source: &str,
        _target: &str,
        _anchor: EntryAnchor,
        _view: &Orientation,
    ) {
    }

    /// A later link from the same source replaced an earlier entry.
    fn entry_replaced(&mut self, _source: &str, _target: &str, _previous: &Orientation) {}

    /// A hotspot names a scene that does not exist; no entry was written.
    fn target_missing(&mut self, _source: &str, _target: &str) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolveObserver for NoopObserver {}

/// Observer that reports through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ResolveObserver for LogObserver {
    fn entry_resolved(
        &mut self,
        source: &str,
        target: &str,
        anchor: EntryAnchor,
        view: &Orientation,
    ) {
        log::debug!(
            "{} -> {}: entry yaw {:.4} ({:?})",
            source,
            target,
            view.yaw,
            anchor
        );
    }

    fn entry_replaced(&mut self, source: &str, target: &str, previous: &Orientation) {
        log::warn!(
            "Scene '{}' links to '{}' more than once, replacing entry yaw {:.4}",
            source,
            target,
            previous.yaw
        );
    }

    fn target_missing(&mut self, source: &str, target: &str) {
        log::warn!(
            "Scene '{}' links to unknown scene '{}', no entry view written",
            source,
            target
        );
    }
}

/// Compute the view configuration for every scene of `data`.
pub fn resolve_views(data: &TourData) -> ViewConfig {
    resolve_views_with(data, &mut NoopObserver)
}

/// Like [`resolve_views`], reporting each step to `observer`.
pub fn resolve_views_with(data: &TourData, observer: &mut dyn ResolveObserver) -> ViewConfig {
    let mut by_id: HashMap<&str, &Scene> = HashMap::with_capacity(data.scenes.len());
    let mut config = ViewConfig::default();

    for scene in &data.scenes {
        by_id.entry(scene.id.as_str()).or_insert(scene);

        let init = Orientation::level(
            normalize_yaw(scene.initial_view_parameters.yaw),
            scene.fov(),
        );
        observer.scene_default(scene, &init);
        config.scenes.insert(
            scene.id.clone(),
            SceneViews {
                init_parameters: init,
                if_came_from: IndexMap::new(),
            },
        );
    }

    for source in &data.scenes {
        for hotspot in &source.link_hotspots {
            let Some(target) = by_id.get(hotspot.target.as_str()) else {
                observer.target_missing(&source.id, &hotspot.target);
                continue;
            };

            let anchor = match target.link_to(&source.id) {
                Some(back) => EntryAnchor::ReturnLink(back.yaw),
                None => EntryAnchor::Forward(hotspot.yaw),
            };

            let Some(views) = config.scenes.get_mut(target.id.as_str()) else {
                continue;
            };
            let view = Orientation::level(opposite_yaw(anchor.yaw()), views.init_parameters.fov);

            if let Some(previous) = views.if_came_from.insert(source.id.clone(), view) {
                observer.entry_replaced(&source.id, &target.id, &previous);
            }
            observer.entry_resolved(&source.id, &target.id, anchor, &view);
        }
    }

    config
}
