use crate::angle::opposite_yaw;
use crate::types::TourData;
use std::collections::HashMap;

/// Record on each linked-to scene the yaw opposite every incoming hotspot.
///
/// Writes `entryAngles[source] = normalize(hotspot.yaw + π)` on the target
/// scene. Later hotspots from the same source overwrite earlier ones, entries
/// for other sources already present are kept, and hotspots whose target is
/// empty or unknown are ignored. Returns the number of values written.
pub fn annotate_entry_angles(data: &mut TourData) -> usize {
    let mut incoming: HashMap<String, Vec<(String, f64)>> = HashMap::new();
    for scene in &data.scenes {
        for hotspot in &scene.link_hotspots {
            if hotspot.target.is_empty() {
                continue;
            }
            incoming
                .entry(hotspot.target.clone())
                .or_default()
                .push((scene.id.clone(), opposite_yaw(hotspot.yaw)));
        }
    }

    let mut written = 0;
    for scene in &mut data.scenes {
        let Some(entries) = incoming.get(&scene.id) else {
            continue;
        };
        for (source, yaw) in entries {
            scene.entry_angles.insert(source.clone(), *yaw);
            written += 1;
        }
    }

    log::debug!("Annotated {} entry angles", written);
    written
}
