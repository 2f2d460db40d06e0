//! Transform engine: mirror the active selection along one axis.
//!
//! A single object flips in place about its own center, which only toggles its
//! flip flag. A group flips as one unit about the center of its bounding box:
//! member positions are reflected, each member's flip flag is toggled and its
//! rotation negated, so the arrangement reads as a mirror image of itself.
//! Both cases are involutions; mirroring twice restores the original.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::consts::MIRROR_STEPS_PER_UNIT;
use crate::geom::Bounds;
use crate::object::{ObjectId, PartialSceneObject, SceneObject};
use crate::scene::Scene;

/// Mirror axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Left-to-right flip.
    Horizontal,
    /// Top-to-bottom flip.
    Vertical,
}

/// Mirror the active selection left-to-right. See [`mirror`].
pub fn mirror_horizontally<S: Scene + ?Sized>(scene: Option<&mut S>) -> Vec<(ObjectId, PartialSceneObject)> {
    mirror(scene, FlipAxis::Horizontal)
}

/// Mirror the active selection top-to-bottom. See [`mirror`].
pub fn mirror_vertically<S: Scene + ?Sized>(scene: Option<&mut S>) -> Vec<(ObjectId, PartialSceneObject)> {
    mirror(scene, FlipAxis::Vertical)
}

/// Mirror the active selection along `axis` and request one render.
///
/// Returns the updates applied to each member; empty when nothing is selected,
/// no scene is mounted, or the scene refused the update. Never touches the
/// clipboard.
pub fn mirror<S: Scene + ?Sized>(scene: Option<&mut S>, axis: FlipAxis) -> Vec<(ObjectId, PartialSceneObject)> {
    let Some(scene) = scene else {
        tracing::debug!(?axis, "mirror ignored: no scene mounted");
        return Vec::new();
    };
    let members = scene.active_objects();
    let updates = match members.as_slice() {
        [] => return Vec::new(),
        [single] => vec![(single.id, toggle_flip(single, axis))],
        group => {
            let Some(bounds) = Bounds::union_all(group.iter().map(|obj| obj.bounds())) else {
                return Vec::new();
            };
            group.iter().map(|obj| (obj.id, reflect_in(obj, &bounds, axis))).collect()
        }
    };
    if let Err(e) = scene.update_all(&updates) {
        tracing::warn!(error = %e, ?axis, "mirror failed; scene unchanged");
        return Vec::new();
    }
    scene.request_render();
    tracing::debug!(?axis, count = updates.len(), "mirrored selection");
    updates
}

fn toggle_flip(obj: &SceneObject, axis: FlipAxis) -> PartialSceneObject {
    match axis {
        FlipAxis::Horizontal => PartialSceneObject { flip_x: Some(!obj.flip_x), ..Default::default() },
        FlipAxis::Vertical => PartialSceneObject { flip_y: Some(!obj.flip_y), ..Default::default() },
    }
}

/// Reflect `obj` across the center line of `bounds`.
///
/// The new edge is snapped to a fixed grid ([`MIRROR_STEPS_PER_UNIT`]), so
/// mirroring twice lands back on the original coordinate instead of drifting
/// by rounding error.
fn reflect_in(obj: &SceneObject, bounds: &Bounds, axis: FlipAxis) -> PartialSceneObject {
    let rotation = Some(-obj.rotation);
    match axis {
        FlipAxis::Horizontal => PartialSceneObject {
            x: Some(snap(bounds.min.x + bounds.max.x - obj.x - obj.width)),
            flip_x: Some(!obj.flip_x),
            rotation,
            ..Default::default()
        },
        FlipAxis::Vertical => PartialSceneObject {
            y: Some(snap(bounds.min.y + bounds.max.y - obj.y - obj.height)),
            flip_y: Some(!obj.flip_y),
            rotation,
            ..Default::default()
        },
    }
}

fn snap(value: f64) -> f64 {
    (value * MIRROR_STEPS_PER_UNIT).round() / MIRROR_STEPS_PER_UNIT
}
