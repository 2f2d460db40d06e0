//! Clipboard engine: copy, paste and delete against a live scene.
//!
//! The clipboard holds at most one [`ClipboardSnapshot`], a detached copy of
//! whatever was selected at copy time. Copying replaces the snapshot wholesale.
//! Pasting never changes it: each paste clones the snapshot again and offsets
//! the clones from the snapshot's own position, so repeated pastes land at the
//! same place and share nothing with each other or with the originals.
//!
//! Every operation takes the scene as `Option`. A canvas that has not mounted
//! yet turns the operation into a no-op.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::geom::{Bounds, Point};
use crate::object::{ObjectId, SceneObject};
use crate::scene::{ActiveSelection, Scene};

/// Detached copy of a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardSnapshot {
    /// One object was selected.
    Single(SceneObject),
    /// Several objects were selected together.
    Group(Vec<SceneObject>),
}

impl ClipboardSnapshot {
    /// Clone the scene's active selection. `None` when nothing is selected or a
    /// selected id is no longer on the scene.
    pub fn capture<S: Scene + ?Sized>(scene: &S) -> Option<Self> {
        match scene.active_selection() {
            ActiveSelection::Empty => None,
            ActiveSelection::Single(id) => {
                let obj = lookup(scene, &id)?;
                Some(Self::Single(scene.clone_object(obj)))
            }
            ActiveSelection::Group(ids) => {
                let mut members = Vec::with_capacity(ids.len());
                for id in &ids {
                    members.push(scene.clone_object(lookup(scene, id)?));
                }
                Some(Self::Group(members))
            }
        }
    }

    /// The captured objects.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        match self {
            Self::Single(obj) => std::slice::from_ref(obj),
            Self::Group(members) => members,
        }
    }

    /// Number of captured objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects().len()
    }

    /// Returns `true` if the snapshot holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects().is_empty()
    }

    /// Bounding box of the captured objects.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::union_all(self.objects().iter().map(SceneObject::bounds))
    }

    /// Top-left corner of the captured objects at copy time.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.bounds().map(|b| b.min)
    }

    /// Fresh clones of the captured objects, moved by `(dx, dy)`, hit-testable,
    /// and stacked from `base_z` upward in their original relative order.
    fn instantiate<S: Scene + ?Sized>(&self, scene: &S, dx: f64, dy: f64, base_z: i64) -> Vec<SceneObject> {
        let mut order: Vec<&SceneObject> = self.objects().iter().collect();
        order.sort_by_key(|obj| obj.z_index);
        let mut z = base_z;
        let mut clones = Vec::with_capacity(order.len());
        for source in order {
            let mut obj = scene.clone_object(source);
            obj.translate(dx, dy);
            obj.evented = true;
            obj.z_index = z;
            z = z.saturating_add(1);
            clones.push(obj);
        }
        clones
    }
}

fn lookup<'a, S: Scene + ?Sized>(scene: &'a S, id: &ObjectId) -> Option<&'a SceneObject> {
    let obj = scene.object(id);
    if obj.is_none() {
        tracing::warn!(%id, "selected object missing from scene; nothing copied");
    }
    obj
}

/// The single clipboard slot of an editing session.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Option<ClipboardSnapshot>,
}

impl Clipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the clipboard contents with a copy of the scene's selection.
    ///
    /// Returns `true` if a new snapshot was stored. With no scene or an empty
    /// selection the previous contents are kept.
    pub fn copy<S: Scene + ?Sized>(&mut self, scene: Option<&S>) -> bool {
        let Some(scene) = scene else {
            tracing::debug!("copy ignored: no scene mounted");
            return false;
        };
        let Some(snapshot) = ClipboardSnapshot::capture(scene) else {
            return false;
        };
        tracing::debug!(count = snapshot.len(), "copied selection");
        self.slot = Some(snapshot);
        true
    }

    /// Add a fresh clone of the snapshot to the scene, offset by `(dx, dy)` from
    /// the position it was copied at, and select it.
    ///
    /// A group snapshot is added as its individual members and the selection
    /// becomes a group over them. A single render is requested once everything
    /// is in place. Returns the pasted objects; empty when there was nothing to
    /// paste, no scene, or the scene refused the insert.
    pub fn paste<S: Scene + ?Sized>(&self, scene: Option<&mut S>, dx: f64, dy: f64) -> Vec<SceneObject> {
        let Some(scene) = scene else {
            tracing::debug!("paste ignored: no scene mounted");
            return Vec::new();
        };
        let Some(snapshot) = &self.slot else {
            return Vec::new();
        };

        let pasted = snapshot.instantiate(&*scene, dx, dy, scene.next_z_index());
        let ids: Vec<ObjectId> = pasted.iter().map(|obj| obj.id).collect();
        if let Err(e) = scene.add_all(pasted.clone()) {
            tracing::warn!(error = %e, "paste failed; scene unchanged");
            return Vec::new();
        }
        scene.clear_active_selection();
        scene.set_active_selection(&ids);
        scene.request_render();
        tracing::debug!(count = pasted.len(), "pasted clipboard");
        pasted
    }

    /// Whether a paste would add anything.
    #[must_use]
    pub fn can_paste(&self) -> bool {
        self.slot.is_some()
    }

    /// The stored snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&ClipboardSnapshot> {
        self.slot.as_ref()
    }
}

/// Remove every selected object from the scene and clear the selection.
///
/// The whole selection is removed in one call before a single render is
/// requested. The clipboard is not involved. Returns the removed objects;
/// empty when nothing was selected, no scene is mounted, or the scene refused.
pub fn delete<S: Scene + ?Sized>(scene: Option<&mut S>) -> Vec<SceneObject> {
    let Some(scene) = scene else {
        tracing::debug!("delete ignored: no scene mounted");
        return Vec::new();
    };
    let selection = scene.active_selection();
    if selection.is_empty() {
        return Vec::new();
    }
    let removed = match scene.remove(selection.ids()) {
        Ok(removed) => removed,
        Err(e) => {
            tracing::warn!(error = %e, "delete failed; scene unchanged");
            return Vec::new();
        }
    };
    scene.clear_active_selection();
    scene.request_render();
    tracing::debug!(count = removed.len(), "deleted selection");
    removed
}
