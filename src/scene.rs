//! Scene contract and the in-memory object arena.
//!
//! [`Scene`] is the surface the clipboard and transform engines drive: read the
//! active selection, add and remove objects, apply in-place updates, replace the
//! selection, and request a redraw. [`SceneStore`] is the implementation the
//! browser engine mounts: an arena of objects keyed by id plus an index set
//! naming the current selection.
//!
//! A multi-object selection is only ever a list of ids. It is never stored as an
//! object, so removing members can not leave a grouping object behind.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::{HashMap, HashSet};

use crate::error::SceneError;
use crate::geom::Bounds;
use crate::object::{ObjectId, PartialSceneObject, SceneObject};

/// What is currently selected on the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveSelection {
    /// Nothing is selected.
    #[default]
    Empty,
    /// Exactly one object is selected.
    Single(ObjectId),
    /// Two or more objects are selected and act as one unit.
    Group(Vec<ObjectId>),
}

impl ActiveSelection {
    /// Build a selection from ids, collapsing to `Empty` or `Single` as appropriate.
    ///
    /// Duplicate ids are dropped, keeping the first occurrence.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ObjectId>) -> Self {
        let mut seen = HashSet::new();
        let mut unique: Vec<ObjectId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        match unique.len() {
            0 => Self::Empty,
            1 => Self::Single(unique.remove(0)),
            _ => Self::Group(unique),
        }
    }

    /// The selected ids, in selection order.
    #[must_use]
    pub fn ids(&self) -> &[ObjectId] {
        match self {
            Self::Empty => &[],
            Self::Single(id) => std::slice::from_ref(id),
            Self::Group(ids) => ids,
        }
    }

    /// Number of selected objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids().len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether `id` is part of the selection.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.ids().contains(id)
    }
}

/// The canvas being edited, as seen by the clipboard and transform engines.
///
/// Multi-object mutations go through `add_all`, `remove` and `update_all`, each
/// of which applies to every listed object or to none of them.
pub trait Scene {
    /// The current selection.
    fn active_selection(&self) -> ActiveSelection;

    /// Every selected object, in selection order.
    fn active_objects(&self) -> Vec<&SceneObject>;

    /// Look up an object by id.
    fn object(&self, id: &ObjectId) -> Option<&SceneObject>;

    /// Stacking index that places a new object above everything on the scene.
    /// Saturates at `i64::MAX`.
    fn next_z_index(&self) -> i64;

    /// Insert every object, or none of them if any id is already present.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateObject`] naming the first conflicting id.
    fn add_all(&mut self, objects: Vec<SceneObject>) -> Result<(), SceneError>;

    /// Remove every listed object, or none of them if any id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownObject`] naming the first missing id.
    fn remove(&mut self, ids: &[ObjectId]) -> Result<Vec<SceneObject>, SceneError>;

    /// Apply every sparse update, or none of them if any id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownObject`] naming the first missing id.
    fn update_all(&mut self, updates: &[(ObjectId, PartialSceneObject)]) -> Result<(), SceneError>;

    /// Replace the selection with the listed ids. Ids not on the scene are ignored.
    fn set_active_selection(&mut self, ids: &[ObjectId]);

    /// Deselect everything.
    fn clear_active_selection(&mut self);

    /// Mark the scene as needing a redraw.
    fn request_render(&mut self);

    /// Detached deep copy of `object`, suitable for adding back to the scene.
    fn clone_object(&self, object: &SceneObject) -> SceneObject {
        object.duplicate()
    }

    /// Insert a single object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateObject`] if the id is already present.
    fn add(&mut self, object: SceneObject) -> Result<(), SceneError> {
        self.add_all(vec![object])
    }
}

/// In-memory scene: objects keyed by id, the active selection, and a redraw counter.
#[derive(Debug, Default)]
pub struct SceneStore {
    objects: HashMap<ObjectId, SceneObject>,
    selection: ActiveSelection,
    selection_bounds: Option<Bounds>,
    render_requests: u64,
}

impl SceneStore {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all objects with a full snapshot and clear the selection.
    pub fn load_snapshot(&mut self, objects: Vec<SceneObject>) {
        self.objects = objects.into_iter().map(|obj| (obj.id, obj)).collect();
        self.selection = ActiveSelection::Empty;
        self.selection_bounds = None;
    }

    /// Return all objects sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted_objects(&self) -> Vec<&SceneObject> {
        let mut objs: Vec<&SceneObject> = self.objects.values().collect();
        objs.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        objs
    }

    /// Bounding box of the current selection, refreshed whenever the selection
    /// or one of its members changes. `None` when nothing is selected.
    #[must_use]
    pub fn selection_bounds(&self) -> Option<Bounds> {
        self.selection_bounds
    }

    /// How many redraws have been requested since the store was created.
    #[must_use]
    pub fn render_requests(&self) -> u64 {
        self.render_requests
    }

    /// Number of objects currently on the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn refresh_selection_bounds(&mut self) {
        self.selection_bounds = Bounds::union_all(
            self.selection
                .ids()
                .iter()
                .filter_map(|id| self.objects.get(id))
                .map(SceneObject::bounds),
        );
    }
}

impl Scene for SceneStore {
    fn active_selection(&self) -> ActiveSelection {
        self.selection.clone()
    }

    fn active_objects(&self) -> Vec<&SceneObject> {
        self.selection.ids().iter().filter_map(|id| self.objects.get(id)).collect()
    }

    fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    fn next_z_index(&self) -> i64 {
        self.objects.values().map(|obj| obj.z_index).max().map_or(0, |z| z.saturating_add(1))
    }

    fn add_all(&mut self, objects: Vec<SceneObject>) -> Result<(), SceneError> {
        let mut incoming = HashSet::new();
        for obj in &objects {
            if self.objects.contains_key(&obj.id) || !incoming.insert(obj.id) {
                return Err(SceneError::DuplicateObject(obj.id));
            }
        }
        for obj in objects {
            self.objects.insert(obj.id, obj);
        }
        Ok(())
    }

    fn remove(&mut self, ids: &[ObjectId]) -> Result<Vec<SceneObject>, SceneError> {
        if let Some(missing) = ids.iter().find(|id| !self.objects.contains_key(*id)) {
            return Err(SceneError::UnknownObject(*missing));
        }
        let removed: Vec<SceneObject> = ids.iter().filter_map(|id| self.objects.remove(id)).collect();
        if ids.iter().any(|id| self.selection.contains(id)) {
            let remaining: Vec<ObjectId> =
                self.selection.ids().iter().copied().filter(|id| !ids.contains(id)).collect();
            self.selection = ActiveSelection::from_ids(remaining);
            self.refresh_selection_bounds();
        }
        Ok(removed)
    }

    fn update_all(&mut self, updates: &[(ObjectId, PartialSceneObject)]) -> Result<(), SceneError> {
        if let Some((missing, _)) = updates.iter().find(|(id, _)| !self.objects.contains_key(id)) {
            return Err(SceneError::UnknownObject(*missing));
        }
        for (id, partial) in updates {
            if let Some(obj) = self.objects.get_mut(id) {
                partial.apply_to(obj);
            }
        }
        if updates.iter().any(|(id, _)| self.selection.contains(id)) {
            self.refresh_selection_bounds();
        }
        Ok(())
    }

    fn set_active_selection(&mut self, ids: &[ObjectId]) {
        let known = ids.iter().copied().filter(|id| self.objects.contains_key(id));
        self.selection = ActiveSelection::from_ids(known);
        self.refresh_selection_bounds();
    }

    fn clear_active_selection(&mut self) {
        self.selection = ActiveSelection::Empty;
        self.selection_bounds = None;
    }

    fn request_render(&mut self) {
        self.render_requests += 1;
    }
}
