#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::geom::Point;
use crate::object::ObjectKind;

fn rect_at(x: f64, y: f64) -> SceneObject {
    SceneObject::new(ObjectKind::Rect, x, y, 100.0, 80.0)
}

fn store_with(objects: &[SceneObject]) -> SceneStore {
    let mut store = SceneStore::new();
    store.load_snapshot(objects.to_vec());
    store
}

// =============================================================
// ActiveSelection
// =============================================================

#[test]
fn selection_default_is_empty() {
    let sel = ActiveSelection::default();
    assert!(sel.is_empty());
    assert_eq!(sel.len(), 0);
    assert!(sel.ids().is_empty());
}

#[test]
fn selection_from_no_ids_is_empty() {
    assert_eq!(ActiveSelection::from_ids(Vec::new()), ActiveSelection::Empty);
}

#[test]
fn selection_from_one_id_is_single() {
    let id = Uuid::new_v4();
    assert_eq!(ActiveSelection::from_ids([id]), ActiveSelection::Single(id));
}

#[test]
fn selection_from_many_ids_is_group_in_order() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let sel = ActiveSelection::from_ids([c, a, b]);
    assert_eq!(sel, ActiveSelection::Group(vec![c, a, b]));
    assert_eq!(sel.len(), 3);
}

#[test]
fn selection_from_duplicate_ids_collapses() {
    let id = Uuid::new_v4();
    assert_eq!(ActiveSelection::from_ids([id, id]), ActiveSelection::Single(id));
}

#[test]
fn selection_contains() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let sel = ActiveSelection::Single(a);
    assert!(sel.contains(&a));
    assert!(!sel.contains(&b));
}

// =============================================================
// SceneStore: basics
// =============================================================

#[test]
fn store_new_is_empty() {
    let store = SceneStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.active_selection().is_empty());
    assert!(store.selection_bounds().is_none());
    assert_eq!(store.render_requests(), 0);
}

#[test]
fn store_load_snapshot_replaces_objects_and_selection() {
    let a = rect_at(0.0, 0.0);
    let mut store = store_with(&[a.clone()]);
    store.set_active_selection(&[a.id]);
    let b = rect_at(10.0, 10.0);
    store.load_snapshot(vec![b.clone()]);
    assert_eq!(store.len(), 1);
    assert!(store.object(&a.id).is_none());
    assert!(store.object(&b.id).is_some());
    assert!(store.active_selection().is_empty());
}

#[test]
fn store_sorted_objects_by_z_index() {
    let mut low = rect_at(0.0, 0.0);
    low.z_index = 1;
    let mut high = rect_at(0.0, 0.0);
    high.z_index = 5;
    let store = store_with(&[high.clone(), low.clone()]);
    let ids: Vec<ObjectId> = store.sorted_objects().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![low.id, high.id]);
}

#[test]
fn store_next_z_index_empty_is_zero() {
    assert_eq!(SceneStore::new().next_z_index(), 0);
}

#[test]
fn store_next_z_index_above_max() {
    let mut a = rect_at(0.0, 0.0);
    a.z_index = 7;
    let b = rect_at(0.0, 0.0);
    assert_eq!(store_with(&[a, b]).next_z_index(), 8);
}

#[test]
fn store_request_render_counts() {
    let mut store = SceneStore::new();
    store.request_render();
    store.request_render();
    assert_eq!(store.render_requests(), 2);
}

// =============================================================
// SceneStore: add / remove
// =============================================================

#[test]
fn store_add_inserts() {
    let mut store = SceneStore::new();
    let obj = rect_at(5.0, 5.0);
    store.add(obj.clone()).unwrap();
    assert_eq!(store.object(&obj.id), Some(&obj));
}

#[test]
fn store_add_all_rejects_existing_id_without_inserting_any() {
    let existing = rect_at(0.0, 0.0);
    let mut store = store_with(&[existing.clone()]);
    let fresh = rect_at(1.0, 1.0);
    let err = store.add_all(vec![fresh.clone(), existing.clone()]).unwrap_err();
    assert_eq!(err, SceneError::DuplicateObject(existing.id));
    assert_eq!(store.len(), 1);
    assert!(store.object(&fresh.id).is_none());
}

#[test]
fn store_add_all_rejects_duplicate_within_batch() {
    let obj = rect_at(0.0, 0.0);
    let mut store = SceneStore::new();
    assert!(store.add_all(vec![obj.clone(), obj]).is_err());
    assert!(store.is_empty());
}

#[test]
fn store_remove_returns_removed_objects() {
    let a = rect_at(0.0, 0.0);
    let b = rect_at(1.0, 1.0);
    let mut store = store_with(&[a.clone(), b.clone()]);
    let removed = store.remove(&[a.id]).unwrap();
    assert_eq!(removed, vec![a]);
    assert_eq!(store.len(), 1);
}

#[test]
fn store_remove_unknown_removes_nothing() {
    let a = rect_at(0.0, 0.0);
    let mut store = store_with(&[a.clone()]);
    let ghost = Uuid::new_v4();
    let err = store.remove(&[a.id, ghost]).unwrap_err();
    assert_eq!(err, SceneError::UnknownObject(ghost));
    assert_eq!(store.len(), 1);
}

#[test]
fn store_remove_prunes_selection() {
    let (a, b, c) = (rect_at(0.0, 0.0), rect_at(200.0, 0.0), rect_at(400.0, 0.0));
    let mut store = store_with(&[a.clone(), b.clone(), c.clone()]);
    store.set_active_selection(&[a.id, b.id, c.id]);
    store.remove(&[a.id, c.id]).unwrap();
    assert_eq!(store.active_selection(), ActiveSelection::Single(b.id));
    assert_eq!(store.selection_bounds(), Some(b.bounds()));
}

// =============================================================
// SceneStore: selection
// =============================================================

#[test]
fn store_set_selection_ignores_unknown_ids() {
    let a = rect_at(0.0, 0.0);
    let mut store = store_with(&[a.clone()]);
    store.set_active_selection(&[Uuid::new_v4(), a.id]);
    assert_eq!(store.active_selection(), ActiveSelection::Single(a.id));
}

#[test]
fn store_active_objects_in_selection_order() {
    let (a, b) = (rect_at(0.0, 0.0), rect_at(10.0, 0.0));
    let mut store = store_with(&[a.clone(), b.clone()]);
    store.set_active_selection(&[b.id, a.id]);
    let ids: Vec<ObjectId> = store.active_objects().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[test]
fn store_selection_bounds_span_group() {
    let a = SceneObject::new(ObjectKind::Rect, 0.0, 0.0, 10.0, 10.0);
    let b = SceneObject::new(ObjectKind::Rect, 90.0, 40.0, 10.0, 10.0);
    let mut store = store_with(&[a.clone(), b.clone()]);
    store.set_active_selection(&[a.id, b.id]);
    let bounds = store.selection_bounds().unwrap_or(a.bounds());
    assert_eq!(bounds.min, Point::new(0.0, 0.0));
    assert_eq!(bounds.max, Point::new(100.0, 50.0));
}

#[test]
fn store_clear_selection() {
    let a = rect_at(0.0, 0.0);
    let mut store = store_with(&[a.clone()]);
    store.set_active_selection(&[a.id]);
    store.clear_active_selection();
    assert!(store.active_selection().is_empty());
    assert!(store.selection_bounds().is_none());
    assert_eq!(store.len(), 1);
}

// =============================================================
// SceneStore: update_all
// =============================================================

#[test]
fn store_update_all_applies_each() {
    let (a, b) = (rect_at(0.0, 0.0), rect_at(10.0, 0.0));
    let mut store = store_with(&[a.clone(), b.clone()]);
    store
        .update_all(&[
            (a.id, PartialSceneObject { flip_x: Some(true), ..Default::default() }),
            (b.id, PartialSceneObject { x: Some(99.0), ..Default::default() }),
        ])
        .unwrap();
    assert!(store.object(&a.id).is_some_and(|o| o.flip_x));
    assert!(store.object(&b.id).is_some_and(|o| o.x == 99.0));
}

#[test]
fn store_update_all_unknown_applies_nothing() {
    let a = rect_at(0.0, 0.0);
    let mut store = store_with(&[a.clone()]);
    let ghost = Uuid::new_v4();
    let err = store
        .update_all(&[
            (a.id, PartialSceneObject { flip_x: Some(true), ..Default::default() }),
            (ghost, PartialSceneObject::default()),
        ])
        .unwrap_err();
    assert_eq!(err, SceneError::UnknownObject(ghost));
    assert!(store.object(&a.id).is_some_and(|o| !o.flip_x));
}

#[test]
fn store_update_refreshes_selection_bounds() {
    let a = rect_at(0.0, 0.0);
    let mut store = store_with(&[a.clone()]);
    store.set_active_selection(&[a.id]);
    store
        .update_all(&[(a.id, PartialSceneObject { x: Some(50.0), y: Some(60.0), ..Default::default() })])
        .unwrap();
    assert_eq!(store.selection_bounds().map(|b| b.min), Some(Point::new(50.0, 60.0)));
}

#[test]
fn store_clone_object_is_detached() {
    let a = rect_at(0.0, 0.0);
    let store = store_with(&[a.clone()]);
    let copy = store.clone_object(&a);
    assert_ne!(copy.id, a.id);
    assert_eq!(copy.position(), a.position());
}
