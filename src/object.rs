//! Scene objects: the drawable entities placed on the floor plan.
//!
//! This module defines what a single placed entity looks like (`SceneObject`,
//! `ObjectKind`) and a sparse-update type for in-place edits such as mirroring
//! (`PartialSceneObject`).
//!
//! Objects arrive from the host as JSON and are owned by the scene arena while
//! placed. The clipboard owns its own detached copies.

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Bounds, Point};

/// Unique identifier for a scene object.
pub type ObjectId = Uuid;

/// The kind of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Ellipse inscribed within the bounding box.
    Ellipse,
    /// Straight line segment across the bounding box.
    Line,
    /// Free text label.
    Text,
    /// Wall segment.
    Wall,
    /// Door opening with its swing arc.
    Door,
    /// Window opening.
    Window,
    /// Furniture symbol (bed, table, sofa...), named in `props`.
    Furniture,
}

/// A scene object as placed on the canvas and exchanged with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Unique identifier for this object.
    pub id: ObjectId,
    /// Shape type.
    pub kind: ObjectKind,
    /// Left edge of the bounding box in canvas coordinates.
    pub x: f64,
    /// Top edge of the bounding box in canvas coordinates.
    pub y: f64,
    /// Width of the bounding box in canvas coordinates.
    pub width: f64,
    /// Height of the bounding box in canvas coordinates.
    pub height: f64,
    /// Clockwise rotation in degrees around the bounding-box center.
    #[serde(default)]
    pub rotation: f64,
    /// Mirrored left-to-right.
    #[serde(default)]
    pub flip_x: bool,
    /// Mirrored top-to-bottom.
    #[serde(default)]
    pub flip_y: bool,
    /// Whether the object takes part in hit-testing.
    #[serde(default = "default_evented")]
    pub evented: bool,
    /// Stacking order; lower values are drawn beneath higher values.
    #[serde(default)]
    pub z_index: i64,
    /// Open-ended per-kind properties (fill, stroke, label, etc.).
    #[serde(default)]
    pub props: serde_json::Value,
}

fn default_evented() -> bool {
    true
}

impl SceneObject {
    /// Create an object of `kind` with the given bounding box and default styling.
    #[must_use]
    pub fn new(kind: ObjectKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            flip_x: false,
            flip_y: false,
            evented: true,
            z_index: 0,
            props: serde_json::json!({}),
        }
    }

    /// Deep copy under a fresh id.
    ///
    /// The copy owns all of its data, so later edits to either object are never
    /// visible through the other.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self { id: Uuid::new_v4(), ..self.clone() }
    }

    /// Top-left corner of the bounding box.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the object by `(dx, dy)` canvas units.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Unrotated bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_rect(self.x, self.y, self.width, self.height)
    }
}

/// Sparse update for a scene object. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSceneObject {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// New horizontal mirror flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_x: Option<bool>,
    /// New vertical mirror flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_y: Option<bool>,
    /// New hit-testing flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evented: Option<bool>,
}

impl PartialSceneObject {
    /// Write every present field into `obj`.
    pub fn apply_to(&self, obj: &mut SceneObject) {
        if let Some(x) = self.x {
            obj.x = x;
        }
        if let Some(y) = self.y {
            obj.y = y;
        }
        if let Some(r) = self.rotation {
            obj.rotation = r;
        }
        if let Some(f) = self.flip_x {
            obj.flip_x = f;
        }
        if let Some(f) = self.flip_y {
            obj.flip_y = f;
        }
        if let Some(e) = self.evented {
            obj.evented = e;
        }
    }
}
