use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::clipboard::{self, Clipboard};
use crate::config::EngineConfig;
use crate::geom::Point;
use crate::input::{self, Button, Command, Key, Modifiers};
use crate::menu::{Availability, MenuController, MenuEntry, MenuItem, MenuState};
use crate::object::{ObjectId, PartialSceneObject, SceneObject};
use crate::scene::{Scene, SceneStore};
use crate::transform::{self, FlipAxis};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from operations and input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    ObjectCreated { object: SceneObject },
    ObjectUpdated { id: ObjectId, fields: PartialSceneObject },
    ObjectDeleted { id: ObjectId },
    SelectionChanged { ids: Vec<ObjectId> },
    MenuOpened { x: f64, y: f64 },
    MenuClosed,
    RenderNeeded,
}

/// Engine state and logic that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// The scene is `None` until the host mounts one; every operation is a no-op
/// until then.
#[derive(Default)]
pub struct EngineCore {
    pub scene: Option<SceneStore>,
    pub clipboard: Clipboard,
    pub menu: MenuController,
    pub config: EngineConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with host-supplied settings.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { menu: MenuController::new(&config), config, ..Self::default() }
    }

    /// Swap in new settings. Scene, clipboard and menu state are kept.
    pub fn configure(&mut self, config: EngineConfig) {
        self.menu.apply_config(&config);
        self.config = config;
    }

    // --- Scene lifecycle ---

    /// Attach a scene. Replaces any scene already mounted; the clipboard survives.
    pub fn mount(&mut self, scene: SceneStore) {
        self.scene = Some(scene);
    }

    /// Detach and return the scene.
    pub fn unmount(&mut self) -> Option<SceneStore> {
        self.menu.close();
        self.scene.take()
    }

    /// Hydrate the scene from a full object list, mounting an empty scene first if needed.
    pub fn load_snapshot(&mut self, objects: Vec<SceneObject>) {
        self.scene.get_or_insert_with(SceneStore::new).load_snapshot(objects);
    }

    /// Place an object the host created (drawing tools live outside the engine).
    pub fn insert(&mut self, object: SceneObject) -> Vec<Action> {
        let Some(scene) = self.scene.as_mut() else {
            return Vec::new();
        };
        if let Err(e) = scene.add(object.clone()) {
            tracing::warn!(error = %e, "insert rejected");
            return Vec::new();
        }
        scene.request_render();
        vec![Action::ObjectCreated { object }, Action::RenderNeeded]
    }

    /// Replace the selection, e.g. after the host's own hit-testing.
    pub fn select(&mut self, ids: &[ObjectId]) -> Vec<Action> {
        let Some(scene) = self.scene.as_mut() else {
            return Vec::new();
        };
        scene.set_active_selection(ids);
        scene.request_render();
        vec![Action::SelectionChanged { ids: scene.active_selection().ids().to_vec() }, Action::RenderNeeded]
    }

    // --- Editing operations ---

    /// Copy the selection into the clipboard. Produces no actions; the scene is unchanged.
    pub fn copy(&mut self) -> Vec<Action> {
        self.clipboard.copy(self.scene.as_ref());
        Vec::new()
    }

    /// Paste the clipboard, offset by the configured paste offset.
    pub fn paste(&mut self) -> Vec<Action> {
        let pasted =
            self.clipboard.paste(self.scene.as_mut(), self.config.paste_offset_x, self.config.paste_offset_y);
        if pasted.is_empty() {
            return Vec::new();
        }
        let ids = pasted.iter().map(|obj| obj.id).collect();
        let mut actions: Vec<Action> = pasted.into_iter().map(|object| Action::ObjectCreated { object }).collect();
        actions.push(Action::SelectionChanged { ids });
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove the selection from the scene. The clipboard is left alone.
    pub fn delete(&mut self) -> Vec<Action> {
        let removed = clipboard::delete(self.scene.as_mut());
        if removed.is_empty() {
            return Vec::new();
        }
        let mut actions: Vec<Action> = removed.iter().map(|obj| Action::ObjectDeleted { id: obj.id }).collect();
        actions.push(Action::SelectionChanged { ids: Vec::new() });
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Flip the selection left-to-right.
    pub fn mirror_horizontally(&mut self) -> Vec<Action> {
        self.mirror(FlipAxis::Horizontal)
    }

    /// Flip the selection top-to-bottom.
    pub fn mirror_vertically(&mut self) -> Vec<Action> {
        self.mirror(FlipAxis::Vertical)
    }

    fn mirror(&mut self, axis: FlipAxis) -> Vec<Action> {
        let updates = transform::mirror(self.scene.as_mut(), axis);
        if updates.is_empty() {
            return Vec::new();
        }
        let mut actions: Vec<Action> =
            updates.into_iter().map(|(id, fields)| Action::ObjectUpdated { id, fields }).collect();
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Run `command` against the current selection.
    pub fn execute(&mut self, command: Command) -> Vec<Action> {
        match command {
            Command::Copy => self.copy(),
            Command::Paste => self.paste(),
            Command::Delete => self.delete(),
            Command::MirrorHorizontally => self.mirror_horizontally(),
            Command::MirrorVertically => self.mirror_vertically(),
        }
    }

    // --- Predicates ---

    /// Whether anything is selected. Gates delete and mirror.
    #[must_use]
    pub fn has_active_object(&self) -> bool {
        self.scene.as_ref().is_some_and(|scene| !scene.active_selection().is_empty())
    }

    /// Whether a copy would capture anything.
    #[must_use]
    pub fn can_copy(&self) -> bool {
        self.has_active_object()
    }

    /// Whether the clipboard holds something to paste.
    #[must_use]
    pub fn can_paste(&self) -> bool {
        self.clipboard.can_paste()
    }

    fn availability(&self) -> Availability {
        Availability { has_active_object: self.has_active_object(), can_paste: self.can_paste() }
    }

    // --- Selection menu ---

    /// Menu entries with their current enabled state.
    #[must_use]
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.menu.entries(self.availability())
    }

    /// Open the menu at a screen position, relocating it if already open.
    pub fn open_menu(&mut self, x: f64, y: f64) -> Vec<Action> {
        match self.menu.open(x, y) {
            MenuState::OpenAt { x, y } => vec![Action::MenuOpened { x, y }],
            MenuState::Closed => Vec::new(),
        }
    }

    /// Close the menu if it is open.
    pub fn close_menu(&mut self) -> Vec<Action> {
        if self.menu.close() { vec![Action::MenuClosed] } else { Vec::new() }
    }

    /// Run a menu entry and close the menu.
    ///
    /// A disabled entry does nothing and the menu stays open.
    pub fn invoke_menu_item(&mut self, item: MenuItem) -> Vec<Action> {
        if !self.availability().allows(item.guard()) {
            tracing::debug!(?item, "menu entry disabled");
            return Vec::new();
        }
        let mut actions = self.execute(item.command());
        actions.extend(self.close_menu());
        actions
    }

    /// Update the visible canvas area used to keep the menu on screen.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.menu.set_viewport(width, height);
    }

    // --- Input events ---

    /// Handle a pointer press at a screen position.
    ///
    /// Secondary opens (or moves) the menu. Primary on an open menu activates
    /// the entry under the pointer; anywhere else it dismisses the menu.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        match button {
            Button::Secondary => self.open_menu(screen_pt.x, screen_pt.y),
            Button::Primary if self.menu.contains(screen_pt) => match self.menu.item_at(screen_pt) {
                Some(item) => self.invoke_menu_item(item),
                None => Vec::new(),
            },
            Button::Primary | Button::Middle => self.close_menu(),
        }
    }

    /// Handle a key press: clipboard shortcuts, Delete, and Escape to close the menu.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.0 == "Escape" {
            return self.close_menu();
        }
        match input::shortcut(key, modifiers) {
            Some(command) => self.execute(command),
            None => Vec::new(),
        }
    }

    // --- Queries ---

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.scene.as_ref()?.object(id)
    }

    /// Ids of the selected objects, in selection order.
    #[must_use]
    pub fn selection(&self) -> Vec<ObjectId> {
        self.scene.as_ref().map(|scene| scene.active_selection().ids().to_vec()).unwrap_or_default()
    }
}

/// The browser-facing engine. Wraps `EngineCore` and owns the canvas element.
///
/// Objects, actions and menu entries cross the JS boundary as JSON strings.
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine bound to `canvas` with an empty scene mounted.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let mut engine = Self { canvas, core: EngineCore::new() };
        engine.core.mount(SceneStore::new());
        engine.resize();
        engine
    }

    /// Apply a JSON configuration document, keeping the scene and clipboard.
    ///
    /// # Errors
    ///
    /// Returns a JS `Error` if the document does not parse or validate.
    pub fn configure(&mut self, json: &str) -> Result<(), JsValue> {
        let config = EngineConfig::from_json(json).map_err(|e| js_error(&e))?;
        self.core.configure(config);
        Ok(())
    }

    /// Re-read the canvas size after the page layout changed.
    pub fn resize(&mut self) {
        let width = f64::from(self.canvas.client_width());
        let height = f64::from(self.canvas.client_height());
        self.core.set_viewport(width, height);
    }

    /// Replace the scene with a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns a JS `Error` if the JSON is not a list of scene objects.
    #[wasm_bindgen(js_name = loadSnapshot)]
    pub fn load_snapshot(&mut self, json: &str) -> Result<(), JsValue> {
        let objects: Vec<SceneObject> = serde_json::from_str(json).map_err(|e| js_error(&e))?;
        self.core.load_snapshot(objects);
        Ok(())
    }

    /// Place one JSON object on the scene.
    ///
    /// # Errors
    ///
    /// Returns a JS `Error` if the JSON is not a scene object.
    pub fn insert(&mut self, json: &str) -> Result<String, JsValue> {
        let object: SceneObject = serde_json::from_str(json).map_err(|e| js_error(&e))?;
        to_json(&self.core.insert(object))
    }

    /// Replace the selection with a JSON array of ids.
    ///
    /// # Errors
    ///
    /// Returns a JS `Error` if the JSON is not a list of ids.
    pub fn select(&mut self, json: &str) -> Result<String, JsValue> {
        let ids: Vec<ObjectId> = serde_json::from_str(json).map_err(|e| js_error(&e))?;
        to_json(&self.core.select(&ids))
    }

    /// # Errors
    ///
    /// Returns a JS `Error` if the actions fail to serialize.
    pub fn copy(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.copy())
    }

    /// # Errors
    ///
    /// Returns a JS `Error` if the actions fail to serialize.
    pub fn paste(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.paste())
    }

    /// # Errors
    ///
    /// Returns a JS `Error` if the actions fail to serialize.
    pub fn delete(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.delete())
    }

    /// # Errors
    ///
    /// Returns a JS `Error` if the actions fail to serialize.
    #[wasm_bindgen(js_name = mirrorHorizontally)]
    pub fn mirror_horizontally(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.mirror_horizontally())
    }

    /// # Errors
    ///
    /// Returns a JS `Error` if the actions fail to serialize.
    #[wasm_bindgen(js_name = mirrorVertically)]
    pub fn mirror_vertically(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.mirror_vertically())
    }

    #[wasm_bindgen(js_name = hasActiveObject)]
    #[must_use]
    pub fn has_active_object(&self) -> bool {
        self.core.has_active_object()
    }

    #[wasm_bindgen(js_name = canCopy)]
    #[must_use]
    pub fn can_copy(&self) -> bool {
        self.core.can_copy()
    }

    #[wasm_bindgen(js_name = canPaste)]
    #[must_use]
    pub fn can_paste(&self) -> bool {
        self.core.can_paste()
    }

    /// # Errors
    ///
    /// Returns a JS `Error` if the entries fail to serialize.
    #[wasm_bindgen(js_name = menuEntries)]
    pub fn menu_entries(&self) -> Result<String, JsValue> {
        to_json(&self.core.menu_entries())
    }

    /// # Errors
    ///
    /// Returns a JS `Error` if the state fails to serialize.
    #[wasm_bindgen(js_name = menuState)]
    pub fn menu_state(&self) -> Result<String, JsValue> {
        to_json(&self.core.menu.state())
    }

    /// # Errors
    ///
    /// Returns a JS `Error` if the actions fail to serialize.
    #[wasm_bindgen(js_name = closeMenu)]
    pub fn close_menu(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.close_menu())
    }

    /// Forward a DOM `pointerdown`. Unknown button codes are ignored.
    ///
    /// # Errors
    ///
    /// Returns a JS `Error` if the actions fail to serialize.
    #[wasm_bindgen(js_name = onPointerDown)]
    pub fn on_pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        let actions = match Button::from_dom(button) {
            Some(button) => self.core.on_pointer_down(Point::new(x, y), button),
            None => Vec::new(),
        };
        to_json(&actions)
    }

    /// Forward a DOM `keydown`.
    ///
    /// # Errors
    ///
    /// Returns a JS `Error` if the actions fail to serialize.
    #[wasm_bindgen(js_name = onKeyDown)]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn on_key_down(
        &mut self,
        key: String,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> Result<String, JsValue> {
        to_json(&self.core.on_key_down(&Key(key), Modifiers { shift, ctrl, alt, meta }))
    }

    /// All objects in draw order, as JSON.
    ///
    /// # Errors
    ///
    /// Returns a JS `Error` if the objects fail to serialize.
    pub fn objects(&self) -> Result<String, JsValue> {
        match &self.core.scene {
            Some(scene) => to_json(&scene.sorted_objects()),
            None => to_json(&Vec::<SceneObject>::new()),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(&e))
}

fn js_error(err: &dyn std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
