//! Clipboard and selection engine for the floor-plan design canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser next to the
//! canvas. It owns the editing transactions that act on the current selection:
//! copying it into an internal clipboard slot, pasting independent clones back
//! onto the scene, deleting it, and mirroring it along either axis. It also
//! tracks the right-click selection menu and answers which of its entries are
//! currently enabled. The host JavaScript layer forwards pointer and keyboard
//! events and redraws when the engine reports [`engine::Action::RenderNeeded`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level browser handle and testable [`engine::EngineCore`] |
//! | [`scene`] | Scene contract and the in-memory object arena with its selection |
//! | [`object`] | Scene object types and sparse updates |
//! | [`clipboard`] | Clipboard slot and the copy/paste/delete transactions |
//! | [`transform`] | Horizontal and vertical mirroring of the selection |
//! | [`menu`] | Selection menu state machine and entry predicates |
//! | [`input`] | Pointer buttons, modifiers, keys, and keyboard shortcuts |
//! | [`geom`] | Points and bounding boxes in canvas coordinates |
//! | [`config`] | Host-supplied engine configuration |
//! | [`error`] | Error types for scene and configuration failures |
//! | [`consts`] | Shared numeric constants (paste offset, menu geometry) |

pub mod clipboard;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod input;
pub mod menu;
pub mod object;
pub mod scene;
pub mod transform;
