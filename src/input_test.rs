use super::*;

fn key(name: &str) -> Key {
    Key(name.to_owned())
}

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Default::default() }
}

fn meta() -> Modifiers {
    Modifiers { meta: true, ..Default::default() }
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
    assert!(!m.primary());
}

#[test]
fn modifiers_primary_is_ctrl_or_meta() {
    assert!(ctrl().primary());
    assert!(meta().primary());
    assert!(!Modifiers { shift: true, alt: true, ..Default::default() }.primary());
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Some(Button::Primary));
    assert_eq!(Button::from_dom(1), Some(Button::Middle));
    assert_eq!(Button::from_dom(2), Some(Button::Secondary));
    assert_eq!(Button::from_dom(3), None);
    assert_eq!(Button::from_dom(-1), None);
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_equality() {
    assert_eq!(key("Delete"), key("Delete"));
    assert_ne!(key("Delete"), key("Backspace"));
}

// =============================================================
// Shortcuts
// =============================================================

#[test]
fn shortcut_ctrl_c_copies() {
    assert_eq!(shortcut(&key("c"), ctrl()), Some(Command::Copy));
}

#[test]
fn shortcut_meta_v_pastes() {
    assert_eq!(shortcut(&key("v"), meta()), Some(Command::Paste));
}

#[test]
fn shortcut_letters_ignore_case() {
    assert_eq!(shortcut(&key("C"), ctrl()), Some(Command::Copy));
    assert_eq!(shortcut(&key("V"), meta()), Some(Command::Paste));
}

#[test]
fn shortcut_plain_letter_does_nothing() {
    assert_eq!(shortcut(&key("c"), Modifiers::default()), None);
    assert_eq!(shortcut(&key("v"), Modifiers { shift: true, ..Default::default() }), None);
}

#[test]
fn shortcut_delete_needs_no_modifier() {
    assert_eq!(shortcut(&key("Delete"), Modifiers::default()), Some(Command::Delete));
    assert_eq!(shortcut(&key("Delete"), ctrl()), Some(Command::Delete));
}

#[test]
fn shortcut_other_keys_unbound() {
    assert_eq!(shortcut(&key("x"), ctrl()), None);
    assert_eq!(shortcut(&key("Backspace"), Modifiers::default()), None);
    assert_eq!(shortcut(&key("Escape"), Modifiers::default()), None);
}

#[test]
fn command_serde_snake_case() {
    let json = serde_json::to_string(&Command::MirrorHorizontally).unwrap();
    assert_eq!(json, "\"mirror_horizontally\"");
}
