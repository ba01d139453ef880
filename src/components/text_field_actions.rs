use std::sync::Once;

use gpui::{App, KeyBinding, actions};

use super::field_kind::FieldShape;

pub const FIELD_KEY_CONTEXT: &str = "calmui_text_field";
pub const FIELD_AREA_KEY_CONTEXT: &str = "calmui_text_field_area";

actions!(
    calmui_text_field,
    [
        MoveLeft,
        MoveRight,
        MoveHome,
        MoveEnd,
        DeleteBackward,
        DeleteForward,
        Submit,
        InsertNewline,
        Blur,
    ]
);

static BINDINGS_INIT: Once = Once::new();

pub fn ensure_field_keybindings(cx: &mut App) {
    BINDINGS_INIT.call_once(|| {
        cx.bind_keys(common_bindings(FIELD_KEY_CONTEXT));
        cx.bind_keys(common_bindings(FIELD_AREA_KEY_CONTEXT));
        cx.bind_keys(single_line_bindings());
        cx.bind_keys(multi_line_bindings());
    });
}

pub const fn key_context(shape: FieldShape) -> &'static str {
    match shape {
        FieldShape::SingleLine => FIELD_KEY_CONTEXT,
        FieldShape::MultiLine => FIELD_AREA_KEY_CONTEXT,
    }
}

fn common_bindings(context: &'static str) -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("left", MoveLeft, Some(context)),
        KeyBinding::new("right", MoveRight, Some(context)),
        KeyBinding::new("home", MoveHome, Some(context)),
        KeyBinding::new("end", MoveEnd, Some(context)),
        KeyBinding::new("backspace", DeleteBackward, Some(context)),
        KeyBinding::new("delete", DeleteForward, Some(context)),
        KeyBinding::new("escape", Blur, Some(context)),
    ]
}

fn single_line_bindings() -> Vec<KeyBinding> {
    vec![KeyBinding::new("enter", Submit, Some(FIELD_KEY_CONTEXT))]
}

fn multi_line_bindings() -> Vec<KeyBinding> {
    vec![KeyBinding::new(
        "enter",
        InsertNewline,
        Some(FIELD_AREA_KEY_CONTEXT),
    )]
}
