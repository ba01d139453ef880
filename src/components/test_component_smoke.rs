use super::*;
use crate::contracts::{ComponentThemeOverridable, Disableable, MotionAware, StatusReporting};
use crate::motion::{MotionConfig, MotionLevel};
use crate::style::Corners;
use crate::theme::{ColorValue, ComponentPatch, TextFieldPatch};
use gpui::{AnyElement, IntoElement, ParentElement, div};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

#[test]
fn smoke_single_line_kinds_render_into_any_element() {
    for kind in [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::Tel,
    ] {
        let _ = into_any(
            TextField::new()
                .with_id(format!("smoke-{}", kind.as_str()))
                .kind(kind)
                .label("Label")
                .placeholder("placeholder"),
        );
    }
}

#[test]
fn smoke_fully_configured_fields_render_into_any_element() {
    let _ = into_any(
        TextField::new()
            .with_id("smoke-full")
            .label("Email")
            .max_length(40)
            .prefix(div().child("@"))
            .suffix(div().child(".com"))
            .button_label("Send")
            .hint("We never share it")
            .on_change(|_, _, _| {})
            .on_button_click(|_, _| {}),
    );
    let _ = into_any(
        TextField::textarea()
            .with_id("smoke-textarea")
            .label("Notes")
            .button_label("ignored")
            .max_length(200)
            .dark(true),
    );
    let _ = into_any(
        TextField::password()
            .with_id("smoke-password")
            .label("Password")
            .read_only(true)
            .hint_text(HintText::new().error("bad").success("ok")),
    );
}

#[test]
fn smoke_contract_builders_compose() {
    let field = TextField::new()
        .with_id("smoke-contracts")
        .disabled(true)
        .motion(MotionConfig::new().level(MotionLevel::None))
        .theme(|patch| ComponentPatch {
            text_field: TextFieldPatch {
                border_active: Some(ColorValue::Custom("#ff00ff".to_string())),
                ..patch.text_field
            },
            ..patch
        });
    let field = StatusReporting::error(field, "required");
    let field = Disableable::disabled(field, false);
    assert!(!field.config().disabled);
    let _ = into_any(field.clear_theme_patch());
}

#[test]
fn smoke_button_renders_into_any_element() {
    let _ = into_any(Button::new("Go").with_id("smoke-button"));
    let _ = into_any(
        Button::new("Attached")
            .with_id("smoke-attached")
            .corners(Corners::right())
            .disabled(true)
            .on_click(|_, _| {}),
    );
}
