use gpui::{IntoElement, ParentElement, div};

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn widgets_facade_exports_render_components() {
    assert_render_once::<crate::widgets::form::TextField>();
    assert_render_once::<crate::widgets::form::Button>();
}

#[test]
fn prelude_smoke_builds_core_widgets() {
    use crate::prelude::*;

    let _ = into_any(Button::new("button"));
    let _ = into_any(TextField::new().label("input"));
    let _ = into_any(TextField::textarea().label("textarea"));
    let _ = into_any(
        TextField::password()
            .label("password")
            .hint_text(HintText::new().hint("at least 8 characters")),
    );
    let _ = into_any(
        TextField::new()
            .kind(FieldKind::Email)
            .prefix(div().child("to:"))
            .button_label("Invite"),
    );
}

#[test]
fn foundation_facade_exports_core_types() {
    let _ = crate::foundation::style::Size::Md;
    let _ = crate::foundation::style::Radius::Sm;
    let _ = crate::foundation::style::Corners::right();
    let _ = crate::foundation::motion::MotionConfig::default();
    let _ = crate::foundation::theme::Theme::default();
    let _ = crate::foundation::provider::CalmProvider::new();
    let _ = crate::foundation::id::ComponentId::from("api");
    let _ = crate::foundation::tokens::FIELD_METRICS;
}

#[test]
fn strength_facade_exports_scorer_types() {
    let error = crate::widgets::strength::ScorerError::Unavailable;
    assert!(error.to_string().contains("not available"));
    assert_eq!(
        crate::widgets::strength::StrengthScore::from_raw(9),
        crate::widgets::strength::StrengthScore::Four
    );
}
