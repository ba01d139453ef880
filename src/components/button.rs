use std::rc::Rc;

use gpui::{
    FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::id::ComponentId;
use crate::style::{Corners, Radius, Size};
use crate::tokens::FIELD_METRICS;

use super::utils::{apply_corner_radius, resolve_hsla};

pub type ClickHandler = Rc<dyn Fn(&mut Window, &mut gpui::App)>;

/// Filled primary button.
#[derive(IntoElement)]
pub struct Button {
    id: ComponentId,
    label: SharedString,
    size: Size,
    radius: Radius,
    corners: Corners,
    disabled: bool,
    theme: crate::theme::LocalTheme,
    on_click: Option<ClickHandler>,
}

impl Button {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: ComponentId::auto("button"),
            label: label.into(),
            size: Size::Lg,
            radius: Radius::Sm,
            corners: Corners::all(),
            disabled: false,
            theme: crate::theme::LocalTheme::default(),
            on_click: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn size(mut self, value: Size) -> Self {
        self.size = value;
        self
    }

    pub fn radius(mut self, value: Radius) -> Self {
        self.radius = value;
        self
    }

    /// Corners that keep the radius; the others are drawn square.
    pub fn corners(mut self, value: Corners) -> Self {
        self.corners = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub(crate) fn on_click_handler(mut self, handler: Option<ClickHandler>) -> Self {
        self.on_click = handler;
        self
    }

    pub(crate) fn with_local_theme(mut self, theme: crate::theme::LocalTheme) -> Self {
        self.theme = theme;
        self
    }
}

fn size_metrics(size: Size) -> (f32, f32, f32) {
    // (height, horizontal padding, font size)
    match size {
        Size::Xs => (24.0, 8.0, 12.0),
        Size::Sm => (30.0, 12.0, 13.0),
        Size::Md => (36.0, 14.0, 14.0),
        Size::Lg => (FIELD_METRICS.input_height, 16.0, FIELD_METRICS.font_size),
        Size::Xl => (48.0, 20.0, 16.0),
    }
}

crate::impl_disableable!(Button);
crate::impl_theme_overridable!(Button);

impl RenderOnce for Button {
    fn render(mut self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let tokens = &self.theme.components.button;
        let (bg, fg) = if self.disabled {
            (
                resolve_hsla(&self.theme, &tokens.disabled_bg),
                resolve_hsla(&self.theme, &tokens.disabled_fg),
            )
        } else {
            (
                resolve_hsla(&self.theme, &tokens.filled_bg),
                resolve_hsla(&self.theme, &tokens.filled_fg),
            )
        };
        let (height, padding_x, font_size) = size_metrics(self.size);

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_none()
            .flex_row()
            .items_center()
            .justify_center()
            .h(px(height))
            .px(px(padding_x))
            .text_size(px(font_size))
            .font_weight(FontWeight::SEMIBOLD)
            .whitespace_nowrap()
            .bg(bg)
            .text_color(fg)
            .border(super::utils::quantized_stroke_px(window, 1.0))
            .border_color(bg);
        root = apply_corner_radius(root, self.radius, self.corners);

        if self.disabled {
            root = root.cursor_default();
        } else if let Some(handler) = self.on_click.clone() {
            let hover_bg = bg.blend(gpui::white().opacity(0.08));
            let active_bg = bg.blend(gpui::black().opacity(0.12));
            root = root
                .cursor_pointer()
                .hover(move |style| style.bg(hover_bg))
                .active(move |style| style.bg(active_bg))
                .on_click(move |_, window, cx| (handler)(window, cx));
        } else {
            root = root.cursor_default();
        }

        root.child(self.label)
    }
}
