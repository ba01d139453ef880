use std::{
    collections::HashMap,
    ops::Range,
    rc::Rc,
    sync::{Arc, LazyLock, Mutex},
    time::Duration,
};

use gpui::{
    Animation, AnimationExt, AnyElement, Bounds, FocusHandle, InputHandler, InteractiveElement,
    IntoElement, MouseButton, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement,
    Styled, UTF16Selection, Window, canvas, div, point, px, relative,
};

use crate::contracts::{MotionAware, StatusReporting};
use crate::id::ComponentId;
use crate::motion::MotionConfig;
use crate::style::{Corners, Radius, Size};
use crate::theme::{ColorScheme, ColorValue, TextFieldTokens};
use crate::tokens::FIELD_METRICS;

use super::button::{Button, ClickHandler};
use super::control::{self, ContentGeometry};
use super::edit_buffer::{
    EditBuffer, EditProposal, byte_index_at_char, char_index_from_utf16, line_col, normalize_newlines,
    single_line, utf16_from_char,
};
use super::field_kind::{FieldKind, FieldShape};
use super::field_state::{
    EditOutcome, FieldConfig, FocusPhase, LabelPlacement, is_button_disabled,
    placeholder_visible,
};
use super::hint::{HintText, StatusTone, word_count};
use super::strength::{LoadStatus, ScorerCache, StrengthScore, meter_color, meter_geometry};
use super::text_field_actions::{
    Blur, DeleteBackward, DeleteForward, InsertNewline, MoveEnd, MoveHome, MoveLeft, MoveRight,
    Submit, ensure_field_keybindings, key_context,
};
use super::transition::{TransitionExt, width_at};
use super::utils::{apply_radius, quantized_stroke_px, resolve_hsla};

type ChangeHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;
type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

const CARET_BLINK_CYCLE_MS: u64 = 1360;
const DISABLED_OPACITY: f32 = 0.32;
const MASK_CHAR: char = '•';
const LABEL_FLOATED_SLOT: &str = "label-floated";

static FIELD_FOCUS_HANDLES: LazyLock<Mutex<HashMap<String, FocusHandle>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Border color of the field wrapper.
///
/// A blank label hides the border; otherwise success and error tones win over
/// the focus phase.
pub fn border_color<'a>(
    tokens: &'a TextFieldTokens,
    config: &FieldConfig,
    hint: &HintText,
    phase: FocusPhase,
) -> &'a ColorValue {
    if config.has_blank_label() {
        return &tokens.bg;
    }
    match (hint.chrome_tone(), phase) {
        (Some(StatusTone::Success), _) => &tokens.border_success,
        (Some(StatusTone::Error), _) => &tokens.border_error,
        (_, FocusPhase::Active) => &tokens.border_active,
        (_, FocusPhase::Settled) => &tokens.border_settled,
        (_, FocusPhase::Idle) => &tokens.border,
    }
}

pub fn label_color<'a>(
    tokens: &'a TextFieldTokens,
    hint: &HintText,
    phase: FocusPhase,
) -> &'a ColorValue {
    match (hint.chrome_tone(), phase) {
        (Some(StatusTone::Success), _) => &tokens.label_success,
        (Some(StatusTone::Error), _) => &tokens.label_error,
        (_, FocusPhase::Active) => &tokens.label_active,
        (_, FocusPhase::Settled) => &tokens.label_settled,
        (_, FocusPhase::Idle) => &tokens.label,
    }
}

pub fn helper_color<'a>(tokens: &'a TextFieldTokens, hint: &HintText) -> &'a ColorValue {
    match hint.chrome_tone() {
        Some(StatusTone::Success) => &tokens.helper_success,
        Some(StatusTone::Error) => &tokens.helper_error,
        Some(StatusTone::Hint) | None => &tokens.helper,
    }
}

/// Text shown in place of the value; password values are masked.
pub fn display_value(kind: FieldKind, value: &str) -> String {
    if kind.masks_value() {
        std::iter::repeat_n(MASK_CHAR, value.chars().count()).collect()
    } else {
        value.to_string()
    }
}

/// Routes candidate edits of one field through validation, then notifies the
/// host.
#[derive(Clone)]
struct FieldEditor {
    id: ComponentId,
    config: FieldConfig,
    on_change: Option<ChangeHandler>,
}

impl FieldEditor {
    fn sanitize(&self, text: &str) -> String {
        match self.config.shape() {
            FieldShape::SingleLine => single_line(text),
            FieldShape::MultiLine => normalize_newlines(text),
        }
    }

    fn propose(
        &self,
        proposal: EditProposal,
        window: &mut Window,
        cx: &mut gpui::App,
    ) -> EditOutcome {
        let outcome = control::commit_field_edit(&self.id, &self.config, &proposal, |value| {
            if let Some(handler) = self.on_change.as_ref() {
                (handler)(SharedString::from(value.to_string()), window, cx);
            }
        });
        match outcome {
            EditOutcome::Accepted | EditOutcome::Unchanged => window.refresh(),
            EditOutcome::Rejected(reason) => {
                tracing::trace!(id = %self.id, ?reason, "edit rejected");
            }
        }
        outcome
    }

    fn edit(
        &self,
        build: impl FnOnce(&EditBuffer) -> Option<EditProposal>,
        window: &mut Window,
        cx: &mut gpui::App,
    ) {
        let buffer = control::edit_buffer(&self.id);
        if let Some(proposal) = build(&buffer) {
            self.propose(proposal, window, cx);
        }
    }

    fn move_caret(
        &self,
        step: impl FnOnce(&mut EditBuffer),
        window: &mut Window,
    ) {
        let mut buffer = control::edit_buffer(&self.id);
        step(&mut buffer);
        control::set_caret_state(&self.id, buffer.caret);
        control::set_marked_range(&self.id, None);
        window.refresh();
    }
}

fn focus_field(id: &str, window: &mut Window) {
    control::update_field_state(id, |state| state.focus());
    window.refresh();
}

fn blur_field(id: &str, window: &mut Window) {
    control::update_field_state(id, |state| state.blur());
    control::set_marked_range(id, None);
    window.refresh();
}

#[derive(Clone)]
struct FieldInputHandler {
    editor: FieldEditor,
    font_size: f32,
}

impl FieldInputHandler {
    fn value(&self) -> String {
        control::field_state(&self.editor.id).value
    }

    fn char_range(value: &str, range_utf16: Range<usize>) -> Range<usize> {
        char_index_from_utf16(value, range_utf16.start)..char_index_from_utf16(value, range_utf16.end)
    }

    fn utf16_range(value: &str, range: Range<usize>) -> Range<usize> {
        utf16_from_char(value, range.start)..utf16_from_char(value, range.end)
    }

    fn replacement_range(&self, value: &str, range_utf16: Option<Range<usize>>) -> (usize, usize) {
        let len = value.chars().count();
        if let Some(range) = range_utf16 {
            let range = Self::char_range(value, range);
            return (range.start.min(len), range.end.min(len).max(range.start.min(len)));
        }
        if let Some(marked) = control::marked_range(&self.editor.id, len) {
            return marked;
        }
        let caret = control::caret_state(&self.editor.id, len);
        (caret, caret)
    }

    /// Visible text of the line holding `char_index`, the char offset where
    /// that line starts and its top edge in window space.
    fn metric_line(&self, value: &str, char_index: usize) -> (String, usize, f32) {
        let geometry = control::content_geometry(&self.editor.id);
        match self.editor.config.shape() {
            FieldShape::SingleLine => {
                let top = geometry.origin_y + (geometry.height - FIELD_METRICS.line_height).max(0.0) / 2.0;
                (display_value(self.editor.config.kind, value), 0, top)
            }
            FieldShape::MultiLine => {
                let (line, col) = line_col(value, char_index);
                let text = value.split('\n').nth(line).unwrap_or_default().to_string();
                let top = geometry.origin_y
                    + FIELD_METRICS.textarea_inset_y
                    + line as f32 * FIELD_METRICS.line_height;
                (text, char_index - col, top)
            }
        }
    }
}

fn x_for_char(window: &Window, font_size: f32, text: &str, char_index: usize) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let font_size = px(font_size);
    let mut text_style = window.text_style();
    text_style.font_size = font_size.into();
    let run = text_style.to_run(text.len());
    let layout = window
        .text_system()
        .layout_line(text, font_size, &[run], None);
    f32::from(layout.x_for_index(byte_index_at_char(text, char_index)))
}

fn char_from_x(window: &Window, font_size: f32, text: &str, x: f32) -> usize {
    if text.is_empty() {
        return 0;
    }
    let font_size = px(font_size);
    let mut text_style = window.text_style();
    text_style.font_size = font_size.into();
    let run = text_style.to_run(text.len());
    let layout = window
        .text_system()
        .layout_line(text, font_size, &[run], None);
    let mut byte_index = layout.closest_index_for_x(px(x.max(0.0))).min(text.len());
    while byte_index > 0 && !text.is_char_boundary(byte_index) {
        byte_index -= 1;
    }
    text[..byte_index].chars().count()
}

impl InputHandler for FieldInputHandler {
    fn selected_text_range(
        &mut self,
        _ignore_disabled_input: bool,
        _window: &mut Window,
        _cx: &mut gpui::App,
    ) -> Option<UTF16Selection> {
        let value = self.value();
        let caret = control::caret_state(&self.editor.id, value.chars().count());
        Some(UTF16Selection {
            range: Self::utf16_range(&value, caret..caret),
            reversed: false,
        })
    }

    fn marked_text_range(
        &mut self,
        _window: &mut Window,
        _cx: &mut gpui::App,
    ) -> Option<Range<usize>> {
        let value = self.value();
        let (start, end) = control::marked_range(&self.editor.id, value.chars().count())?;
        Some(Self::utf16_range(&value, start..end))
    }

    fn text_for_range(
        &mut self,
        range_utf16: Range<usize>,
        adjusted_range: &mut Option<Range<usize>>,
        _window: &mut Window,
        _cx: &mut gpui::App,
    ) -> Option<String> {
        let value = self.value();
        let len = value.chars().count();
        let range = Self::char_range(&value, range_utf16);
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        adjusted_range.replace(Self::utf16_range(&value, start..end));
        Some(value.chars().skip(start).take(end - start).collect())
    }

    fn replace_text_in_range(
        &mut self,
        replacement_range: Option<Range<usize>>,
        text: &str,
        window: &mut Window,
        cx: &mut gpui::App,
    ) {
        let value = self.value();
        let (start, end) = self.replacement_range(&value, replacement_range);
        let sanitized = self.editor.sanitize(text);
        let proposal = control::edit_buffer(&self.editor.id).replace_chars(start, end, &sanitized);
        control::set_marked_range(&self.editor.id, None);
        self.editor.propose(proposal, window, cx);
    }

    fn replace_and_mark_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        _new_selected_range_utf16: Option<Range<usize>>,
        window: &mut Window,
        cx: &mut gpui::App,
    ) {
        let value = self.value();
        let (start, end) = self.replacement_range(&value, range_utf16);
        let sanitized = self.editor.sanitize(new_text);
        let inserted = sanitized.chars().count();
        let proposal = control::edit_buffer(&self.editor.id).replace_chars(start, end, &sanitized);
        match self.editor.propose(proposal, window, cx) {
            EditOutcome::Accepted | EditOutcome::Unchanged if inserted > 0 => {
                control::set_marked_range(&self.editor.id, Some((start, start + inserted)));
            }
            EditOutcome::Accepted | EditOutcome::Unchanged => {
                control::set_marked_range(&self.editor.id, None);
            }
            EditOutcome::Rejected(_) => {}
        }
    }

    fn unmark_text(&mut self, _window: &mut Window, _cx: &mut gpui::App) {
        control::set_marked_range(&self.editor.id, None);
    }

    fn bounds_for_range(
        &mut self,
        range_utf16: Range<usize>,
        window: &mut Window,
        _cx: &mut gpui::App,
    ) -> Option<Bounds<gpui::Pixels>> {
        let value = self.value();
        let len = value.chars().count();
        let range = Self::char_range(&value, range_utf16);
        let geometry = control::content_geometry(&self.editor.id);
        let (line, line_start, top) = self.metric_line(&value, range.start.min(len));
        let line_len = line.chars().count();
        let local = |index: usize| index.saturating_sub(line_start).min(line_len);
        let start_x = geometry.origin_x + x_for_char(window, self.font_size, &line, local(range.start));
        let end_x = geometry.origin_x + x_for_char(window, self.font_size, &line, local(range.end));
        let right = if end_x > start_x { end_x } else { start_x + 1.0 };
        Some(Bounds::from_corners(
            point(px(start_x), px(top)),
            point(px(right), px(top + FIELD_METRICS.line_height)),
        ))
    }

    fn character_index_for_point(
        &mut self,
        point: gpui::Point<gpui::Pixels>,
        window: &mut Window,
        _cx: &mut gpui::App,
    ) -> Option<usize> {
        let value = self.value();
        let len = value.chars().count();
        let geometry = control::content_geometry(&self.editor.id);
        let local_x = (f32::from(point.x) - geometry.origin_x).max(0.0);
        let caret = control::caret_state(&self.editor.id, len);
        let (line, line_start, _) = self.metric_line(&value, caret);
        let char_index = line_start + char_from_x(window, self.font_size, &line, local_x);
        Some(utf16_from_char(&value, char_index.min(len)))
    }

    fn accepts_text_input(&mut self, _window: &mut Window, _cx: &mut gpui::App) -> bool {
        self.editor.config.accepts_edits()
    }
}

/// Labeled text field with a floating label, optional prefix/suffix, action
/// button, helper line and password strength meter.
///
/// The value is owned by the field: edits are validated against
/// `max_length`, `disabled` and `read_only` before they are committed, and
/// `on_change` only ever sees committed values.
#[derive(IntoElement)]
pub struct TextField {
    id: ComponentId,
    config: FieldConfig,
    hint: HintText,
    placeholder: Option<SharedString>,
    prefix: Option<SlotRenderer>,
    suffix: Option<SlotRenderer>,
    theme: crate::theme::LocalTheme,
    motion: MotionConfig,
    scorer: Arc<ScorerCache>,
    focus_handle: Option<FocusHandle>,
    on_change: Option<ChangeHandler>,
    on_button_click: Option<ClickHandler>,
}

impl TextField {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("text-field"),
            config: FieldConfig::default(),
            hint: HintText::default(),
            placeholder: None,
            prefix: None,
            suffix: None,
            theme: crate::theme::LocalTheme::default(),
            motion: MotionConfig::default(),
            scorer: ScorerCache::global(),
            focus_handle: None,
            on_change: None,
            on_button_click: None,
        }
    }

    #[track_caller]
    pub fn textarea() -> Self {
        Self::new().kind(FieldKind::Textarea)
    }

    #[track_caller]
    pub fn password() -> Self {
        Self::new().kind(FieldKind::Password)
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn kind(mut self, value: FieldKind) -> Self {
        self.config.kind = value;
        self
    }

    /// Hard cap on the value length in chars; `0` disables the cap and the
    /// `count/max` indicator.
    pub fn max_length(mut self, value: usize) -> Self {
        self.config.max_length = Some(value);
        self
    }

    pub fn label(mut self, value: impl Into<SharedString>) -> Self {
        self.config.label = Some(value.into());
        self
    }

    /// Adds a trailing action button (single-line fields only).
    pub fn button_label(mut self, value: impl Into<SharedString>) -> Self {
        self.config.button_label = Some(value.into());
        self
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn prefix(mut self, content: impl IntoElement + 'static) -> Self {
        self.prefix = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn suffix(mut self, content: impl IntoElement + 'static) -> Self {
        self.suffix = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn hint_text(mut self, value: HintText) -> Self {
        self.hint = value;
        self
    }

    pub fn hint(mut self, value: impl Into<SharedString>) -> Self {
        self.hint.hint = Some(value.into());
        self
    }

    pub fn error(mut self, value: impl Into<SharedString>) -> Self {
        self.hint.error = Some(value.into());
        self
    }

    pub fn success(mut self, value: impl Into<SharedString>) -> Self {
        self.hint.success = Some(value.into());
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.config.disabled = value;
        self
    }

    pub fn read_only(mut self, value: bool) -> Self {
        self.config.read_only = value;
        self
    }

    /// Renders with the dark token set whatever the provider's scheme.
    pub fn dark(mut self, value: bool) -> Self {
        self.config.dark = value;
        self
    }

    pub fn scorer(mut self, value: Arc<ScorerCache>) -> Self {
        self.scorer = value;
        self
    }

    pub fn focus_handle(mut self, focus_handle: FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle);
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_button_click(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_button_click = Some(Rc::new(handler));
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn resolved_focus_handle(&self, cx: &gpui::App) -> FocusHandle {
        if let Some(focus_handle) = self.focus_handle.as_ref() {
            return focus_handle.clone();
        }
        if let Ok(mut handles) = FIELD_FOCUS_HANDLES.lock() {
            return handles
                .entry(self.id.to_string())
                .or_insert_with(|| cx.focus_handle())
                .clone();
        }
        cx.focus_handle()
    }

    fn editor(&self) -> FieldEditor {
        FieldEditor {
            id: self.id.clone(),
            config: self.config.clone(),
            on_change: self.on_change.clone(),
        }
    }

    /// Keeps the focus phase in step with the focus handle, so focus moved by
    /// the host (tab order, programmatic focus) runs the same transitions.
    fn sync_focus(&self, focused: bool) -> FocusPhase {
        control::sync_focus_phase(&self.id, focused, self.config.disabled)
    }

    fn ensure_scorer(&self, window: &mut Window, cx: &mut gpui::App) {
        if matches!(self.scorer.status(), LoadStatus::Ready | LoadStatus::Failed) {
            return;
        }
        if !control::begin_once(&self.id, control::SCORER_WAIT_SLOT) {
            return;
        }

        let load = self.scorer.ensure_loaded();
        let id = self.id.clone();
        let window_handle = window.window_handle();
        cx.spawn(async move |cx| {
            cx.background_executor().spawn(load).await;
            control::set_bool_state(&id, control::SCORER_WAIT_SLOT, false);
            let _ = window_handle.update(cx, |_, window, _| {
                window.refresh();
            });
        })
        .detach();
    }

    fn render_text(
        &self,
        value: &str,
        caret: Option<usize>,
        window: &Window,
        tokens: &TextFieldTokens,
    ) -> AnyElement {
        let caret_element = |id: &ComponentId| {
            div()
                .id(id.slot("caret"))
                .flex_none()
                .w(quantized_stroke_px(window, 1.5))
                .h(px(FIELD_METRICS.line_height - 2.0))
                .bg(resolve_hsla(&self.theme, &tokens.fg))
                .rounded_sm()
                .with_animation(
                    id.slot("caret-blink"),
                    Animation::new(Duration::from_millis(CARET_BLINK_CYCLE_MS))
                        .repeat()
                        .with_easing(gpui::linear),
                    |this, delta| {
                        let visible = ((delta * 2.0).fract()) < 0.5;
                        this.opacity(if visible { 1.0 } else { 0.0 })
                    },
                )
        };

        match self.config.shape() {
            FieldShape::SingleLine => {
                let shown = display_value(self.config.kind, value);
                let mut row = div().flex().flex_row().items_center().whitespace_nowrap();
                match caret {
                    Some(caret) => {
                        let left = shown.chars().take(caret).collect::<String>();
                        let right = shown.chars().skip(caret).collect::<String>();
                        row = row.child(left).child(caret_element(&self.id)).child(right);
                    }
                    None => row = row.child(shown),
                }
                row.into_any_element()
            }
            FieldShape::MultiLine => {
                let (caret_line, caret_col) = caret
                    .map(|caret| line_col(value, caret))
                    .unwrap_or((usize::MAX, 0));
                let mut column = div().flex().flex_col().w_full();
                for (index, line) in value.split('\n').enumerate() {
                    let mut row = div()
                        .flex()
                        .flex_row()
                        .flex_wrap()
                        .min_h(px(FIELD_METRICS.line_height));
                    if index == caret_line {
                        let left = line.chars().take(caret_col).collect::<String>();
                        let right = line.chars().skip(caret_col).collect::<String>();
                        row = row.child(left).child(caret_element(&self.id)).child(right);
                    } else {
                        row = row.child(line.to_string());
                    }
                    column = column.child(row);
                }
                column.into_any_element()
            }
        }
    }

    fn render_label(&self, phase: FocusPhase, tokens: &TextFieldTokens) -> Option<AnyElement> {
        let label = self.config.label.clone()?;
        let shape = self.config.shape();
        let base_top = match shape {
            FieldShape::SingleLine => (FIELD_METRICS.input_height - FIELD_METRICS.line_height) / 2.0,
            FieldShape::MultiLine => FIELD_METRICS.textarea_inset_y,
        };
        let floats = phase.label_floats();
        let floated_before = control::bool_state(&self.id, LABEL_FLOATED_SLOT, None, false);
        if floats {
            control::set_bool_state(&self.id, LABEL_FLOATED_SLOT, true);
        }
        let target = LabelPlacement::for_state(phase, shape);
        // A label that never floated has nothing to fall back from.
        let origin = match (floats, floated_before) {
            (true, _) => LabelPlacement::RESTING,
            (false, true) => LabelPlacement::for_state(FocusPhase::Active, shape),
            (false, false) => target,
        };

        let element = div()
            .absolute()
            .left(px(FIELD_METRICS.label_inset_x))
            .whitespace_nowrap()
            .line_height(px(FIELD_METRICS.line_height))
            .bg(resolve_hsla(&self.theme, &tokens.bg))
            .text_color(resolve_hsla(&self.theme, label_color(tokens, &self.hint, phase)))
            .child(label)
            .with_motion_progress(
                self.id.slot(if floats { "label-float" } else { "label-rest" }),
                self.motion,
                self.motion.label_float,
                move |this, progress| {
                    let placement = LabelPlacement::lerp(origin, target, progress);
                    this.top(px(base_top + placement.offset_y))
                        .px(px(placement.padding_x))
                        .text_size(px(FIELD_METRICS.font_size * placement.scale))
                },
            );
        Some(element.into_any_element())
    }

    fn render_meter(&self, value: &str) -> AnyElement {
        let tokens = &self.theme.components.strength_meter;
        let score = match self.scorer.scorer() {
            Some(scorer) if !value.is_empty() => {
                control::strength_score(&self.id, value, |password| scorer.score(password))
            }
            _ => StrengthScore::Zero,
        };
        let geometry = meter_geometry(score, !self.config.accepts_edits());
        let from = StrengthScore::from_raw(control::meter_transition(&self.id, score.as_u8()));
        let from_pct = from.width_pct();
        let to_pct = geometry.width_pct;
        let fill = resolve_hsla(&self.theme, meter_color(score, tokens));

        div()
            .w_full()
            .h(px(geometry.height))
            .overflow_hidden()
            .bg(resolve_hsla(&self.theme, &tokens.track))
            .child(
                div().h_full().bg(fill).with_motion_progress(
                    self.id
                        .slot(&format!("meter-{}-{}", from.as_u8(), score.as_u8())),
                    self.motion,
                    self.motion.meter_fill,
                    move |this, progress| this.w(relative(width_at(from_pct, to_pct, progress) / 100.0)),
                ),
            )
            .into_any_element()
    }

    fn render_helper(&self, count: usize, tokens: &TextFieldTokens) -> Option<AnyElement> {
        let status = self.hint.status();
        let counter = word_count(count, self.config.max_length);
        if status.is_none() && counter.is_none() {
            return None;
        }

        let mut row = div()
            .flex()
            .flex_row()
            .justify_between()
            .w_full()
            .mt(px(FIELD_METRICS.helper_gap))
            .pl(px(FIELD_METRICS.inset_x))
            .text_size(px(FIELD_METRICS.helper_font_size))
            .text_color(resolve_hsla(&self.theme, helper_color(tokens, &self.hint)))
            .child(div().child(status.map(|status| status.text).unwrap_or_default()));
        if let Some(counter) = counter {
            row = row.child(div().flex_none().child(counter));
        }
        Some(row.into_any_element())
    }
}

impl Default for TextField {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporting for TextField {
    fn hint(self, value: impl Into<SharedString>) -> Self {
        TextField::hint(self, value)
    }

    fn error(self, value: impl Into<SharedString>) -> Self {
        TextField::error(self, value)
    }

    fn success(self, value: impl Into<SharedString>) -> Self {
        TextField::success(self, value)
    }
}

impl MotionAware for TextField {
    fn motion(mut self, value: MotionConfig) -> Self {
        self.motion = value;
        self
    }
}

crate::impl_disableable!(TextField);
crate::impl_theme_overridable!(TextField);

impl RenderOnce for TextField {
    fn render(mut self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        ensure_field_keybindings(cx);
        self.theme
            .set_scheme(self.config.dark.then_some(ColorScheme::Dark));
        self.theme.sync_from_provider(cx);

        let shape = self.config.shape();
        let focus_handle = self.resolved_focus_handle(cx);
        let focused = !self.config.disabled && focus_handle.is_focused(window);
        let phase = self.sync_focus(focused);
        let state = control::field_state(&self.id);
        let value = state.value.clone();
        let caret = control::caret_state(&self.id, value.chars().count());
        let tokens = self.theme.components.text_field.clone();
        let editor = self.editor();

        if self.config.kind.is_password() {
            self.ensure_scorer(window, cx);
        }

        let text_color = if self.config.read_only {
            &tokens.fg_read_only
        } else {
            &tokens.fg
        };
        let bg = resolve_hsla(&self.theme, &tokens.bg);

        let mut content = div()
            .id(self.id.slot("content"))
            .relative()
            .flex_1()
            .min_w_0()
            .overflow_hidden()
            .px(px(FIELD_METRICS.inset_x))
            .text_size(px(FIELD_METRICS.font_size))
            .line_height(px(FIELD_METRICS.line_height))
            .text_color(resolve_hsla(&self.theme, text_color))
            .key_context(key_context(shape));
        content = match shape {
            FieldShape::SingleLine => content
                .h(px(FIELD_METRICS.input_height))
                .flex()
                .items_center()
                .whitespace_nowrap(),
            FieldShape::MultiLine => content
                .h(px(FIELD_METRICS.textarea_height))
                .py(px(FIELD_METRICS.textarea_inset_y))
                .overflow_y_scroll(),
        };

        content = content.child({
            let id_for_metrics = self.id.clone();
            canvas(
                move |bounds, _, _cx| {
                    control::set_content_geometry(
                        &id_for_metrics,
                        ContentGeometry {
                            origin_x: f32::from(bounds.origin.x) + FIELD_METRICS.inset_x,
                            origin_y: f32::from(bounds.origin.y),
                            width: f32::from(bounds.size.width),
                            height: f32::from(bounds.size.height),
                        },
                    );
                },
                |_, _, _, _| {},
            )
            .absolute()
            .size_full()
        });

        if self.config.disabled {
            content = content.cursor_not_allowed();
        } else {
            content = content.cursor_text().track_focus(&focus_handle);

            let id_for_focus = self.id.clone();
            let handle_for_focus = focus_handle.clone();
            let id_for_blur = self.id.clone();
            let handle_for_blur = focus_handle.clone();
            content = content
                .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                    focus_field(&id_for_focus, window);
                    window.focus(&handle_for_focus, cx);
                })
                .on_mouse_down_out(move |_, window, _cx| {
                    if !control::field_state(&id_for_blur).phase.is_active() {
                        return;
                    }
                    blur_field(&id_for_blur, window);
                    if handle_for_blur.is_focused(window) {
                        window.blur();
                    }
                })
                .on_action({
                    let editor = editor.clone();
                    move |_: &MoveLeft, window, _cx| editor.move_caret(|buffer| buffer.move_left(), window)
                })
                .on_action({
                    let editor = editor.clone();
                    move |_: &MoveRight, window, _cx| editor.move_caret(|buffer| buffer.move_right(), window)
                })
                .on_action({
                    let editor = editor.clone();
                    move |_: &MoveHome, window, _cx| editor.move_caret(|buffer| buffer.move_home(), window)
                })
                .on_action({
                    let editor = editor.clone();
                    move |_: &MoveEnd, window, _cx| editor.move_caret(|buffer| buffer.move_end(), window)
                })
                .on_action({
                    let editor = editor.clone();
                    move |_: &DeleteBackward, window, cx| {
                        editor.edit(|buffer| buffer.delete_backward(), window, cx)
                    }
                })
                .on_action({
                    let editor = editor.clone();
                    move |_: &DeleteForward, window, cx| {
                        editor.edit(|buffer| buffer.delete_forward(), window, cx)
                    }
                })
                .on_action({
                    let id = self.id.clone();
                    move |_: &Blur, window, _cx| {
                        blur_field(&id, window);
                        window.blur();
                    }
                });

            content = match shape {
                FieldShape::SingleLine => content.on_action({
                    let id = self.id.clone();
                    let config = self.config.clone();
                    let hint = self.hint.clone();
                    let on_button_click = self.on_button_click.clone();
                    move |_: &Submit, window, cx| {
                        control::submit_field(&id, &config, &hint, || {
                            if let Some(handler) = on_button_click.as_ref() {
                                (handler)(window, cx);
                            }
                        });
                        window.refresh();
                        window.blur();
                    }
                }),
                FieldShape::MultiLine => content.on_action({
                    let editor = editor.clone();
                    move |_: &InsertNewline, window, cx| {
                        editor.edit(|buffer| buffer.insert("\n"), window, cx)
                    }
                }),
            };

            window.handle_input(
                &focus_handle,
                FieldInputHandler {
                    editor: editor.clone(),
                    font_size: FIELD_METRICS.font_size,
                },
                cx,
            );
        }

        let show_caret = focused && self.config.accepts_edits();
        let placeholder = self
            .placeholder
            .clone()
            .filter(|_| placeholder_visible(&self.config, phase, &value))
            .map(|placeholder| {
                div()
                    .truncate()
                    .text_color(resolve_hsla(&self.theme, &tokens.placeholder))
                    .child(placeholder)
            });
        if let Some(placeholder) = placeholder {
            let mut row = div().flex().flex_row().items_center().min_w_0();
            if show_caret {
                row = row.child(self.render_text(&value, Some(caret), window, &tokens));
            }
            content = content.child(row.child(placeholder));
        } else if !value.is_empty() || show_caret {
            content = content.child(self.render_text(
                &value,
                show_caret.then_some(caret),
                window,
                &tokens,
            ));
        }

        let mut section = div()
            .relative()
            .flex()
            .flex_row()
            .items_center()
            .w_full();

        match shape {
            FieldShape::SingleLine => {
                if let Some(prefix) = self.prefix.take() {
                    section = section.child(
                        div()
                            .flex_none()
                            .pl(px(FIELD_METRICS.inset_x))
                            .text_color(resolve_hsla(&self.theme, &tokens.affix))
                            .child(prefix()),
                    );
                }
                section = section.child(content);
                if let Some(suffix) = self.suffix.take() {
                    let suffix_color = if phase.is_active() {
                        &tokens.suffix_active
                    } else {
                        &tokens.affix
                    };
                    section = section.child(
                        div()
                            .flex_none()
                            .pr(px(FIELD_METRICS.inset_x))
                            .text_color(resolve_hsla(&self.theme, suffix_color))
                            .child(suffix()),
                    );
                }
                if self.config.shows_button()
                    && let Some(button_label) = self.config.button_label.clone()
                {
                    section = section.child(
                        Button::new(button_label)
                            .with_id(self.id.slot_key("button"))
                            .size(Size::Lg)
                            .corners(Corners::right())
                            .disabled(is_button_disabled(&self.config, &self.hint, &value))
                            .on_click_handler(self.on_button_click.clone())
                            .with_local_theme(self.theme.clone()),
                    );
                }
            }
            FieldShape::MultiLine => {
                section = section.child(content);
            }
        }

        if let Some(label) = self.render_label(phase, &tokens) {
            section = section.child(label);
        }

        let mut wrapper = div()
            .id(self.id.slot("wrapper"))
            .relative()
            .flex()
            .flex_col()
            .w_full()
            .bg(bg)
            .border(quantized_stroke_px(window, 1.0))
            .border_color(resolve_hsla(
                &self.theme,
                border_color(&tokens, &self.config, &self.hint, phase),
            ));
        wrapper = apply_radius(wrapper, Radius::Sm);

        if self.config.disabled {
            wrapper = wrapper.opacity(DISABLED_OPACITY).cursor_not_allowed();
        } else if !phase.is_active() && self.hint.chrome_tone().is_none() && !self.config.has_blank_label() {
            let hover_border = resolve_hsla(&self.theme, &tokens.border_hover);
            wrapper = wrapper.hover(move |style| style.border_color(hover_border));
        }

        wrapper = wrapper.child(section);
        if self.config.kind.is_password() {
            wrapper = wrapper.child(self.render_meter(&value));
        }

        let mut root = div().id(self.id.clone()).flex().flex_col().w_full().child(wrapper);
        if let Some(helper) = self.render_helper(state.count, &tokens) {
            root = root.child(helper);
        }
        root
    }
}
