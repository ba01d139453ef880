use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
};

use super::edit_buffer::{EditBuffer, EditProposal};
use super::field_state::{EditOutcome, EnterOutcome, FieldConfig, FieldState, FocusPhase};
use super::hint::HintText;
use super::strength::StrengthScore;

static BOOL_STATE: LazyLock<Mutex<HashMap<String, bool>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static FIELD_STATE: LazyLock<Mutex<HashMap<String, FieldState>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static CARET_STATE: LazyLock<Mutex<HashMap<String, usize>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static MARKED_STATE: LazyLock<Mutex<HashMap<String, (usize, usize)>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static METER_STATE: LazyLock<Mutex<HashMap<String, (u8, u8)>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static STRENGTH_STATE: LazyLock<Mutex<HashMap<String, (String, StrengthScore)>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static GEOMETRY_STATE: LazyLock<Mutex<HashMap<String, ContentGeometry>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub const SCORER_WAIT_SLOT: &str = "scorer-wait";

/// Window-space origin and size of a field's text content, recorded on paint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
}

fn key(id: &str, slot: &str) -> String {
    format!("{id}::{slot}")
}

pub fn bool_state(id: &str, slot: &str, controlled: Option<bool>, default: bool) -> bool {
    if let Some(value) = controlled {
        return value;
    }

    let composed = key(id, slot);
    if let Ok(mut state) = BOOL_STATE.lock() {
        return *state.entry(composed).or_insert(default);
    }
    default
}

pub fn set_bool_state(id: &str, slot: &str, value: bool) {
    let composed = key(id, slot);
    if let Ok(mut state) = BOOL_STATE.lock() {
        state.insert(composed, value);
    }
}

/// Marks the start of a wait; returns `false` when one is already pending.
pub fn begin_once(id: &str, slot: &str) -> bool {
    let composed = key(id, slot);
    if let Ok(mut state) = BOOL_STATE.lock() {
        let pending = state.entry(composed).or_insert(false);
        if *pending {
            return false;
        }
        *pending = true;
        return true;
    }
    false
}

pub fn field_state(id: &str) -> FieldState {
    if let Ok(mut state) = FIELD_STATE.lock() {
        return state.entry(id.to_string()).or_default().clone();
    }
    FieldState::default()
}

pub fn update_field_state<R>(id: &str, update: impl FnOnce(&mut FieldState) -> R) -> Option<R> {
    let mut state = FIELD_STATE.lock().ok()?;
    Some(update(state.entry(id.to_string()).or_default()))
}

/// Validates and commits `candidate` as the new value of field `id`.
pub fn apply_field_edit(id: &str, config: &FieldConfig, candidate: &str) -> Option<EditOutcome> {
    update_field_state(id, |state| state.apply_edit(config, candidate))
}

/// Commits `proposal` to field `id` and moves its caret. `notify` receives the
/// committed value for accepted edits only, once the store already holds it.
pub fn commit_field_edit(
    id: &str,
    config: &FieldConfig,
    proposal: &EditProposal,
    notify: impl FnOnce(&str),
) -> EditOutcome {
    let outcome = apply_field_edit(id, config, &proposal.text).unwrap_or(EditOutcome::Unchanged);
    match outcome {
        EditOutcome::Accepted => {
            set_caret_state(id, proposal.caret);
            notify(&field_state(id).value);
        }
        EditOutcome::Unchanged => set_caret_state(id, proposal.caret),
        EditOutcome::Rejected(_) => {}
    }
    outcome
}

/// Enter in a single-line field: `click` runs first when the button applies,
/// then the field blurs.
pub fn submit_field(
    id: &str,
    config: &FieldConfig,
    hint: &HintText,
    click: impl FnOnce(),
) -> EnterOutcome {
    let outcome = EnterOutcome::for_field(config, hint, &field_state(id).value);
    if outcome.clicks_button() {
        click();
    }
    update_field_state(id, |state| state.blur());
    set_marked_range(id, None);
    outcome
}

/// Brings the focus phase of `id` in line with its focus handle. A disabled
/// field is never left active.
pub fn sync_focus_phase(id: &str, focused: bool, disabled: bool) -> FocusPhase {
    update_field_state(id, |state| {
        match (focused && !disabled, state.phase.is_active()) {
            (true, false) => state.focus(),
            (false, true) => state.blur(),
            _ => {}
        }
        state.phase
    })
    .unwrap_or_default()
}

pub fn caret_state(id: &str, len: usize) -> usize {
    CARET_STATE
        .lock()
        .ok()
        .and_then(|state| state.get(id).copied())
        .unwrap_or(len)
        .min(len)
}

pub fn set_caret_state(id: &str, caret: usize) {
    if let Ok(mut state) = CARET_STATE.lock() {
        state.insert(id.to_string(), caret);
    }
}

/// Char range of in-progress IME composition, if any.
pub fn marked_range(id: &str, len: usize) -> Option<(usize, usize)> {
    let (start, end) = MARKED_STATE.lock().ok()?.get(id).copied()?;
    let (start, end) = (start.min(len), end.min(len));
    (start < end).then_some((start, end))
}

pub fn set_marked_range(id: &str, marked: Option<(usize, usize)>) {
    if let Ok(mut state) = MARKED_STATE.lock() {
        match marked {
            Some(range) => state.insert(id.to_string(), range),
            None => state.remove(id),
        };
    }
}

/// The committed value of field `id` together with its caret.
pub fn edit_buffer(id: &str) -> EditBuffer {
    let value = field_state(id).value;
    let caret = caret_state(id, value.chars().count());
    EditBuffer::new(value, caret)
}

/// Records the meter score shown for `id` and returns the score the fill
/// animates from. A field starts from an empty meter.
pub fn meter_transition(id: &str, score: u8) -> u8 {
    let Ok(mut state) = METER_STATE.lock() else {
        return score;
    };
    let entry = state.entry(id.to_string()).or_insert((0, score));
    if entry.1 != score {
        *entry = (entry.1, score);
    }
    entry.0
}

/// Strength of `value` in field `id`. `score` only runs when the value differs
/// from the one scored last time.
pub fn strength_score(
    id: &str,
    value: &str,
    score: impl FnOnce(&str) -> StrengthScore,
) -> StrengthScore {
    if let Ok(state) = STRENGTH_STATE.lock()
        && let Some((scored, cached)) = state.get(id)
        && scored == value
    {
        return *cached;
    }
    let fresh = score(value);
    if let Ok(mut state) = STRENGTH_STATE.lock() {
        state.insert(id.to_string(), (value.to_string(), fresh));
    }
    fresh
}

pub fn content_geometry(id: &str) -> ContentGeometry {
    GEOMETRY_STATE
        .lock()
        .ok()
        .and_then(|state| state.get(id).copied())
        .unwrap_or_default()
}

pub fn set_content_geometry(id: &str, geometry: ContentGeometry) {
    if let Ok(mut state) = GEOMETRY_STATE.lock() {
        state.insert(id.to_string(), geometry);
    }
}

pub fn clear_all() {
    if let Ok(mut state) = BOOL_STATE.lock() {
        state.clear();
    }
    if let Ok(mut state) = FIELD_STATE.lock() {
        state.clear();
    }
    if let Ok(mut state) = CARET_STATE.lock() {
        state.clear();
    }
    if let Ok(mut state) = MARKED_STATE.lock() {
        state.clear();
    }
    if let Ok(mut state) = METER_STATE.lock() {
        state.clear();
    }
    if let Ok(mut state) = STRENGTH_STATE.lock() {
        state.clear();
    }
    if let Ok(mut state) = GEOMETRY_STATE.lock() {
        state.clear();
    }
}
