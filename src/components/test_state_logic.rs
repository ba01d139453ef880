use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

use futures::FutureExt;
use futures::executor::block_on;
use futures::future;

use super::{
    control, edit_buffer::EditProposal, field_kind::FieldKind, field_state, hint, strength,
    text_field,
};
use crate::theme::{ColorScheme, ComponentTokens};

static STATE_TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

struct StateTestGuard {
    _lock: MutexGuard<'static, ()>,
}

fn guard() -> StateTestGuard {
    let lock = match STATE_TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    control::clear_all();
    StateTestGuard { _lock: lock }
}

impl Drop for StateTestGuard {
    fn drop(&mut self) {
        control::clear_all();
    }
}

fn capped(max_length: usize) -> field_state::FieldConfig {
    field_state::FieldConfig {
        max_length: Some(max_length),
        ..field_state::FieldConfig::default()
    }
}

#[test]
fn edits_within_max_length_are_committed_with_count() {
    let _guard = guard();
    let config = capped(10);

    let outcome = control::apply_field_edit("field", &config, "short");
    assert_eq!(outcome, Some(field_state::EditOutcome::Accepted));
    let state = control::field_state("field");
    assert_eq!(state.value, "short");
    assert_eq!(state.count, 5);
}

#[test]
fn edits_over_max_length_leave_state_untouched() {
    let _guard = guard();
    let config = capped(5);

    assert!(control::apply_field_edit("field", &config, "hello").is_some_and(|o| o.is_accepted()));
    let outcome = control::apply_field_edit("field", &config, "hellox");
    assert_eq!(
        outcome,
        Some(field_state::EditOutcome::Rejected(
            field_state::RejectReason::TooLong {
                limit: 5,
                attempted: 6
            }
        ))
    );
    let state = control::field_state("field");
    assert_eq!(state.value, "hello");
    assert_eq!(state.count, 5);
}

#[test]
fn disabled_and_read_only_fields_reject_every_edit() {
    let _guard = guard();
    for config in [
        field_state::FieldConfig {
            disabled: true,
            ..field_state::FieldConfig::default()
        },
        field_state::FieldConfig {
            read_only: true,
            ..field_state::FieldConfig::default()
        },
    ] {
        let outcome = control::apply_field_edit("locked", &config, "x");
        assert_eq!(
            outcome,
            Some(field_state::EditOutcome::Rejected(
                field_state::RejectReason::Locked
            ))
        );
        assert_eq!(control::field_state("locked"), field_state::FieldState::default());
    }
}

#[test]
fn rejected_proposal_keeps_caret_in_place() {
    let _guard = guard();
    let config = capped(3);
    control::apply_field_edit("caret", &config, "abc");
    control::set_caret_state("caret", 1);

    let buffer = control::edit_buffer("caret");
    let proposal = buffer.insert("z").unwrap_or(EditProposal {
        text: String::new(),
        caret: 0,
    });
    assert_eq!(proposal.text, "azbc");
    assert!(!control::apply_field_edit("caret", &config, &proposal.text).is_some_and(|o| o.is_accepted()));
    assert_eq!(control::caret_state("caret", 3), 1);
    assert_eq!(control::field_state("caret").value, "abc");
}

#[test]
fn status_line_prefers_success_then_error_then_hint() {
    let both = hint::HintText::new().error("bad").success("ok");
    assert_eq!(both.status().map(|s| s.text.to_string()).as_deref(), Some("ok"));

    let error = hint::HintText::new().error("bad").hint("type here");
    assert_eq!(
        error.status().map(|s| s.tone),
        Some(hint::StatusTone::Error)
    );

    let only_hint = hint::HintText::new().hint("type here");
    assert_eq!(
        only_hint.status().map(|s| s.tone),
        Some(hint::StatusTone::Hint)
    );
}

#[test]
fn button_is_disabled_for_host_flag_error_or_empty_value() {
    let config = field_state::FieldConfig {
        button_label: Some("Send".into()),
        ..field_state::FieldConfig::default()
    };
    let clean = hint::HintText::new();

    assert!(!field_state::is_button_disabled(&config, &clean, "abc"));
    assert!(field_state::is_button_disabled(&config, &clean, ""));
    assert!(field_state::is_button_disabled(
        &config,
        &hint::HintText::new().error("bad"),
        "abc"
    ));
    assert!(field_state::is_button_disabled(
        &config,
        &hint::HintText::new().success("ok"),
        ""
    ));
    assert!(!field_state::is_button_disabled(
        &config,
        &hint::HintText::new().success("ok"),
        "abc"
    ));
    let disabled = field_state::FieldConfig {
        disabled: true,
        ..config.clone()
    };
    assert!(field_state::is_button_disabled(&disabled, &clean, "abc"));
}

#[test]
fn enter_triggers_button_only_when_shown_and_enabled() {
    let with_button = field_state::FieldConfig {
        button_label: Some("Send".into()),
        ..field_state::FieldConfig::default()
    };
    let clean = hint::HintText::new();
    assert!(field_state::enter_triggers_button(&with_button, &clean, "abc"));
    assert!(!field_state::enter_triggers_button(&with_button, &clean, ""));
    assert!(!field_state::enter_triggers_button(
        &field_state::FieldConfig::default(),
        &clean,
        "abc"
    ));
}

#[test]
fn focus_then_blur_settles_with_value_and_idles_without() {
    let _guard = guard();
    let config = field_state::FieldConfig::default();

    control::update_field_state("with-value", |state| state.focus());
    control::apply_field_edit("with-value", &config, "abc");
    control::update_field_state("with-value", |state| state.blur());
    let phase = control::field_state("with-value").phase;
    assert!(phase.is_settled());
    assert!(phase.label_floats());

    control::update_field_state("empty", |state| state.focus());
    assert!(control::field_state("empty").phase.is_active());
    control::update_field_state("empty", |state| state.blur());
    assert_eq!(
        control::field_state("empty").phase,
        field_state::FocusPhase::Idle
    );
}

#[test]
fn clearing_a_refocused_settled_field_returns_to_idle() {
    let _guard = guard();
    let config = field_state::FieldConfig::default();

    control::update_field_state("refocus", |state| state.focus());
    control::apply_field_edit("refocus", &config, "abc");
    control::update_field_state("refocus", |state| state.blur());
    control::update_field_state("refocus", |state| state.focus());
    control::apply_field_edit("refocus", &config, "");
    control::update_field_state("refocus", |state| state.blur());
    assert_eq!(
        control::field_state("refocus").phase,
        field_state::FocusPhase::Idle
    );
}

#[test]
fn textarea_never_shows_the_button_slot() {
    let textarea = field_state::FieldConfig {
        kind: FieldKind::Textarea,
        button_label: Some("Send".into()),
        ..field_state::FieldConfig::default()
    };
    assert!(!textarea.shows_button());
    assert!(!field_state::enter_triggers_button(
        &textarea,
        &hint::HintText::new(),
        "abc"
    ));

    let blank_button = field_state::FieldConfig {
        button_label: Some("".into()),
        ..field_state::FieldConfig::default()
    };
    assert!(!blank_button.shows_button());
}

#[test]
fn unresolved_scorer_keeps_meter_empty() {
    let cache = Arc::new(strength::ScorerCache::new(|| {
        future::pending::<Result<strength::ScorerHandle, strength::ScorerError>>().boxed()
    }));
    let _pending = cache.ensure_loaded();
    assert_eq!(cache.status(), strength::LoadStatus::Loading);

    let score = cache.score("correct horse battery staple");
    assert_eq!(score, strength::StrengthScore::Zero);
    let geometry = strength::meter_geometry(score, false);
    assert_eq!(geometry.width_pct, 0.0);
}

#[test]
fn failed_scorer_keeps_meter_empty_without_retrying() {
    let cache = Arc::new(strength::ScorerCache::new(|| {
        future::ready(Err::<strength::ScorerHandle, _>(
            strength::ScorerError::Unavailable,
        ))
        .boxed()
    }));
    assert!(block_on(cache.ensure_loaded()).is_none());
    assert!(block_on(cache.ensure_loaded()).is_none());
    assert_eq!(cache.status(), strength::LoadStatus::Failed);
    assert_eq!(cache.score("Tr0ub4dor&3"), strength::StrengthScore::Zero);
}

#[test]
fn meter_fill_animates_from_the_previous_score() {
    let _guard = guard();
    assert_eq!(control::meter_transition("meter", 2), 0);
    assert_eq!(control::meter_transition("meter", 2), 0);
    assert_eq!(control::meter_transition("meter", 4), 2);
    assert_eq!(control::meter_transition("meter", 1), 4);
}

#[test]
fn scorer_wait_is_started_once_per_field() {
    let _guard = guard();
    assert!(control::begin_once("pw", control::SCORER_WAIT_SLOT));
    assert!(!control::begin_once("pw", control::SCORER_WAIT_SLOT));
    control::set_bool_state("pw", control::SCORER_WAIT_SLOT, false);
    assert!(control::begin_once("pw", control::SCORER_WAIT_SLOT));
}

#[test]
fn marked_range_is_clamped_and_cleared() {
    let _guard = guard();
    control::set_marked_range("ime", Some((1, 5)));
    assert_eq!(control::marked_range("ime", 3), Some((1, 3)));
    assert_eq!(control::marked_range("ime", 1), None);
    control::set_marked_range("ime", None);
    assert_eq!(control::marked_range("ime", 10), None);
}

#[test]
fn chrome_colors_follow_status_then_phase() {
    let tokens = ComponentTokens::defaults_for(ColorScheme::Light).text_field;
    let config = field_state::FieldConfig {
        label: Some("Name".into()),
        ..field_state::FieldConfig::default()
    };
    let clean = hint::HintText::new();
    let success = hint::HintText::new().error("bad").success("ok");

    assert_eq!(
        text_field::border_color(&tokens, &config, &clean, field_state::FocusPhase::Active),
        &tokens.border_active
    );
    assert_eq!(
        text_field::border_color(&tokens, &config, &clean, field_state::FocusPhase::Settled),
        &tokens.border_settled
    );
    assert_eq!(
        text_field::border_color(&tokens, &config, &success, field_state::FocusPhase::Active),
        &tokens.border_success
    );
    assert_eq!(
        text_field::label_color(&tokens, &hint::HintText::new().error("bad"), field_state::FocusPhase::Idle),
        &tokens.label_error
    );
    assert_eq!(
        text_field::helper_color(&tokens, &hint::HintText::new().hint("h")),
        &tokens.helper
    );
}

#[test]
fn blank_label_hides_the_border() {
    let tokens = ComponentTokens::defaults_for(ColorScheme::Dark).text_field;
    let config = field_state::FieldConfig {
        label: Some("  ".into()),
        ..field_state::FieldConfig::default()
    };
    assert_eq!(
        text_field::border_color(
            &tokens,
            &config,
            &hint::HintText::new().error("bad"),
            field_state::FocusPhase::Active
        ),
        &tokens.bg
    );
}

#[test]
fn password_values_are_masked_per_char() {
    assert_eq!(text_field::display_value(FieldKind::Password, "pä55"), "••••");
    assert_eq!(text_field::display_value(FieldKind::Text, "pä55"), "pä55");
}

#[test]
fn change_notifier_runs_only_for_accepted_edits_after_commit() {
    let _guard = guard();
    let config = capped(5);
    let mut seen = Vec::new();

    let accepted = control::commit_field_edit(
        "notify",
        &config,
        &EditProposal {
            text: "abc".to_string(),
            caret: 3,
        },
        |value| seen.push((value.to_string(), control::field_state("notify").value)),
    );
    assert_eq!(accepted, field_state::EditOutcome::Accepted);
    assert_eq!(seen, vec![("abc".to_string(), "abc".to_string())]);
    assert_eq!(control::caret_state("notify", 3), 3);

    let too_long = control::commit_field_edit(
        "notify",
        &config,
        &EditProposal {
            text: "abcdef".to_string(),
            caret: 6,
        },
        |value| seen.push((value.to_string(), String::new())),
    );
    assert!(matches!(
        too_long,
        field_state::EditOutcome::Rejected(field_state::RejectReason::TooLong { .. })
    ));

    let unchanged = control::commit_field_edit(
        "notify",
        &config,
        &EditProposal {
            text: "abc".to_string(),
            caret: 1,
        },
        |value| seen.push((value.to_string(), String::new())),
    );
    assert_eq!(unchanged, field_state::EditOutcome::Unchanged);
    assert_eq!(control::caret_state("notify", 3), 1);

    let locked = field_state::FieldConfig {
        read_only: true,
        ..config
    };
    let rejected = control::commit_field_edit(
        "notify",
        &locked,
        &EditProposal {
            text: "xyz".to_string(),
            caret: 3,
        },
        |value| seen.push((value.to_string(), String::new())),
    );
    assert_eq!(
        rejected,
        field_state::EditOutcome::Rejected(field_state::RejectReason::Locked)
    );
    assert_eq!(seen.len(), 1);
    assert_eq!(control::field_state("notify").value, "abc");
}

#[test]
fn enter_clicks_the_button_before_blurring() {
    let _guard = guard();
    let config = field_state::FieldConfig {
        button_label: Some("Send".into()),
        ..field_state::FieldConfig::default()
    };
    let clean = hint::HintText::new();

    control::update_field_state("enter", |state| state.focus());
    control::apply_field_edit("enter", &config, "abc");
    let mut phase_at_click = None;
    let outcome = control::submit_field("enter", &config, &clean, || {
        phase_at_click = Some(control::field_state("enter").phase);
    });
    assert_eq!(outcome, field_state::EnterOutcome::ClickThenBlur);
    assert_eq!(phase_at_click, Some(field_state::FocusPhase::Active));
    assert!(control::field_state("enter").phase.is_settled());

    control::update_field_state("enter-empty", |state| state.focus());
    let mut clicked = false;
    let outcome = control::submit_field("enter-empty", &config, &clean, || clicked = true);
    assert_eq!(outcome, field_state::EnterOutcome::Blur);
    assert!(!clicked);
    assert_eq!(
        control::field_state("enter-empty").phase,
        field_state::FocusPhase::Idle
    );

    control::update_field_state("enter-error", |state| state.focus());
    control::apply_field_edit("enter-error", &config, "abc");
    let outcome = control::submit_field(
        "enter-error",
        &config,
        &hint::HintText::new().error("bad"),
        || clicked = true,
    );
    assert_eq!(outcome, field_state::EnterOutcome::Blur);
    assert!(!clicked);
}

#[test]
fn disabling_an_active_field_blurs_it() {
    let _guard = guard();
    let config = field_state::FieldConfig::default();

    assert!(control::sync_focus_phase("toggle", true, false).is_active());
    control::apply_field_edit("toggle", &config, "abc");
    assert!(control::sync_focus_phase("toggle", true, true).is_settled());

    assert_eq!(
        control::sync_focus_phase("never", true, true),
        field_state::FocusPhase::Idle
    );
    assert!(control::sync_focus_phase("never", true, false).is_active());
    assert_eq!(
        control::sync_focus_phase("never", false, false),
        field_state::FocusPhase::Idle
    );
}

struct CountingScorer {
    calls: AtomicUsize,
}

impl strength::PasswordScorer for CountingScorer {
    fn score(&self, password: &str) -> strength::StrengthScore {
        self.calls.fetch_add(1, Ordering::SeqCst);
        strength::StrengthScore::from_raw((password.chars().count() / 4) as u8)
    }
}

#[test]
fn strength_is_scored_once_per_distinct_value() {
    use strength::PasswordScorer;

    let _guard = guard();
    let scorer = CountingScorer {
        calls: AtomicUsize::new(0),
    };

    for _ in 0..60 {
        let score = control::strength_score("pw", "hunter22", |p| scorer.score(p));
        assert_eq!(score, strength::StrengthScore::Two);
    }
    assert_eq!(scorer.calls.load(Ordering::SeqCst), 1);

    for _ in 0..60 {
        control::strength_score("pw", "hunter22-longer", |p| scorer.score(p));
    }
    assert_eq!(scorer.calls.load(Ordering::SeqCst), 2);

    control::strength_score("other", "hunter22-longer", |p| scorer.score(p));
    control::strength_score("pw", "hunter22", |p| scorer.score(p));
    assert_eq!(scorer.calls.load(Ordering::SeqCst), 4);
}
