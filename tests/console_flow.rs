//! End-to-end message-flow tests for the Spacedeck console.
//!
//! These drive the public `update` function with the same message sequences
//! the event loop produces, simulating backend completions by feeding the
//! finished messages back in. No terminal and no network are involved.
//!
//! Run with: cargo test --test console_flow

use serde_json::json;

use spacedeck_app::handler::{update, UpdateAction};
use spacedeck_app::{AppState, InputKey, Message, MutationKind, NoticeLevel};
use spacedeck_core::Record;

// ─────────────────────────────────────────────────────────
// Test Data Helpers
// ─────────────────────────────────────────────────────────

fn record(value: serde_json::Value) -> Record {
    serde_json::from_value(value).unwrap()
}

/// A live record for the boxes page.
fn box_record(id: &str, text: &str) -> Record {
    record(json!({
        "_id": id,
        "icon": "star.png",
        "link": "/offers",
        "text": text,
        "description": "Save big",
        "isDeleted": false
    }))
}

/// A vendor-submitted office space, approved or still pending.
fn space_record(id: &str, name: &str, approved: bool) -> Record {
    record(json!({
        "_id": id,
        "officeName": name,
        "category": "Coworking",
        "city": "Pune",
        "state": "MH",
        "pincode": "411001",
        "description": "Open desks",
        "rate": 450,
        "isAdminApprove": approved
    }))
}

/// Feed one message through `update`, then chase its follow-up messages the
/// way the event loop does. Returns every action that would have been
/// dispatched, in order.
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(message) = next {
        let result = update(state, message);
        if let Some(action) = result.action {
            actions.push(action);
        }
        next = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    drive(state, Message::Key(key))
}

/// Type a string into the focused form field, one keypress per character.
fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

/// Load records into a page as if a fetch had just completed.
fn load(state: &mut AppState, page: usize, records: Vec<Record>) {
    let actions = drive(state, Message::RecordsLoaded { page, records });
    assert!(actions.is_empty(), "loading records should not dispatch");
}

fn notice_text(state: &AppState) -> &str {
    state
        .notice
        .as_ref()
        .map(|n| n.text.as_str())
        .expect("expected a notice")
}

fn notice_level(state: &AppState) -> NoticeLevel {
    state.notice.as_ref().expect("expected a notice").level
}

// ─────────────────────────────────────────────────────────
// Startup and Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_startup_fetch_populates_first_page() {
    let mut state = AppState::new();

    let actions = drive(&mut state, Message::Refresh { page: 0 });
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        actions[0],
        UpdateAction::StartList { page: 0, spec } if spec.slug == "boxes"
    ));
    assert!(state.pages[0].loading);

    load(
        &mut state,
        0,
        vec![box_record("b1", "Spring offer"), box_record("b2", "Summer")],
    );
    assert!(!state.pages[0].loading);
    assert_eq!(state.pages[0].visible_records().len(), 2);
    assert_eq!(state.pages[0].selected, 0);
}

#[test]
fn test_refresh_is_deduplicated_while_loading() {
    let mut state = AppState::new();

    assert_eq!(drive(&mut state, Message::Refresh { page: 0 }).len(), 1);
    assert!(drive(&mut state, Message::Refresh { page: 0 }).is_empty());
}

#[test]
fn test_number_key_switches_tab_and_fetches() {
    let mut state = AppState::new();

    let actions = press(&mut state, InputKey::Char('5'));
    assert_eq!(state.active, 4);
    assert_eq!(state.active_page().spec.slug, "vendor-requests");
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        actions[0],
        UpdateAction::StartList { page: 4, spec } if spec.slug == "vendor-requests"
    ));
}

#[test]
fn test_tab_key_cycles_through_every_page() {
    let mut state = AppState::new();
    let mut fetched = Vec::new();

    for _ in 0..state.pages.len() {
        for action in press(&mut state, InputKey::Tab) {
            if let UpdateAction::StartList { spec, .. } = action {
                fetched.push(spec.slug);
            }
        }
    }

    assert_eq!(state.active, 0);
    assert_eq!(
        fetched,
        vec![
            "office-tours",
            "explore-office",
            "work-business",
            "vendor-requests",
            "office-spaces",
            "users",
            "boxes",
        ]
    );
}

#[test]
fn test_soft_deleted_records_stay_hidden() {
    let mut state = AppState::new();

    let mut dead = box_record("b2", "Old promo");
    dead.fields
        .insert("isDeleted".to_string(), serde_json::Value::Bool(true));
    load(&mut state, 0, vec![box_record("b1", "Spring offer"), dead]);

    let visible = state.pages[0].visible_records();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "b1");
    assert_eq!(state.pages[0].selected_record().unwrap().id, "b1");
}

// ─────────────────────────────────────────────────────────
// Create and Edit
// ─────────────────────────────────────────────────────────

#[test]
fn test_create_box_end_to_end() {
    let mut state = AppState::new();
    load(&mut state, 0, vec![box_record("b1", "Spring offer")]);

    assert!(press(&mut state, InputKey::Char('n')).is_empty());
    assert!(state.active_page().form.is_visible());
    assert!(!state.active_page().form.is_editing());

    // Fields in form order: icon, link, text, description.
    type_text(&mut state, "gift.png");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "/deals");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Autumn deal");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Limited stock");

    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(actions.len(), 1);
    match &actions[0] {
        UpdateAction::StartCreate { page, spec, draft } => {
            assert_eq!(*page, 0);
            assert_eq!(spec.slug, "boxes");
            assert_eq!(draft.value("icon"), "gift.png");
            assert_eq!(draft.value("link"), "/deals");
            assert_eq!(draft.value("text"), "Autumn deal");
            assert_eq!(draft.value("description"), "Limited stock");
        }
        other => panic!("expected StartCreate, got {other:?}"),
    }
    assert_eq!(state.pages[0].in_flight, Some(MutationKind::Create));

    let actions = drive(
        &mut state,
        Message::MutationCompleted {
            page: 0,
            kind: MutationKind::Create,
        },
    );
    assert_eq!(notice_text(&state), "Box added");
    assert_eq!(notice_level(&state), NoticeLevel::Success);
    assert!(!state.pages[0].form.is_visible());
    assert_eq!(state.pages[0].in_flight, None);
    // The completion refetches the page it landed on.
    assert_eq!(actions.len(), 1);
    assert!(matches!(actions[0], UpdateAction::StartList { page: 0, .. }));
}

#[test]
fn test_submit_with_missing_required_field_stays_local() {
    let mut state = AppState::new();

    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "gift.png");

    let actions = press(&mut state, InputKey::Enter);
    assert!(actions.is_empty());
    assert_eq!(notice_text(&state), "Link is required");
    assert_eq!(notice_level(&state), NoticeLevel::Failure);
    assert!(state.active_page().form.is_visible());
    assert_eq!(state.active_page().form.draft.value("icon"), "gift.png");
}

#[test]
fn test_edit_box_prefills_and_updates() {
    let mut state = AppState::new();
    load(&mut state, 0, vec![box_record("b1", "Spring offer")]);

    press(&mut state, InputKey::Char('e'));
    let form = &state.active_page().form;
    assert!(form.is_visible());
    assert!(form.is_editing());
    assert_eq!(form.draft.value("icon"), "star.png");
    assert_eq!(form.draft.value("text"), "Spring offer");

    // Move to the text field and extend it.
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Tab);
    type_text(&mut state, " sale");

    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(actions.len(), 1);
    match &actions[0] {
        UpdateAction::StartUpdate {
            page, id, draft, ..
        } => {
            assert_eq!(*page, 0);
            assert_eq!(id, "b1");
            assert_eq!(draft.value("text"), "Spring offer sale");
        }
        other => panic!("expected StartUpdate, got {other:?}"),
    }

    drive(
        &mut state,
        Message::MutationCompleted {
            page: 0,
            kind: MutationKind::Update,
        },
    );
    assert_eq!(notice_text(&state), "Box updated");
    assert!(!state.pages[0].form.is_visible());
}

#[test]
fn test_edit_office_tour_keeps_stored_image() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('2'));
    load(
        &mut state,
        1,
        vec![record(json!({
            "_id": "t1",
            "title": "Lobby",
            "description": "Walkthrough",
            "image": "lobby.png"
        }))],
    );

    press(&mut state, InputKey::Char('e'));
    let form = &state.active_page().form;
    assert_eq!(form.draft.value("title"), "Lobby");
    // File fields never prefill; an untouched one keeps the stored file.
    assert_eq!(form.draft.value("image"), "");

    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        UpdateAction::StartUpdate { id, .. } if id == "t1"
    ));
}

#[test]
fn test_create_office_tour_requires_image() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('2'));

    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "Rooftop");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Sunset views");

    let actions = press(&mut state, InputKey::Enter);
    assert!(actions.is_empty());
    assert_eq!(notice_text(&state), "Image is required");
}

// ─────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────

#[test]
fn test_delete_requires_second_press() {
    let mut state = AppState::new();
    load(&mut state, 0, vec![box_record("b1", "Spring offer")]);

    let actions = press(&mut state, InputKey::Char('d'));
    assert!(actions.is_empty());
    assert_eq!(state.pages[0].pending_delete.as_deref(), Some("b1"));
    assert_eq!(notice_text(&state), "Press d again to delete this box");
    assert_eq!(notice_level(&state), NoticeLevel::Info);

    let actions = press(&mut state, InputKey::Char('d'));
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        UpdateAction::StartDelete { page: 0, id, .. } if id == "b1"
    ));
    assert_eq!(state.pages[0].pending_delete, None);

    drive(
        &mut state,
        Message::MutationCompleted {
            page: 0,
            kind: MutationKind::Delete,
        },
    );
    assert_eq!(notice_text(&state), "Box deleted");
}

#[test]
fn test_esc_disarms_pending_delete() {
    let mut state = AppState::new();
    load(&mut state, 0, vec![box_record("b1", "Spring offer")]);

    press(&mut state, InputKey::Char('d'));
    assert!(state.pages[0].pending_delete.is_some());

    press(&mut state, InputKey::Esc);
    assert_eq!(state.pages[0].pending_delete, None);
    assert!(state.notice.is_none());

    // A fresh press starts the confirmation over.
    let actions = press(&mut state, InputKey::Char('d'));
    assert!(actions.is_empty());
    assert!(state.pages[0].pending_delete.is_some());
}

#[test]
fn test_y_confirms_armed_delete() {
    let mut state = AppState::new();
    load(&mut state, 0, vec![box_record("b1", "Spring offer")]);

    // y does nothing until a delete is armed.
    assert!(press(&mut state, InputKey::Char('y')).is_empty());
    assert_eq!(state.pages[0].in_flight, None);

    press(&mut state, InputKey::Char('d'));
    let actions = press(&mut state, InputKey::Char('y'));
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        UpdateAction::StartDelete { id, .. } if id == "b1"
    ));
}

#[test]
fn test_moving_selection_disarms_pending_delete() {
    let mut state = AppState::new();
    load(
        &mut state,
        0,
        vec![box_record("b1", "Spring offer"), box_record("b2", "Summer")],
    );

    press(&mut state, InputKey::Char('d'));
    assert!(state.pages[0].pending_delete.is_some());

    press(&mut state, InputKey::Down);
    assert_eq!(state.pages[0].pending_delete, None);
    assert_eq!(state.pages[0].selected, 1);
}

#[test]
fn test_confirm_delete_off_deletes_on_first_press() {
    let mut state = AppState::new();
    state.settings.behavior.confirm_delete = false;
    load(&mut state, 0, vec![box_record("b1", "Spring offer")]);

    let actions = press(&mut state, InputKey::Char('d'));
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        UpdateAction::StartDelete { id, .. } if id == "b1"
    ));
}

// ─────────────────────────────────────────────────────────
// Approval
// ─────────────────────────────────────────────────────────

#[test]
fn test_vendor_approval_end_to_end() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('5'));

    // The pending view hides already-approved spaces.
    load(
        &mut state,
        4,
        vec![
            space_record("v1", "Sunrise Hub", false),
            space_record("v2", "Harbor Desk", true),
        ],
    );
    assert_eq!(state.pages[4].visible_records().len(), 1);

    let actions = press(&mut state, InputKey::Char('a'));
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        UpdateAction::StartApprove { page: 4, id, .. } if id == "v1"
    ));
    assert_eq!(state.pages[4].in_flight, Some(MutationKind::Approve));

    let actions = drive(
        &mut state,
        Message::MutationCompleted {
            page: 4,
            kind: MutationKind::Approve,
        },
    );
    assert_eq!(notice_text(&state), "Office Space approved");
    assert_eq!(actions.len(), 1);
    assert!(matches!(actions[0], UpdateAction::StartList { page: 4, .. }));

    // After the refetch the space has moved to the approved list.
    load(
        &mut state,
        4,
        vec![
            space_record("v1", "Sunrise Hub", true),
            space_record("v2", "Harbor Desk", true),
        ],
    );
    assert!(state.pages[4].visible_records().is_empty());
    assert_eq!(state.pages[4].selected, 0);
}

#[test]
fn test_failed_approval_leaves_list_unchanged() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('5'));
    load(&mut state, 4, vec![space_record("v1", "Sunrise Hub", false)]);

    press(&mut state, InputKey::Char('a'));
    let actions = drive(
        &mut state,
        Message::MutationFailed {
            page: 4,
            kind: MutationKind::Approve,
            error: "timed out".to_string(),
        },
    );
    assert!(actions.is_empty());
    assert_eq!(notice_text(&state), "Failed to approve office space");
    assert_eq!(notice_level(&state), NoticeLevel::Failure);
    assert_eq!(state.pages[4].in_flight, None);
    assert_eq!(state.pages[4].visible_records().len(), 1);
    assert!(!state.pages[4].visible_records()[0].is_approved());
}

#[test]
fn test_approved_record_cannot_be_reapproved() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('6'));
    load(&mut state, 5, vec![space_record("v2", "Harbor Desk", true)]);

    let actions = press(&mut state, InputKey::Char('a'));
    assert!(actions.is_empty());
    assert_eq!(state.pages[5].in_flight, None);
}

#[test]
fn test_users_page_is_read_only() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('7'));
    load(
        &mut state,
        6,
        vec![record(json!({
            "_id": "u1",
            "name": "Asha",
            "email": "asha@example.com"
        }))],
    );

    for key in ['n', 'e', 'd', 'a'] {
        assert!(press(&mut state, InputKey::Char(key)).is_empty());
    }
    assert!(!state.pages[6].form.is_visible());
    assert_eq!(state.pages[6].pending_delete, None);
    assert_eq!(state.pages[6].in_flight, None);
}

// ─────────────────────────────────────────────────────────
// Failure Handling
// ─────────────────────────────────────────────────────────

#[test]
fn test_failed_create_keeps_form_open_for_retry() {
    let mut state = AppState::new();

    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "gift.png");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "/deals");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Autumn deal");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Limited stock");
    press(&mut state, InputKey::Enter);

    let actions = drive(
        &mut state,
        Message::MutationFailed {
            page: 0,
            kind: MutationKind::Create,
            error: "503 from backend".to_string(),
        },
    );
    assert!(actions.is_empty());
    assert_eq!(notice_text(&state), "Failed to add box");
    assert_eq!(notice_level(&state), NoticeLevel::Failure);
    assert!(state.pages[0].form.is_visible());
    assert_eq!(state.pages[0].form.draft.value("text"), "Autumn deal");
    assert_eq!(state.pages[0].in_flight, None);

    // Retrying dispatches again with the same draft.
    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(actions.len(), 1);
    assert!(matches!(actions[0], UpdateAction::StartCreate { .. }));
}

#[test]
fn test_submit_refused_while_write_in_flight() {
    let mut state = AppState::new();

    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "gift.png");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "/deals");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Autumn deal");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Limited stock");

    assert_eq!(press(&mut state, InputKey::Enter).len(), 1);
    // Second submit while the first is still pending.
    assert!(press(&mut state, InputKey::Enter).is_empty());
    assert_eq!(state.pages[0].in_flight, Some(MutationKind::Create));
}

#[test]
fn test_load_failure_keeps_page_usable() {
    let mut state = AppState::new();
    load(&mut state, 0, vec![box_record("b1", "Spring offer")]);

    drive(&mut state, Message::Refresh { page: 0 });
    let actions = drive(
        &mut state,
        Message::LoadFailed {
            page: 0,
            error: "connection refused".to_string(),
        },
    );
    assert!(actions.is_empty());
    assert!(!state.pages[0].loading);
    // Stale records stay on screen and a manual refresh works again.
    assert_eq!(state.pages[0].visible_records().len(), 1);
    assert_eq!(press(&mut state, InputKey::Char('r')).len(), 1);
}

#[test]
fn test_shrinking_reload_clamps_selection() {
    let mut state = AppState::new();
    load(
        &mut state,
        0,
        vec![
            box_record("b1", "Spring offer"),
            box_record("b2", "Summer"),
            box_record("b3", "Autumn"),
        ],
    );
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    assert_eq!(state.pages[0].selected, 2);

    load(&mut state, 0, vec![box_record("b1", "Spring offer")]);
    assert_eq!(state.pages[0].selected, 0);
}

// ─────────────────────────────────────────────────────────
// Quitting
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_types_into_form_instead_of_quitting() {
    let mut state = AppState::new();

    press(&mut state, InputKey::Char('n'));
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(state.active_page().form.draft.value("icon"), "q");

    press(&mut state, InputKey::Esc);
    assert!(!state.active_page().form.is_visible());

    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_with_form_open() {
    let mut state = AppState::new();

    press(&mut state, InputKey::Char('n'));
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}
