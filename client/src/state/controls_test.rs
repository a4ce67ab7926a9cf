use super::*;
use crate::net::api_error::ApiError;
use crate::state::ids::SequentialIds;
use crate::state::notifications::MessageType;

fn controls() -> AppControls<&'static str> {
    AppControls::with_ids(SequentialIds::new())
}

// =============================================================
// notification()
// =============================================================

#[test]
fn notification_surface_feeds_shared_queue() {
    let controls = controls();
    let copy = controls.clone();

    controls.notification().add_once(MessageDefinition::new(MessageType::Success, "saved"));
    let handle = copy.notification().add(MessageDefinition::new(MessageType::InProgress, "syncing").dismissible(true));

    assert_eq!(controls.queue().len(), 2);
    assert_eq!(copy.queue().messages()[0].id, handle.id());

    assert!(controls.notification().dismiss(handle.id()));
    assert_eq!(copy.queue().len(), 1);
}

#[test]
fn catch_notify_pushes_error_message() {
    let controls = controls();
    let sink = controls.catch_notify::<ApiError>(Some("Could not load"));
    sink(ApiError::new(503, "Unavailable"));
    sink(ApiError::new(503, "Unavailable"));

    let messages = controls.queue().messages();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|n| n.message.kind == MessageType::Error && n.message.dismissible));
}

#[test]
fn notify_error_through_surface() {
    let controls = controls();
    controls.notification().notify_error("boom", None);
    assert_eq!(controls.queue().messages()[0].message.kind, MessageType::Error);
}

// =============================================================
// tools()
// =============================================================

#[test]
fn tools_surface_drives_shared_panel() {
    let controls = controls();
    let copy = controls.clone();

    let registration = controls.tools().register("filters");
    copy.tools().open(true);
    assert_eq!(controls.panel().content(), Some("filters"));
    assert!(controls.panel().is_open());

    copy.tools().set(Some("sorting"));
    assert_eq!(controls.panel().content(), Some("sorting"));

    copy.tools().open(SetState::update(|open: &bool| !*open));
    assert!(!controls.panel().is_open());

    drop(registration);
    assert_eq!(controls.panel().content(), None);
}

#[test]
fn panel_without_content_reports_closed() {
    let controls = controls();
    controls.tools().open(true);
    assert!(!controls.panel().is_open());
}

#[test]
fn tools_opener_outlives_the_borrow() {
    let controls = controls();
    let open = controls.tools_opener();
    let _registration = controls.tools().register("help");
    drop(controls.clone());

    open(true.into());
    assert!(controls.panel().is_open());

    open(SetState::update(|open: &bool| !*open));
    assert!(!controls.panel().is_open());
}
