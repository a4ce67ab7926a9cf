use super::*;

#[test]
fn panel_class_marks_open_state() {
    assert_eq!(panel_class(true), "tools-panel tools-panel--open");
    assert_eq!(panel_class(false), "tools-panel");
}

#[test]
fn toggle_label_describes_next_action() {
    assert_eq!(toggle_label(true), "Hide");
    assert_eq!(toggle_label(false), "Show");
}

#[test]
fn toggle_flips_open_flag() {
    assert!(toggle().apply(&false));
    assert!(!toggle().apply(&true));
}

#[test]
fn tool_content_debug_shows_title() {
    let content = ToolContent::new("Filters", || "body");
    assert!(format!("{content:?}").contains("Filters"));
}
