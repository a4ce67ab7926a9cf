use super::*;

#[test]
fn message_class_uses_kind_modifier() {
    assert_eq!(message_class(MessageType::Error), "notification notification--error");
    assert_eq!(message_class(MessageType::InProgress), "notification notification--in-progress");
}

#[test]
fn default_kind_renders_as_info() {
    assert_eq!(message_class(MessageType::default()), "notification notification--info");
}
