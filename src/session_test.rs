use super::*;

#[test]
fn generated_tokens_are_64_hex_chars_and_unique() {
    let a = generate_token();
    let b = generate_token();
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn bytes_to_hex_pads_each_byte() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xab]), "000fab");
}

#[test]
fn accepts_only_the_exact_token() {
    let host = HostState::new("abc123");
    assert!(host.accepts("abc123"));
    assert!(!host.accepts("abc12"));
    assert!(!host.accepts("ABC123"));
    assert!(!host.accepts(""));
}

#[test]
fn empty_token_never_authenticates() {
    let host = HostState::new("");
    assert!(!host.accepts(""));
}

#[tokio::test]
async fn shutdown_request_is_remembered_until_awaited() {
    let host = HostState::new("t");
    host.request_shutdown();
    tokio::time::timeout(std::time::Duration::from_secs(1), host.shutdown_requested())
        .await
        .expect("pending shutdown request should resolve immediately");
}

#[tokio::test]
async fn clones_share_the_shutdown_signal() {
    let host = HostState::new("t");
    let waiter = host.clone();
    let task = tokio::spawn(async move { waiter.shutdown_requested().await });
    host.request_shutdown();
    tokio::time::timeout(std::time::Duration::from_secs(1), task).await.unwrap().unwrap();
}
