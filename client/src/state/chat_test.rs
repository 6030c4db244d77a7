use super::*;

fn message(id: &str, is_from_ai: bool) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        content: format!("message {id}"),
        is_from_ai,
        created_at: "2024-05-01T14:05:00Z".to_owned(),
    }
}

// =============================================================
// MessageListView precedence
// =============================================================

#[test]
fn error_wins_over_everything() {
    assert_eq!(MessageListView::resolve(0, false, true), MessageListView::Error);
    assert_eq!(MessageListView::resolve(0, true, true), MessageListView::Error);
    assert_eq!(MessageListView::resolve(4, true, true), MessageListView::Error);
}

#[test]
fn empty_and_idle_shows_suggestions() {
    assert_eq!(MessageListView::resolve(0, false, false), MessageListView::Suggestions);
    assert_eq!(SUGGESTED_PROMPTS.len(), 5);
}

#[test]
fn empty_and_loading_shows_skeletons() {
    assert_eq!(MessageListView::resolve(0, true, false), MessageListView::Skeletons);
    assert_eq!(SKELETON_ROWS, 3);
}

#[test]
fn messages_show_typing_only_while_loading() {
    assert_eq!(MessageListView::resolve(2, false, false), MessageListView::Messages { typing: false });
    assert_eq!(MessageListView::resolve(2, true, false), MessageListView::Messages { typing: true });
}

// =============================================================
// ChatMessage
// =============================================================

#[test]
fn assistant_messages_align_left_user_messages_right() {
    assert_eq!(message("a", true).alignment(), Alignment::Start);
    assert_eq!(message("b", false).alignment(), Alignment::End);
    assert_eq!(Alignment::Start.modifier(), "start");
    assert_eq!(Alignment::End.modifier(), "end");
}

#[test]
fn chat_message_deserializes_backend_shape() {
    let raw = serde_json::json!({
        "id": "m-1",
        "content": "Bend your knees.",
        "is_from_ai": true,
        "created_at": "2024-05-01T14:05:00Z"
    });
    let parsed: ChatMessage = serde_json::from_value(raw).expect("message should parse");
    assert_eq!(parsed.id, "m-1");
    assert!(parsed.is_from_ai);
}

#[test]
fn chat_message_now_stamps_parseable_time() {
    let msg = ChatMessage::now("hi", false);
    assert!(!msg.id.is_empty());
    assert!(chrono::DateTime::parse_from_rfc3339(&msg.created_at).is_ok());
}

// =============================================================
// ChatState
// =============================================================

#[test]
fn submit_appends_trimmed_prompt_and_marks_loading() {
    let mut state = ChatState::default();
    let sent = state.submit("  how do I slice?  ").expect("prompt accepted");
    assert_eq!(sent.content, "how do I slice?");
    assert!(!sent.is_from_ai);
    assert!(state.loading);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn submit_ignores_blank_and_pending() {
    let mut state = ChatState::default();
    assert!(state.submit("   ").is_none());
    assert!(state.submit("first").is_some());
    assert!(state.submit("second").is_none());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn receive_appends_reply_and_clears_loading() {
    let mut state = ChatState::default();
    state.submit("first");
    state.receive(message("r", true));
    assert!(!state.loading);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn fail_sets_error_and_submit_clears_it() {
    let mut state = ChatState::default();
    state.submit("first");
    state.fail(ChatError::new("Service unavailable").with_kind("network"));
    assert!(!state.loading);
    let err = state.error.clone().expect("error recorded");
    assert_eq!(err.message, "Service unavailable");
    assert_eq!(err.kind.as_deref(), Some("network"));
    assert!(err.retry.is_none());

    state.submit("again");
    assert!(state.error.is_none());
}

#[test]
fn last_prompt_skips_assistant_messages() {
    let mut state = ChatState::default();
    assert_eq!(state.last_prompt(), None);
    state.submit("serve tips");
    state.receive(message("r", true));
    assert_eq!(state.last_prompt(), Some("serve tips"));
}

#[test]
fn chat_error_debug_hides_callback() {
    let rendered = format!("{:?}", ChatError::new("boom"));
    assert!(rendered.contains("boom"));
    assert!(rendered.contains("retry: false"));
}

#[test]
fn resume_clears_error_and_returns_last_prompt() {
    let mut state = ChatState::default();
    state.submit("volley drills");
    state.fail(ChatError::new("offline"));
    assert_eq!(state.resume().as_deref(), Some("volley drills"));
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn resume_without_prompt_stays_idle() {
    let mut state = ChatState::default();
    state.fail(ChatError::new("offline"));
    assert_eq!(state.resume(), None);
    assert!(!state.loading);
    assert!(state.error.is_none());
}
