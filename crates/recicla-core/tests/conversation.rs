use recicla_core::models::conversation::{
    ConversationTurn, HISTORY_WINDOW, TurnRole, recent_turns,
};

fn numbered(n: usize) -> Vec<ConversationTurn> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                ConversationTurn::user(format!("turn {i}"))
            } else {
                ConversationTurn::assistant(format!("turn {i}"))
            }
        })
        .collect()
}

#[test]
fn short_history_is_used_whole() {
    let history = numbered(3);
    assert_eq!(recent_turns(&history), history.as_slice());
}

#[test]
fn long_history_keeps_last_window_in_order() {
    let history = numbered(12);
    let recent = recent_turns(&history);

    assert_eq!(recent.len(), HISTORY_WINDOW);
    assert_eq!(recent.first().map(|t| t.content.as_str()), Some("turn 4"));
    assert_eq!(recent.last().map(|t| t.content.as_str()), Some("turn 11"));
}

#[test]
fn empty_history_yields_empty_window() {
    assert!(recent_turns(&[]).is_empty());
}

#[test]
fn roles_deserialize_from_snake_case() {
    let turn: ConversationTurn =
        serde_json::from_str(r#"{"role":"user","content":"Oi"}"#).unwrap();
    assert_eq!(turn.role, TurnRole::User);

    let turn: ConversationTurn =
        serde_json::from_str(r#"{"role":"assistant","content":"Olá"}"#).unwrap();
    assert_eq!(turn.role, TurnRole::Assistant);
}

#[test]
fn unknown_roles_fall_back_to_assistant() {
    let turn: ConversationTurn =
        serde_json::from_str(r#"{"role":"system","content":"x"}"#).unwrap();
    assert_eq!(turn.role, TurnRole::Assistant);
}
