use crate::api::messages::{Level, Message, add_message, take_messages};

use std::sync::Arc;

use googletest::prelude::*;
use tower_sessions::{MemoryStore, Session};

fn test_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}

#[tokio::test]
async fn given_queued_messages_when_taken_then_returned_in_order_once() {
    // Given
    let session = test_session();
    add_message(&session, Level::Success, "first").await.unwrap();
    add_message(&session, Level::Error, "second").await.unwrap();

    // When
    let messages = take_messages(&session).await.unwrap();
    let again = take_messages(&session).await.unwrap();

    // Then
    assert_eq!(
        messages,
        vec![
            Message {
                level: Level::Success,
                text: "first".to_string(),
            },
            Message {
                level: Level::Error,
                text: "second".to_string(),
            },
        ]
    );
    assert_that!(again, is_empty());
}

#[tokio::test]
async fn given_fresh_session_when_taking_messages_then_empty() {
    let session = test_session();

    let messages = take_messages(&session).await.unwrap();

    assert_that!(messages, is_empty());
}
