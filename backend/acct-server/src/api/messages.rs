//! One-shot messages carried in the session until the next render.

use crate::AppResult;

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

const MESSAGES_KEY: &str = "_messages";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

/// Queue a message for the next page this session renders
pub async fn add_message(session: &Session, level: Level, text: impl Into<String>) -> AppResult<()> {
    let mut pending: Vec<Message> = session.get(MESSAGES_KEY).await?.unwrap_or_default();
    pending.push(Message {
        level,
        text: text.into(),
    });
    session.insert(MESSAGES_KEY, pending).await?;
    Ok(())
}

/// Remove and return every queued message, oldest first
pub async fn take_messages(session: &Session) -> AppResult<Vec<Message>> {
    Ok(session
        .remove::<Vec<Message>>(MESSAGES_KEY)
        .await?
        .unwrap_or_default())
}
