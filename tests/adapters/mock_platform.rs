use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use edit_guardian::platform::{ChatPlatform, OutgoingMessage, PlatformError};
use teloxide::types::{ChatId, MessageId};

#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    BotUsername,
    Send {
        chat_id: ChatId,
        message: OutgoingMessage,
    },
    Delete {
        chat_id: ChatId,
        message_id: MessageId,
    },
    Edit {
        chat_id: ChatId,
        message_id: MessageId,
        message: OutgoingMessage,
    },
    AnswerCallback {
        query_id: String,
    },
}

/// Records every call; failures are configured per chat.
pub struct MockPlatform {
    calls: Arc<Mutex<Vec<PlatformCall>>>,
    username: String,
    failing_deletes: HashMap<ChatId, PlatformError>,
    failing_sends: HashMap<ChatId, PlatformError>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            username: "guardian_bot".to_string(),
            failing_deletes: HashMap::new(),
            failing_sends: HashMap::new(),
        }
    }

    pub fn with_failing_delete(mut self, chat_id: ChatId, err: PlatformError) -> Self {
        self.failing_deletes.insert(chat_id, err);
        self
    }

    pub fn with_failing_send(mut self, chat_id: ChatId, err: PlatformError) -> Self {
        self.failing_sends.insert(chat_id, err);
        self
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Messages sent to one chat, in order.
    pub fn sent_to(&self, chat_id: ChatId) -> Vec<OutgoingMessage> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::Send { chat_id: id, message } if id == chat_id => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn send_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, PlatformCall::Send { .. }))
            .count()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn bot_username(&self) -> Result<String, PlatformError> {
        self.record(PlatformCall::BotUsername);
        Ok(self.username.clone())
    }

    async fn send_message(
        &self,
        chat_id: ChatId,
        message: OutgoingMessage,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::Send { chat_id, message });
        match self.failing_sends.get(&chat_id) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn delete_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::Delete { chat_id, message_id });
        match self.failing_deletes.get(&chat_id) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        message: OutgoingMessage,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::Edit {
            chat_id,
            message_id,
            message,
        });
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<(), PlatformError> {
        self.record(PlatformCall::AnswerCallback {
            query_id: query_id.to_string(),
        });
        Ok(())
    }
}
