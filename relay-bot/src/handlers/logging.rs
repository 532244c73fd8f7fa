//! Logs each inbound event in before() and the chain's response in after(); always continues.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            kind = ?message.kind,
            content = %message.content,
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = ?message.id,
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use relay_core::{Chat, MessageKind, User};

    fn sample_message() -> Message {
        Message {
            id: "msg-1".to_string(),
            user: User {
                id: 1,
                username: Some("testuser".to_string()),
                first_name: Some("Test".to_string()),
                last_name: None,
            },
            chat: Chat::private(1),
            content: "hello".to_string(),
            kind: MessageKind::Text,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_logging_handler_continues() {
        let handler = LoggingHandler;
        let msg = sample_message();
        assert!(handler.before(&msg).await.unwrap());
        assert_eq!(handler.handle(&msg).await.unwrap(), HandlerResponse::Continue);
        assert!(handler
            .after(&msg, &HandlerResponse::Reply("hi".to_string()))
            .await
            .is_ok());
    }
}
