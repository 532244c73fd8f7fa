//! Point-to-point relay through the bot.

use std::sync::Arc;

use relay_core::{Bot, Chat};
use tracing::{info, instrument};

use crate::directory::{Directory, Participant};
use crate::error::RelayError;
use crate::texts;

/// Result of a delivered relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReceipt {
    pub target: Participant,
}

impl RelayReceipt {
    /// Confirmation shown to the sender.
    pub fn confirmation(&self) -> String {
        texts::relay_confirmation(&self.target.label())
    }
}

/// Validates relay requests against the directory and delivers them through the bot.
pub struct Router {
    directory: Arc<Directory>,
    bot: Arc<dyn Bot>,
}

impl Router {
    pub fn new(directory: Arc<Directory>, bot: Arc<dyn Bot>) -> Self {
        Self { directory, bot }
    }

    /// Sends `body` to `target_id`, prefixed with `sender_name`.
    ///
    /// `target_id` is the raw first argument of `/send`; an empty or non-numeric value is
    /// [`RelayError::MalformedRequest`], an id outside the directory is [`RelayError::UnknownTarget`].
    /// Neither attempts delivery. An empty `body` is delivered as is. A transport failure is
    /// returned as [`RelayError::Delivery`] without retry.
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn relay(
        &self,
        sender_id: i64,
        sender_name: &str,
        target_id: &str,
        body: &str,
    ) -> Result<RelayReceipt, RelayError> {
        let target_id: i64 = target_id
            .trim()
            .parse()
            .map_err(|_| RelayError::MalformedRequest)?;
        let target = self
            .directory
            .lookup(target_id)
            .await
            .map_err(|_| RelayError::UnknownTarget(target_id))?;

        let text = texts::relayed_message(sender_name, body);
        self.bot
            .send_message(&Chat::private(target_id), &text)
            .await?;

        info!(sender_id, target_id, "Relayed message");
        Ok(RelayReceipt { target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use relay_core::{Menu, Message, RelayBotError};
    use std::time::Duration;

    mock! {
        pub TestBot {}

        #[async_trait]
        impl Bot for TestBot {
            async fn send_message(&self, chat: &Chat, text: &str) -> relay_core::Result<()>;
            async fn reply_to(&self, message: &Message, text: &str) -> relay_core::Result<()>;
            async fn reply_with_menu(
                &self,
                message: &Message,
                text: &str,
                menu: &Menu,
            ) -> relay_core::Result<()>;
        }
    }

    async fn directory_with_bob() -> Arc<Directory> {
        let directory = Arc::new(Directory::new());
        directory.register(42, Some("Bob".to_string())).await;
        directory
    }

    #[tokio::test]
    async fn test_relay_delivers_once_and_confirms() {
        let mut bot = MockTestBot::new();
        bot.expect_send_message()
            .times(1)
            .withf(|chat: &Chat, text: &str| {
                chat.id == 42 && text.contains("Alice") && text.contains("hi")
            })
            .returning(|_, _| Ok(()));
        let router = Router::new(directory_with_bob().await, Arc::new(bot));

        let receipt = router.relay(7, "Alice", "42", "hi").await.unwrap();

        assert_eq!(receipt.target.id, 42);
        assert!(receipt.confirmation().contains("Bob"));
    }

    #[tokio::test]
    async fn test_relay_non_numeric_target_is_malformed() {
        let mut bot = MockTestBot::new();
        bot.expect_send_message().never();
        let router = Router::new(directory_with_bob().await, Arc::new(bot));

        assert!(matches!(
            router.relay(7, "Alice", "abc", "hi").await,
            Err(RelayError::MalformedRequest)
        ));
        assert!(matches!(
            router.relay(7, "Alice", "", "hi").await,
            Err(RelayError::MalformedRequest)
        ));
    }

    #[tokio::test]
    async fn test_relay_unregistered_target_is_unknown() {
        let mut bot = MockTestBot::new();
        bot.expect_send_message().never();
        let router = Router::new(directory_with_bob().await, Arc::new(bot));

        assert!(matches!(
            router.relay(7, "Alice", "999", "hi").await,
            Err(RelayError::UnknownTarget(999))
        ));
    }

    #[tokio::test]
    async fn test_relay_empty_body_is_delivered() {
        let mut bot = MockTestBot::new();
        bot.expect_send_message()
            .times(1)
            .withf(|chat: &Chat, text: &str| chat.id == 42 && text.contains("Alice"))
            .returning(|_, _| Ok(()));
        let router = Router::new(directory_with_bob().await, Arc::new(bot));

        assert!(router.relay(7, "Alice", "42", "").await.is_ok());
    }

    #[tokio::test]
    async fn test_relay_delivery_failure_is_returned() {
        let mut bot = MockTestBot::new();
        bot.expect_send_message()
            .times(1)
            .returning(|_, _| Err(RelayBotError::Bot("Forbidden: bot was blocked".to_string())));
        let router = Router::new(directory_with_bob().await, Arc::new(bot));

        assert!(matches!(
            router.relay(7, "Alice", "42", "hi").await,
            Err(RelayError::Delivery(RelayBotError::Bot(_)))
        ));
    }

    /// Registers a participant from inside `send_message`, as a handler reacting to a delivery
    /// would. Fails instead of hanging if the directory is still locked.
    struct ReentrantBot {
        directory: Arc<Directory>,
    }

    #[async_trait]
    impl Bot for ReentrantBot {
        async fn send_message(&self, _chat: &Chat, _text: &str) -> relay_core::Result<()> {
            tokio::time::timeout(
                Duration::from_secs(1),
                self.directory.register(99, Some("Carol".to_string())),
            )
            .await
            .map_err(|_| RelayBotError::Bot("directory locked during delivery".to_string()))?;
            Ok(())
        }

        async fn reply_to(&self, _message: &Message, _text: &str) -> relay_core::Result<()> {
            Ok(())
        }

        async fn reply_with_menu(
            &self,
            _message: &Message,
            _text: &str,
            _menu: &Menu,
        ) -> relay_core::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_relay_holds_no_directory_lock_during_delivery() {
        let directory = directory_with_bob().await;
        let bot = ReentrantBot {
            directory: directory.clone(),
        };
        let router = Router::new(directory.clone(), Arc::new(bot));

        let receipt = router.relay(7, "Alice", "42", "hi").await.unwrap();

        assert_eq!(receipt.target.id, 42);
        assert_eq!(
            directory.lookup(99).await.unwrap().name.as_deref(),
            Some("Carol")
        );
    }
}
