//! Registers or refreshes the sender of every inbound event in the directory.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Handler, Message, Result};
use tracing::info;

use crate::directory::Directory;

pub struct RegistrationHandler {
    directory: Arc<Directory>,
}

impl RegistrationHandler {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl Handler for RegistrationHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        let user = &message.user;
        if self.directory.register(user.id, user.display_name()).await {
            info!(user_id = user.id, "New participant");
        }
        Ok(true)
    }
}
