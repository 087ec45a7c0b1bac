//! Application context
//!
//! Owns every handle the command handlers and the polling loop need: settings,
//! outbound services, the two stores and the logging middleware.

use std::sync::Arc;

use crate::config::Settings;
use crate::database::repositories::{MessageRepository, UserRepository};
use crate::middleware::{AuditLog, LoggingMiddleware};
use crate::services::ServiceFactory;

/// Application-wide context containing services and settings
#[derive(Clone)]
pub struct AppContext {
    pub settings: Arc<Settings>,
    pub services: ServiceFactory,
    pub users: UserRepository,
    pub messages: MessageRepository,
    pub middleware: LoggingMiddleware,
}

impl AppContext {
    /// Build the context, opening the stores and the audit sink at the configured paths
    pub fn new(settings: Settings, services: ServiceFactory) -> Self {
        let users = UserRepository::new(settings.storage.users_path.clone());
        let messages = MessageRepository::new(settings.storage.messages_path.clone());
        let middleware = LoggingMiddleware::new(AuditLog::new(settings.logging.audit_path.clone()));

        Self {
            settings: Arc::new(settings),
            services,
            users,
            messages,
            middleware,
        }
    }

    /// Team whose inbox is polled
    pub fn team_name(&self) -> &str {
        &self.settings.messaging.team_name
    }
}
