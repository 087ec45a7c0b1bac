//! Command handlers module
//!
//! Incoming texts start with a keyword (SUBSCRIBE, LOCATION Paris, ...). This
//! module parses the keyword, routes to one handler per command, and holds
//! the helpers every handler shares.

pub mod attraction_type;
pub mod help;
pub mod location;
pub mod more;
pub mod subscribe;

use std::fmt;

use tracing::error;

use crate::models::catalog::{AttractionCatalog, SURPRISE};
use crate::models::user::UserProfile;
use crate::services::messaging::TransportReply;
use crate::services::notification::MessageTemplate;
use crate::state::AppContext;
use crate::utils::errors::{AttractionError, Result};
use crate::utils::helpers::redact_phone;

/// Status returned when a command arrives out of order
pub const PRECONDITION_FAILED: u16 = 400;

/// All commands users can text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Subscribe,
    Unsubscribe,
    Location,
    Type,
    More,
    Docs,
}

impl Command {
    /// Keywords are tried in this order; the first whole-token match wins
    pub const PRIORITY: [Command; 6] = [
        Command::Subscribe,
        Command::Unsubscribe,
        Command::Location,
        Command::Type,
        Command::More,
        Command::Docs,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Subscribe => "SUBSCRIBE",
            Command::Unsubscribe => "UNSUBSCRIBE",
            Command::Location => "LOCATION",
            Command::Type => "TYPE",
            Command::More => "MORE",
            Command::Docs => "DOCS",
        }
    }

    /// Split a text into its command and argument.
    ///
    /// The keyword must be a whole leading token, compared ignoring ASCII
    /// case. Text without a keyword goes to DOCS with the whole trimmed text
    /// as argument.
    pub fn parse(text: &str) -> (Command, &str) {
        let trimmed = text.trim();

        for command in Self::PRIORITY {
            let keyword = command.keyword();
            let Some(head) = trimmed.get(..keyword.len()) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(keyword) {
                continue;
            }

            let rest = &trimmed[keyword.len()..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return (command, rest.trim());
            }
        }

        (Command::Docs, trimmed)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Status code and text produced by a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub text: String,
}

impl HandlerResponse {
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<TransportReply> for HandlerResponse {
    fn from(reply: TransportReply) -> Self {
        Self::new(reply.status, reply.message)
    }
}

impl From<AttractionError> for HandlerResponse {
    fn from(error: AttractionError) -> Self {
        Self::new(error.status_code(), error.public_message())
    }
}

/// Parse a text and run its handler. Never fails: internal errors become a
/// response carrying the error's status.
pub async fn dispatch(ctx: &AppContext, sender: &str, text: &str) -> HandlerResponse {
    let (command, argument) = Command::parse(text);

    ctx.middleware
        .wrap(command, sender, async {
            match run(ctx, command, sender, argument).await {
                Ok(response) => response,
                Err(e) => {
                    error!(
                        phone = %redact_phone(sender),
                        command = command.keyword(),
                        error = %e,
                        severity = %e.severity(),
                        "Command handler failed"
                    );
                    e.into()
                }
            }
        })
        .await
}

async fn run(ctx: &AppContext, command: Command, sender: &str, argument: &str) -> Result<HandlerResponse> {
    match command {
        Command::Subscribe => subscribe::handle_subscribe(ctx, sender).await,
        Command::Unsubscribe => subscribe::handle_unsubscribe(ctx, sender).await,
        Command::Location => location::handle_location(ctx, sender, argument).await,
        Command::Type => attraction_type::handle_type(ctx, sender, argument).await,
        Command::More => more::handle_more(ctx, sender).await,
        Command::Docs => help::handle_docs(ctx, sender, argument).await,
    }
}

/// Send a reply; the response carries the send status, or the provider's
/// message when the send failed
pub(crate) async fn reply(ctx: &AppContext, phone: &str, template: MessageTemplate<'_>) -> HandlerResponse {
    let (text, sent) = ctx.services.notifications.send(phone, &template).await;
    if sent.is_success() {
        HandlerResponse::new(sent.status, text)
    } else {
        sent.into()
    }
}

/// Send guidance for a command that arrived out of order
pub(crate) async fn reject(ctx: &AppContext, phone: &str, template: MessageTemplate<'_>) -> HandlerResponse {
    let (text, _) = ctx.services.notifications.send(phone, &template).await;
    HandlerResponse::new(PRECONDITION_FAILED, text)
}

/// Load the sender's profile, or answer "subscribe first"
pub(crate) async fn require_profile(
    ctx: &AppContext,
    phone: &str,
) -> Result<std::result::Result<UserProfile, HandlerResponse>> {
    match ctx.users.find_by_phone(phone).await? {
        Some(profile) => Ok(Ok(profile)),
        None => Ok(Err(reject(ctx, phone, MessageTemplate::SubscribeFirst).await)),
    }
}

/// Two different catalog names to suggest in prompts
pub(crate) fn example_types(catalog: &AttractionCatalog) -> (String, String) {
    let mut rng = rand::thread_rng();
    match catalog.random_pair(&mut rng) {
        Some((first, second)) => (first.name.clone(), second.name.clone()),
        None => (SURPRISE.to_string(), SURPRISE.to_string()),
    }
}
