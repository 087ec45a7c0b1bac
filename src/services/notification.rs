//! Notification service implementation
//!
//! This service owns every text the bot sends back over SMS: the message
//! templates and the call into the outbound transport.

use std::sync::Arc;

use tracing::debug;

use crate::services::messaging::{MessagingTransport, TransportReply};
use crate::utils::helpers::redact_phone;

/// Every reply the bot can send
#[derive(Debug, Clone, PartialEq)]
pub enum MessageTemplate<'a> {
    Welcome { sample_city: Option<&'a str> },
    Farewell,
    SubscribeFirst,
    LocationUsage,
    CityNotFound { city: &'a str },
    LocationSet { city: &'a str, examples: (&'a str, &'a str) },
    LocationFirst,
    TypeUsage { examples: (&'a str, &'a str) },
    InvalidType { input: &'a str, examples: (&'a str, &'a str) },
    NothingFound { attraction_type: &'a str, city: &'a str },
    OutOfSurprises,
    Attraction { title: &'a str, link: &'a str, position: usize, total: usize },
    Surprise { category: &'a str, title: &'a str, link: &'a str },
    MissingSelection { missing: Vec<&'static str> },
    ListExhausted,
    Docs { catalog_url: &'a str },
}

impl MessageTemplate<'_> {
    pub fn render(&self) -> String {
        match self {
            MessageTemplate::Welcome { sample_city } => {
                let example = sample_city.unwrap_or("Paris");
                format!(
                    "Welcome to AttractionBuddy! Tell me where you are going: \
                     text LOCATION followed by a city, e.g. LOCATION {}. Text DOCS for help.",
                    example
                )
            }
            MessageTemplate::Farewell => {
                "You are unsubscribed. Your preferences are kept: text SUBSCRIBE to come back any time."
                    .to_string()
            }
            MessageTemplate::SubscribeFirst => {
                "You are not subscribed yet. Text SUBSCRIBE to get started.".to_string()
            }
            MessageTemplate::LocationUsage => {
                "Please add a city after LOCATION, e.g. LOCATION Paris.".to_string()
            }
            MessageTemplate::CityNotFound { city } => format!(
                "Sorry, I could not find the city \"{}\". Check the spelling and send LOCATION again.",
                city
            ),
            MessageTemplate::LocationSet { city, examples } => format!(
                "Location set to {}. What would you like to see? Text TYPE with a category, \
                 e.g. TYPE {} or TYPE {}, or TYPE surprise.",
                city, examples.0, examples.1
            ),
            MessageTemplate::LocationFirst => {
                "Please set a destination first: text LOCATION followed by a city.".to_string()
            }
            MessageTemplate::TypeUsage { examples } => format!(
                "Please add a category after TYPE, e.g. TYPE {} or TYPE {}, or TYPE surprise.",
                examples.0, examples.1
            ),
            MessageTemplate::InvalidType { input, examples } => format!(
                "\"{}\" is not a category I know. Try one of these: TYPE {} or TYPE {}, or TYPE surprise.",
                input, examples.0, examples.1
            ),
            MessageTemplate::NothingFound { attraction_type, city } => format!(
                "Nothing found for {} in {}. Try a different TYPE or LOCATION.",
                attraction_type, city
            ),
            MessageTemplate::OutOfSurprises => {
                "I am out of surprises for now, please try again later or pick a TYPE.".to_string()
            }
            MessageTemplate::Attraction { title, link, position, total } => format!(
                "{} ({}/{})\n{}\nText MORE for the next one.",
                title, position, total, link
            ),
            MessageTemplate::Surprise { category, title, link } => format!(
                "Surprise! A {} for you: {}\n{}\nText MORE for another surprise.",
                category, title, link
            ),
            MessageTemplate::MissingSelection { missing } => format!(
                "I need a bit more before I can suggest anything. Please send {} first.",
                missing.join(" and ")
            ),
            MessageTemplate::ListExhausted => {
                "That was the last one. Ask for a new TYPE to see more places.".to_string()
            }
            MessageTemplate::Docs { catalog_url } => format!(
                "AttractionBuddy commands:\n\
                 SUBSCRIBE - start receiving recommendations\n\
                 UNSUBSCRIBE - stop\n\
                 LOCATION <city> - set your destination\n\
                 TYPE <category> - pick what to see, or TYPE surprise\n\
                 MORE - next recommendation\n\
                 DOCS - this help\n\
                 Categories: {}",
                catalog_url
            ),
        }
    }
}

/// Sends rendered templates through the outbound transport
#[derive(Clone)]
pub struct NotificationService {
    messaging: Arc<dyn MessagingTransport>,
}

impl NotificationService {
    pub fn new(messaging: Arc<dyn MessagingTransport>) -> Self {
        Self { messaging }
    }

    /// Render and send a template, returning the rendered text and the transport reply
    pub async fn send(&self, phone: &str, template: &MessageTemplate<'_>) -> (String, TransportReply) {
        let text = template.render();
        let reply = self.messaging.send(phone, &text).await;
        debug!(
            phone = %redact_phone(phone),
            status = reply.status,
            length = text.len(),
            "Reply sent"
        );
        (text, reply)
    }
}
