//! Conversation state
//!
//! A user's place in the conversation is never stored: it is read off the
//! profile fields every time a command arrives.

use std::fmt;

use crate::models::user::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// No profile exists for the number
    Unregistered,
    /// Subscribed, no destination yet
    NoLocation,
    /// Destination set, no attraction type yet
    NoType,
    /// Attraction type set but nothing to browse (an exhausted surprise)
    NoResults,
    /// Attraction type set and a non-empty list to page through
    Browsing,
}

impl ConversationState {
    pub fn of(profile: Option<&UserProfile>) -> Self {
        let Some(profile) = profile else {
            return ConversationState::Unregistered;
        };

        match (&profile.location, &profile.attraction_type) {
            (None, _) => ConversationState::NoLocation,
            (Some(_), None) => ConversationState::NoType,
            (Some(_), Some(_)) if profile.attractions.is_empty() => ConversationState::NoResults,
            (Some(_), Some(_)) => ConversationState::Browsing,
        }
    }

    /// Commands the user still has to send before MORE can page
    pub fn missing_selections(&self) -> Vec<&'static str> {
        match self {
            ConversationState::Unregistered => vec!["SUBSCRIBE"],
            ConversationState::NoLocation => vec!["LOCATION", "TYPE"],
            ConversationState::NoType | ConversationState::NoResults => vec!["TYPE"],
            ConversationState::Browsing => vec![],
        }
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversationState::Unregistered => "unregistered",
            ConversationState::NoLocation => "no_location",
            ConversationState::NoType => "no_type",
            ConversationState::NoResults => "no_results",
            ConversationState::Browsing => "browsing",
        };
        write!(f, "{}", name)
    }
}
