//! MORE command handler

use tracing::{debug, info};

use super::attraction_type::surprise;
use super::{reject, reply, require_profile, HandlerResponse};
use crate::services::notification::MessageTemplate;
use crate::state::{AppContext, ConversationState};
use crate::utils::errors::Result;
use crate::utils::helpers::redact_phone;

/// Handle MORE: the next stored attraction, or a new surprise
pub async fn handle_more(ctx: &AppContext, phone: &str) -> Result<HandlerResponse> {
    let mut profile = match require_profile(ctx, phone).await? {
        Ok(profile) => profile,
        Err(response) => return Ok(response),
    };

    let state = ConversationState::of(Some(&profile));
    debug!(phone = %redact_phone(phone), state = %state, cursor = profile.cursor, "Processing MORE");

    if profile.is_surprise() {
        if let Some(location) = profile.location.clone() {
            return surprise(ctx, phone, profile, &location).await;
        }
    }

    if state != ConversationState::Browsing {
        return Ok(reject(
            ctx,
            phone,
            MessageTemplate::MissingSelection {
                missing: state.missing_selections(),
            },
        )
        .await);
    }

    if profile.is_exhausted() || !profile.advance_cursor() {
        return Ok(reply(ctx, phone, MessageTemplate::ListExhausted).await);
    }

    let position = profile.cursor + 1;
    let total = profile.attractions.len();
    let Some(next) = profile.current().cloned() else {
        return Ok(reply(ctx, phone, MessageTemplate::ListExhausted).await);
    };

    let link = ctx.services.attractions.short_link(&next.link).await;
    let template = MessageTemplate::Attraction {
        title: &next.title,
        link: &link,
        position,
        total,
    };
    let response = reply(ctx, phone, template).await;

    // the cursor only moves once the user actually received the entry
    if response.is_success() {
        ctx.users.save(profile).await?;
        info!(phone = %redact_phone(phone), position = position, total = total, "Next attraction sent");
    }
    Ok(response)
}
