//! Subscription command handlers
//!
//! SUBSCRIBE adds the sender to the team and creates an empty profile;
//! UNSUBSCRIBE removes the sender from the team and keeps the profile so a
//! later SUBSCRIBE resumes where the user left off.

use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use super::{reply, HandlerResponse};
use crate::services::notification::MessageTemplate;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::redact_phone;

/// Handle SUBSCRIBE
pub async fn handle_subscribe(ctx: &AppContext, phone: &str) -> Result<HandlerResponse> {
    debug!(phone = %redact_phone(phone), "Processing SUBSCRIBE");

    let registration = ctx.services.messaging.register(phone).await;
    if !registration.is_success() {
        warn!(
            phone = %redact_phone(phone),
            status = registration.status,
            "Registration rejected, no profile created"
        );
        return Ok(registration.into());
    }

    let (_, created) = ctx.users.get_or_create(phone).await?;
    if created {
        info!(phone = %redact_phone(phone), "New subscriber");
    } else {
        info!(phone = %redact_phone(phone), "Returning subscriber, stored profile kept");
    }

    let sample_city = ctx
        .settings
        .conversation
        .sample_cities
        .choose(&mut rand::thread_rng())
        .cloned();

    Ok(reply(
        ctx,
        phone,
        MessageTemplate::Welcome {
            sample_city: sample_city.as_deref(),
        },
    )
    .await)
}

/// Handle UNSUBSCRIBE
pub async fn handle_unsubscribe(ctx: &AppContext, phone: &str) -> Result<HandlerResponse> {
    debug!(phone = %redact_phone(phone), "Processing UNSUBSCRIBE");

    let removal = ctx.services.messaging.unregister(phone).await;
    if !removal.is_success() {
        warn!(
            phone = %redact_phone(phone),
            status = removal.status,
            "Unregistration rejected"
        );
        return Ok(removal.into());
    }

    info!(phone = %redact_phone(phone), "Subscriber left");
    Ok(reply(ctx, phone, MessageTemplate::Farewell).await)
}
