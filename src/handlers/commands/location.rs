//! LOCATION command handler

use tracing::{debug, info, warn};

use super::{example_types, reply, require_profile, HandlerResponse};
use crate::services::notification::MessageTemplate;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{normalize_whitespace, redact_phone};

/// Handle LOCATION <city>
pub async fn handle_location(ctx: &AppContext, phone: &str, argument: &str) -> Result<HandlerResponse> {
    let mut profile = match require_profile(ctx, phone).await? {
        Ok(profile) => profile,
        Err(response) => return Ok(response),
    };

    let city = normalize_whitespace(argument);
    if city.is_empty() {
        return Ok(reply(ctx, phone, MessageTemplate::LocationUsage).await);
    }

    debug!(phone = %redact_phone(phone), city = %city, "Resolving location");

    let location = match ctx.services.geocoder.resolve(&city).await {
        Ok(Some(location)) => location,
        Ok(None) => {
            info!(city = %city, "City not found");
            return Ok(reply(ctx, phone, MessageTemplate::CityNotFound { city: &city }).await);
        }
        Err(e) => {
            warn!(city = %city, error = %e, "Geocoding failed");
            return Ok(reply(ctx, phone, MessageTemplate::CityNotFound { city: &city }).await);
        }
    };

    let resolved_city = location.city.clone();
    profile.set_location(location);
    ctx.users.save(profile).await?;

    info!(phone = %redact_phone(phone), city = %resolved_city, "Location set");

    let (first, second) = example_types(ctx.services.attractions.catalog());
    Ok(reply(
        ctx,
        phone,
        MessageTemplate::LocationSet {
            city: &resolved_city,
            examples: (&first, &second),
        },
    )
    .await)
}
