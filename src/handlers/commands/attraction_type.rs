//! TYPE command handler
//!
//! Validates the requested attraction type against the catalog, queries the
//! attraction provider and stores the results for paging with MORE.

use tracing::{debug, info, warn};

use super::{example_types, reject, reply, require_profile, HandlerResponse};
use crate::models::catalog::{AttractionKind, SURPRISE};
use crate::models::user::{Location, UserProfile};
use crate::services::attractions::SurpriseOutcome;
use crate::services::notification::MessageTemplate;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::redact_phone;

/// Handle TYPE <category>
pub async fn handle_type(ctx: &AppContext, phone: &str, argument: &str) -> Result<HandlerResponse> {
    let mut profile = match require_profile(ctx, phone).await? {
        Ok(profile) => profile,
        Err(response) => return Ok(response),
    };

    let Some(location) = profile.location.clone() else {
        return Ok(reject(ctx, phone, MessageTemplate::LocationFirst).await);
    };

    let catalog = ctx.services.attractions.catalog();
    if argument.is_empty() {
        let (first, second) = example_types(catalog);
        return Ok(reply(ctx, phone, MessageTemplate::TypeUsage { examples: (&first, &second) }).await);
    }

    let entry = match catalog.resolve(argument) {
        Some(AttractionKind::Surprise) => {
            return surprise(ctx, phone, profile, &location).await;
        }
        Some(AttractionKind::Category(entry)) => entry.clone(),
        None => {
            debug!(phone = %redact_phone(phone), input = argument, "Unknown attraction type");
            let (first, second) = example_types(catalog);
            return Ok(reply(
                ctx,
                phone,
                MessageTemplate::InvalidType {
                    input: argument,
                    examples: (&first, &second),
                },
            )
            .await);
        }
    };

    let attractions = match ctx.services.attractions.search(&location, &entry).await {
        Ok(attractions) => attractions,
        Err(e) => {
            warn!(category = %entry.category, error = %e, "Attraction lookup failed");
            return Ok(e.into());
        }
    };

    let Some(first) = attractions.first().cloned() else {
        return Ok(reply(
            ctx,
            phone,
            MessageTemplate::NothingFound {
                attraction_type: &entry.name,
                city: &location.city,
            },
        )
        .await);
    };

    let total = attractions.len();
    profile.set_attraction_type(&entry.name);
    profile.set_attractions(attractions);

    let link = ctx.services.attractions.short_link(&first.link).await;
    let template = MessageTemplate::Attraction {
        title: &first.title,
        link: &link,
        position: 1,
        total,
    };
    ctx.users.save(profile).await?;

    info!(phone = %redact_phone(phone), attraction_type = %entry.name, count = total, "Attraction type set");
    Ok(reply(ctx, phone, template).await)
}

/// Pick a random category that has results and send one random entry from it.
///
/// The stored type becomes "surprise" even when every attempt is empty, so a
/// later MORE tries again.
pub(crate) async fn surprise(
    ctx: &AppContext,
    phone: &str,
    mut profile: UserProfile,
    location: &Location,
) -> Result<HandlerResponse> {
    let outcome = match ctx.services.attractions.surprise(location).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "Surprise lookup failed");
            return Ok(e.into());
        }
    };

    profile.set_attraction_type(SURPRISE);

    match outcome {
        SurpriseOutcome::Found {
            category,
            attractions,
            pick,
        } => {
            let chosen = attractions[pick].clone();
            profile.set_attractions(attractions);

            let link = ctx.services.attractions.short_link(&chosen.link).await;
            let template = MessageTemplate::Surprise {
                category: &category.name,
                title: &chosen.title,
                link: &link,
            };
            ctx.users.save(profile).await?;

            info!(phone = %redact_phone(phone), category = %category.name, "Surprise sent");
            Ok(reply(ctx, phone, template).await)
        }
        SurpriseOutcome::Exhausted { attempts } => {
            profile.set_attractions(Vec::new());
            ctx.users.save(profile).await?;

            warn!(phone = %redact_phone(phone), attempts = attempts, "Out of surprises");
            Ok(reply(ctx, phone, MessageTemplate::OutOfSurprises).await)
        }
    }
}
