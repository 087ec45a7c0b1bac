//! DOCS command handler

use tracing::debug;

use super::{reply, HandlerResponse};
use crate::services::notification::MessageTemplate;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{redact_phone, truncate_text};

/// Handle DOCS, and any text that does not start with a keyword
pub async fn handle_docs(ctx: &AppContext, phone: &str, argument: &str) -> Result<HandlerResponse> {
    if !argument.is_empty() {
        debug!(
            phone = %redact_phone(phone),
            text = %truncate_text(argument, 40),
            "Unrecognized text, sending usage"
        );
    }

    Ok(reply(
        ctx,
        phone,
        MessageTemplate::Docs {
            catalog_url: &ctx.settings.conversation.catalog_url,
        },
    )
    .await)
}
