//! Interaction response constructors.
//!
//! The three envelopes differ only in callback type and flags; all of them
//! set [`MessageFlags::IS_COMPONENTS_V2`] and store the given top-level
//! components in order.

use tracing::trace;

use crate::placement::TopLevelComponents;
use crate::types::{
    InteractionCallbackData, InteractionCallbackType, InteractionResponse, MessageFlags,
};

fn envelope(
    kind: InteractionCallbackType,
    flags: MessageFlags,
    components: impl TopLevelComponents,
) -> InteractionResponse {
    let mut collected = Vec::new();
    components.collect_into(&mut collected);

    trace!(
        kind = ?kind,
        flags = flags.bits(),
        components = collected.len(),
        "built interaction response"
    );

    InteractionResponse {
        kind,
        data: InteractionCallbackData {
            components: collected,
            flags,
        },
    }
}

/// Reply to an interaction with a new message.
pub fn response(components: impl TopLevelComponents) -> InteractionResponse {
    envelope(
        InteractionCallbackType::ChannelMessageWithSource,
        MessageFlags::IS_COMPONENTS_V2,
        components,
    )
}

/// Reply with a new message only the invoking user can see.
pub fn ephemeral(components: impl TopLevelComponents) -> InteractionResponse {
    envelope(
        InteractionCallbackType::ChannelMessageWithSource,
        MessageFlags::IS_COMPONENTS_V2 | MessageFlags::EPHEMERAL,
        components,
    )
}

/// Replace the message a component interaction was triggered from.
pub fn update(components: impl TopLevelComponents) -> InteractionResponse {
    envelope(
        InteractionCallbackType::UpdateMessage,
        MessageFlags::IS_COMPONENTS_V2,
        components,
    )
}
