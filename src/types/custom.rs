//! Interaction response envelope.
//!
//! These mirror Discord's interaction callback objects but only carry the
//! fields a Components v2 response uses. With `IS_COMPONENTS_V2` set,
//! Discord rejects `content` and `embeds`, so they're left out entirely.

use serde::Serialize;
use serde_repr::Serialize_repr;

use crate::types::component::Component;
use crate::types::flags::MessageFlags;

/// An interaction response sent back to Discord.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionCallbackType,
    pub data: InteractionCallbackData,
}

impl InteractionResponse {
    /// Top-level components of the response, in order.
    pub fn components(&self) -> &[Component] {
        &self.data.components
    }

    /// Message flags of the response.
    pub const fn flags(&self) -> MessageFlags {
        self.data.flags
    }
}

/// The type of callback for an interaction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum InteractionCallbackType {
    /// Send a new message in reply.
    ChannelMessageWithSource = 4,
    /// Edit the message the component was attached to.
    UpdateMessage = 7,
}

/// Data payload for an interaction callback.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct InteractionCallbackData {
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "MessageFlags::is_empty")]
    pub flags: MessageFlags,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
