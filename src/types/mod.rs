//! Discord data types for Components v2 interaction responses.
//!
//! These are the plain values the builders in [`crate::components`] fill in.
//! Field names, numeric codes and skip rules match the Discord API so that a
//! transport can serialize an [`InteractionResponse`] straight to JSON. Only
//! the types a Components v2 response needs are modelled; gateway events,
//! users, guilds and the legacy component set are out of scope.

/// Components v2 message components.
pub mod component;

/// Interaction response envelope.
pub mod custom;

/// Message flags.
pub mod flags;

/// Type-safe IDs with marker types.
pub mod id;

/// Shared helpers and the wire-code error type.
pub mod util;

// ===========================================================================
// Convenience re-exports
// ===========================================================================

pub use self::component::{
    ActionRow, Button, ButtonStyle, Component, ComponentEmoji, ComponentType, Container,
    FileComponent, MediaGallery, MediaGalleryItem, Section, Separator, SeparatorSpacingSize,
    TextDisplay, Thumbnail, UnfurledMediaItem,
};
pub use self::custom::{InteractionCallbackData, InteractionCallbackType, InteractionResponse};
pub use self::flags::MessageFlags;
pub use self::id::{marker::EmojiMarker, Id};
pub use self::util::{UnknownCodeError, UnknownCodeErrorType};
