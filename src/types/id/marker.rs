//! Markers for resource IDs.
//!
//! Markers perform no logical action and only exist so that an ID of one
//! resource kind can't be used where another kind is expected. A bare `u64`
//! would let a user ID slip into an emoji slot; an [`Id<EmojiMarker>`] can't.
//!
//! [`Id<EmojiMarker>`]: super::Id

/// Marker for emoji IDs.
///
/// Types such as [`ComponentEmoji`] use this ID marker.
///
/// [`ComponentEmoji`]: crate::types::ComponentEmoji
#[derive(Debug)]
#[non_exhaustive]
pub struct EmojiMarker;
