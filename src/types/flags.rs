//! Message flags sent with an interaction callback.

use bitflags::bitflags;
use serde::{Serialize, Serializer};

bitflags! {
    /// Bit flags on a message.
    ///
    /// Only the flags a client may set when responding to an interaction are
    /// listed; Discord manages the rest.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// Only the user who invoked the interaction can see the message.
        const EPHEMERAL = 1 << 6;
        /// The message is laid out with Components v2. Once set, `content`
        /// and `embeds` are ignored and every visible element is a component.
        const IS_COMPONENTS_V2 = 1 << 15;
    }
}

impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}
